use std::error::Error as StdError;

/// Human-readable description of a failed fetch: a short failure class
/// followed by the full source chain, e.g.
/// `connection failed: error sending request for url (...): tcp connect error: Connection refused`.
pub fn describe_error(err: &reqwest::Error) -> String {
    let class = if err.is_timeout() {
        "request timed out"
    } else if err.is_redirect() {
        "too many redirects"
    } else if err.is_connect() {
        "connection failed"
    } else if err.is_builder() {
        "invalid request"
    } else if err.is_request() {
        "request failed"
    } else {
        "fetch failed"
    };

    let mut message = format!("{class}: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
