use async_trait::async_trait;
use reachd_application::ports::HttpFetcher;
use reachd_domain::config::ProbeConfig;
use reachd_domain::FetchOutcome;
use reqwest::redirect::Policy;
use tracing::{debug, instrument};

use super::error::describe_error;

/// Fetch adapter over a shared `reqwest::Client`.
///
/// `reqwest::Client` is an `Arc` around its connection pool, so one
/// instance built at startup serves every request handler.
#[derive(Clone)]
pub struct ReqwestHttpFetcher {
    client: reqwest::Client,
}

impl ReqwestHttpFetcher {
    pub fn new(config: &ProbeConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .redirect(Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestHttpFetcher {
    #[instrument(skip(self), name = "http_fetch")]
    async fn fetch(&self, url: &str) -> FetchOutcome {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status_code = response.status().as_u16();
                let final_url = response.url().to_string();
                debug!(status_code, final_url = %final_url, "Fetch completed");

                FetchOutcome::Success {
                    status_code,
                    final_url,
                }
            }
            Err(e) => {
                let reason = describe_error(&e);
                debug!(error = %reason, "Fetch failed");
                FetchOutcome::Failure { reason }
            }
        }
    }
}
