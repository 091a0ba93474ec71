use crate::domain_name::DomainName;
use crate::outcome::{FetchOutcome, ResolveOutcome};
use std::net::IpAddr;

/// Outcome of one protocol check (HTTP or HTTPS) in reportable form.
///
/// Exactly one of `status_code` and `error` is set. `ok` holds iff a status
/// code was received and it lies in `[200, 400)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolCheck {
    pub ok: bool,
    pub status_code: Option<u16>,
    pub url: Option<String>,
    pub error: Option<String>,
}

impl ProtocolCheck {
    /// Builds the check for `requested_url`. The reported URL is the one
    /// requested, never the end of a redirect chain.
    pub fn from_outcome(requested_url: &str, outcome: FetchOutcome) -> Self {
        match outcome {
            FetchOutcome::Success { status_code, .. } => Self {
                ok: is_reachable_status(status_code),
                status_code: Some(status_code),
                url: Some(requested_url.to_string()),
                error: None,
            },
            FetchOutcome::Failure { reason } => Self {
                ok: false,
                status_code: None,
                url: None,
                error: Some(reason),
            },
        }
    }
}

/// 2xx and 3xx count as reachable.
pub fn is_reachable_status(status_code: u16) -> bool {
    (200..400).contains(&status_code)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCheckResult {
    pub domain: DomainName,
    pub dns_resolves: bool,
    pub ip: Option<IpAddr>,
    pub http: ProtocolCheck,
    pub https: ProtocolCheck,
}

impl DomainCheckResult {
    pub fn new(
        domain: DomainName,
        resolution: &ResolveOutcome,
        http: ProtocolCheck,
        https: ProtocolCheck,
    ) -> Self {
        Self {
            domain,
            dns_resolves: resolution.is_resolved(),
            ip: resolution.address(),
            http,
            https,
        }
    }
}
