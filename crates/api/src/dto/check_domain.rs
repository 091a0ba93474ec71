use reachd_domain::{DomainCheckResult, ProtocolCheck};
use serde::{Deserialize, Serialize};

/// Request DTO for a domain check
#[derive(Debug, Clone, Deserialize)]
pub struct CheckDomainRequest {
    pub domain: String,
}

/// Response DTO for a single protocol check.
///
/// Absent values serialize as `null` so clients always see every key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolCheckResponse {
    pub ok: bool,
    pub status_code: Option<u16>,
    pub url: Option<String>,
    pub error: Option<String>,
}

impl From<ProtocolCheck> for ProtocolCheckResponse {
    fn from(check: ProtocolCheck) -> Self {
        Self {
            ok: check.ok,
            status_code: check.status_code,
            url: check.url,
            error: check.error,
        }
    }
}

/// Response DTO for a domain check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCheckResponse {
    pub domain: String,
    pub dns_resolves: bool,
    pub ip: Option<String>,
    pub http: ProtocolCheckResponse,
    pub https: ProtocolCheckResponse,
}

impl From<DomainCheckResult> for DomainCheckResponse {
    fn from(result: DomainCheckResult) -> Self {
        Self {
            domain: result.domain.to_string(),
            dns_resolves: result.dns_resolves,
            ip: result.ip.map(|ip| ip.to_string()),
            http: result.http.into(),
            https: result.https.into(),
        }
    }
}
