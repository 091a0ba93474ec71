use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reachability probe configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// TCP/TLS connect timeout per fetch in milliseconds (default: 3000)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,

    /// Overall timeout per fetch in milliseconds, redirects included (default: 5000)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    /// Upper bound for the DNS lookup in milliseconds (default: 5000)
    #[serde(default = "default_dns_timeout")]
    pub dns_timeout_ms: u64,

    /// Maximum redirects followed before a fetch fails (default: 10)
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ProbeConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout_ms)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: default_connect_timeout(),
            request_timeout_ms: default_request_timeout(),
            dns_timeout_ms: default_dns_timeout(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_connect_timeout() -> u64 {
    3000
}

fn default_request_timeout() -> u64 {
    5000
}

fn default_dns_timeout() -> u64 {
    5000
}

fn default_max_redirects() -> usize {
    10
}

fn default_user_agent() -> String {
    concat!("reachd/", env!("CARGO_PKG_VERSION")).to_string()
}
