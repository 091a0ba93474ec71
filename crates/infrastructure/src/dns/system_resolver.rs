use async_trait::async_trait;
use reachd_application::ports::HostResolver;
use reachd_domain::ResolveOutcome;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Raw address lookup underneath [`SystemHostResolver`].
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn lookup(&self, hostname: &str) -> io::Result<Vec<SocketAddr>>;
}

/// `getaddrinfo` through `tokio::net::lookup_host`
pub struct GetAddrInfoLookup;

#[async_trait]
impl AddressLookup for GetAddrInfoLookup {
    async fn lookup(&self, hostname: &str) -> io::Result<Vec<SocketAddr>> {
        Ok(tokio::net::lookup_host((hostname, 0)).await?.collect())
    }
}

/// Resolver backed by the platform's `getaddrinfo`, bounded by a timeout.
///
/// The timeout only abandons the wait: a stuck `getaddrinfo` call keeps its
/// thread in tokio's blocking pool until the platform resolver gives up.
pub struct SystemHostResolver {
    lookup: Arc<dyn AddressLookup>,
    timeout: Duration,
}

impl SystemHostResolver {
    pub fn new(timeout: Duration) -> Self {
        Self::with_lookup(Arc::new(GetAddrInfoLookup), timeout)
    }

    pub fn with_lookup(lookup: Arc<dyn AddressLookup>, timeout: Duration) -> Self {
        Self { lookup, timeout }
    }

    /// First IPv4 address if there is one, otherwise the first address.
    pub fn preferred_address(addrs: impl IntoIterator<Item = SocketAddr>) -> Option<IpAddr> {
        let mut first = None;
        for addr in addrs {
            let ip = addr.ip();
            if ip.is_ipv4() {
                return Some(ip);
            }
            first.get_or_insert(ip);
        }
        first
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    #[instrument(skip(self), name = "dns_resolve")]
    async fn resolve(&self, hostname: &str) -> ResolveOutcome {
        let lookup = self.lookup.lookup(hostname);

        let outcome = match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(addrs)) => match Self::preferred_address(addrs) {
                Some(address) => ResolveOutcome::Resolved { address },
                None => ResolveOutcome::unresolved(format!("no addresses found for {hostname}")),
            },
            Ok(Err(e)) => ResolveOutcome::unresolved(e.to_string()),
            Err(_) => ResolveOutcome::unresolved(format!(
                "DNS lookup timed out after {}ms",
                self.timeout.as_millis()
            )),
        };

        debug!(?outcome, "Lookup finished");
        outcome
    }
}
