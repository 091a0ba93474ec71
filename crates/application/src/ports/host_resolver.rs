use async_trait::async_trait;
use reachd_domain::ResolveOutcome;

/// Translates a hostname into an address.
///
/// Implementations must not fail: lookup errors and timeouts are reported
/// as [`ResolveOutcome::Unresolved`].
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve(&self, hostname: &str) -> ResolveOutcome;
}
