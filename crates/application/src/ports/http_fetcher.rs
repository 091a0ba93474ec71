use async_trait::async_trait;
use reachd_domain::FetchOutcome;

/// Issues a single GET against `url`, following redirects.
///
/// Implementations must be safe to share across concurrent requests and
/// must report every transport failure as [`FetchOutcome::Failure`].
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchOutcome;
}
