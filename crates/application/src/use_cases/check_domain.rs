use reachd_domain::{DomainCheckResult, DomainError, DomainName, ProtocolCheck, Scheme};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::{HostResolver, HttpFetcher};

pub struct CheckDomainUseCase {
    resolver: Arc<dyn HostResolver>,
    fetcher: Arc<dyn HttpFetcher>,
}

impl CheckDomainUseCase {
    pub fn new(resolver: Arc<dyn HostResolver>, fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self { resolver, fetcher }
    }

    /// Normalizes `raw` and runs the checks. An empty domain is rejected
    /// before any lookup or request is made.
    pub async fn execute(&self, raw: &str) -> Result<DomainCheckResult, DomainError> {
        let domain = DomainName::parse(raw)?;
        Ok(self.check(&domain).await)
    }

    /// Resolves `domain` and fetches its root over HTTP and HTTPS.
    ///
    /// The three checks are independent and run concurrently. A failed
    /// lookup does not skip the fetches: they either fail at connect time
    /// or succeed through a proxy or hosts override, and the caller sees
    /// which layer broke.
    #[instrument(skip_all, fields(domain = %domain))]
    pub async fn check(&self, domain: &DomainName) -> DomainCheckResult {
        let http_url = Scheme::Http.root_url(domain);
        let https_url = Scheme::Https.root_url(domain);

        let (resolution, http_outcome, https_outcome) = tokio::join!(
            self.resolver.resolve(domain.as_str()),
            self.fetcher.fetch(&http_url),
            self.fetcher.fetch(&https_url),
        );

        debug!(?resolution, "DNS lookup finished");

        let result = DomainCheckResult::new(
            domain.clone(),
            &resolution,
            ProtocolCheck::from_outcome(&http_url, http_outcome),
            ProtocolCheck::from_outcome(&https_url, https_outcome),
        );

        info!(
            dns_resolves = result.dns_resolves,
            ip = ?result.ip,
            http_ok = result.http.ok,
            http_status = ?result.http.status_code,
            https_ok = result.https.ok,
            https_status = ?result.https.status_code,
            "Domain check completed"
        );

        result
    }
}
