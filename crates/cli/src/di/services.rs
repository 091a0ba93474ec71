use reachd_api::AppState;
use reachd_application::ports::{HostResolver, HttpFetcher};
use reachd_application::use_cases::CheckDomainUseCase;
use reachd_domain::Config;
use reachd_infrastructure::{ReqwestHttpFetcher, SystemHostResolver};
use std::sync::Arc;
use tracing::info;

/// Composition root: the adapters are built once here and shared by every
/// request through `AppState`.
pub struct Services {
    pub check_domain: Arc<CheckDomainUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver: Arc<dyn HostResolver> =
            Arc::new(SystemHostResolver::new(config.probe.dns_timeout()));
        let fetcher: Arc<dyn HttpFetcher> = Arc::new(ReqwestHttpFetcher::new(&config.probe)?);

        info!(
            max_redirects = config.probe.max_redirects,
            user_agent = %config.probe.user_agent,
            "HTTP client initialized"
        );

        Ok(Self {
            check_domain: Arc::new(CheckDomainUseCase::new(resolver, fetcher)),
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            check_domain: Arc::clone(&self.check_domain),
        }
    }
}
