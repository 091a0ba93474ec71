use reachd_application::use_cases::CheckDomainUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub check_domain: Arc<CheckDomainUseCase>,
}
