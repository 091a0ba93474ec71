pub mod check_domain;
pub mod error;
pub mod health;

pub use check_domain::{CheckDomainRequest, DomainCheckResponse, ProtocolCheckResponse};
pub use error::ErrorResponse;
pub use health::HealthResponse;
