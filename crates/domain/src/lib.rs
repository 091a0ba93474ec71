//! Reachd Domain Layer
pub mod check_result;
pub mod config;
pub mod domain_name;
pub mod errors;
pub mod outcome;
pub mod scheme;

pub use check_result::{DomainCheckResult, ProtocolCheck};
pub use config::{CliOverrides, Config, ConfigError};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use outcome::{FetchOutcome, ResolveOutcome};
pub use scheme::Scheme;
