//! Configuration module for Reachd
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP listener binding and CORS
//! - `probe`: Timeouts and redirect limits for the reachability checks
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod probe;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use probe::ProbeConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
