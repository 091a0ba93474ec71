//! Reachd Infrastructure Layer
pub mod dns;
pub mod http;

pub use dns::SystemHostResolver;
pub use http::ReqwestHttpFetcher;
