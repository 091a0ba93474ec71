mod error;
pub mod reqwest_fetcher;

pub use reqwest_fetcher::ReqwestHttpFetcher;
