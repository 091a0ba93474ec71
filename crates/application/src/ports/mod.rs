mod host_resolver;
mod http_fetcher;

pub use host_resolver::HostResolver;
pub use http_fetcher::HttpFetcher;
