#![allow(dead_code)]

use async_trait::async_trait;
use reachd_application::ports::{HostResolver, HttpFetcher};
use reachd_domain::{FetchOutcome, ResolveOutcome};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock HostResolver
// ============================================================================

pub struct MockResolver {
    outcome: ResolveOutcome,
    call_count: Arc<AtomicU64>,
    hostnames: Arc<RwLock<Vec<String>>>,
}

impl MockResolver {
    pub fn resolving(address: &str) -> Self {
        Self::with_outcome(ResolveOutcome::Resolved {
            address: address.parse().unwrap(),
        })
    }

    pub fn failing(reason: &str) -> Self {
        Self::with_outcome(ResolveOutcome::unresolved(reason))
    }

    pub fn with_outcome(outcome: ResolveOutcome) -> Self {
        Self {
            outcome,
            call_count: Arc::new(AtomicU64::new(0)),
            hostnames: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn hostnames(&self) -> Vec<String> {
        self.hostnames.read().await.clone()
    }
}

#[async_trait]
impl HostResolver for MockResolver {
    async fn resolve(&self, hostname: &str) -> ResolveOutcome {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.hostnames.write().await.push(hostname.to_string());
        self.outcome.clone()
    }
}

// ============================================================================
// Mock HttpFetcher
// ============================================================================

pub struct MockFetcher {
    responses: HashMap<String, FetchOutcome>,
    default: FetchOutcome,
    call_count: Arc<AtomicU64>,
    urls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(default: FetchOutcome) -> Self {
        Self {
            responses: HashMap::new(),
            default,
            call_count: Arc::new(AtomicU64::new(0)),
            urls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn always_status(status_code: u16) -> Self {
        Self::new(FetchOutcome::Success {
            status_code,
            final_url: String::new(),
        })
    }

    pub fn always_failing(reason: &str) -> Self {
        Self::new(FetchOutcome::failure(reason))
    }

    pub fn with_response(mut self, url: &str, outcome: FetchOutcome) -> Self {
        self.responses.insert(url.to_string(), outcome);
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn urls(&self) -> Vec<String> {
        let mut urls = self.urls.read().await.clone();
        urls.sort();
        urls
    }
}

#[async_trait]
impl HttpFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.urls.write().await.push(url.to_string());

        let outcome = self.responses.get(url).unwrap_or(&self.default).clone();
        match outcome {
            FetchOutcome::Success {
                status_code,
                final_url,
            } if final_url.is_empty() => FetchOutcome::Success {
                status_code,
                final_url: url.to_string(),
            },
            other => other,
        }
    }
}
