#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{self, Request};
use axum::Router;
use http_body_util::BodyExt;
use reachd_api::{create_api_routes, AppState};
use reachd_application::ports::{HostResolver, HttpFetcher};
use reachd_application::use_cases::CheckDomainUseCase;
use reachd_domain::{FetchOutcome, ResolveOutcome};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub struct StubResolver {
    outcome: ResolveOutcome,
    call_count: AtomicU64,
}

impl StubResolver {
    pub fn new(outcome: ResolveOutcome) -> Self {
        Self {
            outcome,
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolve(&self, _hostname: &str) -> ResolveOutcome {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.outcome.clone()
    }
}

pub struct StubFetcher {
    by_url: HashMap<String, FetchOutcome>,
    call_count: AtomicU64,
}

impl StubFetcher {
    pub fn new(by_url: Vec<(&str, FetchOutcome)>) -> Self {
        Self {
            by_url: by_url
                .into_iter()
                .map(|(url, outcome)| (url.to_string(), outcome))
                .collect(),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl HttpFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.by_url
            .get(url)
            .cloned()
            .unwrap_or_else(|| FetchOutcome::failure(format!("no stub for {url}")))
    }
}

pub fn ok(status_code: u16, final_url: &str) -> FetchOutcome {
    FetchOutcome::Success {
        status_code,
        final_url: final_url.to_string(),
    }
}

pub fn app(resolver: Arc<StubResolver>, fetcher: Arc<StubFetcher>) -> Router {
    let state = AppState {
        check_domain: Arc::new(CheckDomainUseCase::new(resolver, fetcher)),
    };
    create_api_routes(state)
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
