#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use pbly::application::services::{ResolveService, WriteService};
use pbly::domain::{LinkStore, StoreError};
use pbly::infrastructure::MemoryStore;
use pbly::metrics::RequestMetrics;
use pbly::routes::app_router;
use pbly::state::AppState;

/// Shared write secret used by the test state.
pub const TEST_TOKEN: &str = "test-write-token";

/// Store whose every call fails, for exercising the 500 paths.
pub struct FailingStore;

#[async_trait]
impl LinkStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Err(StoreError::Backend("simulated backend outage".into()))
    }

    async fn set(&self, _key: &str, _value: &[u8]) -> Result<(), StoreError> {
        Err(StoreError::Backend("simulated backend outage".into()))
    }
}

/// Builds an [`AppState`] over the given store with a fresh metrics
/// collector and the [`TEST_TOKEN`] write secret.
pub fn create_test_state(store: Arc<dyn LinkStore>) -> AppState {
    let metrics = Arc::new(RequestMetrics::new().unwrap());
    let resolver = Arc::new(ResolveService::new(store.clone()));
    let writer = Arc::new(WriteService::new(store, TEST_TOKEN.to_string()));

    AppState::new(resolver, writer, metrics)
}

/// Test state backed by an empty in-memory store.
pub fn memory_state() -> AppState {
    create_test_state(Arc::new(MemoryStore::new()))
}

/// Spins up a test server over the full application router.
///
/// Uses the real HTTP transport so requests reach the router in
/// origin-form (path + query), matching how a deployed server receives
/// them, rather than the mock transport's absolute-form URIs.
pub fn test_server(state: AppState) -> TestServer {
    TestServer::builder()
        .http_transport()
        .build(app_router(state))
        .unwrap()
}

/// Creates a link through the write endpoint, asserting success.
pub async fn seed_link(server: &TestServer, key: &str, destination: &str) {
    let response = server
        .post(&format!("/new/{key}"))
        .add_header("Pbly-Token", TEST_TOKEN)
        .text(destination.to_string())
        .await;

    assert_eq!(response.status_code(), 201);
}

/// Extracts the value of the first exposition sample matching `name` and
/// all given label pairs.
pub fn sample_value(exposition: &str, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
    exposition
        .lines()
        .filter(|line| !line.starts_with('#'))
        .filter(|line| line.starts_with(name))
        .find(|line| {
            labels
                .iter()
                .all(|(k, v)| line.contains(&format!("{k}=\"{v}\"")))
        })
        .and_then(|line| line.split_whitespace().last())
        .and_then(|value| value.parse().ok())
}

/// Counts exposition samples of `name` matching all given label pairs.
pub fn sample_count(exposition: &str, name: &str, labels: &[(&str, &str)]) -> usize {
    exposition
        .lines()
        .filter(|line| !line.starts_with('#'))
        .filter(|line| line.starts_with(name))
        .filter(|line| {
            labels
                .iter()
                .all(|(k, v)| line.contains(&format!("{k}=\"{v}\"")))
        })
        .count()
}
