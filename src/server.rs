//! HTTP server initialization and runtime setup.
//!
//! Wires the store, the metrics collector, and the resolve/write services
//! into the router, then serves until the process is stopped.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{ResolveService, WriteService};
use crate::config::Config;
use crate::domain::LinkStore;
use crate::infrastructure::MemoryStore;
use crate::metrics::RequestMetrics;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - metric registration fails
/// - the listen address is invalid or cannot be bound
/// - the server runtime fails
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn LinkStore> = Arc::new(MemoryStore::new());

    let metrics = Arc::new(RequestMetrics::new()?);

    let resolver = Arc::new(ResolveService::new(store.clone()));
    let writer = Arc::new(WriteService::new(store, config.token.clone()));

    let state = AppState::new(resolver, writer, metrics);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting pbly server on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
