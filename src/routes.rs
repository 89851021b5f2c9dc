//! Route table and middleware composition.
//!
//! # Route Structure
//!
//! - `/new/`, `/new/{*key}` - authenticated link creation, registered for
//!   every method so the writer's own gates pick the status code
//! - `/metrics`, `/metrics/` - Prometheus exposition (public)
//! - everything else          - explicit fallback to the resolver, so `/`
//!   serves the banner and `/{key}` redirects
//!
//! # Middleware
//!
//! The observability wrapper is layered around the whole router — matched
//! routes and fallback alike — so every request produces exactly one
//! access-log line and one metrics update.

use axum::routing::{any, get};
use axum::{Router, middleware};

use crate::api::handlers::{metrics_handler, resolve_handler, write_handler};
use crate::api::middleware::observe::observe_mw;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// `state` carries the resolve/write services and the metrics collector
/// injected into every handler and into the observability wrapper.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/new/", any(write_handler))
        .route("/new/{*key}", any(write_handler))
        .route("/metrics", get(metrics_handler))
        .route("/metrics/", get(metrics_handler))
        .fallback(resolve_handler)
        .layer(middleware::from_fn_with_state(state.clone(), observe_mw))
        .with_state(state)
}
