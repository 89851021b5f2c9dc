//! # pbly
//!
//! A small link shortener: short keys map to destination URLs, reads are
//! served as HTTP 303 redirects, and writes are gated by a shared secret.
//!
//! ## Architecture
//!
//! The crate follows a layered layout with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - The key-value store contract
//! - **Application Layer** ([`application`]) - Resolve and write services
//! - **Infrastructure Layer** ([`infrastructure`]) - Store implementations
//! - **API Layer** ([`api`]) - HTTP handlers and observability middleware
//!
//! ## Request flow
//!
//! Every request passes through the observability wrapper in
//! [`api::middleware::observe`], which logs one access line and updates the
//! request counter and duration gauge in [`metrics`] regardless of which
//! route matched or what it returned. Routing is an explicit table
//! ([`routes`]): `/new/…` dispatches to the writer, `/metrics` to the
//! Prometheus exposition, and everything else falls back to the resolver.
//!
//! ## Quick Start
//!
//! ```bash
//! # Set the shared write secret
//! export PBLY_TOKEN="change-me"
//!
//! # Start the service (listens on 0.0.0.0:3000 by default)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod metrics;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ResolveService, WriteService};
    pub use crate::domain::{LinkStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::MemoryStore;
    pub use crate::metrics::RequestMetrics;
    pub use crate::state::AppState;
}
