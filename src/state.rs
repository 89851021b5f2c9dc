use std::sync::Arc;

use crate::application::services::{ResolveService, WriteService};
use crate::metrics::RequestMetrics;

/// Shared application state injected into handlers and middleware.
///
/// The metrics collector is carried here, not as a global, so router
/// construction decides which collector observes which requests.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ResolveService>,
    pub writer: Arc<WriteService>,
    pub metrics: Arc<RequestMetrics>,
}

impl AppState {
    pub fn new(
        resolver: Arc<ResolveService>,
        writer: Arc<WriteService>,
        metrics: Arc<RequestMetrics>,
    ) -> Self {
        Self {
            resolver,
            writer,
            metrics,
        }
    }
}
