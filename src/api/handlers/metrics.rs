//! Handler for the metrics exposition endpoint.

use axum::{extract::State, http::header, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Content type of the Prometheus text exposition format.
const TEXT_FORMAT: &str = "text/plain; version=0.0.4";

/// Dumps the current counter/gauge state in Prometheus text format.
///
/// # Endpoint
///
/// `GET /metrics` (also registered with a trailing slash)
pub async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let body = state.metrics.render().map_err(|e| {
        tracing::error!(error = %e, "failed to encode metrics");
        AppError::internal("Metrics encoding error", json!({}))
    })?;

    Ok(([(header::CONTENT_TYPE, TEXT_FORMAT)], body))
}
