//! Request observability middleware.
//!
//! Wraps every dispatched request — whichever route matched and whatever
//! it returned — and records the terminal outcome exactly once on the
//! exit path: one access-log line, one counter increment, one gauge set.

use std::time::Instant;

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Observes one request/response cycle.
///
/// Captures method and full URL (path + query) before dispatch, then
/// status code, exact response byte count, and wall-clock duration after
/// the inner handler completes. The response body is buffered to count
/// its bytes and re-emitted unchanged — no extra bytes, no header
/// mutation. The wrapper is purely post-hoc: it establishes no deadline
/// and never alters what the client sees.
pub async fn observe_mw(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let url = req.uri().to_string();

    let response = next.run(req).await;

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, %method, %url, "failed to buffer response body");
            Bytes::new()
        }
    };

    let status = parts.status.as_u16();
    let written = bytes.len();
    let duration = start.elapsed();

    tracing::info!(
        %method,
        %url,
        status,
        written,
        duration_us = duration.as_micros() as u64,
        "request completed",
    );

    if let Err(e) = state
        .metrics
        .record(&url, method.as_str(), status, duration.as_micros() as f64)
    {
        tracing::error!(error = %e, %url, "failed to record request metrics");
    }

    Response::from_parts(parts, Body::from(bytes))
}
