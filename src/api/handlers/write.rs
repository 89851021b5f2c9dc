//! Handler for the authenticated write path.

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the header carrying the shared write secret.
pub const TOKEN_HEADER: &str = "Pbly-Token";

/// Creates or overwrites a link mapping.
///
/// # Endpoint
///
/// `POST /new/{key}` — registered for every method, because the gates
/// below pick the status code and their order is load-bearing:
///
/// 1. the `Pbly-Token` header must equal the configured secret → 403
///    otherwise, before anything else is looked at
/// 2. the method must be POST → 422 otherwise, even with a valid token
/// 3. the key is the raw path after the `/new/` prefix (possibly empty);
///    the body is read fully and stored verbatim → 201, empty body
///
/// The handler consumes the raw [`Request`] rather than using body
/// extractors so the body is only read after both gates have passed.
///
/// # Errors
///
/// Returns 500 when reading the body or writing to the store fails;
/// detail is logged, the client sees the bare status.
pub async fn write_handler(
    State(state): State<AppState>,
    req: Request,
) -> Result<StatusCode, AppError> {
    let presented = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    state.writer.authorize(presented)?;

    if req.method() != Method::POST {
        return Err(AppError::unprocessable(
            "Links are created with POST",
            json!({ "method": req.method().as_str() }),
        ));
    }

    let key = req
        .uri()
        .path()
        .strip_prefix("/new/")
        .unwrap_or_default()
        .to_owned();

    let body = axum::body::to_bytes(req.into_body(), usize::MAX)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, %key, "failed to read request body");
            AppError::internal("Body read error", json!({ "key": key }))
        })?;

    state.writer.create(&key, &body).await?;

    Ok(StatusCode::CREATED)
}
