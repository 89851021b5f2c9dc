//! Fallback handler: landing banner and short-link resolution.

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Landing text served at the service root.
pub const BANNER: &str = "pbly is a link shortener";

/// Resolves a short key to a redirect.
///
/// # Endpoint
///
/// Fallback route — every path not claimed by `/new/…` or `/metrics`
/// lands here. The key is the path with its leading `/` stripped and may
/// itself contain slashes.
///
/// - `/` (empty key) → 200 with the plain-text banner
/// - known key → 303 See Other, `Location` set to the stored value
///   verbatim
/// - unknown key → 404
///
/// # Errors
///
/// Returns 500 on store failure; the cause is logged, never surfaced.
pub async fn resolve_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let path = uri.path();
    let key = path.strip_prefix('/').unwrap_or(path);

    if key.is_empty() {
        return Ok(BANNER.into_response());
    }

    let destination = state.resolver.resolve(key).await?;

    Ok(Redirect::to(&destination).into_response())
}
