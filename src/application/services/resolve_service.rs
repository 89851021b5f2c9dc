//! Service resolving short keys to their stored destinations.

use std::sync::Arc;

use serde_json::json;

use crate::domain::LinkStore;
use crate::error::AppError;

/// Resolves short keys against the link store.
pub struct ResolveService {
    store: Arc<dyn LinkStore>,
}

impl ResolveService {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Looks up the destination for `key`.
    ///
    /// Issues exactly one store call; no retry. The stored bytes pass
    /// through verbatim as the redirect target — no URL validation.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] when the key has no mapping or maps to an
    ///   empty value
    /// - [`AppError::Internal`] on store failure; the cause is logged here
    ///   and never surfaced to the caller
    pub async fn resolve(&self, key: &str) -> Result<String, AppError> {
        let value = self.store.get(key).await.map_err(|e| {
            tracing::error!(error = %e, key, "store lookup failed");
            AppError::internal("Store error", json!({ "key": key }))
        })?;

        match value {
            Some(destination) if !destination.is_empty() => {
                Ok(String::from_utf8_lossy(&destination).into_owned())
            }
            _ => Err(AppError::not_found("Unknown key", json!({ "key": key }))),
        }
    }
}
