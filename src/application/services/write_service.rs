//! Service authorizing and storing link writes.

use std::sync::Arc;

use serde_json::json;

use crate::domain::LinkStore;
use crate::error::AppError;

/// Creates link mappings behind a shared-secret check.
pub struct WriteService {
    store: Arc<dyn LinkStore>,
    token: String,
}

impl WriteService {
    /// Creates a new write service.
    ///
    /// `token` is the configured shared secret; callers must present it
    /// verbatim to write.
    pub fn new(store: Arc<dyn LinkStore>, token: String) -> Self {
        Self { store, token }
    }

    /// Checks a caller-supplied token against the configured secret.
    ///
    /// Exact string equality; a missing header never matches. This check
    /// runs first on the write path, so a bad token yields 403 regardless
    /// of method or body.
    pub fn authorize(&self, presented: Option<&str>) -> Result<(), AppError> {
        if presented != Some(self.token.as_str()) {
            return Err(AppError::forbidden(
                "Invalid write token",
                json!({ "token_present": presented.is_some() }),
            ));
        }

        Ok(())
    }

    /// Stores `destination` under `key`, replacing any prior mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failure; the cause is
    /// logged here and never surfaced to the caller.
    pub async fn create(&self, key: &str, destination: &[u8]) -> Result<(), AppError> {
        self.store.set(key, destination).await.map_err(|e| {
            tracing::error!(error = %e, key, "store write failed");
            AppError::internal("Store error", json!({ "key": key }))
        })
    }
}
