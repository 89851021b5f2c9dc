//! Key-value store contract for link mappings.

use async_trait::async_trait;
use thiserror::Error;

/// Failure surfaced by a [`LinkStore`] backend.
///
/// The detail is logged server-side when the error is mapped to a
/// response; it never reaches the client.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// External key-value collaborator holding link mappings.
///
/// Keys are opaque strings taken verbatim from the URL path; values are
/// opaque byte sequences, typically a destination URL. Implementations own
/// their concurrency safety — the service issues at most one call per
/// request and holds no lock across it. Writes silently overwrite.
///
/// # Implementations
///
/// - [`crate::infrastructure::MemoryStore`] - thread-safe in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Looks up the destination stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has no mapping.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Stores `value` under `key`, replacing any prior mapping.
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}
