//! In-memory link store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{LinkStore, StoreError};

/// Thread-safe in-process implementation of [`LinkStore`].
///
/// Mappings live for the lifetime of the process. Used by the default
/// server wiring and by the integration tests; swap in another
/// implementation where durable storage is required.
#[derive(Default)]
pub struct MemoryStore {
    links: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.links.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.links
            .write()
            .await
            .insert(key.to_owned(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trip() {
        let store = MemoryStore::new();
        store.set("foo", b"https://example.com").await.unwrap();

        let value = store.get("foo").await.unwrap();
        assert_eq!(value.as_deref(), Some(b"https://example.com".as_slice()));
    }

    #[tokio::test]
    async fn test_set_overwrites_existing_mapping() {
        let store = MemoryStore::new();
        store.set("foo", b"https://old.example").await.unwrap();
        store.set("foo", b"https://new.example").await.unwrap();

        let value = store.get("foo").await.unwrap();
        assert_eq!(value.as_deref(), Some(b"https://new.example".as_slice()));
    }
}
