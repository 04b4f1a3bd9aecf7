//! In-memory key-value storage.
//!
//! Suitable for tests and hosts without durable storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::SessionError;

use super::storage::KeyValueStorage;

/// In-memory storage backend.
///
/// Entries live in a `HashMap` behind a `RwLock`. Clones share the same
/// underlying map.
///
/// # Note
///
/// Contents are lost when the process exits. For persistence across
/// restarts, use [`FileStorage`](super::FileStorage).
#[derive(Clone)]
pub struct InMemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| SessionError::StorageError("Lock poisoned".to_owned()))?;

        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .write()
            .map_err(|_| SessionError::StorageError("Lock poisoned".to_owned()))?
            .insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries
            .write()
            .map_err(|_| SessionError::StorageError("Lock poisoned".to_owned()))?
            .remove(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let storage = InMemoryStorage::new();

        storage.set("k", "v").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(storage.len(), 1);
    }

    #[tokio::test]
    async fn test_get_absent_key() {
        let storage = InMemoryStorage::new();
        assert!(storage.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_replaces() {
        let storage = InMemoryStorage::new();

        storage.set("k", "old").await.unwrap();
        storage.set("k", "new").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("new"));
        assert_eq!(storage.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let storage = InMemoryStorage::new();

        storage.set("k", "v").await.unwrap();
        storage.remove("k").await.unwrap();
        assert!(storage.is_empty());

        // absent key, still Ok
        storage.remove("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_clones_share_contents() {
        let storage = InMemoryStorage::new();
        let other = storage.clone();

        storage.set("k", "v").await.unwrap();
        assert_eq!(other.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
