//! Durable client-local storage trait.

use async_trait::async_trait;

use crate::SessionError;

/// Durable string key-value store, the client-side persistence seam.
///
/// Implementations provide different hosts:
/// - [`InMemoryStorage`](super::InMemoryStorage): process-local, for tests
///   and ephemeral sessions
/// - [`FileStorage`](super::FileStorage): one file per key on disk
///
/// The signatures are async even though both shipped backends resolve
/// immediately; a remote or secure-enclave backend must not change the
/// session store's contract. The session store is the sole writer of its
/// two keys.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Reads a value, `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Writes a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Removes a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), SessionError>;
}
