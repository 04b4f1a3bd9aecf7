//! File-based key-value storage.
//!
//! Each key is stored as its own file in a configured directory.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::SessionError;

use super::storage::KeyValueStorage;

/// File-based storage backend.
///
/// Each key `k` is stored as `{k}.val` in the configured directory, which
/// survives process restarts the way browser local storage survives page
/// reloads.
///
/// # Example
///
/// ```rust,ignore
/// use fyp_session::FileStorage;
///
/// let storage = FileStorage::new("/var/lib/fyp/session")?;
/// ```
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    /// Creates a new file storage rooted at `directory`.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let dir = directory.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            SessionError::StorageError(format!("Failed to create storage directory: {e}"))
        })?;
        Ok(Self { directory: dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.val"))
    }

    // Keys come from configuration, but reject path separators anyway.
    fn key_is_safe(key: &str) -> bool {
        !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        if !Self::key_is_safe(key) {
            return Ok(None);
        }

        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| SessionError::StorageError(format!("Failed to read entry: {e}")))?;

        Ok(Some(content))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if !Self::key_is_safe(key) {
            return Err(SessionError::StorageError(format!(
                "Refusing unsafe storage key: {key}"
            )));
        }

        std::fs::write(self.entry_path(key), value)
            .map_err(|e| SessionError::StorageError(format!("Failed to write entry: {e}")))
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        if !Self::key_is_safe(key) {
            return Ok(());
        }

        let path = self.entry_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .map_err(|e| SessionError::StorageError(format!("Failed to delete entry: {e}")))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!(
            "fyp_session_test_{tag}_{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn cleanup(dir: &PathBuf) {
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let dir = temp_dir("set_get");
        let storage = FileStorage::new(&dir).unwrap();

        storage.set("fyp_token", "abc.def.ghi").await.unwrap();
        assert_eq!(
            storage.get("fyp_token").await.unwrap().as_deref(),
            Some("abc.def.ghi")
        );

        cleanup(&dir);
    }

    #[tokio::test]
    async fn test_get_absent_key() {
        let dir = temp_dir("absent");
        let storage = FileStorage::new(&dir).unwrap();

        assert!(storage.get("missing").await.unwrap().is_none());

        cleanup(&dir);
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let dir = temp_dir("reopen");
        {
            let storage = FileStorage::new(&dir).unwrap();
            storage.set("fyp_token", "persisted").await.unwrap();
        }

        let storage = FileStorage::new(&dir).unwrap();
        assert_eq!(
            storage.get("fyp_token").await.unwrap().as_deref(),
            Some("persisted")
        );

        cleanup(&dir);
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let dir = temp_dir("traversal");
        let storage = FileStorage::new(&dir).unwrap();

        assert!(storage.get("../etc/passwd").await.unwrap().is_none());
        assert!(storage.set("../escape", "v").await.is_err());
        storage.remove("../escape").await.unwrap();

        cleanup(&dir);
    }

    #[tokio::test]
    async fn test_remove() {
        let dir = temp_dir("remove");
        let storage = FileStorage::new(&dir).unwrap();

        storage.set("k", "v").await.unwrap();
        storage.remove("k").await.unwrap();
        assert!(storage.get("k").await.unwrap().is_none());

        // absent key, still Ok
        storage.remove("k").await.unwrap();

        cleanup(&dir);
    }
}
