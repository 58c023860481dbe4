//! String key-value stores.
//!
//! The session and preferences layers only need `get`, `set` and a
//! multi-key `remove`, so any backend offering those can hold them.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use regex::Regex;
use tokio::fs;
use tokio::sync::RwLock;

use crate::error::StorageError;

/// Regex for valid keys: alphanumeric, dash, underscore only
const KEY_PATTERN: &str = r"^[a-zA-Z0-9_-]+$";

/// Maximum key length
const MAX_KEY_LENGTH: usize = 64;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove every listed key. Missing keys are ignored.
    async fn remove(&self, keys: &[&str]) -> Result<(), StorageError>;
}

/// Volatile store, used in tests and when no data directory is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}

/// File-backed store keeping one JSON file per key.
///
/// Takes a `PathBuf` in the constructor so each consumer can provide the
/// correct storage path.
pub struct FileStore {
    dir: PathBuf,
    key_regex: Regex,
}

impl FileStore {
    /// Create a new FileStore in the given directory, creating it if needed.
    pub fn new(dir: PathBuf) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&dir)
            .map_err(|e| StorageError::DirectoryAccess(format!("{}: {}", dir.display(), e)))?;

        let key_regex =
            Regex::new(KEY_PATTERN).map_err(|e| StorageError::InvalidKey(e.to_string()))?;

        Ok(Self { dir, key_regex })
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn validate_key(&self, key: &str) -> Result<(), StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey("Key cannot be empty".to_string()));
        }

        if key.len() > MAX_KEY_LENGTH {
            return Err(StorageError::InvalidKey(format!(
                "Key exceeds maximum length of {} characters",
                MAX_KEY_LENGTH
            )));
        }

        if !self.key_regex.is_match(key) {
            return Err(StorageError::InvalidKey(format!(
                "Key '{}' contains invalid characters. Only alphanumeric, dash, and underscore allowed.",
                key
            )));
        }

        Ok(())
    }

    fn get_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.validate_key(key)?;

        let content = match fs::read_to_string(self.get_path(key)).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e)),
        };

        let value: String = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.validate_key(key)?;

        let content = serde_json::to_string(value)?;
        fs::write(self.get_path(key), content).await?;

        Ok(())
    }

    async fn remove(&self, keys: &[&str]) -> Result<(), StorageError> {
        for key in keys {
            self.validate_key(key)?;
        }

        for key in keys {
            match fs::remove_file(self.get_path(key)).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(StorageError::Io(e)),
            }
        }

        Ok(())
    }
}
