//! Key-value persistence backends.
//!
//! The habit store persists through the [`Storage`] trait: `get`/`set` over
//! string values, keyed the same way the mobile app keyed its async
//! storage (`@habits`, `@theme`). [`FileStorage`] maps each key to a file
//! under the data directory; [`MemoryStorage`] backs tests and embedders.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{Result, StorageError};

/// Key under which the serialized habit collection is stored.
pub const HABITS_KEY: &str = "@habits";

/// Key under which the theme preference is stored.
pub const THEME_KEY: &str = "@theme";

/// Persistent key-value storage collaborator.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage> Storage for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Returns `~/.config/dailyzen[-dev]/` based on DAILYZEN_ENV.
///
/// Set DAILYZEN_ENV=dev to use the development data directory, or
/// DAILYZEN_DATA_DIR to point at an absolute directory instead.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("DAILYZEN_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAILYZEN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dailyzen-dev")
    } else {
        base_dir.join("dailyzen")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// File-per-key storage rooted at the data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at the default data directory.
    pub fn open() -> Result<Self> {
        Ok(Self { dir: data_dir()? })
    }

    /// Storage rooted at a custom directory (for testing).
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key.trim_start_matches('@')))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), value).map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

/// In-memory storage for tests and embedders.
///
/// Writes can be made to fail on demand to exercise the recoverable-error
/// path without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|e| StorageError::ReadFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                message: "writes disabled".to_string(),
            });
        }
        let mut entries = self.entries.lock().map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::with_dir(dir.path().to_path_buf());

        assert_eq!(storage.get(HABITS_KEY).unwrap(), None);
        storage.set(HABITS_KEY, "[]").unwrap();
        assert_eq!(storage.get(HABITS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_storage_keys_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::with_dir(dir.path().to_path_buf());

        storage.set(HABITS_KEY, "[]").unwrap();
        storage.set(THEME_KEY, "dark").unwrap();
        assert_eq!(storage.get(HABITS_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn memory_storage_can_fail_writes() {
        let storage = MemoryStorage::new();
        storage.set("k", "v1").unwrap();

        storage.fail_writes(true);
        assert!(storage.set("k", "v2").is_err());
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v1"));

        storage.fail_writes(false);
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
    }
}
