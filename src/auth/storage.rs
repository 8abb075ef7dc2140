//! Durable key-value backends for session tokens.
//!
//! A [`TokenStorage`] is the persistent mirror behind a
//! [`TokenStore`](crate::auth::TokenStore). Two implementations ship with the
//! crate:
//!
//! - [`MemoryStorage`]: a shared in-process map, useful for tests and for
//!   callers that do not need tokens to survive a restart
//! - [`FileStorage`]: a JSON object on disk, for CLI and desktop consumers

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Errors raised by a [`TokenStorage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written.
    #[error("Token storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backing file does not hold a JSON object of strings.
    #[error("Token storage is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A persistent string key-value store for tokens.
///
/// Implementations must be idempotent: clearing a missing key succeeds.
pub trait TokenStorage: Send + Sync + fmt::Debug {
    /// Loads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn clear(&self, key: &str) -> Result<(), StorageError>;
}

/// An in-process [`TokenStorage`].
///
/// Clones share the same map, so a fresh `TokenStore` built over a clone
/// sees what an earlier store persisted.
///
/// # Example
///
/// ```rust
/// use storefront_api::auth::{MemoryStorage, TokenStorage};
///
/// let storage = MemoryStorage::new();
/// storage.save("access_token", "abc").unwrap();
/// assert_eq!(storage.clone().load("access_token").unwrap().as_deref(), Some("abc"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.values().remove(key);
        Ok(())
    }
}

/// A [`TokenStorage`] persisted as a JSON object in a single file.
///
/// A missing file reads as empty. Every write replaces the whole file through
/// a sibling `.tmp` file and a rename; on unix the file is created with mode
/// `0600`. A file that no longer parses is reported by `load` and replaced by
/// the next `save` or `clear`.
///
/// Access from one process is serialized by an internal lock; concurrent
/// writers in different processes are not coordinated.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    /// Creates a storage backed by the file at `path`.
    ///
    /// The file is not touched until the first operation.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, values: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(values)?;

        // Write through a sibling temp file, then rename over the target
        let tmp_path = self.tmp_path();
        if let Err(e) = std::fs::remove_file(&tmp_path) {
            if e.kind() != io::ErrorKind::NotFound {
                return Err(e.into());
            }
        }
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&tmp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        drop(file);

        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn update<F>(&self, apply: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut HashMap<String, String>) -> bool,
    {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let (mut values, corrupt) = match self.read_all() {
            Ok(values) => (values, false),
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(
                    "Discarding corrupt token storage at {}: {}",
                    self.path.display(),
                    e
                );
                (HashMap::new(), true)
            }
            Err(e) => return Err(e),
        };
        if apply(&mut values) || corrupt {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

impl TokenStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|values| {
            values.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn clear(&self, key: &str) -> Result<(), StorageError> {
        self.update(|values| values.remove(key).is_some())
    }
}
