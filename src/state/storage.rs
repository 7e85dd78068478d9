//! Persisted credential store over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session layer keeps its durable image in two string slots. This module
//! owns every read and write of those slots so corruption recovery happens in
//! exactly one place.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never reach callers. A throwing or missing backend reads
//! as "absent", failed writes are logged and dropped, and a malformed JSON
//! entry is deleted the first time it is read.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure reported by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available in this environment")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Raw string key-value backend.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the delete.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up fresh on every call.
///
/// Outside the browser (server rendering, native tests) every operation
/// reports [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| StorageError::Backend(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process map backend. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Backend("poisoned".to_owned()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Backend("poisoned".to_owned()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Backend("poisoned".to_owned()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Textual values older writers left behind instead of a real JSON document.
const ABSENT_MARKERS: [&str; 2] = ["undefined", "null"];

/// Fail-soft facade over a [`KeyValueStore`].
#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}

impl CredentialStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Store backed by the browser's `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Read a raw string value; backend failures read as `None`.
    pub fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(StorageError::Unavailable) => None,
            Err(e) => {
                log::warn!("storage read failed for {key}: {e}");
                None
            }
        }
    }

    /// Read and parse a JSON value.
    ///
    /// Absent entries and the `"undefined"` / `"null"` markers return `None`
    /// without parsing. An entry that fails to parse is deleted so it cannot
    /// poison later loads.
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read(key)?;
        if ABSENT_MARKERS.contains(&raw.as_str()) {
            return None;
        }
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding corrupt storage entry {key}: {e}");
                self.remove(key);
                None
            }
        }
    }

    pub fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.backend.set(key, value) {
            log::warn!("storage write failed for {key}: {e}");
        }
    }

    /// Serialize `value` as JSON and store it under `key`.
    pub fn write_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.write(key, &raw),
            Err(e) => log::warn!("could not serialize storage entry {key}: {e}"),
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            log::warn!("storage remove failed for {key}: {e}");
        }
    }
}
