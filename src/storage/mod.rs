// ABOUTME: Persistence gateway for form progress, submissions and theme
// Exposes a small key-value Storage trait plus file-backed and in-memory implementations

pub mod file;
pub mod keys;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode storage contents: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value persistence gateway.
///
/// Values are opaque strings; writes must be durable before the call returns
/// so an observer reading immediately afterwards sees the new value.
#[cfg_attr(test, mockall::automock)]
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and decode a JSON value, treating backend and parse failures as absence
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = match storage.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Failed to read '{}' from storage: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring malformed JSON stored under '{}': {}", key, e);
            None
        }
    }
}

/// Encode a value as JSON and store it, logging instead of failing
pub fn save_json<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) {
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!("Failed to encode value for '{}': {}", key, e);
            return;
        }
    };
    save_or_warn(storage, key, &encoded);
}

/// Store a raw string, logging instead of failing
pub fn save_or_warn(storage: &dyn Storage, key: &str, value: &str) {
    if let Err(e) = storage.save(key, value) {
        warn!("Failed to write '{}' to storage: {}", key, e);
    }
}

/// Remove a key, logging instead of failing
pub fn remove_or_warn(storage: &dyn Storage, key: &str) {
    if let Err(e) = storage.remove(key) {
        warn!("Failed to remove '{}' from storage: {}", key, e);
    }
}
