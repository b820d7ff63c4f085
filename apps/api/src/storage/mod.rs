//! Durable slots — named keys holding one UTF-8 JSON value each.
//!
//! The job store and the session live in separate slots. Every write replaces
//! the whole value; there is no incremental persistence.

pub mod file;
#[cfg(test)]
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use file::FileSlots;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Slot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Slot '{key}' holds malformed data: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid slot key '{0}'")]
    InvalidKey(String),
}

/// A key-value store of serialized values. Implementations must make each
/// `write` all-or-nothing: a reader sees either the old value or the new one.
pub trait SlotStorage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads and decodes a slot. A present but undecodable value is `Corrupt`.
pub fn read_json<T: DeserializeOwned>(
    slots: &dyn SlotStorage,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match slots.read(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Corrupt {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

pub fn write_json<T: Serialize + ?Sized>(
    slots: &dyn SlotStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(value)?;
    slots.write(key, &encoded)
}
