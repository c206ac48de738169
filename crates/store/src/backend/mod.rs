//! Key-value string store backends.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("i/o error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped onto the backend.
    #[error("invalid store key: {0}")]
    InvalidKey(String),

    /// The backend is unusable (e.g., a poisoned lock).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A persistent key-value string store.
///
/// Values are opaque strings; the repositories decide that they hold JSON.
/// Implementations use interior locking so a store can be shared by reference
/// between services.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
