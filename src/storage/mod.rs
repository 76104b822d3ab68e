//! Storage Module
//!
//! The key/value capability the expiring cache writes through. Values are
//! opaque strings; callers own their serialization.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// Result type for store operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

// == Key Value Store ==
/// String key/value store in the shape of browser local storage.
pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> StorageResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// Store handle usable from the HTTP service, backend chosen at startup.
pub type DynStore = Box<dyn KeyValueStore + Send + Sync>;
