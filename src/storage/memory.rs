//! In-Memory Store
//!
//! HashMap-backed store with an optional byte quota.

use std::collections::HashMap;

use crate::error::StorageError;

use super::{KeyValueStore, StorageResult};

// == Memory Store ==
/// Volatile key/value store.
///
/// Usage is counted as the UTF-8 length of every key plus its value. A write
/// that would push usage past the quota is rejected and leaves the store
/// unchanged.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: HashMap<String, String>,
    /// Bytes currently used by keys and values
    used_bytes: usize,
    /// Maximum bytes allowed, None = unbounded
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    // == Constructors ==
    /// Creates an unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes beyond `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the bytes currently counted against the quota.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        let replaced = self
            .entries
            .get(key)
            .map(|old| key.len() + old.len())
            .unwrap_or(0);
        let needed = self.used_bytes - replaced + key.len() + value.len();

        if let Some(quota) = self.quota_bytes {
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        self.entries.insert(key.to_string(), value);
        self.used_bytes = needed;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        if let Some(old) = self.entries.remove(key) {
            self.used_bytes -= key.len() + old.len();
        }
        Ok(())
    }
}
