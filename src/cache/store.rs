//! Expiring Cache Module
//!
//! TTL wrapper over a [`KeyValueStore`]. Each key holds a JSON envelope with
//! the value and its absolute expiry; expiry is enforced lazily on read.

use tracing::debug;

use crate::cache::{CacheEntry, Clock, SystemClock};
use crate::error::{Result, UtilError};
use crate::storage::KeyValueStore;

// == Expiring Cache ==
/// Key/value cache with per-entry expiry.
///
/// There is no background sweep: an expired entry stays in the store until
/// the next [`read`](Self::read) of its key removes it.
#[derive(Debug)]
pub struct ExpiringCache<S, C = SystemClock> {
    /// Underlying key/value store
    store: S,
    /// Time source for expiry
    clock: C,
}

impl<S: KeyValueStore> ExpiringCache<S> {
    /// Creates a cache over `store` using wall-clock time.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ExpiringCache<S, C> {
    // == Constructor ==
    /// Creates a cache over `store` reading time from `clock`.
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    // == Write ==
    /// Stores `value` under `key`, expiring `ttl_ms` milliseconds from now.
    ///
    /// Overwrites any prior entry. Store failures propagate unchanged.
    /// Returns the written entry.
    pub fn write(&mut self, key: &str, value: impl Into<String>, ttl_ms: u64) -> Result<CacheEntry> {
        let entry = CacheEntry::new(value.into(), self.clock.now_ms(), ttl_ms);
        let serialized = serde_json::to_string(&entry)?;

        self.store.set(key, serialized)?;
        Ok(entry)
    }

    // == Read ==
    /// Returns the live value under `key`.
    ///
    /// Returns `None` if the key is absent or holds an empty string, or if its
    /// entry has expired, in which case the entry is also removed from the
    /// store.
    ///
    /// # Errors
    /// [`UtilError::MalformedEntry`] if the stored text is not a valid
    /// envelope; [`UtilError::Storage`] if the store fails.
    pub fn read(&mut self, key: &str) -> Result<Option<String>> {
        let Some(raw) = self.store.get(key)?.filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        let entry: CacheEntry = serde_json::from_str(&raw).map_err(|source| {
            UtilError::MalformedEntry {
                key: key.to_string(),
                source,
            }
        })?;

        if entry.is_expired(self.clock.now_ms()) {
            debug!("Cache entry '{}' expired at {}, removing", key, entry.expiry);
            self.store.remove(key)?;
            return Ok(None);
        }

        Ok(Some(entry.value))
    }

    // == Accessors ==
    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the cache, returning the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}
