//! Cache Entry Module
//!
//! The envelope stored under each cache key: the value plus its absolute
//! expiry time.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Number;

// == Cache Entry ==
/// Serialized as `{"value": "...", "expiry": <unix ms>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Expiration timestamp (Unix milliseconds)
    #[serde(deserialize_with = "deserialize_expiry")]
    pub expiry: i64,
}

/// Accepts any JSON number. Browser clients may write a fractional expiry;
/// it is floored, which keeps `now > expiry` exact for whole-millisecond `now`.
fn deserialize_expiry<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let number = Number::deserialize(deserializer)?;

    if let Some(ms) = number.as_i64() {
        return Ok(ms);
    }
    match number.as_f64() {
        Some(ms) if ms.is_finite() => Ok(ms.floor() as i64),
        _ => Err(de::Error::custom(format!("expiry out of range: {number}"))),
    }
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl_ms` after `now_ms`.
    pub fn new(value: String, now_ms: i64, ttl_ms: u64) -> Self {
        let ttl = i64::try_from(ttl_ms).unwrap_or(i64::MAX);
        Self {
            value,
            expiry: now_ms.saturating_add(ttl),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is still live at exactly its expiry
    /// instant and expires one millisecond later.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms > self.expiry
    }
}
