//! Request DTOs for the HTTP service
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

/// Maximum allowed cache key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Request body for POST /hex/decode
#[derive(Debug, Clone, Deserialize)]
pub struct HexDecodeRequest {
    /// Hex string, optionally `0x`-prefixed
    pub hex: String,
    /// Reject malformed hex or UTF-8 instead of decoding permissively
    #[serde(default)]
    pub strict: bool,
}

/// Request body for POST /source/decode
#[derive(Debug, Clone, Deserialize)]
pub struct SourceDecodeRequest {
    /// Gzip-compressed module source, hex encoded
    pub source: String,
}

/// Request body for POST /bytecode/size
#[derive(Debug, Clone, Deserialize)]
pub struct BytecodeSizeRequest {
    pub bytecode: String,
}

/// Request body for POST /transactions/sort
///
/// Transactions are kept as raw JSON so unknown fields survive the round trip.
#[derive(Debug, Clone, Deserialize)]
pub struct SortTransactionsRequest {
    pub transactions: Vec<Value>,
}

/// Request body for PUT /cache
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
/// - `ttl_ms`: Optional TTL in milliseconds (uses default if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct CacheWriteRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
    /// Optional TTL in milliseconds
    #[serde(default)]
    pub ttl_ms: Option<u64>,
}

impl CacheWriteRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        None
    }
}
