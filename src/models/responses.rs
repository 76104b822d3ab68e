//! Response DTOs for the HTTP service
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

/// Response body for POST /hex/decode
#[derive(Debug, Clone, Serialize)]
pub struct HexDecodeResponse {
    pub text: String,
}

/// Response body for POST /source/decode
#[derive(Debug, Clone, Serialize)]
pub struct SourceDecodeResponse {
    /// Decompressed module source
    pub code: String,
    /// Size of the encoded source in KB
    pub size_kb: f64,
}

/// Response body for POST /bytecode/size
#[derive(Debug, Clone, Serialize)]
pub struct BytecodeSizeResponse {
    pub size_kb: f64,
}

/// Response body for POST /transactions/sort
#[derive(Debug, Clone, Serialize)]
pub struct SortTransactionsResponse {
    /// Newest first, pending transactions at the front
    pub transactions: Vec<Value>,
}

/// Response body for GET /cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct CacheReadResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl CacheReadResponse {
    /// Creates a new CacheReadResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for PUT /cache
#[derive(Debug, Clone, Serialize)]
pub struct CacheWriteResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
    /// Absolute expiry (Unix milliseconds)
    pub expiry: i64,
}

impl CacheWriteResponse {
    /// Creates a new CacheWriteResponse
    pub fn new(key: impl Into<String>, expiry: i64) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
            expiry,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
