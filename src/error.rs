//! Error types for the explorer utilities
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Storage Error Enum ==
/// Failures raised by a [`KeyValueStore`](crate::storage::KeyValueStore) backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Writing the value would push the store past its byte quota
    #[error("Storage quota exceeded: needed {needed} bytes, quota is {quota} bytes")]
    QuotaExceeded { needed: usize, quota: usize },

    /// The backend refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Filesystem failure in a persistent backend
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Util Error Enum ==
/// Unified error type for every utility in the crate.
#[derive(Error, Debug)]
pub enum UtilError {
    /// Input is not valid hex, or the decoded bytes are not valid UTF-8
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Hex-decoded bytes are not a valid gzip stream
    #[error("Decompression failed: {0}")]
    Decompression(String),

    /// Response body is not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A stored cache envelope could not be deserialized
    #[error("Malformed cache entry for key '{key}': {source}")]
    MalformedEntry {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failure reported by the key/value store, passed through unchanged
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Transport failure while fetching
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache key absent or expired
    #[error("Key not found: {0}")]
    NotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for UtilError {
    fn into_response(self) -> Response {
        let status = match &self {
            UtilError::InvalidEncoding(_)
            | UtilError::Decompression(_)
            | UtilError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            UtilError::NotFound(_) => StatusCode::NOT_FOUND,
            UtilError::Parse(_) | UtilError::Network(_) => StatusCode::BAD_GATEWAY,
            UtilError::Storage(StorageError::QuotaExceeded { .. }) => {
                StatusCode::INSUFFICIENT_STORAGE
            }
            UtilError::MalformedEntry { .. } | UtilError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the explorer utilities.
pub type Result<T> = std::result::Result<T, UtilError>;
