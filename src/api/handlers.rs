//! API Handlers
//!
//! HTTP request handlers for each service endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::ExpiringCache;
use crate::codec::{bytecode_size_in_kb, hex_to_string, transform_code, try_hex_to_string};
use crate::config::Config;
use crate::error::{Result, UtilError};
use crate::models::{
    BytecodeSizeRequest, BytecodeSizeResponse, CacheReadResponse, CacheWriteRequest,
    CacheWriteResponse, HealthResponse, HexDecodeRequest, HexDecodeResponse,
    SortTransactionsRequest, SortTransactionsResponse, SourceDecodeRequest, SourceDecodeResponse,
};
use crate::storage::{DynStore, FileStore, MemoryStore};
use crate::transaction::sort_transactions;

/// Expiring cache shared across handlers.
pub type SharedCache = Arc<RwLock<ExpiringCache<DynStore>>>;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe expiring cache
    pub cache: SharedCache,
    /// TTL applied when a write does not give one
    pub default_ttl_ms: u64,
}

impl AppState {
    /// Creates a new AppState over the given store.
    pub fn new(store: DynStore, default_ttl_ms: u64) -> Self {
        Self {
            cache: Arc::new(RwLock::new(ExpiringCache::new(store))),
            default_ttl_ms,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Opens a [`FileStore`] when `store_path` is set, otherwise a quota-bound
    /// [`MemoryStore`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let store: DynStore = match &config.store_path {
            Some(path) => {
                info!("Using file store at {}", path.display());
                Box::new(FileStore::open(path.clone())?)
            }
            None => {
                info!(
                    "Using in-memory store with {} byte quota",
                    config.store_quota_bytes
                );
                Box::new(MemoryStore::with_quota(config.store_quota_bytes))
            }
        };
        Ok(Self::new(store, config.default_ttl_ms))
    }
}

/// Handler for POST /hex/decode
///
/// Permissive unless `strict` is set, in which case malformed input is a 400.
pub async fn hex_decode_handler(Json(req): Json<HexDecodeRequest>) -> Result<Json<HexDecodeResponse>> {
    let text = if req.strict {
        try_hex_to_string(&req.hex)?
    } else {
        hex_to_string(&req.hex)
    };

    Ok(Json(HexDecodeResponse { text }))
}

/// Handler for POST /source/decode
pub async fn source_decode_handler(
    Json(req): Json<SourceDecodeRequest>,
) -> Result<Json<SourceDecodeResponse>> {
    let code = transform_code(&req.source)?;

    Ok(Json(SourceDecodeResponse {
        code,
        size_kb: bytecode_size_in_kb(&req.source),
    }))
}

/// Handler for POST /bytecode/size
pub async fn bytecode_size_handler(Json(req): Json<BytecodeSizeRequest>) -> Json<BytecodeSizeResponse> {
    Json(BytecodeSizeResponse {
        size_kb: bytecode_size_in_kb(&req.bytecode),
    })
}

/// Handler for POST /transactions/sort
pub async fn sort_transactions_handler(
    Json(req): Json<SortTransactionsRequest>,
) -> Json<SortTransactionsResponse> {
    let mut transactions = req.transactions;
    sort_transactions(&mut transactions);

    Json(SortTransactionsResponse { transactions })
}

/// Handler for PUT /cache
///
/// Stores a value with the given TTL, or the configured default.
pub async fn cache_write_handler(
    State(state): State<AppState>,
    Json(req): Json<CacheWriteRequest>,
) -> Result<Json<CacheWriteResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(UtilError::InvalidRequest(error_msg));
    }

    let ttl_ms = req.ttl_ms.unwrap_or(state.default_ttl_ms);

    let mut cache = state.cache.write().await;
    let entry = cache.write(&req.key, req.value, ttl_ms)?;

    Ok(Json(CacheWriteResponse::new(req.key, entry.expiry)))
}

/// Handler for GET /cache/:key
///
/// Returns 404 for absent and expired keys alike.
pub async fn cache_read_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CacheReadResponse>> {
    // Write lock: an expired read removes the entry
    let mut cache = state.cache.write().await;

    match cache.read(&key)? {
        Some(value) => Ok(Json(CacheReadResponse::new(key, value))),
        None => Err(UtilError::NotFound(key)),
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::new(Box::new(MemoryStore::new()), 60_000)
    }

    #[tokio::test]
    async fn test_cache_write_and_read_handler() {
        let state = test_state();

        let req = CacheWriteRequest {
            key: "test_key".to_string(),
            value: "test_value".to_string(),
            ttl_ms: None,
        };
        let result = cache_write_handler(State(state.clone()), Json(req)).await;
        assert!(result.is_ok());

        let result = cache_read_handler(State(state), Path("test_key".to_string())).await;
        let response = result.unwrap();
        assert_eq!(response.value, "test_value");
    }

    #[tokio::test]
    async fn test_cache_read_missing_key() {
        let result = cache_read_handler(State(test_state()), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(UtilError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_cache_write_invalid_request() {
        let req = CacheWriteRequest {
            key: "".to_string(),
            value: "value".to_string(),
            ttl_ms: None,
        };
        let result = cache_write_handler(State(test_state()), Json(req)).await;
        assert!(matches!(result, Err(UtilError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_cache_write_uses_default_ttl() {
        let state = test_state();
        let req = CacheWriteRequest {
            key: "k".to_string(),
            value: "v".to_string(),
            ttl_ms: None,
        };

        let before = chrono::Utc::now().timestamp_millis();
        let response = cache_write_handler(State(state), Json(req)).await.unwrap();

        assert!(response.expiry >= before + 60_000);
    }

    #[tokio::test]
    async fn test_hex_decode_handler_modes() {
        let req = HexDecodeRequest {
            hex: "0x68690a".to_string(),
            strict: false,
        };
        assert_eq!(hex_decode_handler(Json(req)).await.unwrap().text, "hi\n");

        let req = HexDecodeRequest {
            hex: "zz".to_string(),
            strict: true,
        };
        assert!(matches!(
            hex_decode_handler(Json(req)).await,
            Err(UtilError::InvalidEncoding(_))
        ));
    }

    #[tokio::test]
    async fn test_sort_transactions_handler() {
        let req = SortTransactionsRequest {
            transactions: vec![json!({"version": "1"}), json!({}), json!({"version": "3"})],
        };

        let response = sort_transactions_handler(Json(req)).await;
        assert_eq!(
            response.transactions,
            vec![json!({}), json!({"version": "3"}), json!({"version": "1"})]
        );
    }

    #[tokio::test]
    async fn test_bytecode_size_handler() {
        let req = BytecodeSizeRequest {
            bytecode: "a".repeat(2048),
        };
        assert_eq!(bytecode_size_handler(Json(req)).await.size_kb, 2.0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_from_config_file_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            store_path: Some(dir.path().join("cache.json")),
            ..Config::default()
        };

        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.default_ttl_ms, config.default_ttl_ms);
    }
}
