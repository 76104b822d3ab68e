//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    bytecode_size_handler, cache_read_handler, cache_write_handler, health_handler,
    hex_decode_handler, sort_transactions_handler, source_decode_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin, the browser explorer calls from its own host
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/hex/decode", post(hex_decode_handler))
        .route("/source/decode", post(source_decode_handler))
        .route("/bytecode/size", post(bytecode_size_handler))
        .route("/transactions/sort", post(sort_transactions_handler))
        .route("/cache", put(cache_write_handler))
        .route("/cache/:key", get(cache_read_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
