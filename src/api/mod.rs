//! API Module
//!
//! HTTP handlers and routing exposing the utilities as JSON endpoints.
//!
//! # Endpoints
//! - `POST /hex/decode` - Decode a hex string to text
//! - `POST /source/decode` - Decompress gzip-hex module source
//! - `POST /bytecode/size` - Estimate bytecode size in KB
//! - `POST /transactions/sort` - Sort transactions newest first
//! - `PUT /cache` - Store a value with a TTL
//! - `GET /cache/:key` - Read a live cached value
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
