//! Request and Response models for the HTTP service
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    BytecodeSizeRequest, CacheWriteRequest, HexDecodeRequest, SortTransactionsRequest,
    SourceDecodeRequest,
};
pub use responses::{
    BytecodeSizeResponse, CacheReadResponse, CacheWriteResponse, ErrorResponse, HealthResponse,
    HexDecodeResponse, SortTransactionsResponse, SourceDecodeResponse,
};
