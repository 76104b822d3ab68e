//! Explorer Utils - Client-side helpers for a blockchain explorer
//!
//! Transaction ordering, hex and gzip-hex decoding, bytecode size estimation,
//! a JSON fetch helper and a TTL cache over an injected key/value store.

pub mod api;
pub mod cache;
pub mod codec;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod storage;
pub mod transaction;

pub use api::AppState;
pub use cache::{Clock, ExpiringCache, SystemClock};
pub use codec::{bytecode_size_in_kb, hex_to_string, transform_code, try_hex_to_string};
pub use config::Config;
pub use error::{Result, StorageError, UtilError};
pub use fetch::{fetch_json_response, fetch_json_with};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use transaction::{compare_transactions, sort_transactions, Transaction, Versioned};
