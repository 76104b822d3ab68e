//! Configuration Module
//!
//! Handles loading service configuration from environment variables.

use std::env;
use std::path::PathBuf;

// == Defaults ==
const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_TTL_MS: u64 = 300_000;
/// Same order of magnitude as browser local storage
const DEFAULT_STORE_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in milliseconds for cache writes that do not give one
    pub default_ttl_ms: u64,
    /// JSON file backing the cache store, None = in-memory store
    pub store_path: Option<PathBuf>,
    /// Byte quota for the in-memory store
    pub store_quota_bytes: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_TTL_MS` - Default cache TTL in milliseconds (default: 300000)
    /// - `STORE_PATH` - Persist the cache store to this JSON file (default: unset)
    /// - `STORE_QUOTA_BYTES` - In-memory store quota (default: 5 MiB)
    pub fn from_env() -> Self {
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
            default_ttl_ms: parse_var("DEFAULT_TTL_MS").unwrap_or(DEFAULT_TTL_MS),
            store_path: env::var_os("STORE_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            store_quota_bytes: parse_var("STORE_QUOTA_BYTES").unwrap_or(DEFAULT_STORE_QUOTA_BYTES),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_SERVER_PORT,
            default_ttl_ms: DEFAULT_TTL_MS,
            store_path: None,
            store_quota_bytes: DEFAULT_STORE_QUOTA_BYTES,
        }
    }
}
