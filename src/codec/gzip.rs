//! Module Source Decoding
//!
//! Module source code arrives as a gzip stream encoded in hex. This module
//! turns it back into plain text.

use std::io::Read;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::error::{Result, UtilError};

use super::strip_hex_prefix;

/// Converts gzip-compressed, hex-encoded module source into plain text.
///
/// Concatenated gzip members are decoded back to back.
///
/// # Errors
/// - [`UtilError::InvalidEncoding`] if `source` is not valid hex or the
///   decompressed bytes are not valid UTF-8
/// - [`UtilError::Decompression`] if the hex-decoded bytes are not gzip data
pub fn transform_code(source: &str) -> Result<String> {
    let compressed = hex::decode(strip_hex_prefix(source))
        .map_err(|e| UtilError::InvalidEncoding(format!("hex: {e}")))?;

    let mut decompressed = Vec::new();
    MultiGzDecoder::new(compressed.as_slice())
        .read_to_end(&mut decompressed)
        .map_err(|e| UtilError::Decompression(e.to_string()))?;

    debug!(
        "Decompressed module source: {} -> {} bytes",
        compressed.len(),
        decompressed.len()
    );

    String::from_utf8(decompressed).map_err(|e| UtilError::InvalidEncoding(format!("utf-8: {e}")))
}
