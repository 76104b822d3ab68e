//! Codec Module
//!
//! Format adapters for hex-encoded text, gzip-hex module source and
//! bytecode size estimation.

pub mod gzip;
pub mod size;
pub mod text;

#[cfg(test)]
mod property_tests;

// Re-export public functions
pub use self::gzip::transform_code;
pub use self::size::bytecode_size_in_kb;
pub use self::text::{hex_to_string, try_hex_to_string};

// == Public Constants ==
/// Prefix accepted (and ignored) in front of hex input
pub const HEX_PREFIX: &str = "0x";

/// Strips a leading [`HEX_PREFIX`] if present.
pub(crate) fn strip_hex_prefix(input: &str) -> &str {
    input.strip_prefix(HEX_PREFIX).unwrap_or(input)
}
