//! Hex Text Module
//!
//! Turns hex-encoded strings back into text.

use crate::error::{Result, UtilError};

use super::strip_hex_prefix;

// == Permissive Decode ==
/// Decodes a hex string into text, one character per two hex digits.
///
/// Each pair becomes the character whose code point is the pair's value, so
/// ASCII round-trips exactly while multi-byte UTF-8 sequences come out as
/// their individual Latin-1 code points. An optional `0x` prefix is ignored.
///
/// Never fails. Malformed input yields garbage instead of an error:
/// - a pair whose first digit is not hex becomes `'\0'`
/// - a pair with a valid first digit but invalid second digit uses the first
/// - a trailing lone digit is decoded on its own
///
/// Use [`try_hex_to_string`] when malformed input must be rejected.
pub fn hex_to_string(hex: &str) -> String {
    strip_hex_prefix(hex)
        .as_bytes()
        .chunks(2)
        .map(|pair| char::from(leading_hex_value(pair)))
        .collect()
}

/// Value of the longest run of hex digits at the start of `pair`, or 0.
fn leading_hex_value(pair: &[u8]) -> u8 {
    pair.iter()
        .map_while(|&b| (b as char).to_digit(16))
        .fold(0u8, |acc, digit| (acc << 4) | digit as u8)
}

// == Strict Decode ==
/// Decodes a hex string into UTF-8 text, rejecting malformed input.
///
/// Fails with [`UtilError::InvalidEncoding`] on odd length, non-hex digits,
/// or bytes that are not valid UTF-8.
pub fn try_hex_to_string(input: &str) -> Result<String> {
    let bytes = hex::decode(strip_hex_prefix(input))
        .map_err(|e| UtilError::InvalidEncoding(format!("hex: {e}")))?;

    String::from_utf8(bytes).map_err(|e| UtilError::InvalidEncoding(format!("utf-8: {e}")))
}
