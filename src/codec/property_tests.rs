//! Property-Based Tests for Codec Module

use std::io::Write;

use flate2::{write::GzEncoder, Compression};
use proptest::prelude::*;

use crate::codec::{bytecode_size_in_kb, hex_to_string, transform_code, try_hex_to_string};

fn gzip_hex(text: &str) -> String {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(text.as_bytes()).unwrap();
    hex::encode(encoder.finish().unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Compressing, hex-encoding and decoding any text returns it unchanged.
    #[test]
    fn prop_transform_code_recovers_source(text in "\\PC{0,512}") {
        let decoded = transform_code(&gzip_hex(&text)).unwrap();
        prop_assert_eq!(decoded, text);
    }

    // For ASCII text the permissive and strict decoders agree.
    #[test]
    fn prop_ascii_decoders_agree(text in "[ -~]{0,128}", prefixed in any::<bool>()) {
        let mut encoded = hex::encode(text.as_bytes());
        if prefixed {
            encoded.insert_str(0, "0x");
        }

        prop_assert_eq!(hex_to_string(&encoded), text.clone());
        prop_assert_eq!(try_hex_to_string(&encoded).unwrap(), text);
    }

    // The permissive decoder never panics and emits one char per digit pair.
    #[test]
    fn prop_permissive_decoder_is_total(input in "\\PC{0,64}") {
        let stripped = input.strip_prefix("0x").unwrap_or(&input);
        let decoded = hex_to_string(&input);
        prop_assert_eq!(decoded.chars().count(), stripped.len().div_ceil(2));
    }

    // Estimated size is monotonic in input length and has two decimals at most.
    #[test]
    fn prop_size_is_rounded_kb(len in 0usize..20_000) {
        let size = bytecode_size_in_kb(&"f".repeat(len));
        let expected = len as f64 / 1024.0;

        prop_assert!((size - expected).abs() <= 0.005 + f64::EPSILON);
        prop_assert!(((size * 100.0).round() - size * 100.0).abs() < 1e-6);
    }
}
