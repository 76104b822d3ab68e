//! Bytecode Size Module

/// Size of `bytecode` in kilobytes, rounded to two decimal places.
///
/// Measures the UTF-8 length of the string exactly as given. For a hex
/// string that is the length of its text form, roughly twice the size of the
/// bytecode it encodes; the hex is not decoded first.
pub fn bytecode_size_in_kb(bytecode: &str) -> f64 {
    let size_kb = bytecode.len() as f64 / 1024.0;
    (size_kb * 100.0).round() / 100.0
}
