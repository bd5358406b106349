pub mod chars;
pub mod config;
pub mod encode;
pub mod encoding;
pub mod split;

use sms_split::{EncodedBytes, LogicalCharacter, format_hex_byte};

/// Quoted, escaped form of a character; lone surrogates are named.
fn char_label(c: &LogicalCharacter) -> String {
    match c.to_char() {
        Some(ch) => format!("{:?}", ch),
        None => "<lone surrogate>".to_string(),
    }
}

/// Bytes as `0x..` groups, or `not-encoded` for the sentinel.
fn bytes_label(bytes: &EncodedBytes) -> String {
    match bytes.as_bytes() {
        Some(bytes) => bytes
            .iter()
            .map(|&b| format_hex_byte(b))
            .collect::<Vec<_>>()
            .join(" "),
        None => "not-encoded".to_string(),
    }
}
