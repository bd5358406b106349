//! One-call splitting with a summary of the result.
//!
//! [`split`] runs the whole pipeline (decode, pick the encoding, segment)
//! and collects what a report needs: totals and the characters that could
//! not be encoded.

use crate::core::codepoint::{self, LogicalCharacter};
use crate::core::config::EncodingMode;
use crate::encoders::encoding::Encoding;
use crate::encoders::segmenter::{self, Segment, SegmentLimits};
use serde::Serialize;

/// A character the chosen encoding cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unencodable {
    /// Zero-based segment index
    pub segment: usize,
    /// Index of the character within the whole message
    pub index: usize,
    pub character: LogicalCharacter,
}

/// Result of splitting one message.
#[derive(Debug, Clone, Serialize)]
pub struct SplitResult {
    /// Encoding that was asked for
    pub requested: EncodingMode,
    /// Encoding actually used
    pub encoding: Encoding,
    pub limits: SegmentLimits,
    pub segments: Vec<Segment>,
    /// Logical characters in the message
    pub char_count: usize,
    /// Bytes across all segments, excluding unencodable characters
    pub byte_count: usize,
    pub unencodable: Vec<Unencodable>,
}

impl SplitResult {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// True if more than one SMS is needed.
    pub fn is_concatenated(&self) -> bool {
        self.segments.len() > 1
    }

    /// True if every character has a representation in `encoding`.
    pub fn is_fully_encodable(&self) -> bool {
        self.unencodable.is_empty()
    }
}

/// Splits already-decoded characters under `mode`.
pub fn split_chars(chars: &[LogicalCharacter], mode: EncodingMode) -> SplitResult {
    let (encoding, segments) = segmenter::segment_chars(chars, mode);

    let mut unencodable = Vec::new();
    let mut offset = 0;
    for (segment_index, segment) in segments.iter().enumerate() {
        for index in segment.unencodable_indices() {
            unencodable.push(Unencodable {
                segment: segment_index,
                index: offset + index,
                character: segment.text[index],
            });
        }
        offset += segment.char_count();
    }

    if !unencodable.is_empty() {
        log::info!(
            "{} characters cannot be sent as {}",
            unencodable.len(),
            encoding
        );
    }

    SplitResult {
        requested: mode,
        encoding,
        limits: encoding.limits(),
        byte_count: segments.iter().map(|s| s.byte_len).sum(),
        char_count: chars.len(),
        segments,
        unencodable,
    }
}

/// Splits a string under `mode`.
///
/// # Example
/// ```
/// use sms_split::{split, Encoding, EncodingMode};
///
/// let result = split("Hello, world!", EncodingMode::Auto);
/// assert_eq!(result.encoding, Encoding::Gsm7);
/// assert_eq!(result.segment_count(), 1);
/// assert_eq!(result.byte_count, 13);
/// ```
pub fn split(text: &str, mode: EncodingMode) -> SplitResult {
    split_chars(&codepoint::decode(text), mode)
}

/// Formats a byte as `0x` followed by two lower-case hex digits.
pub fn format_hex_byte(byte: u8) -> String {
    format!("0x{:02x}", byte)
}
