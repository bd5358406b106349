use crate::core::codepoint::{self, LogicalCharacter};
use crate::core::config::EncodingMode;
use crate::encoders::encoding::{EncodedBytes, Encoding};
use serde::Serialize;

/// Byte budgets for one encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentLimits {
    /// Largest message that goes out as a single, unconcatenated SMS.
    pub single: usize,
    /// Largest payload of each part of a concatenated message.
    pub multi: usize,
}

impl SegmentLimits {
    pub const fn new(single: usize, multi: usize) -> Self {
        SegmentLimits { single, multi }
    }
}

/// One transmittable SMS part.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Segment {
    /// Characters in this segment, in message order.
    pub text: Vec<LogicalCharacter>,
    /// Encoded bytes of each character, parallel to `text`.
    pub bytes: Vec<EncodedBytes>,
    /// Sum of the byte lengths, with unencodable characters counted as zero.
    pub byte_len: usize,
}

impl Segment {
    fn push(&mut self, c: LogicalCharacter, bytes: EncodedBytes) {
        self.byte_len += bytes.len();
        self.text.push(c);
        self.bytes.push(bytes);
    }

    /// Number of logical characters in the segment.
    pub fn char_count(&self) -> usize {
        self.text.len()
    }

    /// The segment's text; lone surrogates render as U+FFFD.
    pub fn to_text(&self) -> String {
        self.text.iter().map(ToString::to_string).collect()
    }

    /// Concatenated wire bytes of the segment, skipping unencodable characters.
    pub fn payload(&self) -> Vec<u8> {
        self.bytes
            .iter()
            .filter_map(EncodedBytes::as_bytes)
            .flatten()
            .copied()
            .collect()
    }

    /// Indices (within this segment) of characters with no encoding.
    pub fn unencodable_indices(&self) -> Vec<usize> {
        self.bytes
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_encodable())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LogicalCharacter, &EncodedBytes)> {
        self.text.iter().zip(self.bytes.iter())
    }
}

/// Packs characters into SMS segments.
///
/// Every character is encoded up front. If the whole message fits in
/// `limits.single` it goes out as one segment; otherwise segments are filled
/// greedily up to `limits.multi`. A character's bytes are never split.
///
/// Each segment holds at least one character. A character that alone exceeds
/// `limits.multi` therefore gets an oversized segment of its own instead of
/// stalling the packer. The built-in budgets never hit this.
pub fn segment_with<F>(chars: &[LogicalCharacter], limits: SegmentLimits, encode_char: F) -> Vec<Segment>
where
    F: Fn(&LogicalCharacter) -> EncodedBytes,
{
    if chars.is_empty() {
        return Vec::new();
    }

    let encoded: Vec<EncodedBytes> = chars.iter().map(&encode_char).collect();
    let total: usize = encoded.iter().map(EncodedBytes::len).sum();

    if total <= limits.single {
        log::debug!(
            "{} characters, {} bytes: fits a single segment (limit {})",
            chars.len(),
            total,
            limits.single
        );
        let mut segment = Segment::default();
        for (c, bytes) in chars.iter().zip(encoded) {
            segment.push(*c, bytes);
        }
        return vec![segment];
    }

    let mut segments = Vec::new();
    let mut current = Segment::default();

    for (c, bytes) in chars.iter().zip(encoded) {
        if !current.text.is_empty() && current.byte_len + bytes.len() > limits.multi {
            segments.push(std::mem::take(&mut current));
        }
        if bytes.len() > limits.multi {
            log::warn!(
                "character {} needs {} bytes, more than the {} byte part limit; sending it in its own part",
                codepoint::format_codepoint(c.codepoint()),
                bytes.len(),
                limits.multi
            );
        }
        current.push(*c, bytes);
    }
    segments.push(current);

    log::debug!(
        "{} characters, {} bytes: split into {} segments (part limit {})",
        chars.len(),
        total,
        segments.len(),
        limits.multi
    );

    segments
}

/// Segments already-decoded characters under `mode`.
pub fn segment_chars(chars: &[LogicalCharacter], mode: EncodingMode) -> (Encoding, Vec<Segment>) {
    let encoding = mode.resolve(chars);
    let segments = segment_with(chars, encoding.limits(), |c| encoding.encode_char(c));
    (encoding, segments)
}

/// Splits a string into SMS segments under `mode`.
pub fn segment(text: &str, mode: EncodingMode) -> Vec<Segment> {
    segment_chars(&codepoint::decode(text), mode).1
}

/// Splits raw UTF-16 code units into SMS segments under `mode`.
///
/// Unlike [`segment`], this accepts unpaired surrogates.
pub fn segment_utf16(units: &[u16], mode: EncodingMode) -> Vec<Segment> {
    segment_chars(&codepoint::decode_utf16(units), mode).1
}
