//! Split Unicode text into SMS segments.
//!
//! A message goes out in the GSM 03.38 7-bit default alphabet when every
//! character is in that alphabet, and in UCS-2 otherwise. Messages longer
//! than one SMS are cut into concatenated parts, each with a smaller byte
//! budget to leave room for the concatenation header.
//!
//! | Encoding | Single SMS | Each concatenated part |
//! |----------|-----------:|-----------------------:|
//! | GSM 7-bit | 160 bytes | 153 bytes |
//! | UCS-2 | 140 bytes | 134 bytes |
//!
//! # Example
//!
//! ```
//! use sms_split::{segment, select_encoding, Encoding, EncodingMode};
//!
//! assert_eq!(select_encoding("Hi 😀"), Encoding::Ucs2);
//!
//! let segments = segment(&"a".repeat(200), EncodingMode::Auto);
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].byte_len, 153);
//! assert_eq!(segments[1].byte_len, 47);
//! ```

mod core;
mod encoders;
mod errors;

pub mod convenience;
pub mod prelude;

pub use crate::core::alphabet::{self, Septet};
pub use crate::core::codepoint::{
    LogicalCharacter, codepoints, codepoints_utf16, decode, decode_utf16, format_codepoint,
};
pub use crate::core::config::{Config, EncodingMode, OutputFormat, Settings, SettingsLayer};
pub use crate::encoders::encoding::{
    EncodedBytes, Encoding, encode, encode_char_gsm7, encode_char_ucs2, encode_chars,
    select_encoding, select_encoding_for,
};
pub use crate::encoders::segmenter::{
    Segment, SegmentLimits, segment, segment_chars, segment_utf16, segment_with,
};
pub use crate::errors::{
    ENCODING_NAMES, InputError, Plain, SettingsError, UnknownEncodingError, find_closest_name,
    should_use_color,
};

pub use crate::convenience::{SplitResult, Unencodable, format_hex_byte, split, split_chars};
