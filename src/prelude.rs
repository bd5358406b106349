//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in sms-split.
//!
//! # Example
//!
//! ```
//! use sms_split::prelude::*;
//!
//! let result = split("Meet at 7? 😀", EncodingMode::Auto);
//! assert_eq!(result.encoding, Encoding::Ucs2);
//! println!("{} segment(s)", result.segment_count());
//! ```

pub use crate::{
    // Data model
    EncodedBytes,
    Encoding,
    EncodingMode,
    LogicalCharacter,
    Segment,
    SegmentLimits,

    // Settings
    Config,
    Settings,

    // Convenience
    SplitResult,
    split,

    // Core operations
    decode,
    encode,
    segment,
    select_encoding,
};
