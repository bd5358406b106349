use serde::Serialize;
use std::fmt;

const HIGH_SURROGATE_START: u16 = 0xD800;
const HIGH_SURROGATE_END: u16 = 0xDBFF;
const LOW_SURROGATE_START: u16 = 0xDC00;
const LOW_SURROGATE_END: u16 = 0xDFFF;

/// Returns true if the code unit is a UTF-16 high (leading) surrogate.
pub fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..=HIGH_SURROGATE_END).contains(&unit)
}

/// Returns true if the code unit is a UTF-16 low (trailing) surrogate.
pub fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_START..=LOW_SURROGATE_END).contains(&unit)
}

/// Combines a surrogate pair into its supplementary-plane codepoint.
pub fn combine_surrogates(high: u16, low: u16) -> u32 {
    (high as u32 - HIGH_SURROGATE_START as u32) * 0x400
        + (low as u32 - LOW_SURROGATE_START as u32)
        + 0x10000
}

/// One character as a user perceives it: a single UTF-16 code unit, or a
/// high/low surrogate pair kept together.
///
/// Lone surrogates are not valid Unicode but still decode to a `Single`
/// character so that malformed input is carried through instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalCharacter {
    /// A character made of one code unit (BMP character or lone surrogate).
    Single(u16),
    /// A supplementary-plane character made of a high and a low surrogate.
    Pair(u16, u16),
}

impl LogicalCharacter {
    /// Returns the UTF-16 code units making up this character.
    pub fn code_units(&self) -> Vec<u16> {
        match *self {
            LogicalCharacter::Single(unit) => vec![unit],
            LogicalCharacter::Pair(high, low) => vec![high, low],
        }
    }

    /// Number of UTF-16 code units (1 or 2).
    pub fn unit_len(&self) -> usize {
        match self {
            LogicalCharacter::Single(_) => 1,
            LogicalCharacter::Pair(..) => 2,
        }
    }

    /// Numeric codepoint of this character.
    ///
    /// A lone surrogate yields the code unit value itself.
    pub fn codepoint(&self) -> u32 {
        match *self {
            LogicalCharacter::Single(unit) => unit as u32,
            LogicalCharacter::Pair(high, low) => combine_surrogates(high, low),
        }
    }

    /// Returns the character as a Rust `char`, or `None` for a lone surrogate.
    pub fn to_char(&self) -> Option<char> {
        char::from_u32(self.codepoint())
    }

    /// True for a lone surrogate that could not be paired.
    pub fn is_malformed(&self) -> bool {
        self.to_char().is_none()
    }
}

impl From<char> for LogicalCharacter {
    fn from(c: char) -> Self {
        let mut buf = [0u16; 2];
        match c.encode_utf16(&mut buf) {
            [unit] => LogicalCharacter::Single(*unit),
            [high, low] => LogicalCharacter::Pair(*high, *low),
            _ => unreachable!("a char encodes to one or two UTF-16 units"),
        }
    }
}

impl fmt::Display for LogicalCharacter {
    /// Lone surrogates render as U+FFFD.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char().unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

impl Serialize for LogicalCharacter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("LogicalCharacter", 3)?;
        state.serialize_field("char", &self.to_string())?;
        state.serialize_field("codepoint", &format_codepoint(self.codepoint()))?;
        state.serialize_field("units", &self.code_units())?;
        state.end()
    }
}

/// Formats a codepoint as `U+XXXX` (at least four hex digits).
pub fn format_codepoint(codepoint: u32) -> String {
    format!("U+{:04X}", codepoint)
}

/// Splits UTF-16 code units into logical characters.
///
/// A high surrogate followed by a low surrogate becomes one `Pair`. Every
/// other unit stands alone, including a high surrogate at end of input or
/// one followed by anything but a low surrogate.
pub fn decode_utf16(units: &[u16]) -> Vec<LogicalCharacter> {
    let mut result = Vec::with_capacity(units.len());
    let mut i = 0;

    while i < units.len() {
        let unit = units[i];
        match units.get(i + 1) {
            Some(&next) if is_high_surrogate(unit) && is_low_surrogate(next) => {
                result.push(LogicalCharacter::Pair(unit, next));
                i += 2;
            }
            _ => {
                result.push(LogicalCharacter::Single(unit));
                i += 1;
            }
        }
    }

    result
}

/// Splits a string into logical characters.
pub fn decode(text: &str) -> Vec<LogicalCharacter> {
    let units: Vec<u16> = text.encode_utf16().collect();
    decode_utf16(&units)
}

/// Numeric codepoints of every logical character in the code units.
pub fn codepoints_utf16(units: &[u16]) -> Vec<u32> {
    decode_utf16(units).iter().map(LogicalCharacter::codepoint).collect()
}

/// Numeric codepoints of every logical character in the string.
pub fn codepoints(text: &str) -> Vec<u32> {
    codepoints_utf16(&text.encode_utf16().collect::<Vec<_>>())
}
