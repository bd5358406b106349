use crate::core::alphabet;
use crate::core::codepoint::{self, LogicalCharacter};
use crate::core::config::EncodingMode;
use crate::encoders::segmenter::SegmentLimits;
use serde::Serialize;
use std::fmt;

/// Bytes one character occupies under a concrete encoding.
///
/// `NotEncodable` marks a character with no representation in the chosen
/// alphabet. It is kept in place (and counted as zero bytes) so callers can
/// point at the offending character instead of losing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodedBytes {
    Bytes(Vec<u8>),
    NotEncodable,
}

impl EncodedBytes {
    /// Byte length used for budgeting; zero for `NotEncodable`.
    pub fn len(&self) -> usize {
        match self {
            EncodedBytes::Bytes(bytes) => bytes.len(),
            EncodedBytes::NotEncodable => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_encodable(&self) -> bool {
        matches!(self, EncodedBytes::Bytes(_))
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            EncodedBytes::Bytes(bytes) => Some(bytes),
            EncodedBytes::NotEncodable => None,
        }
    }
}

/// Concrete message encoding. `EncodingMode::Auto` always resolves to one
/// of these before any character is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// GSM 03.38 7-bit default alphabet (one byte per septet).
    Gsm7,
    /// UCS-2: two big-endian bytes per UTF-16 code unit.
    Ucs2,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Gsm7 => "gsm7",
            Encoding::Ucs2 => "ucs2",
        }
    }

    /// Single-message and concatenated-part byte budgets.
    ///
    /// The multi-part budgets leave room for the concatenation header.
    pub fn limits(&self) -> SegmentLimits {
        match self {
            Encoding::Gsm7 => SegmentLimits::new(160, 153),
            Encoding::Ucs2 => SegmentLimits::new(140, 134),
        }
    }

    pub fn encode_char(&self, c: &LogicalCharacter) -> EncodedBytes {
        match self {
            Encoding::Gsm7 => encode_char_gsm7(c),
            Encoding::Ucs2 => encode_char_ucs2(c),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EncodingMode {
    /// Resolves the mode for a whole message.
    pub fn resolve(&self, chars: &[LogicalCharacter]) -> Encoding {
        match self {
            EncodingMode::Gsm7 => Encoding::Gsm7,
            EncodingMode::Ucs2 => Encoding::Ucs2,
            EncodingMode::Auto => select_encoding_for(chars),
        }
    }
}

impl From<Encoding> for EncodingMode {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Gsm7 => EncodingMode::Gsm7,
            Encoding::Ucs2 => EncodingMode::Ucs2,
        }
    }
}

/// Encodes one character as UCS-2: each code unit becomes two bytes, high
/// byte first.
pub fn encode_char_ucs2(c: &LogicalCharacter) -> EncodedBytes {
    let bytes = c
        .code_units()
        .into_iter()
        .flat_map(u16::to_be_bytes)
        .collect();
    EncodedBytes::Bytes(bytes)
}

/// Encodes one character in the GSM default alphabet.
pub fn encode_char_gsm7(c: &LogicalCharacter) -> EncodedBytes {
    match alphabet::lookup(c.codepoint()) {
        Some(septet) => EncodedBytes::Bytes(septet.to_bytes()),
        None => EncodedBytes::NotEncodable,
    }
}

/// Picks GSM 7-bit if every character is in the GSM alphabet, UCS-2
/// otherwise. Encodings are never mixed within one message.
pub fn select_encoding_for(chars: &[LogicalCharacter]) -> Encoding {
    let offender = chars.iter().position(|c| !alphabet::contains(c.codepoint()));
    match offender {
        None => Encoding::Gsm7,
        Some(index) => {
            log::debug!(
                "character {} at index {} is outside the GSM alphabet, using UCS-2",
                codepoint::format_codepoint(chars[index].codepoint()),
                index
            );
            Encoding::Ucs2
        }
    }
}

/// Picks the encoding for a string. See [`select_encoding_for`].
pub fn select_encoding(text: &str) -> Encoding {
    select_encoding_for(&codepoint::decode(text))
}

/// Encodes every character of the message, resolving `mode` once.
pub fn encode_chars(chars: &[LogicalCharacter], mode: EncodingMode) -> Vec<EncodedBytes> {
    let encoding = mode.resolve(chars);
    chars.iter().map(|c| encoding.encode_char(c)).collect()
}

/// Encodes every character of the string, resolving `mode` once.
pub fn encode(text: &str, mode: EncodingMode) -> Vec<EncodedBytes> {
    encode_chars(&codepoint::decode(text), mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ucs2_bmp_character() {
        let bytes = encode_char_ucs2(&LogicalCharacter::from('A'));
        assert_eq!(bytes, EncodedBytes::Bytes(vec![0x00, 0x41]));

        let bytes = encode_char_ucs2(&LogicalCharacter::from('€'));
        assert_eq!(bytes, EncodedBytes::Bytes(vec![0x20, 0xAC]));
    }

    #[test]
    fn test_ucs2_surrogate_pair() {
        let bytes = encode_char_ucs2(&LogicalCharacter::from('😀'));
        assert_eq!(bytes, EncodedBytes::Bytes(vec![0xD8, 0x3D, 0xDE, 0x00]));
        assert_eq!(bytes.len(), 4);
    }

    #[test]
    fn test_ucs2_lone_surrogate() {
        let bytes = encode_char_ucs2(&LogicalCharacter::Single(0xD83D));
        assert_eq!(bytes, EncodedBytes::Bytes(vec![0xD8, 0x3D]));
    }

    #[test]
    fn test_gsm7_characters() {
        assert_eq!(
            encode_char_gsm7(&LogicalCharacter::from('@')),
            EncodedBytes::Bytes(vec![0x00])
        );
        assert_eq!(
            encode_char_gsm7(&LogicalCharacter::from('€')),
            EncodedBytes::Bytes(vec![0x1B, 0x65])
        );
    }

    #[test]
    fn test_gsm7_not_encodable() {
        let bytes = encode_char_gsm7(&LogicalCharacter::from('😀'));
        assert_eq!(bytes, EncodedBytes::NotEncodable);
        assert_eq!(bytes.len(), 0);
        assert!(!bytes.is_encodable());
        assert_eq!(bytes.as_bytes(), None);
    }

    #[test]
    fn test_select_encoding() {
        assert_eq!(select_encoding("Hello, world!"), Encoding::Gsm7);
        assert_eq!(select_encoding("Price: 5€ {ok}"), Encoding::Gsm7);
        assert_eq!(select_encoding("Hello 😀"), Encoding::Ucs2);
        assert_eq!(select_encoding("naïve"), Encoding::Ucs2);
        assert_eq!(select_encoding(""), Encoding::Gsm7);
    }

    #[test]
    fn test_one_character_flips_whole_message() {
        let text = "a".repeat(300);
        assert_eq!(select_encoding(&text), Encoding::Gsm7);
        assert_eq!(select_encoding(&format!("{}ç", text)), Encoding::Ucs2);
    }

    #[test]
    fn test_encode_auto_is_message_wide() {
        let encoded = encode("ab😀", EncodingMode::Auto);
        assert_eq!(
            encoded,
            vec![
                EncodedBytes::Bytes(vec![0x00, 0x61]),
                EncodedBytes::Bytes(vec![0x00, 0x62]),
                EncodedBytes::Bytes(vec![0xD8, 0x3D, 0xDE, 0x00]),
            ]
        );
    }

    #[test]
    fn test_encode_forced_gsm7_keeps_sentinel() {
        let encoded = encode("a😀b", EncodingMode::Gsm7);
        assert_eq!(
            encoded,
            vec![
                EncodedBytes::Bytes(vec![0x61]),
                EncodedBytes::NotEncodable,
                EncodedBytes::Bytes(vec![0x62]),
            ]
        );
    }

    #[test]
    fn test_limits() {
        assert_eq!(Encoding::Gsm7.limits(), SegmentLimits::new(160, 153));
        assert_eq!(Encoding::Ucs2.limits(), SegmentLimits::new(140, 134));
    }
}
