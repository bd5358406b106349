//! GSM 03.38 default alphabet.
//!
//! Maps Unicode codepoints to the 7-bit septet values of the GSM default
//! alphabet. Characters from the extension table are sent as the escape
//! septet `0x1B` followed by their extension code. Codepoints with no entry
//! cannot be sent in a GSM 7-bit message.

use serde::Serialize;

/// Escape septet introducing an extension-table character.
pub const ESCAPE: u8 = 0x1B;

/// Wire representation of one character in the GSM default alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Septet {
    /// Single septet from the basic table.
    Basic(u8),
    /// Extension-table character, sent as `[ESCAPE, code]`.
    Extended(u8),
}

impl Septet {
    /// Number of bytes this character occupies on the wire.
    pub fn byte_len(&self) -> usize {
        match self {
            Septet::Basic(_) => 1,
            Septet::Extended(_) => 2,
        }
    }

    pub fn to_bytes(self) -> Vec<u8> {
        match self {
            Septet::Basic(code) => vec![code],
            Septet::Extended(code) => vec![ESCAPE, code],
        }
    }
}

/// Looks up a codepoint in the GSM default alphabet.
///
/// Returns `None` for codepoints outside the basic and extension tables,
/// including lone surrogates.
pub fn lookup(codepoint: u32) -> Option<Septet> {
    use Septet::{Basic, Extended};

    let c = char::from_u32(codepoint)?;
    let septet = match c {
        // 0x00-0x0F
        '@' => Basic(0x00),
        '£' => Basic(0x01),
        '$' => Basic(0x02),
        '¥' => Basic(0x03),
        'è' => Basic(0x04),
        'é' => Basic(0x05),
        'ù' => Basic(0x06),
        'ì' => Basic(0x07),
        'ò' => Basic(0x08),
        'Ç' => Basic(0x09),
        '\n' => Basic(0x0A),
        'Ø' => Basic(0x0B),
        'ø' => Basic(0x0C),
        '\r' => Basic(0x0D),
        'Å' => Basic(0x0E),
        'å' => Basic(0x0F),

        // 0x10-0x1F, 0x1B is the escape
        'Δ' => Basic(0x10),
        '_' => Basic(0x11),
        'Φ' => Basic(0x12),
        'Γ' => Basic(0x13),
        'Λ' => Basic(0x14),
        'Ω' => Basic(0x15),
        'Π' => Basic(0x16),
        'Ψ' => Basic(0x17),
        'Σ' => Basic(0x18),
        'Θ' => Basic(0x19),
        'Ξ' => Basic(0x1A),
        'Æ' => Basic(0x1C),
        'æ' => Basic(0x1D),
        'ß' => Basic(0x1E),
        'É' => Basic(0x1F),

        // 0x20-0x3F mostly match ASCII
        ' ' | '!' | '"' | '#' => Basic(c as u8),
        '¤' => Basic(0x24),
        '%'..='?' => Basic(c as u8),

        // 0x40-0x5F
        '¡' => Basic(0x40),
        'A'..='Z' => Basic(c as u8),
        'Ä' => Basic(0x5B),
        'Ö' => Basic(0x5C),
        'Ñ' => Basic(0x5D),
        'Ü' => Basic(0x5E),
        '§' => Basic(0x5F),

        // 0x60-0x7F
        '¿' => Basic(0x60),
        'a'..='z' => Basic(c as u8),
        'ä' => Basic(0x7B),
        'ö' => Basic(0x7C),
        'ñ' => Basic(0x7D),
        'ü' => Basic(0x7E),
        'à' => Basic(0x7F),

        // Extension table
        '\u{000C}' => Extended(0x0A),
        '^' => Extended(0x14),
        '{' => Extended(0x28),
        '}' => Extended(0x29),
        '\\' => Extended(0x2F),
        '[' => Extended(0x3C),
        '~' => Extended(0x3D),
        ']' => Extended(0x3E),
        '|' => Extended(0x40),
        '€' => Extended(0x65),

        _ => return None,
    };

    Some(septet)
}

/// True if the codepoint can be sent in the GSM default alphabet.
pub fn contains(codepoint: u32) -> bool {
    lookup(codepoint).is_some()
}
