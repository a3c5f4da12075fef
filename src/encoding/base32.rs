//! Base32 alphabet mapping
//!
//! Forward and reverse lookups between 5-bit values and the lowercase
//! alphabet. Callers fold uppercase input to lowercase before lookup.

use crate::constants::CHARSET;
use thiserror::Error;

/// Character outside the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid base32 character {0:?}")]
pub struct InvalidCharacter(pub char);

/// Reverse table: ASCII code -> 5-bit value, -1 where not in the alphabet
static CHARSET_REV: [i8; 128] = build_reverse_table();

const fn build_reverse_table() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        table[CHARSET[i] as usize] = i as i8;
        i += 1;
    }
    table
}

/// Alphabet character for a 5-bit value. Only the low 5 bits are used.
pub fn to_char(value: u8) -> char {
    CHARSET[usize::from(value & 0x1f)] as char
}

/// 5-bit value of a lowercase alphabet character
pub fn from_char(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    let value = CHARSET_REV[c as usize];
    (value >= 0).then_some(value as u8)
}

/// Map 5-bit groups to alphabet text.
pub fn encode_groups(groups: &[u8]) -> String {
    groups.iter().map(|&g| to_char(g)).collect()
}

/// Map lowercase alphabet text back to 5-bit groups.
pub fn decode_groups(text: &str) -> Result<Vec<u8>, InvalidCharacter> {
    text.chars()
        .map(|c| from_char(c).ok_or(InvalidCharacter(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_table_matches_charset() {
        for (value, &c) in CHARSET.iter().enumerate() {
            assert_eq!(from_char(c as char), Some(value as u8));
            assert_eq!(to_char(value as u8), c as char);
        }
    }

    #[test]
    fn test_excluded_characters() {
        // 1, b, i and o are left out of the alphabet
        for c in ['1', 'b', 'i', 'o', ':', 'Q', ' '] {
            assert_eq!(from_char(c), None, "{:?} should be rejected", c);
        }
        assert_eq!(from_char('é'), None);
    }

    #[test]
    fn test_encode_decode_groups() {
        let text = encode_groups(&[0, 1, 2, 31]);
        assert_eq!(text, "qpzl");
        assert_eq!(decode_groups(&text).unwrap(), vec![0, 1, 2, 31]);
    }

    #[test]
    fn test_decode_reports_first_bad_character() {
        assert_eq!(decode_groups("qpbio"), Err(InvalidCharacter('b')));
    }
}
