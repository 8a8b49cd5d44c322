//! HexagramBinary - Six-character line encoding
//!
//! Index 0 is the top line, index 5 the bottom line. Line positions used by
//! people count the other way (1 = bottom, 6 = top), so position `p` lives at
//! index `6 - p`. In this encoding `'0'` is a solid (yang) line and `'1'` a
//! broken (yin) line.

use serde::{Deserialize, Serialize};

use super::line::LineKind;
use crate::domain::errors::DomainError;

pub const LINE_COUNT: usize = 6;

/// Validated six-line binary string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexagramBinary(String);

impl HexagramBinary {
    pub fn parse(bits: &str) -> Result<Self, DomainError> {
        if bits.len() != LINE_COUNT || !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(DomainError::InvalidBinary(bits.to_string()));
        }
        Ok(Self(bits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper trigram bits (first three characters)
    pub fn upper(&self) -> &str {
        &self.0[..3]
    }

    /// Lower trigram bits (last three characters)
    pub fn lower(&self) -> &str {
        &self.0[3..]
    }

    /// String index of a 1-based line position
    pub fn index_of(position: u8) -> Result<usize, DomainError> {
        match position {
            1..=6 => Ok(LINE_COUNT - usize::from(position)),
            _ => Err(DomainError::InvalidLinePosition(position)),
        }
    }

    /// Character stored at a 1-based line position
    pub fn bit_at(&self, position: u8) -> Result<char, DomainError> {
        let index = Self::index_of(position)?;
        Ok(char::from(self.0.as_bytes()[index]))
    }

    pub fn line_at(&self, position: u8) -> Result<LineKind, DomainError> {
        LineKind::from_bit(self.bit_at(position)?)
    }

    /// Copy with the character at `index` complemented
    pub fn flipped_at(&self, index: usize) -> Self {
        let bits = self
            .0
            .char_indices()
            .map(|(i, c)| match (i == index, c) {
                (true, '0') => '1',
                (true, _) => '0',
                (false, c) => c,
            })
            .collect();
        Self(bits)
    }
}

impl std::fmt::Display for HexagramBinary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for HexagramBinary {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexagramBinary {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexagramBinary> for String {
    fn from(value: HexagramBinary) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(HexagramBinary::parse("000111").is_ok());
        assert!(HexagramBinary::parse("00011").is_err());
        assert!(HexagramBinary::parse("0001110").is_err());
        assert!(HexagramBinary::parse("00a111").is_err());
    }

    #[test]
    fn test_position_indexing() {
        let binary = HexagramBinary::parse("100000").unwrap();
        assert_eq!(binary.bit_at(6), Ok('1'));
        assert_eq!(binary.bit_at(1), Ok('0'));
        assert_eq!(binary.line_at(6), Ok(LineKind::Broken));
        assert_eq!(
            binary.bit_at(7),
            Err(DomainError::InvalidLinePosition(7))
        );
        assert_eq!(HexagramBinary::index_of(2), Ok(4));
    }

    #[test]
    fn test_halves_and_flip() {
        let binary = HexagramBinary::parse("011101").unwrap();
        assert_eq!(binary.upper(), "011");
        assert_eq!(binary.lower(), "101");
        assert_eq!(binary.flipped_at(0).as_str(), "111101");
        assert_eq!(binary.flipped_at(5).as_str(), "011100");
    }

    #[test]
    fn test_serde_as_string() {
        let binary = HexagramBinary::parse("010101").unwrap();
        let json = serde_json::to_string(&binary).unwrap();
        assert_eq!(json, "\"010101\"");
        let back: HexagramBinary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, binary);
        assert!(serde_json::from_str::<HexagramBinary>("\"0101\"").is_err());
    }
}
