//! Stem (天干) - The ten heavenly stems

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Heavenly stem, in canonical order 甲..癸
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// Zero-based position in the stem cycle
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stem at a cyclic position (wraps modulo 10)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 10]
    }

    pub fn as_char(self) -> char {
        match self {
            Stem::Jia => '甲',
            Stem::Yi => '乙',
            Stem::Bing => '丙',
            Stem::Ding => '丁',
            Stem::Wu => '戊',
            Stem::Ji => '己',
            Stem::Geng => '庚',
            Stem::Xin => '辛',
            Stem::Ren => '壬',
            Stem::Gui => '癸',
        }
    }

    pub fn from_char(c: char) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_char() == c)
            .ok_or_else(|| DomainError::InvalidStem(c.to_string()))
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Stem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(DomainError::InvalidStem(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, stem) in Stem::ALL.into_iter().enumerate() {
            assert_eq!(stem.index(), i);
            assert_eq!(Stem::from_index(i), stem);
        }
        assert_eq!(Stem::from_index(12), Stem::Bing);
    }

    #[test]
    fn test_parse() {
        assert_eq!("庚".parse::<Stem>(), Ok(Stem::Geng));
        assert!(matches!("子".parse::<Stem>(), Err(DomainError::InvalidStem(_))));
        assert!("甲乙".parse::<Stem>().is_err());
    }
}
