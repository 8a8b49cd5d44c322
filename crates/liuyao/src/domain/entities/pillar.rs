//! Pillar (柱) - Sexagenary stem/branch pairs describing a moment

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Branch, Stem};

/// One stem-branch pair, serialized as its two characters (e.g. `甲子`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at a position of the sixty-pair cycle (0 = 甲子)
    pub fn from_cycle_index(index: usize) -> Self {
        Self::new(Stem::from_index(index), Branch::from_index(index))
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl std::str::FromStr for Pillar {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(stem), Some(branch), None) => {
                Ok(Self::new(Stem::from_char(stem)?, Branch::from_char(branch)?))
            }
            _ => Err(DomainError::InvalidStem(s.to_string())),
        }
    }
}

impl TryFrom<String> for Pillar {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pillar> for String {
    fn from(value: Pillar) -> Self {
        value.to_string()
    }
}

/// Year, month, day and hour pillars of a moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Day stem, which phases the guardian-spirit cycle
    pub fn day_stem(&self) -> Stem {
        self.day.stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_index() {
        assert_eq!(Pillar::from_cycle_index(0).to_string(), "甲子");
        assert_eq!(Pillar::from_cycle_index(54).to_string(), "戊午");
        assert_eq!(Pillar::from_cycle_index(59).to_string(), "癸亥");
    }

    #[test]
    fn test_parse() {
        let pillar: Pillar = "庚申".parse().unwrap();
        assert_eq!(pillar, Pillar::new(Stem::Geng, Branch::Shen));
        assert!(matches!(
            "子甲".parse::<Pillar>(),
            Err(DomainError::InvalidStem(_))
        ));
        assert!(matches!(
            "甲甲".parse::<Pillar>(),
            Err(DomainError::InvalidBranch(_))
        ));
        assert!("甲".parse::<Pillar>().is_err());
    }
}
