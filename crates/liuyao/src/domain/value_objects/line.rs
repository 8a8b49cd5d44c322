//! Line kinds, manual line specifications and moving-line sets

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Solid (yang) or broken (yin) line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Solid,
    Broken,
}

impl LineKind {
    /// Character used in a hexagram binary
    pub fn bit(self) -> char {
        match self {
            LineKind::Solid => '0',
            LineKind::Broken => '1',
        }
    }

    pub fn from_bit(bit: char) -> Result<Self, DomainError> {
        match bit {
            '0' => Ok(LineKind::Solid),
            '1' => Ok(LineKind::Broken),
            other => Err(DomainError::InvalidBinary(other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LineKind::Solid => "阳爻",
            LineKind::Broken => "阴爻",
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Solid => write!(f, "solid"),
            LineKind::Broken => write!(f, "broken"),
        }
    }
}

/// One manually cast line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineSpec {
    pub kind: LineKind,
    #[serde(default)]
    pub moving: bool,
}

impl LineSpec {
    pub fn new(kind: LineKind, moving: bool) -> Self {
        Self { kind, moving }
    }

    pub fn solid() -> Self {
        Self::new(LineKind::Solid, false)
    }

    pub fn broken() -> Self {
        Self::new(LineKind::Broken, false)
    }

    pub fn moving(mut self) -> Self {
        self.moving = true;
        self
    }
}

impl std::fmt::Display for LineSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.moving {
            write!(f, "{} moving", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl std::str::FromStr for LineSpec {
    type Err = DomainError;

    /// Accepted forms:
    /// - `solid`, `broken`, `yang`, `yin`, optionally followed by `moving`
    ///   (separated by space, `-` or `_`)
    /// - `阳爻` / `阴爻`, with `动` marking a moving line
    /// - `老阳` / `老阴` (moving) and `少阳` / `少阴` (still)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || DomainError::InvalidLineSpec(s.to_string());

        match text {
            "老阳" => return Ok(Self::solid().moving()),
            "老阴" => return Ok(Self::broken().moving()),
            "少阳" => return Ok(Self::solid()),
            "少阴" => return Ok(Self::broken()),
            _ => {}
        }

        if text.contains('阳') || text.contains('阴') {
            let kind = if text.contains('阳') {
                LineKind::Solid
            } else {
                LineKind::Broken
            };
            return Ok(Self::new(kind, text.contains('动')));
        }

        let lowered = text.to_lowercase();
        let mut words = lowered
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|w| !w.is_empty());

        let kind = match words.next() {
            Some("solid") | Some("yang") => LineKind::Solid,
            Some("broken") | Some("yin") => LineKind::Broken,
            _ => return Err(invalid()),
        };
        let moving = match (words.next(), words.next()) {
            (None, _) => false,
            (Some("moving"), None) => true,
            _ => return Err(invalid()),
        };

        Ok(Self::new(kind, moving))
    }
}

/// Set of 1-based line positions that change between the original and the
/// changed hexagram
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct MovingLineSet(BTreeSet<u8>);

impl MovingLineSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(position: u8) -> Result<Self, DomainError> {
        Self::from_positions([position])
    }

    pub fn from_positions<I: IntoIterator<Item = u8>>(positions: I) -> Result<Self, DomainError> {
        let mut set = Self::new();
        for position in positions {
            set.insert(position)?;
        }
        Ok(set)
    }

    /// Build from positions already known to lie in 1..=6
    pub(crate) fn from_valid_positions<I: IntoIterator<Item = u8>>(positions: I) -> Self {
        Self(positions.into_iter().collect())
    }

    pub fn insert(&mut self, position: u8) -> Result<(), DomainError> {
        if !(1..=6).contains(&position) {
            return Err(DomainError::InvalidLinePosition(position));
        }
        self.0.insert(position);
        Ok(())
    }

    pub fn contains(&self, position: u8) -> bool {
        self.0.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Positions in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl TryFrom<Vec<u8>> for MovingLineSet {
    type Error = DomainError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_positions(value)
    }
}

impl From<MovingLineSet> for Vec<u8> {
    fn from(value: MovingLineSet) -> Self {
        value.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_english_specs() {
        assert_eq!("solid".parse::<LineSpec>(), Ok(LineSpec::solid()));
        assert_eq!(
            "broken-moving".parse::<LineSpec>(),
            Ok(LineSpec::broken().moving())
        );
        assert_eq!(
            " Yang moving ".parse::<LineSpec>(),
            Ok(LineSpec::solid().moving())
        );
        assert!("solid still".parse::<LineSpec>().is_err());
        assert!("dashed".parse::<LineSpec>().is_err());
        assert!("".parse::<LineSpec>().is_err());
    }

    #[test]
    fn test_parse_chinese_specs() {
        assert_eq!("阳爻".parse::<LineSpec>(), Ok(LineSpec::solid()));
        assert_eq!("阴爻动".parse::<LineSpec>(), Ok(LineSpec::broken().moving()));
        assert_eq!("老阳".parse::<LineSpec>(), Ok(LineSpec::solid().moving()));
        assert_eq!("少阴".parse::<LineSpec>(), Ok(LineSpec::broken()));
    }

    #[test]
    fn test_moving_set_validation() {
        let set = MovingLineSet::from_positions([5, 2, 5]).unwrap();
        assert_eq!(set.to_vec(), vec![2, 5]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(5));
        assert_eq!(
            MovingLineSet::single(0),
            Err(DomainError::InvalidLinePosition(0))
        );
        assert_eq!(
            MovingLineSet::from_positions([1, 7]),
            Err(DomainError::InvalidLinePosition(7))
        );
    }

    #[test]
    fn test_moving_set_serializes_as_array() {
        let set = MovingLineSet::from_positions([6, 1]).unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,6]");
        let back: MovingLineSet = serde_json::from_str("[6,1,6]").unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_moving_set_rejects_out_of_range_json() {
        assert!(serde_json::from_str::<MovingLineSet>("[0, 9]").is_err());
        assert!(serde_json::from_str::<MovingLineSet>("[7]").is_err());
        assert!(serde_json::from_str::<MovingLineSet>("[2, 0]").is_err());
    }
}
