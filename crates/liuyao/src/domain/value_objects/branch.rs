//! Branch (地支) - The twelve earthly branches

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Earthly branch, in canonical order 子..亥
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// Zero-based position in the branch cycle
    pub fn index(self) -> usize {
        self as usize
    }

    /// Branch at a cyclic position (wraps modulo 12)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    pub fn as_char(self) -> char {
        match self {
            Branch::Zi => '子',
            Branch::Chou => '丑',
            Branch::Yin => '寅',
            Branch::Mao => '卯',
            Branch::Chen => '辰',
            Branch::Si => '巳',
            Branch::Wu => '午',
            Branch::Wei => '未',
            Branch::Shen => '申',
            Branch::You => '酉',
            Branch::Xu => '戌',
            Branch::Hai => '亥',
        }
    }

    pub fn from_char(c: char) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_char() == c)
            .ok_or_else(|| DomainError::InvalidBranch(c.to_string()))
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Branch {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(DomainError::InvalidBranch(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, branch) in Branch::ALL.into_iter().enumerate() {
            assert_eq!(branch.index(), i);
            assert_eq!(Branch::from_index(i), branch);
        }
        assert_eq!(Branch::from_index(14), Branch::Yin);
    }

    #[test]
    fn test_parse() {
        assert_eq!("亥".parse::<Branch>(), Ok(Branch::Hai));
        assert!(matches!(
            "甲".parse::<Branch>(),
            Err(DomainError::InvalidBranch(_))
        ));
    }
}
