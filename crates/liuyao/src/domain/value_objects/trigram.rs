//! Trigram (八卦) - The eight three-line figures

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Trigram, in the fixed order used for index and binary encoding:
/// 乾 兑 离 震 巽 坎 艮 坤 (sequence numbers 1..8)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Trigram {
    #[serde(rename = "乾")]
    Qian,
    #[serde(rename = "兑")]
    Dui,
    #[serde(rename = "离")]
    Li,
    #[serde(rename = "震")]
    Zhen,
    #[serde(rename = "巽")]
    Xun,
    #[serde(rename = "坎")]
    Kan,
    #[serde(rename = "艮")]
    Gen,
    #[serde(rename = "坤")]
    Kun,
}

impl Trigram {
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Dui,
        Trigram::Li,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Kan,
        Trigram::Gen,
        Trigram::Kun,
    ];

    /// Zero-based index (0..=7)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// One-based sequence number (1..=8) as produced by index derivation
    pub fn sequence(self) -> u8 {
        self.index() + 1
    }

    pub fn from_index(index: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(DomainError::InvalidTrigramIndex(index))
    }

    pub fn name(self) -> &'static str {
        match self {
            Trigram::Qian => "乾",
            Trigram::Dui => "兑",
            Trigram::Li => "离",
            Trigram::Zhen => "震",
            Trigram::Xun => "巽",
            Trigram::Kan => "坎",
            Trigram::Gen => "艮",
            Trigram::Kun => "坤",
        }
    }

    pub fn romanized(self) -> &'static str {
        match self {
            Trigram::Qian => "qian",
            Trigram::Dui => "dui",
            Trigram::Li => "li",
            Trigram::Zhen => "zhen",
            Trigram::Xun => "xun",
            Trigram::Kan => "kan",
            Trigram::Gen => "gen",
            Trigram::Kun => "kun",
        }
    }

    /// Natural image (天 泽 火 雷 风 水 山 地)
    pub fn nature(self) -> &'static str {
        match self {
            Trigram::Qian => "天",
            Trigram::Dui => "泽",
            Trigram::Li => "火",
            Trigram::Zhen => "雷",
            Trigram::Xun => "风",
            Trigram::Kan => "水",
            Trigram::Gen => "山",
            Trigram::Kun => "地",
        }
    }

    /// Palace label when the trigram heads one of the eight houses
    pub fn palace_name(self) -> String {
        format!("{}宫", self.name())
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Trigram {
    type Err = DomainError;

    /// Accepts the Chinese character or its romanisation (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name() == needle || t.romanized().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::UnknownTrigram(s.to_string()))
    }
}
