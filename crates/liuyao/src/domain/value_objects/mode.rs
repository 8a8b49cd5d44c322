//! DivinationMode - How the hexagram pair was obtained

use serde::{Deserialize, Serialize};

/// Entry mode of a divination
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DivinationMode {
    /// 时间起卦 - derived from the moment of asking
    Time,
    /// 手工指定 - six lines given by the caller
    Manual,
    /// 卦名起卦 - original and changed trigram names given by the caller
    Name,
}

impl DivinationMode {
    pub fn label(self) -> &'static str {
        match self {
            DivinationMode::Time => "时间起卦",
            DivinationMode::Manual => "手工指定",
            DivinationMode::Name => "卦名起卦",
        }
    }
}

impl std::fmt::Display for DivinationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivinationMode::Time => write!(f, "time"),
            DivinationMode::Manual => write!(f, "manual"),
            DivinationMode::Name => write!(f, "name"),
        }
    }
}

impl std::str::FromStr for DivinationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "time" => Ok(DivinationMode::Time),
            "manual" => Ok(DivinationMode::Manual),
            "name" => Ok(DivinationMode::Name),
            _ => Err(format!("Unknown divination mode: {}", s)),
        }
    }
}
