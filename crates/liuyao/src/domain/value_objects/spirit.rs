//! GuardianSpirit (六神) - Six cyclic attendants assigned from the day stem

use serde::{Deserialize, Serialize};

/// Guardian spirit, in cycle order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GuardianSpirit {
    #[serde(rename = "青龙")]
    AzureDragon,
    #[serde(rename = "朱雀")]
    VermilionBird,
    #[serde(rename = "勾陈")]
    Hook,
    #[serde(rename = "螣蛇")]
    FlyingSerpent,
    #[serde(rename = "白虎")]
    WhiteTiger,
    #[serde(rename = "玄武")]
    BlackTortoise,
}

impl GuardianSpirit {
    pub const CYCLE: [GuardianSpirit; 6] = [
        GuardianSpirit::AzureDragon,
        GuardianSpirit::VermilionBird,
        GuardianSpirit::Hook,
        GuardianSpirit::FlyingSerpent,
        GuardianSpirit::WhiteTiger,
        GuardianSpirit::BlackTortoise,
    ];

    /// Spirit at a cyclic position (wraps modulo 6)
    pub fn at(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            GuardianSpirit::AzureDragon => "青龙",
            GuardianSpirit::VermilionBird => "朱雀",
            GuardianSpirit::Hook => "勾陈",
            GuardianSpirit::FlyingSerpent => "螣蛇",
            GuardianSpirit::WhiteTiger => "白虎",
            GuardianSpirit::BlackTortoise => "玄武",
        }
    }
}

impl std::fmt::Display for GuardianSpirit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
