//! Kinship (六亲) - Relational role of a line toward its house element

use serde::{Deserialize, Serialize};

/// The five kinship roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Kinship {
    /// 父母 - parents / elders
    #[serde(rename = "父母")]
    Parents,
    /// 兄弟 - siblings / peers
    #[serde(rename = "兄弟")]
    Siblings,
    /// 子孙 - offspring
    #[serde(rename = "子孙")]
    Offspring,
    /// 妻财 - wealth / spouse
    #[serde(rename = "妻财")]
    Wealth,
    /// 官鬼 - officials / demons
    #[serde(rename = "官鬼")]
    Officials,
}

impl Kinship {
    /// Prefix matching order used when parsing line labels
    pub const ALL: [Kinship; 5] = [
        Kinship::Parents,
        Kinship::Siblings,
        Kinship::Offspring,
        Kinship::Wealth,
        Kinship::Officials,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Kinship::Parents => "父母",
            Kinship::Siblings => "兄弟",
            Kinship::Offspring => "子孙",
            Kinship::Wealth => "妻财",
            Kinship::Officials => "官鬼",
        }
    }

    /// Split a kinship prefix off a label such as `父母戌土`
    pub fn strip_prefix(text: &str) -> Option<(Kinship, &str)> {
        Self::ALL.into_iter().find_map(|kinship| {
            text.strip_prefix(kinship.label())
                .map(|rest| (kinship, rest.trim()))
        })
    }
}

impl std::fmt::Display for Kinship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix() {
        assert_eq!(
            Kinship::strip_prefix("妻财寅木"),
            Some((Kinship::Wealth, "寅木"))
        );
        assert_eq!(Kinship::strip_prefix("戌土"), None);
    }
}
