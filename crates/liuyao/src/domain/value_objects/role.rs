//! LineRole (世应) - Ruler / responder markers

use serde::{Deserialize, Serialize};

/// Ruler (世) or responder (应) marker on a line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    Ruler,
    Responder,
    #[default]
    None,
}

impl LineRole {
    pub fn label(self) -> &'static str {
        match self {
            LineRole::Ruler => "世",
            LineRole::Responder => "应",
            LineRole::None => "",
        }
    }

    /// Split a trailing ` 世` / ` 应` marker off a raw line label
    pub fn split_suffix(text: &str) -> (&str, LineRole) {
        let trimmed = text.trim_end();
        for role in [LineRole::Ruler, LineRole::Responder] {
            if let Some(rest) = trimmed.strip_suffix(role.label()) {
                if rest.ends_with(char::is_whitespace) {
                    return (rest.trim(), role);
                }
            }
        }
        (trimmed.trim(), LineRole::None)
    }
}

impl std::fmt::Display for LineRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineRole::Ruler => write!(f, "ruler"),
            LineRole::Responder => write!(f, "responder"),
            LineRole::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_suffix() {
        assert_eq!(
            LineRole::split_suffix("父母戌土 世"),
            ("父母戌土", LineRole::Ruler)
        );
        assert_eq!(
            LineRole::split_suffix("官鬼卯木 应"),
            ("官鬼卯木", LineRole::Responder)
        );
        assert_eq!(LineRole::split_suffix("兄弟申金"), ("兄弟申金", LineRole::None));
        // A marker glued to the label is not a suffix
        assert_eq!(LineRole::split_suffix("兄弟世"), ("兄弟世", LineRole::None));
    }
}
