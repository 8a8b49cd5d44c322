//! Hexagram (卦) - A resolved six-line figure with per-line annotations

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    GuardianSpirit, HexagramBinary, Kinship, LineKind, LineRole, Trigram,
};

/// Canonical name lookup outcome
///
/// A binary whose trigram pair is missing from the name table still
/// resolves, but carries the lookup key instead of a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum HexagramName {
    Canonical(String),
    Placeholder(String),
}

impl HexagramName {
    pub fn is_resolved(&self) -> bool {
        matches!(self, HexagramName::Canonical(_))
    }

    /// Name with any trailing parenthetical (full-width or ASCII) removed
    pub fn base_name(&self) -> Option<&str> {
        match self {
            HexagramName::Canonical(name) => {
                let end = name
                    .find(|c: char| c == '（' || c == '(')
                    .unwrap_or(name.len());
                Some(name[..end].trim())
            }
            HexagramName::Placeholder(_) => None,
        }
    }
}

impl std::fmt::Display for HexagramName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexagramName::Canonical(name) => f.write_str(name),
            HexagramName::Placeholder(key) => write!(f, "未知卦 ({})", key),
        }
    }
}

/// Annotation of one line, position 1 (bottom) to 6 (top)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDetail {
    pub position: u8,
    /// Character of this line in the hexagram binary
    pub binary: char,
    pub line_type: LineKind,
    pub kinship: Option<Kinship>,
    /// Stem-branch / element label (纳甲), e.g. `戌土`
    pub label: Option<String>,
    pub spirit: GuardianSpirit,
    pub role: LineRole,
}

/// Fully resolved hexagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    pub binary: HexagramBinary,
    pub name: HexagramName,
    pub upper: Option<Trigram>,
    pub lower: Option<Trigram>,
    /// House (宫) the hexagram belongs to; `None` when the line table has no
    /// entry for it
    pub house: Option<Trigram>,
    /// Lines ordered bottom to top
    pub lines: Vec<LineDetail>,
}

impl Hexagram {
    pub fn house_label(&self) -> String {
        self.house
            .map(Trigram::palace_name)
            .unwrap_or_else(|| "未知宫".to_string())
    }

    pub fn line(&self, position: u8) -> Option<&LineDetail> {
        self.lines.iter().find(|line| line.position == position)
    }

    pub fn ruler(&self) -> Option<&LineDetail> {
        self.lines.iter().find(|line| line.role == LineRole::Ruler)
    }

    pub fn responder(&self) -> Option<&LineDetail> {
        self.lines.iter().find(|line| line.role == LineRole::Responder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_strips_parenthetical() {
        let name = HexagramName::Canonical("天风姤（姤）".to_string());
        assert_eq!(name.base_name(), Some("天风姤"));
        let ascii = HexagramName::Canonical("乾为天 (乾)".to_string());
        assert_eq!(ascii.base_name(), Some("乾为天"));
        let plain = HexagramName::Canonical("坤为地".to_string());
        assert_eq!(plain.base_name(), Some("坤为地"));
    }

    #[test]
    fn test_placeholder_display() {
        let name = HexagramName::Placeholder("未知乾".to_string());
        assert!(!name.is_resolved());
        assert_eq!(name.base_name(), None);
        assert_eq!(name.to_string(), "未知卦 (未知乾)");
    }
}
