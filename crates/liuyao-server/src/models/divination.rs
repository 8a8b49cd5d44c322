//! Divination request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use liuyao::{DivinationMode, DivinationResult, Hexagram, LineDetail, QueryTime};

/// Divination mode selector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DivinationType {
    #[default]
    Time,
    Manual,
    Name,
}

impl From<DivinationMode> for DivinationType {
    fn from(value: DivinationMode) -> Self {
        match value {
            DivinationMode::Time => DivinationType::Time,
            DivinationMode::Manual => DivinationType::Manual,
            DivinationMode::Name => DivinationType::Name,
        }
    }
}

// ============================================
// Request DTOs
// ============================================

/// Time-based divination request (legacy endpoint)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TimeDivinationRequest {
    /// RFC 3339 or naive ISO 8601 date-time (UTC+8); defaults to now
    #[schema(example = "2025-06-18T10:30:00")]
    pub target_time: Option<String>,
}

/// Divination request for any mode
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EnhancedDivinationRequest {
    #[serde(default)]
    pub divination_type: DivinationType,
    /// RFC 3339 or naive ISO 8601 date-time (UTC+8); defaults to now
    pub target_time: Option<String>,
    /// Six line specs, bottom line first (manual mode)
    #[schema(example = json!(["solid", "broken moving", "solid", "broken", "solid moving", "broken"]))]
    pub manual_yaos: Option<Vec<String>>,
    /// Trigram names (name mode)
    pub upper_original: Option<String>,
    pub lower_original: Option<String>,
    pub upper_changed: Option<String>,
    pub lower_changed: Option<String>,
}

// ============================================
// Response DTOs
// ============================================

/// Four pillars as stem-branch strings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PillarsResponse {
    #[schema(example = "甲辰")]
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
}

/// Lunar date; `month` is negative for a leap month
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LunarResponse {
    pub year: i32,
    pub month: i8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub is_leap_month: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QueryTimeResponse {
    #[schema(example = "2024-02-10 12:00:00")]
    pub civil: String,
    pub lunar: LunarResponse,
    #[schema(example = "2024年1月1日 12时")]
    pub lunar_label: String,
    pub pillars: PillarsResponse,
}

impl From<&QueryTime> for QueryTimeResponse {
    fn from(time: &QueryTime) -> Self {
        Self {
            civil: time.civil_label(),
            lunar: LunarResponse {
                year: time.lunar.year,
                month: time.lunar.month,
                day: time.lunar.day,
                hour: time.lunar.hour,
                minute: time.lunar.minute,
                is_leap_month: time.lunar.is_leap_month(),
            },
            lunar_label: time.lunar_label.clone(),
            pillars: PillarsResponse {
                year: time.pillars.year.to_string(),
                month: time.pillars.month.to_string(),
                day: time.pillars.day.to_string(),
                hour: time.pillars.hour.to_string(),
            },
        }
    }
}

/// One annotated line
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LineResponse {
    pub position: u8,
    pub binary: String,
    /// `solid` or `broken`
    pub line_type: String,
    /// 父母 / 兄弟 / 子孙 / 妻财 / 官鬼
    pub kinship: Option<String>,
    /// Stem-branch element label, e.g. `戌土`
    pub label: Option<String>,
    /// 青龙 / 朱雀 / 勾陈 / 螣蛇 / 白虎 / 玄武
    pub spirit: String,
    /// `ruler`, `responder` or `none`
    pub role: String,
}

impl From<&LineDetail> for LineResponse {
    fn from(line: &LineDetail) -> Self {
        Self {
            position: line.position,
            binary: line.binary.to_string(),
            line_type: line.line_type.to_string(),
            kinship: line.kinship.map(|k| k.to_string()),
            label: line.label.clone(),
            spirit: line.spirit.to_string(),
            role: line.role.to_string(),
        }
    }
}

/// Resolved hexagram
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HexagramResponse {
    #[schema(example = "011101")]
    pub binary: String,
    #[schema(example = "山水蒙")]
    pub name: String,
    /// False when the name is a placeholder
    pub name_resolved: bool,
    pub upper_trigram: Option<String>,
    pub lower_trigram: Option<String>,
    #[schema(example = "离宫")]
    pub house: String,
    /// Lines bottom (position 1) to top
    pub lines: Vec<LineResponse>,
}

impl From<&Hexagram> for HexagramResponse {
    fn from(hexagram: &Hexagram) -> Self {
        Self {
            binary: hexagram.binary.to_string(),
            name: hexagram.name.to_string(),
            name_resolved: hexagram.name.is_resolved(),
            upper_trigram: hexagram.upper.map(|t| t.to_string()),
            lower_trigram: hexagram.lower.map(|t| t.to_string()),
            house: hexagram.house_label(),
            lines: hexagram.lines.iter().map(LineResponse::from).collect(),
        }
    }
}

/// Full divination result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DivinationResponse {
    pub divination_type: DivinationType,
    pub query_time: QueryTimeResponse,
    pub original: HexagramResponse,
    pub changed: HexagramResponse,
    /// Changing line positions, ascending
    pub moving_lines: Vec<u8>,
}

impl From<&DivinationResult> for DivinationResponse {
    fn from(result: &DivinationResult) -> Self {
        Self {
            divination_type: result.mode.into(),
            query_time: QueryTimeResponse::from(&result.query_time),
            original: HexagramResponse::from(&result.original),
            changed: HexagramResponse::from(&result.changed),
            moving_lines: result.moving_lines.to_vec(),
        }
    }
}

/// Original/changed summary of the legacy endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HexagramSummary {
    pub original: String,
    pub original_binary: String,
    pub changed: String,
    pub changed_binary: String,
    pub moving_line: u8,
    pub house: String,
}

/// Legacy time-based response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LegacyDivinationResponse {
    pub query_time: QueryTimeResponse,
    pub hexagram: HexagramSummary,
}

impl From<&DivinationResult> for LegacyDivinationResponse {
    fn from(result: &DivinationResult) -> Self {
        Self {
            query_time: QueryTimeResponse::from(&result.query_time),
            hexagram: HexagramSummary {
                original: result.original.name.to_string(),
                original_binary: result.original.binary.to_string(),
                changed: result.changed.name.to_string(),
                changed_binary: result.changed.binary.to_string(),
                moving_line: result.moving_lines.iter().next().unwrap_or_default(),
                house: result.original.house_label(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divination_type_serde() {
        let request: EnhancedDivinationRequest =
            serde_json::from_str(r#"{"divination_type": "manual"}"#).unwrap();
        assert_eq!(request.divination_type, DivinationType::Manual);

        let default: EnhancedDivinationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(default.divination_type, DivinationType::Time);
        assert_eq!(DivinationType::from(DivinationMode::Name), DivinationType::Name);
    }
}
