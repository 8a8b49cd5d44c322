//! Divination report shared by local and remote casting
//!
//! Mirrors the server's `/enhanced-divination` response so both paths
//! print the same way.

use colored::Colorize;
use serde::{Deserialize, Serialize};

use liuyao::{DivinationResult, Hexagram, LineDetail, QueryTime};

const LINE_NAMES: [&str; 6] = ["初爻", "二爻", "三爻", "四爻", "五爻", "上爻"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PillarsReport {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryTimeReport {
    pub civil: String,
    pub lunar_label: String,
    pub pillars: PillarsReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineReport {
    pub position: u8,
    pub binary: String,
    pub line_type: String,
    pub kinship: Option<String>,
    pub label: Option<String>,
    pub spirit: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexagramReport {
    pub binary: String,
    pub name: String,
    pub house: String,
    /// Bottom line first
    pub lines: Vec<LineReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivinationReport {
    pub divination_type: String,
    pub query_time: QueryTimeReport,
    pub original: HexagramReport,
    pub changed: HexagramReport,
    pub moving_lines: Vec<u8>,
}

impl From<&QueryTime> for QueryTimeReport {
    fn from(time: &QueryTime) -> Self {
        Self {
            civil: time.civil_label(),
            lunar_label: time.lunar_label.clone(),
            pillars: PillarsReport {
                year: time.pillars.year.to_string(),
                month: time.pillars.month.to_string(),
                day: time.pillars.day.to_string(),
                hour: time.pillars.hour.to_string(),
            },
        }
    }
}

impl From<&LineDetail> for LineReport {
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

impl From<&Hexagram> for HexagramReport {
    fn from(hexagram: &Hexagram) -> Self {
        Self {
            binary: hexagram.binary.to_string(),
            name: hexagram.name.to_string(),
            house: hexagram.house_label(),
            lines: hexagram.lines.iter().map(LineReport::from).collect(),
        }
    }
}

impl From<&DivinationResult> for DivinationReport {
    fn from(result: &DivinationResult) -> Self {
        Self {
            divination_type: result.mode.to_string(),
            query_time: QueryTimeReport::from(&result.query_time),
            original: HexagramReport::from(&result.original),
            changed: HexagramReport::from(&result.changed),
            moving_lines: result.moving_lines.to_vec(),
        }
    }
}

fn role_marker(role: &str) -> &'static str {
    match role {
        "ruler" => "世",
        "responder" => "应",
        _ => "  ",
    }
}

fn glyph(line_type: &str) -> &'static str {
    if line_type == "solid" {
        "━━━━━━"
    } else {
        "━━  ━━"
    }
}

fn moving_marker(line: &LineReport, moving: bool) -> &'static str {
    match (moving, line.line_type.as_str()) {
        (false, _) => " ",
        (true, "solid") => "○",
        (true, _) => "×",
    }
}

impl DivinationReport {
    fn is_moving(&self, position: u8) -> bool {
        self.moving_lines.contains(&position)
    }

    fn render_hexagram(&self, title: &str, hexagram: &HexagramReport, mark_moving: bool) -> String {
        let mut out = format!(
            "{} {} {}\n",
            title.dimmed(),
            hexagram.name.cyan().bold(),
            format!("({})", hexagram.house).dimmed()
        );

        // Printed top line first
        for line in hexagram.lines.iter().rev() {
            let moving = mark_moving && self.is_moving(line.position);
            let name = LINE_NAMES
                .get(usize::from(line.position).saturating_sub(1))
                .copied()
                .unwrap_or("??");
            let relation = match (&line.kinship, &line.label) {
                (Some(kinship), Some(label)) => format!("{}{}", kinship, label),
                (None, Some(label)) => label.clone(),
                _ => "-".to_string(),
            };
            let marker = moving_marker(line, moving);
            let body = format!("{} {}", glyph(&line.line_type), marker);

            out.push_str(&format!(
                "  {} {} {:<8} {} {}\n",
                name.dimmed(),
                line.spirit,
                relation,
                if moving { body.yellow().bold() } else { body.normal() },
                role_marker(&line.role).green()
            ));
        }
        out
    }

    /// Human-readable rendering with terminal colors
    pub fn render_text(&self) -> String {
        let time = &self.query_time;
        let mut out = format!(
            "{} {}  {}\n{} {} {} {} {}\n\n",
            "Time:".bold(),
            time.civil,
            time.lunar_label.dimmed(),
            "Pillars:".bold(),
            time.pillars.year,
            time.pillars.month,
            time.pillars.day,
            time.pillars.hour
        );

        out.push_str(&self.render_hexagram("本卦", &self.original, true));

        if self.moving_lines.is_empty() {
            out.push_str(&format!("\n{}\n", "No moving lines".dimmed()));
        } else {
            out.push('\n');
            out.push_str(&self.render_hexagram("变卦", &self.changed, false));
            let positions: Vec<String> = self.moving_lines.iter().map(|p| p.to_string()).collect();
            out.push_str(&format!(
                "\n{} {}\n",
                "Moving lines:".bold(),
                positions.join(", ").yellow()
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use liuyao::{ChineseCalendar, DivinationService, LineSpec};
    use std::sync::Arc;

    fn cast() -> DivinationReport {
        let service = DivinationService::new(Arc::new(ChineseCalendar::new()));
        let at = NaiveDate::from_ymd_opt(2024, 2, 10)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        let lines = [
            LineSpec::solid(),
            LineSpec::broken().moving(),
            LineSpec::solid(),
            LineSpec::broken(),
            LineSpec::solid().moving(),
            LineSpec::broken(),
        ];
        let result = service.manual(&lines, Some(at)).unwrap();
        DivinationReport::from(&result)
    }

    #[test]
    fn test_report_mirrors_result() {
        let report = cast();
        assert_eq!(report.divination_type, "manual");
        assert_eq!(report.original.binary, "101010");
        assert_eq!(report.changed.binary, "111000");
        assert_eq!(report.moving_lines, vec![2, 5]);
        assert_eq!(report.original.lines.len(), 6);
        assert_eq!(report.query_time.pillars.year, "甲辰");
    }

    #[test]
    fn test_render_text_lists_lines_top_down() {
        colored::control::set_override(false);
        let report = cast();
        let text = report.render_text();

        let top = text.find("上爻").unwrap();
        let bottom = text.find("初爻").unwrap();
        assert!(top < bottom);
        assert!(text.contains(&report.original.name));
        assert!(text.contains(&report.changed.name));
        assert!(text.contains("×"));
        assert!(text.contains("○"));
        assert!(text.contains("Moving lines: 2, 5"));
    }

    #[test]
    fn test_report_deserializes_server_payload() {
        let report = cast();
        let mut json = serde_json::to_value(&report).unwrap();
        // Extra server fields are ignored
        json["original"]["name_resolved"] = serde_json::json!(true);
        let back: DivinationReport = serde_json::from_value(json).unwrap();
        assert_eq!(back.original.name, report.original.name);
    }
}
