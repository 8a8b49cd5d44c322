//! Divination Application Service (Use Case)
//!
//! Casts a hexagram from a moment, from six hand-cast lines or from four
//! trigram names, and assembles the resolved original/changed pair.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CalendarReading, DivinationResult, QueryTime};
use crate::domain::errors::DomainError;
use crate::domain::services::{
    apply_moving_lines, base_binary, branch_number, derive_indices, moving_lines_from_diff,
    resolve, trigram_bits,
};
use crate::domain::value_objects::{
    DivinationMode, HexagramBinary, LineSpec, MovingLineSet, Trigram, LINE_COUNT,
};
use crate::ports::CalendarConverter;

/// Base and changed trigram names for name-based casting
///
/// Each name is the Chinese character (乾) or its romanisation (qian).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrigramNames {
    pub upper_original: Option<String>,
    pub lower_original: Option<String>,
    pub upper_changed: Option<String>,
    pub lower_changed: Option<String>,
}

impl TrigramNames {
    pub fn new(
        upper_original: impl Into<String>,
        lower_original: impl Into<String>,
        upper_changed: impl Into<String>,
        lower_changed: impl Into<String>,
    ) -> Self {
        Self {
            upper_original: Some(upper_original.into()),
            lower_original: Some(lower_original.into()),
            upper_changed: Some(upper_changed.into()),
            lower_changed: Some(lower_changed.into()),
        }
    }
}

/// One divination request; `at` defaults to the converter's current time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivinationRequest {
    Time {
        at: Option<NaiveDateTime>,
    },
    /// Lines ordered bottom (position 1) to top
    Manual {
        lines: Option<Vec<LineSpec>>,
        at: Option<NaiveDateTime>,
    },
    Name {
        names: TrigramNames,
        at: Option<NaiveDateTime>,
    },
}

impl DivinationRequest {
    pub fn mode(&self) -> DivinationMode {
        match self {
            DivinationRequest::Time { .. } => DivinationMode::Time,
            DivinationRequest::Manual { .. } => DivinationMode::Manual,
            DivinationRequest::Name { .. } => DivinationMode::Name,
        }
    }
}

/// Parse textual line specs, bottom line first
pub fn parse_line_specs<S: AsRef<str>>(specs: &[S]) -> Result<Vec<LineSpec>, DomainError> {
    specs.iter().map(|spec| spec.as_ref().parse()).collect()
}

/// Application service for divinations
pub struct DivinationService<C: CalendarConverter> {
    calendar: Arc<C>,
}

impl<C: CalendarConverter> DivinationService<C> {
    pub fn new(calendar: Arc<C>) -> Self {
        Self { calendar }
    }

    /// Run a request in whichever mode it selects
    pub fn divine(&self, request: DivinationRequest) -> Result<DivinationResult, DomainError> {
        match request {
            DivinationRequest::Time { at } => self.time(at),
            DivinationRequest::Manual { lines, at } => {
                let lines = lines.ok_or_else(|| DomainError::missing("manual lines"))?;
                self.manual(&lines, at)
            }
            DivinationRequest::Name { names, at } => self.name(&names, at),
        }
    }

    /// Cast from the lunar date and pillars of a moment
    pub fn time(&self, at: Option<NaiveDateTime>) -> Result<DivinationResult, DomainError> {
        let (civil, reading) = self.read_calendar(at)?;
        let pillars = reading.pillars;

        let indices = derive_indices(
            i64::from(branch_number(pillars.year.branch, false)),
            i64::from(reading.lunar.month),
            i64::from(reading.lunar.day),
            i64::from(branch_number(pillars.hour.branch, false)),
        );
        tracing::debug!(
            "🧮 Derived indices: upper={} lower={} moving={}",
            indices.upper,
            indices.lower,
            indices.moving_line
        );

        let original = base_binary(indices.upper, indices.lower)?;
        let moving_lines = MovingLineSet::single(indices.moving_line)?;
        let changed = apply_moving_lines(&original, &moving_lines);

        Ok(self.assemble(DivinationMode::Time, civil, reading, original, changed, moving_lines))
    }

    /// Cast from six hand-cast lines, bottom line first
    pub fn manual(
        &self,
        lines: &[LineSpec],
        at: Option<NaiveDateTime>,
    ) -> Result<DivinationResult, DomainError> {
        if lines.len() != LINE_COUNT {
            return Err(DomainError::missing(format!(
                "exactly {} manual lines (got {})",
                LINE_COUNT,
                lines.len()
            )));
        }

        let bottom_up: String = lines.iter().map(|line| line.kind.bit()).collect();
        let original = HexagramBinary::parse(&bottom_up.chars().rev().collect::<String>())?;

        let mut moving_lines = MovingLineSet::new();
        for (position, line) in (1u8..).zip(lines) {
            if line.moving {
                moving_lines.insert(position)?;
            }
        }
        let changed = apply_moving_lines(&original, &moving_lines);

        let (civil, reading) = self.read_calendar(at)?;
        Ok(self.assemble(DivinationMode::Manual, civil, reading, original, changed, moving_lines))
    }

    /// Cast from explicit base and changed trigram names
    pub fn name(
        &self,
        names: &TrigramNames,
        at: Option<NaiveDateTime>,
    ) -> Result<DivinationResult, DomainError> {
        let required = [
            ("upper_original", &names.upper_original),
            ("lower_original", &names.lower_original),
            ("upper_changed", &names.upper_changed),
            ("lower_changed", &names.lower_changed),
        ];
        let mut bits = Vec::with_capacity(required.len());
        for (field, value) in required {
            let value = value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| DomainError::missing(field))?;
            bits.push(name_bits(value));
        }

        let original = HexagramBinary::parse(&format!("{}{}", bits[0], bits[1]))?;
        let changed = HexagramBinary::parse(&format!("{}{}", bits[2], bits[3]))?;
        let moving_lines = moving_lines_from_diff(&original, &changed);

        let (civil, reading) = self.read_calendar(at)?;
        Ok(self.assemble(DivinationMode::Name, civil, reading, original, changed, moving_lines))
    }

    fn read_calendar(
        &self,
        at: Option<NaiveDateTime>,
    ) -> Result<(NaiveDateTime, CalendarReading), DomainError> {
        let civil = at.unwrap_or_else(|| self.calendar.current_time());
        let reading = self.calendar.convert(civil)?;
        Ok((civil, reading))
    }

    fn assemble(
        &self,
        mode: DivinationMode,
        civil: NaiveDateTime,
        reading: CalendarReading,
        original: HexagramBinary,
        changed: HexagramBinary,
        moving_lines: MovingLineSet,
    ) -> DivinationResult {
        let day_stem = Some(reading.pillars.day_stem());
        let original = resolve(&original, day_stem);
        let changed = resolve(&changed, day_stem);

        tracing::info!(
            "🔮 {} divination: {} → {} (moving {:?})",
            mode,
            original.name,
            changed.name,
            moving_lines.to_vec()
        );

        DivinationResult {
            mode,
            query_time: QueryTime::new(civil, reading),
            original,
            changed,
            moving_lines,
        }
    }
}

/// Bits of a named trigram; unknown names read as 乾 ("000")
fn name_bits(name: &str) -> String {
    match name.parse::<Trigram>() {
        Ok(trigram) => trigram_bits(trigram),
        Err(_) => {
            tracing::warn!("⚠️ Unknown trigram name '{}', using 000", name);
            trigram_bits(Trigram::Qian)
        }
    }
}
