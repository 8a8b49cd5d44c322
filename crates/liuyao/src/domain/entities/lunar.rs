//! Lunar calendar reading of a civil moment
//!
//! This is the output contract of the calendar converter port.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::pillar::FourPillars;

/// Lunisolar date and clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    /// Month number 1..=12, negative for a leap (闰) month
    pub month: i8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl LunarDate {
    pub fn is_leap_month(&self) -> bool {
        self.month < 0
    }

    /// Month number without the leap sign
    pub fn month_number(&self) -> u8 {
        self.month.unsigned_abs()
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap_month() { "闰" } else { "" };
        write!(
            f,
            "{}年{}{}月{}日 {}时",
            self.year,
            leap,
            self.month_number(),
            self.day,
            self.hour
        )
    }
}

/// Everything the calendar converter reports for one moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarReading {
    pub lunar: LunarDate,
    pub pillars: FourPillars,
}

/// Moment a divination was cast for, in civil and traditional reckoning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTime {
    /// Civil time (UTC+8)
    pub civil: NaiveDateTime,
    pub lunar: LunarDate,
    /// Human-readable lunar date, e.g. `2024年1月1日 12时`
    pub lunar_label: String,
    pub pillars: FourPillars,
}

impl QueryTime {
    pub fn new(civil: NaiveDateTime, reading: CalendarReading) -> Self {
        Self {
            civil,
            lunar: reading.lunar,
            lunar_label: reading.lunar.to_string(),
            pillars: reading.pillars,
        }
    }

    pub fn civil_label(&self) -> String {
        self.civil.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lunar_label() {
        let regular = LunarDate {
            year: 2024,
            month: 1,
            day: 1,
            hour: 12,
            minute: 0,
        };
        assert_eq!(regular.to_string(), "2024年1月1日 12时");

        let leap = LunarDate {
            year: 2023,
            month: -2,
            day: 15,
            hour: 8,
            minute: 30,
        };
        assert!(leap.is_leap_month());
        assert_eq!(leap.month_number(), 2);
        assert_eq!(leap.to_string(), "2023年闰2月15日 8时");
    }
}
