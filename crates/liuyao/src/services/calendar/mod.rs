//! Chinese Calendar - Lunisolar conversion for divination
//!
//! Self-contained implementation of [`CalendarConverter`]: computes lunar
//! dates and four pillars from solar and lunar positions, in UTC+8.

mod astronomy;
mod lunisolar;
mod nutation;
mod sexagenary;
mod vsop87;

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Timelike, Utc};

use crate::domain::entities::{CalendarReading, LunarDate};
use crate::domain::errors::DomainError;
use crate::ports::CalendarConverter;

pub use lunisolar::lunar_date;
pub use sexagenary::four_pillars;

/// Civil years the astronomical series are trusted for
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1901..=2099;

/// UTC+8 offset applied to zoned input and to the system clock
const CST_OFFSET_HOURS: i64 = 8;

/// Parse user input into UTC+8 civil time
///
/// RFC 3339 values carrying an offset are converted; naive values
/// (`2025-06-18T10:30:00`, `2025-06-18 10:30:00`, `2025-06-18T10:30`) are
/// taken as already being UTC+8.
pub fn parse_civil_time(raw: &str) -> Result<NaiveDateTime, DomainError> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.naive_utc() + Duration::hours(CST_OFFSET_HOURS));
    }
    raw.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|_| DomainError::InvalidTime(raw.to_string()))
}

/// Calendar converter for China Standard Time
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseCalendar;

impl ChineseCalendar {
    pub fn new() -> Self {
        Self
    }
}

impl CalendarConverter for ChineseCalendar {
    fn convert(&self, at: NaiveDateTime) -> Result<CalendarReading, DomainError> {
        if !SUPPORTED_YEARS.contains(&at.year()) {
            return Err(DomainError::CalendarOutOfRange(format!(
                "{} (supported years {}-{})",
                at,
                SUPPORTED_YEARS.start(),
                SUPPORTED_YEARS.end()
            )));
        }

        let (year, month, day) = lunar_date(at.date());
        let lunar = LunarDate {
            year,
            month,
            day,
            hour: at.hour() as u8,
            minute: at.minute() as u8,
        };
        let pillars = four_pillars(at);

        tracing::debug!(
            "📅 {} → {} / {} {} {} {}",
            at,
            lunar,
            pillars.year,
            pillars.month,
            pillars.day,
            pillars.hour
        );

        Ok(CalendarReading { lunar, pillars })
    }

    fn current_time(&self) -> NaiveDateTime {
        Utc::now().naive_utc() + Duration::hours(CST_OFFSET_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::DivinationService;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_convert_lunar_new_year() {
        let reading = ChineseCalendar::new().convert(at(2024, 2, 10, 12, 0)).unwrap();
        assert_eq!(
            reading.lunar,
            LunarDate {
                year: 2024,
                month: 1,
                day: 1,
                hour: 12,
                minute: 0
            }
        );
        assert_eq!(reading.pillars.year.to_string(), "甲辰");
        assert_eq!(reading.pillars.hour.to_string(), "庚午");
    }

    #[test]
    fn test_convert_leap_month() {
        let reading = ChineseCalendar::new().convert(at(2023, 4, 5, 9, 15)).unwrap();
        assert!(reading.lunar.is_leap_month());
        assert_eq!(reading.lunar.month_number(), 2);
        assert_eq!(reading.lunar.day, 15);
        assert_eq!(reading.lunar.minute, 15);
    }

    #[test]
    fn test_time_divination_just_before_spring_start() {
        // 立春 2023 fell at 10:42:21; 10:35 still belongs to 壬寅
        let service = DivinationService::new(Arc::new(ChineseCalendar::new()));
        let result = service.time(Some(at(2023, 2, 4, 10, 35))).unwrap();

        assert_eq!(result.query_time.pillars.year.to_string(), "壬寅");
        assert_eq!(result.query_time.lunar_label, "2023年1月14日 10时");
        assert_eq!(result.original.name.to_string(), "泽地萃");
        assert_eq!(result.changed.name.to_string(), "天地否");
        assert_eq!(result.moving_lines.to_vec(), vec![6]);
    }

    #[test]
    fn test_out_of_range() {
        let err = ChineseCalendar::new().convert(at(1850, 1, 1, 0, 0)).unwrap_err();
        assert!(matches!(err, DomainError::CalendarOutOfRange(_)));
        assert!(err.is_client_error());
        assert!(ChineseCalendar::new().convert(at(2100, 6, 1, 0, 0)).is_err());
    }

    #[test]
    fn test_parse_civil_time() {
        let naive = parse_civil_time("2025-06-18T10:30:00").unwrap();
        assert_eq!(naive, at(2025, 6, 18, 10, 30));
        assert_eq!(parse_civil_time("2025-06-18 10:30:00").unwrap(), naive);
        assert_eq!(parse_civil_time("2025-06-18 10:30").unwrap(), naive);
        assert_eq!(parse_civil_time("2025-06-18T02:30:00Z").unwrap(), naive);
        assert_eq!(parse_civil_time("2025-06-18T10:30:00+08:00").unwrap(), naive);
        assert!(matches!(
            parse_civil_time("yesterday"),
            Err(DomainError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_current_time_in_range() {
        let now = ChineseCalendar::new().current_time();
        assert!(SUPPORTED_YEARS.contains(&now.year()));
    }
}
