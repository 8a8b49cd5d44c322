//! Four pillars (四柱) of a civil moment
//!
//! Year and month pillars follow the solar terms: the year turns at 立春
//! (solar longitude 315°) and each month covers 30° from there. Day pillars
//! count the sixty-day cycle from the Julian day number; the hour stem of
//! 23:00 onwards already belongs to the next day.

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::astronomy::{julian_day_number, sun_longitude};
use super::lunisolar::TIME_ZONE;
use crate::domain::entities::{FourPillars, Pillar};
use crate::domain::value_objects::{Branch, Stem};

/// Solar longitude at the start of spring (立春)
const SPRING_START: f64 = 315.0;

/// Winter solstice (冬至); between it and 立春 the previous year still runs
const WINTER_SOLSTICE: f64 = 270.0;

pub fn four_pillars(at: NaiveDateTime) -> FourPillars {
    let date = at.date();
    let day_number = julian_day_number(date);
    let fraction = (f64::from(at.hour()) + f64::from(at.minute()) / 60.0) / 24.0;
    let longitude = sun_longitude(day_number as f64 - 0.5 + fraction - TIME_ZONE);

    let mut year = i64::from(date.year());
    if date.month() <= 2 && (WINTER_SOLSTICE..SPRING_START).contains(&longitude) {
        year -= 1;
    }
    let year_stem = (year - 4).rem_euclid(10) as usize;
    let year_pillar = Pillar::new(
        Stem::from_index(year_stem),
        Branch::from_index((year - 4).rem_euclid(12) as usize),
    );

    // months counted from 寅
    let month_offset = ((longitude - SPRING_START).rem_euclid(360.0) / 30.0).floor() as usize;
    let month_pillar = Pillar::new(
        Stem::from_index(year_stem * 2 + 2 + month_offset),
        Branch::from_index(month_offset + 2),
    );

    let day_pillar = Pillar::from_cycle_index((day_number + 49).rem_euclid(60) as usize);

    let hour_branch = ((at.hour() as usize + 1) / 2) % 12;
    let mut hour_day_stem = day_pillar.stem.index();
    if at.hour() == 23 {
        hour_day_stem += 1;
    }
    let hour_pillar = Pillar::new(
        Stem::from_index((hour_day_stem % 5) * 2 + hour_branch),
        Branch::from_index(hour_branch),
    );

    FourPillars {
        year: year_pillar,
        month: month_pillar,
        day: day_pillar,
        hour: hour_pillar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn pillars(y: i32, m: u32, d: u32, h: u32, min: u32) -> [String; 4] {
        let at = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap();
        let p = four_pillars(at);
        [p.year, p.month, p.day, p.hour].map(|pillar| pillar.to_string())
    }

    #[test]
    fn test_known_moments() {
        assert_eq!(pillars(2024, 2, 10, 12, 0), ["甲辰", "丙寅", "甲辰", "庚午"]);
        assert_eq!(pillars(2000, 1, 1, 0, 30), ["己卯", "丙子", "戊午", "壬子"]);
        assert_eq!(pillars(2023, 1, 1, 10, 0), ["壬寅", "壬子", "己未", "己巳"]);
    }

    #[test]
    fn test_year_turns_at_spring_start() {
        // 立春 2024 fell at 16:26:53 on 4 February
        assert_eq!(pillars(2024, 2, 4, 16, 24), ["癸卯", "乙丑", "戊戌", "庚申"]);
        assert_eq!(pillars(2024, 2, 4, 16, 29), ["甲辰", "丙寅", "戊戌", "庚申"]);
    }

    #[test]
    fn test_spring_start_within_minutes() {
        let year = |y, m, d, h, min| pillars(y, m, d, h, min)[0].clone();

        // 2022-02-04 04:50:36
        assert_eq!(year(2022, 2, 4, 4, 48), "辛丑");
        assert_eq!(year(2022, 2, 4, 4, 52), "壬寅");
        // 2023-02-04 10:42:21
        assert_eq!(year(2023, 2, 4, 10, 35), "壬寅");
        assert_eq!(year(2023, 2, 4, 10, 40), "壬寅");
        assert_eq!(year(2023, 2, 4, 10, 44), "癸卯");
        // 2025-02-03 22:10:13
        assert_eq!(year(2025, 2, 3, 22, 8), "甲辰");
        assert_eq!(year(2025, 2, 3, 22, 12), "乙巳");
    }

    #[test]
    fn test_month_turns_with_the_year() {
        assert_eq!(pillars(2023, 2, 4, 10, 40)[1], "癸丑");
        assert_eq!(pillars(2023, 2, 4, 10, 44)[1], "甲寅");
    }

    #[test]
    fn test_late_night_hour_uses_next_day_stem() {
        assert_eq!(pillars(2025, 6, 18, 23, 30), ["乙巳", "壬午", "戊午", "甲子"]);
    }
}
