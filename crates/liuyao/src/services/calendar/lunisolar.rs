//! Lunisolar date reckoning in China Standard Time
//!
//! Months start on the civil day of the new moon. The month holding the
//! winter solstice is month 11; when thirteen new moons fall between two
//! such months, the first month without a principal term is the leap month.

use chrono::{Datelike, NaiveDate};

use super::astronomy::{
    delta_t_days, julian_day_number, new_moon_jde, sun_longitude, LUNATION_EPOCH, SYNODIC_MONTH,
};

/// UTC+8 as a fraction of a day
pub const TIME_ZONE: f64 = 8.0 / 24.0;

/// Julian day number of the civil day on which lunation `k` begins
fn new_moon_day(k: i64) -> i64 {
    let jde = new_moon_jde(k);
    let jd_ut = jde - delta_t_days(jde);
    (jd_ut + 0.5 + TIME_ZONE).floor() as i64
}

/// 30° sector (0..12) of solar longitude at the start of a civil day
fn solar_sector(day: i64) -> i64 {
    (sun_longitude(day as f64 - 0.5 - TIME_ZONE) / 30.0).floor() as i64
}

/// Start day of the month containing the December solstice of `year`
fn eleventh_month_start(year: i32) -> i64 {
    let new_years_eve = NaiveDate::from_ymd_opt(year, 12, 31)
        .map(julian_day_number)
        .unwrap_or_default();
    let k = ((new_years_eve as f64 - LUNATION_EPOCH) / SYNODIC_MONTH).floor() as i64;
    let start = new_moon_day(k);
    if solar_sector(start) >= 9 {
        new_moon_day(k - 1)
    } else {
        start
    }
}

/// Months after month 11 at which the leap month falls, for a year whose
/// month 11 starts on `eleventh_start`
fn leap_month_offset(eleventh_start: i64) -> i64 {
    let k = ((eleventh_start as f64 - LUNATION_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i64;
    let mut i = 1;
    let mut sector = solar_sector(new_moon_day(k + i));
    loop {
        let last = sector;
        i += 1;
        sector = solar_sector(new_moon_day(k + i));
        if sector == last || i >= 14 {
            break;
        }
    }
    i - 1
}

/// Lunar year, month (negative for a leap month) and day of a civil date
pub fn lunar_date(date: NaiveDate) -> (i32, i8, u8) {
    let day_number = julian_day_number(date);

    let mut k = ((day_number as f64 - LUNATION_EPOCH) / SYNODIC_MONTH).floor() as i64 + 1;
    while new_moon_day(k) > day_number {
        k -= 1;
    }
    while new_moon_day(k + 1) <= day_number {
        k += 1;
    }
    let month_start = new_moon_day(k);

    let civil_year = date.year();
    let mut eleventh = eleventh_month_start(civil_year);
    let next_eleventh;
    let mut lunar_year;
    if eleventh >= month_start {
        lunar_year = civil_year;
        next_eleventh = eleventh;
        eleventh = eleventh_month_start(civil_year - 1);
    } else {
        lunar_year = civil_year + 1;
        next_eleventh = eleventh_month_start(civil_year + 1);
    }

    let day = (day_number - month_start + 1) as u8;
    let diff = (month_start - eleventh).div_euclid(29);

    let mut month = diff + 11;
    let mut leap = false;
    if next_eleventh - eleventh > 365 {
        let leap_offset = leap_month_offset(eleventh);
        if diff >= leap_offset {
            month = diff + 10;
            leap = diff == leap_offset;
        }
    }
    if month > 12 {
        month -= 12;
    }
    if month >= 11 && diff < 4 {
        lunar_year -= 1;
    }

    let month = month as i8;
    (lunar_year, if leap { -month } else { month }, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunar(y: i32, m: u32, d: u32) -> (i32, i8, u8) {
        lunar_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_new_years() {
        assert_eq!(lunar(2024, 2, 10), (2024, 1, 1));
        assert_eq!(lunar(2024, 2, 9), (2023, 12, 30));
        assert_eq!(lunar(2023, 1, 22), (2023, 1, 1));
        assert_eq!(lunar(2025, 1, 29), (2025, 1, 1));
        assert_eq!(lunar(2020, 1, 25), (2020, 1, 1));
        assert_eq!(lunar(1984, 2, 2), (1984, 1, 1));
    }

    #[test]
    fn test_leap_months() {
        assert_eq!(lunar(2020, 5, 23), (2020, -4, 1));
        assert_eq!(lunar(2023, 3, 22), (2023, -2, 1));
        assert_eq!(lunar(2025, 7, 25), (2025, -6, 1));
        assert_eq!(lunar(2033, 12, 22), (2033, -11, 1));
        assert_eq!(lunar(2017, 7, 23), (2017, -6, 1));
        assert_eq!(lunar(2014, 10, 24), (2014, -9, 1));
        assert_eq!(lunar(2012, 5, 21), (2012, -4, 1));
        assert_eq!(lunar(2004, 3, 21), (2004, -2, 1));
        assert_eq!(lunar(2001, 5, 23), (2001, -4, 1));
        assert_eq!(lunar(1995, 9, 25), (1995, -8, 1));
    }

    #[test]
    fn test_mid_month() {
        assert_eq!(lunar(2000, 1, 1), (1999, 11, 25));
        assert_eq!(lunar(2025, 6, 18), (2025, 5, 23));
        assert_eq!(lunar(2023, 1, 1), (2022, 12, 10));
    }
}
