//! Solar and lunar positions
//!
//! Apparent solar longitude from the truncated VSOP87 Earth series with
//! IAU 2000B nutation, aberration and the FK5 correction (good to a few
//! arcseconds, so solar terms land within half a minute). True new-moon
//! instants come from the mean lunation plus periodic corrections (Meeus,
//! *Astronomical Algorithms*, ch. 49). All Julian days here are continuous
//! (JD 2451545.0 = 2000-01-01 12:00 TT).

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};

use super::nutation::nutation_in_longitude;
use super::vsop87::{Term, LONGITUDE, RADIUS};

const DEG: f64 = PI / 180.0;

/// Mean synodic month in days
pub const SYNODIC_MONTH: f64 = 29.530588861;

/// Instant (JDE) of the mean new moon with lunation number 0 (2000-01-06)
pub const LUNATION_EPOCH: f64 = 2451550.09766;

const J2000: f64 = 2451545.0;

/// Offset from 0001-01-01 (day 1 of the proleptic Gregorian count) to its
/// Julian day number
const CE_TO_JDN: i64 = 1721425;

/// Julian day number of a civil date (noon-based count)
pub fn julian_day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + CE_TO_JDN
}

/// ΔT = TT − UT, in days (Espenak and Meeus polynomials)
pub fn delta_t_days(jd: f64) -> f64 {
    let year = 2000.0 + (jd - J2000) / 365.25;
    let seconds = if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    };
    seconds / 86400.0
}

/// Constant of aberration in arcseconds
const ABERRATION: f64 = 20.4898;

/// Conversion from VSOP87 to the FK5 frame, in arcseconds
const FK5_CORRECTION: f64 = -0.09033;

/// Sum of series in powers of τ
fn evaluate(series: &[&[Term]], tau: f64) -> f64 {
    series
        .iter()
        .rev()
        .fold(0.0, |acc, terms| {
            let sum: f64 = terms.iter().map(|(a, b, c)| a * (b + c * tau).cos()).sum();
            acc * tau + sum
        })
        * 1e-8
}

/// Apparent geocentric longitude of the Sun in degrees [0, 360) at a UT
/// Julian day
pub fn sun_longitude(jd_ut: f64) -> f64 {
    let jde = jd_ut + delta_t_days(jd_ut);
    let tau = (jde - J2000) / 365250.0;

    let heliocentric = evaluate(&LONGITUDE, tau) / DEG;
    let radius = evaluate(&RADIUS, tau);

    let corrections =
        FK5_CORRECTION + nutation_in_longitude(tau * 10.0) - ABERRATION / radius;
    (heliocentric + 180.0 + corrections / 3600.0).rem_euclid(360.0)
}

/// Periodic terms of the true new moon: (coefficient, power of E,
/// multiples of M, M', F, Ω)
const NEW_MOON_TERMS: [(f64, i32, [f64; 4]); 25] = [
    (-0.40720, 0, [0.0, 1.0, 0.0, 0.0]),
    (0.17241, 1, [1.0, 0.0, 0.0, 0.0]),
    (0.01608, 0, [0.0, 2.0, 0.0, 0.0]),
    (0.01039, 0, [0.0, 0.0, 2.0, 0.0]),
    (0.00739, 1, [-1.0, 1.0, 0.0, 0.0]),
    (-0.00514, 1, [1.0, 1.0, 0.0, 0.0]),
    (0.00208, 2, [2.0, 0.0, 0.0, 0.0]),
    (-0.00111, 0, [0.0, 1.0, -2.0, 0.0]),
    (-0.00057, 0, [0.0, 1.0, 2.0, 0.0]),
    (0.00056, 1, [1.0, 2.0, 0.0, 0.0]),
    (-0.00042, 0, [0.0, 3.0, 0.0, 0.0]),
    (0.00042, 1, [1.0, 0.0, 2.0, 0.0]),
    (0.00038, 1, [1.0, 0.0, -2.0, 0.0]),
    (-0.00024, 1, [-1.0, 2.0, 0.0, 0.0]),
    (-0.00017, 0, [0.0, 0.0, 0.0, 1.0]),
    (-0.00007, 0, [2.0, 1.0, 0.0, 0.0]),
    (0.00004, 0, [0.0, 2.0, -2.0, 0.0]),
    (0.00004, 0, [3.0, 0.0, 0.0, 0.0]),
    (0.00003, 0, [1.0, 1.0, -2.0, 0.0]),
    (0.00003, 0, [0.0, 2.0, 2.0, 0.0]),
    (-0.00003, 0, [1.0, 1.0, 2.0, 0.0]),
    (0.00003, 0, [-1.0, 1.0, 2.0, 0.0]),
    (-0.00002, 0, [-1.0, 1.0, -2.0, 0.0]),
    (-0.00002, 0, [1.0, 3.0, 0.0, 0.0]),
    (0.00002, 0, [0.0, 4.0, 0.0, 0.0]),
];

/// Planetary perturbations: (coefficient, A at k = 0, rate per lunation)
const PLANETARY_TERMS: [(f64, f64, f64); 14] = [
    (0.000325, 299.77, 0.107408),
    (0.000165, 251.88, 0.016321),
    (0.000164, 251.83, 26.651886),
    (0.000126, 349.42, 36.412478),
    (0.000110, 84.66, 18.206239),
    (0.000062, 141.74, 53.303771),
    (0.000060, 207.14, 2.453732),
    (0.000056, 154.84, 7.306860),
    (0.000047, 34.52, 27.261239),
    (0.000042, 207.19, 0.121824),
    (0.000040, 291.34, 1.844379),
    (0.000037, 161.72, 24.198154),
    (0.000035, 239.56, 25.513099),
    (0.000023, 331.55, 3.592518),
];

/// Instant (JDE, dynamical time) of the true new moon of lunation `k`
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let (t2, t3, t4) = (t * t, t * t * t, t * t * t * t);

    let mean = LUNATION_EPOCH + SYNODIC_MONTH * k + 0.00015437 * t2 - 0.000000150 * t3
        + 0.00000000073 * t4;
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let sun_anomaly = (2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3) * DEG;
    let moon_anomaly = (201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3
        - 0.000000058 * t4)
        * DEG;
    let latitude = (160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3
        + 0.000000011 * t4)
        * DEG;
    let node = (124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3) * DEG;

    let args = [sun_anomaly, moon_anomaly, latitude, node];
    let periodic: f64 = NEW_MOON_TERMS
        .iter()
        .map(|(coefficient, e_power, multiples)| {
            let angle: f64 = multiples.iter().zip(args).map(|(m, a)| m * a).sum();
            coefficient * e.powi(*e_power) * angle.sin()
        })
        .sum();

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .enumerate()
        .map(|(i, (coefficient, base, rate))| {
            let mut angle = base + rate * k;
            if i == 0 {
                angle -= 0.009173 * t2;
            }
            coefficient * (angle * DEG).sin()
        })
        .sum();

    mean + periodic + planetary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_day_number() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(julian_day_number(date), 2451545);
    }

    #[test]
    fn test_new_moon_epoch() {
        // 2000-01-06 18:14 UT
        let jde = new_moon_jde(0);
        let ut = jde - delta_t_days(jde);
        assert!((ut - 2451550.26).abs() < 0.01, "{}", ut);
    }

    #[test]
    fn test_sun_longitude_at_equinox() {
        // 2024-03-20 03:06:21 UT
        let jd = 2460389.62941;
        let lon = sun_longitude(jd);
        assert!(lon < 0.0005 || lon > 359.9995, "{}", lon);
    }

    #[test]
    fn test_sun_longitude_at_spring_start() {
        // 立春 2023-02-04 02:42:21 UT
        let jd = 2459979.61274;
        let lon = sun_longitude(jd);
        assert!((lon - 315.0).abs() < 0.0005, "{}", lon);
    }
}
