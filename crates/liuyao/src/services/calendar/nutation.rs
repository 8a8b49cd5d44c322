//! Nutation in longitude (IAU 2000B, 77 lunisolar terms)
//!
//! Fundamental arguments follow IERS Conventions 2010 table 5.2e; term
//! amplitudes are table 5.3b, in units of 0.1 μas.

use std::f64::consts::TAU;

const ARCSEC: f64 = TAU / 1_296_000.0;

/// Fixed offset of the 2000B model relative to 2000A, in arcseconds
const OFFSET: f64 = -0.000_135;

/// `[l, l', F, D, Ω multiples, S, S']` per term
#[rustfmt::skip]
const TERMS: [[i64; 7]; 77] = [
    [   0,    0,    0,    0,    1,  -172064161,  -174666],
    [   0,    0,    2,   -2,    2,   -13170906,    -1675],
    [   0,    0,    2,    0,    2,    -2276413,     -234],
    [   0,    0,    0,    0,    2,     2074554,      207],
    [   0,    1,    0,    0,    0,     1475877,    -3633],
    [   0,    1,    2,   -2,    2,     -516821,     1226],
    [   1,    0,    0,    0,    0,      711159,       73],
    [   0,    0,    2,    0,    1,     -387298,     -367],
    [   1,    0,    2,    0,    2,     -301461,      -36],
    [   0,   -1,    2,   -2,    2,      215829,     -494],
    [   0,    0,    2,   -2,    1,      128227,      137],
    [  -1,    0,    2,    0,    2,      123457,       11],
    [  -1,    0,    0,    2,    0,      156994,       10],
    [   1,    0,    0,    0,    1,       63110,       63],
    [  -1,    0,    0,    0,    1,      -57976,      -63],
    [  -1,    0,    2,    2,    2,      -59641,      -11],
    [   1,    0,    2,    0,    1,      -51613,      -42],
    [  -2,    0,    2,    0,    1,       45893,       50],
    [   0,    0,    0,    2,    0,       63384,       11],
    [   0,    0,    2,    2,    2,      -38571,       -1],
    [   0,   -2,    2,   -2,    2,       32481,        0],
    [  -2,    0,    0,    2,    0,      -47722,        0],
    [   2,    0,    2,    0,    2,      -31046,       -1],
    [   1,    0,    2,   -2,    2,       28593,        0],
    [  -1,    0,    2,    0,    1,       20441,       21],
    [   2,    0,    0,    0,    0,       29243,        0],
    [   0,    0,    2,    0,    0,       25887,        0],
    [   0,    1,    0,    0,    1,      -14053,      -25],
    [  -1,    0,    0,    2,    1,       15164,       10],
    [   0,    2,    2,   -2,    2,      -15794,       72],
    [   0,    0,   -2,    2,    0,       21783,        0],
    [   1,    0,    0,   -2,    1,      -12873,      -10],
    [   0,   -1,    0,    0,    1,      -12654,       11],
    [  -1,    0,    2,    2,    1,      -10204,        0],
    [   0,    2,    0,    0,    0,       16707,      -85],
    [   1,    0,    2,    2,    2,       -7691,        0],
    [  -2,    0,    2,    0,    0,      -11024,        0],
    [   0,    1,    2,    0,    2,        7566,      -21],
    [   0,    0,    2,    2,    1,       -6637,      -11],
    [   0,   -1,    2,    0,    2,       -7141,       21],
    [   0,    0,    0,    2,    1,       -6302,      -11],
    [   1,    0,    2,   -2,    1,        5800,       10],
    [   2,    0,    2,   -2,    2,        6443,        0],
    [  -2,    0,    0,    2,    1,       -5774,      -11],
    [   2,    0,    2,    0,    1,       -5350,        0],
    [   0,   -1,    2,   -2,    1,       -4752,      -11],
    [   0,    0,    0,   -2,    1,       -4940,      -11],
    [  -1,   -1,    0,    2,    0,        7350,        0],
    [   2,    0,    0,   -2,    1,       -4803,      -11],
    [   1,    0,    0,    2,    0,       -7677,        0],
    [   0,    1,    2,   -2,    1,        5417,        0],
    [   1,   -1,    0,    0,    0,        6624,        0],
    [  -2,    0,    2,    0,    2,       -5433,        0],
    [   3,    0,    2,    0,    2,       -4632,        0],
    [   0,   -1,    0,    2,    0,        6106,        0],
    [   1,   -1,    2,    0,    2,       -3593,        0],
    [   0,    0,    0,    1,    0,       -4766,        0],
    [  -1,   -1,    2,    2,    2,       -4095,        0],
    [  -1,    0,    2,    0,    0,        4229,        0],
    [   0,   -1,    2,    2,    2,       -3372,        0],
    [   2,    0,    0,    0,    1,       -3353,        0],
    [   1,    0,    2,    0,    0,       -3523,        0],
    [   1,    1,    0,    0,    0,       -3613,        0],
    [  -1,    0,    2,   -2,    1,        3522,        0],
    [   2,    0,    0,    0,   -1,        3312,        0],
    [   0,    0,   -2,    2,    1,       -3142,        0],
    [   0,    1,    0,    0,   -1,       -2927,        0],
    [   0,    1,    2,    0,    1,       -2887,        0],
    [   0,   -1,    2,    0,    1,        2451,        0],
    [   2,    0,   -2,    0,    0,       -2790,        0],
    [  -1,    0,    0,    2,   -1,        2145,        0],
    [   0,    0,    2,   -2,    0,        2816,        0],
    [   0,    1,    0,   -2,    0,        2700,        0],
    [   1,    0,    0,   -1,    0,       -2330,        0],
    [   0,    0,    0,    0,    2,        2283,        0],
    [   1,    0,   -2,    0,    0,       -2321,        0],
    [  -1,    0,    0,    1,    1,       -2049,        0],
];

/// Delaunay arguments `[l, l', F, D, Ω]` in radians, `t` in Julian centuries
fn fundamental_arguments(t: f64) -> [f64; 5] {
    let polynomial = |c: [f64; 5]| {
        (c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])))) * ARCSEC
    };
    [
        polynomial([485868.249036, 1717915923.2178, 31.8792, 0.051635, -0.00024470]),
        polynomial([1287104.79305, 129596581.0481, -0.5532, 0.000136, -0.00001149]),
        polynomial([335779.526232, 1739527262.8478, -12.7512, -0.001037, 0.00000417]),
        polynomial([1072260.70369, 1602961601.2090, -6.3706, 0.006593, -0.00003169]),
        polynomial([450160.398036, -6962890.5431, 7.4722, 0.007702, -0.00005939]),
    ]
}

/// Nutation in longitude Δψ in arcseconds, `t` in Julian centuries of TT
/// from J2000.0
pub(super) fn nutation_in_longitude(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    let sum: f64 = TERMS
        .iter()
        .map(|row| {
            let angle: f64 = row[..5]
                .iter()
                .zip(args)
                .map(|(&n, arg)| n as f64 * arg)
                .sum();
            (row[5] as f64 + row[6] as f64 * t) * angle.sin()
        })
        .sum();
    sum * 1e-7 + OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutation_amplitude() {
        // Δψ stays within the ±17.2″ envelope of the 18.6-year term
        for step in 0..40 {
            let t = -1.0 + f64::from(step) * 0.05;
            assert!(nutation_in_longitude(t).abs() < 19.0);
        }
    }

    #[test]
    fn test_nutation_at_j2000() {
        // about -13.9″ at J2000.0
        let dpsi = nutation_in_longitude(0.0);
        assert!((dpsi + 13.9).abs() < 0.3, "{}", dpsi);
    }
}
