//! Geocentric Moon from the principal periodic terms of the lunar theory.
//!
//! Terms: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47, the
//! leading rows of Tables 47.A and 47.B. With the rows kept here the
//! longitude is good to roughly 0.01°, referred to the mean equinox of
//! date.

/// `[D, M, M', F, Σl (1e-6 deg), Σr (1e-3 km)]`
#[rustfmt::skip]
const LON_DIST_TERMS: [[f64; 6]; 50] = [
    [0.0,  0.0,  1.0,  0.0, 6288774.0, -20905355.0],
    [2.0,  0.0, -1.0,  0.0, 1274027.0,  -3699111.0],
    [2.0,  0.0,  0.0,  0.0,  658314.0,  -2955968.0],
    [0.0,  0.0,  2.0,  0.0,  213618.0,   -569925.0],
    [0.0,  1.0,  0.0,  0.0, -185116.0,     48888.0],
    [0.0,  0.0,  0.0,  2.0, -114332.0,     -3149.0],
    [2.0,  0.0, -2.0,  0.0,   58793.0,    246158.0],
    [2.0, -1.0, -1.0,  0.0,   57066.0,   -152138.0],
    [2.0,  0.0,  1.0,  0.0,   53322.0,   -170733.0],
    [2.0, -1.0,  0.0,  0.0,   45758.0,   -204586.0],
    [0.0,  1.0, -1.0,  0.0,  -40923.0,   -129620.0],
    [1.0,  0.0,  0.0,  0.0,  -34720.0,    108743.0],
    [0.0,  1.0,  1.0,  0.0,  -30383.0,    104755.0],
    [2.0,  0.0,  0.0, -2.0,   15327.0,     10321.0],
    [0.0,  0.0,  1.0,  2.0,  -12528.0,         0.0],
    [0.0,  0.0,  1.0, -2.0,   10980.0,     79661.0],
    [4.0,  0.0, -1.0,  0.0,   10675.0,    -34782.0],
    [0.0,  0.0,  3.0,  0.0,   10034.0,    -23210.0],
    [4.0,  0.0, -2.0,  0.0,    8548.0,    -21636.0],
    [2.0,  1.0, -1.0,  0.0,   -7888.0,     24208.0],
    [2.0,  1.0,  0.0,  0.0,   -6766.0,     30824.0],
    [1.0,  0.0, -1.0,  0.0,   -5163.0,     -8379.0],
    [1.0,  1.0,  0.0,  0.0,    4987.0,    -16675.0],
    [2.0, -1.0,  1.0,  0.0,    4036.0,    -12831.0],
    [2.0,  0.0,  2.0,  0.0,    3994.0,    -10445.0],
    [4.0,  0.0,  0.0,  0.0,    3861.0,    -11650.0],
    [2.0,  0.0, -3.0,  0.0,    3665.0,     14403.0],
    [0.0,  1.0, -2.0,  0.0,   -2689.0,     -7003.0],
    [2.0,  0.0, -1.0,  2.0,   -2602.0,         0.0],
    [2.0, -1.0, -2.0,  0.0,    2390.0,         0.0],
    [1.0,  0.0,  1.0,  0.0,   -2348.0,         0.0],
    [2.0, -2.0,  0.0,  0.0,    2236.0,         0.0],
    [0.0,  1.0,  2.0,  0.0,   -2120.0,         0.0],
    [0.0,  2.0,  0.0,  0.0,   -2069.0,         0.0],
    [2.0, -2.0, -1.0,  0.0,    2048.0,         0.0],
    [2.0,  0.0,  1.0, -2.0,   -1773.0,         0.0],
    [2.0,  0.0,  0.0,  2.0,   -1595.0,         0.0],
    [4.0, -1.0, -1.0,  0.0,    1215.0,         0.0],
    [0.0,  0.0,  2.0,  2.0,   -1110.0,         0.0],
    [3.0,  0.0, -1.0,  0.0,    -892.0,         0.0],
    [2.0,  1.0,  1.0,  0.0,    -810.0,         0.0],
    [4.0, -1.0, -2.0,  0.0,     759.0,         0.0],
    [0.0,  2.0, -1.0,  0.0,    -713.0,         0.0],
    [2.0,  2.0, -1.0,  0.0,    -700.0,         0.0],
    [2.0,  1.0, -2.0,  0.0,     691.0,         0.0],
    [2.0, -1.0,  0.0, -2.0,     596.0,         0.0],
    [4.0,  0.0,  1.0,  0.0,     549.0,         0.0],
    [0.0,  0.0,  4.0,  0.0,     537.0,         0.0],
    [4.0, -1.0,  0.0,  0.0,     520.0,         0.0],
    [1.0,  0.0, -2.0,  0.0,    -487.0,         0.0],
];

/// `[D, M, M', F, Σb (1e-6 deg)]`
#[rustfmt::skip]
const LAT_TERMS: [[f64; 5]; 30] = [
    [0.0,  0.0,  0.0,  1.0, 5128122.0],
    [0.0,  0.0,  1.0,  1.0,  280602.0],
    [0.0,  0.0,  1.0, -1.0,  277693.0],
    [2.0,  0.0,  0.0, -1.0,  173237.0],
    [2.0,  0.0, -1.0,  1.0,   55413.0],
    [2.0,  0.0, -1.0, -1.0,   46271.0],
    [2.0,  0.0,  0.0,  1.0,   32573.0],
    [0.0,  0.0,  2.0,  1.0,   17198.0],
    [2.0,  0.0,  1.0, -1.0,    9266.0],
    [0.0,  0.0,  2.0, -1.0,    8822.0],
    [2.0, -1.0,  0.0, -1.0,    8216.0],
    [2.0,  0.0, -2.0, -1.0,    4324.0],
    [2.0,  0.0,  1.0,  1.0,    4200.0],
    [2.0,  1.0,  0.0, -1.0,   -3359.0],
    [2.0, -1.0, -1.0,  1.0,    2463.0],
    [2.0, -1.0,  0.0,  1.0,    2211.0],
    [2.0, -1.0, -1.0, -1.0,    2065.0],
    [0.0,  1.0, -1.0, -1.0,   -1870.0],
    [4.0,  0.0, -1.0, -1.0,    1828.0],
    [0.0,  1.0,  0.0,  1.0,   -1794.0],
    [0.0,  0.0,  0.0,  3.0,   -1749.0],
    [0.0,  1.0, -1.0,  1.0,   -1565.0],
    [1.0,  0.0,  0.0,  1.0,   -1491.0],
    [0.0,  1.0,  1.0,  1.0,   -1475.0],
    [0.0,  1.0,  1.0, -1.0,   -1410.0],
    [0.0,  1.0,  0.0, -1.0,   -1344.0],
    [1.0,  0.0,  0.0, -1.0,   -1335.0],
    [0.0,  0.0,  3.0,  1.0,    1107.0],
    [4.0,  0.0,  0.0, -1.0,    1021.0],
    [4.0,  0.0, -1.0,  1.0,     833.0],
];

/// Mean distance of the Moon in km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Kilometres per astronomical unit.
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Geocentric lunar coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarCoordinates {
    /// Ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude, degrees.
    pub latitude_deg: f64,
    /// Distance from Earth's centre, km.
    pub distance_km: f64,
}

/// Lunar coordinates at `t` Julian centuries from J2000.0.
pub fn lunar_coordinates(t: f64) -> LunarCoordinates {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean_lon = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
        - t4 / 65194000.0;
    let elong = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
        - t4 / 113065000.0;
    let sun_anom = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0;
    let moon_anom = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
        - t4 / 14712000.0;
    let arg_lat = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
        + t4 / 863310000.0;

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479264.290 * t;
    let a3 = 313.45 + 481266.484 * t;
    // Eccentricity of Earth's orbit damps the terms containing M.
    let ecc = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let angle = |row: &[f64]| {
        (row[0] * elong + row[1] * sun_anom + row[2] * moon_anom + row[3] * arg_lat).to_radians()
    };
    let damp = |m: f64| ecc.powi(m.abs() as i32);

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for row in &LON_DIST_TERMS {
        let arg = angle(row);
        let k = damp(row[1]);
        sum_l += row[4] * k * arg.sin();
        sum_r += row[5] * k * arg.cos();
    }
    sum_l += 3958.0 * a1.to_radians().sin()
        + 1962.0 * (mean_lon - arg_lat).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    let mut sum_b = 0.0;
    for row in &LAT_TERMS {
        sum_b += row[4] * damp(row[1]) * angle(row).sin();
    }
    sum_b += -2235.0 * mean_lon.to_radians().sin()
        + 382.0 * a3.to_radians().sin()
        + 175.0 * (a1 - arg_lat).to_radians().sin()
        + 175.0 * (a1 + arg_lat).to_radians().sin()
        + 127.0 * (mean_lon - moon_anom).to_radians().sin()
        - 115.0 * (mean_lon + moon_anom).to_radians().sin();

    LunarCoordinates {
        longitude_deg: (mean_lon + sum_l / 1.0e6).rem_euclid(360.0),
        latitude_deg: sum_b / 1.0e6,
        distance_km: MEAN_DISTANCE_KM + sum_r / 1000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Meeus example 47.a: 1992 April 12, 0h TD.
    /// λ = 133.162655°, β = −3.229126°, Δ = 368409.7 km.
    #[test]
    fn meeus_example_47a() {
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let c = lunar_coordinates(t);
        assert!((c.longitude_deg - 133.162655).abs() < 0.02, "λ = {}", c.longitude_deg);
        assert!((c.latitude_deg + 3.229126).abs() < 0.02, "β = {}", c.latitude_deg);
        assert!((c.distance_km - 368_409.7).abs() < 300.0, "Δ = {}", c.distance_km);
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        for i in 0..200 {
            let c = lunar_coordinates(-2.0 + i as f64 * 0.0173);
            assert!(c.latitude_deg.abs() < 5.4, "β = {}", c.latitude_deg);
        }
    }
}
