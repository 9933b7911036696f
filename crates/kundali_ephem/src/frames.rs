//! Precession, obliquity and the Delaunay fundamental arguments.
//!
//! Sources: IERS Conventions 2010 (Table 5.2e) for the Delaunay arguments,
//! IAU 2006 for the general precession in longitude, Laskar via Meeus
//! (eq 22.2) for the mean obliquity.

use std::f64::consts::PI;

const AS2RAD: f64 = PI / (180.0 * 3600.0);

/// Delaunay arguments `[l, l', F, D, Ω]` in radians at `t` Julian
/// centuries from J2000.0.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// General precession in ecliptic longitude since J2000.0, degrees.
pub fn general_precession_deg(t: f64) -> f64 {
    let arcsec = t
        * (5028.796195 + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 - t * 0.0000000383))));
    arcsec / 3600.0
}

/// Mean obliquity of the ecliptic of date, degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291_111 + t * (-0.013_004_2 + t * (-1.64e-7 + t * 5.04e-7))
}

/// Mean longitude of the Moon's ascending node, degrees [0, 360).
pub fn mean_node_deg(t: f64) -> f64 {
    fundamental_arguments(t)[4].to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precession_zero_at_j2000() {
        assert_eq!(general_precession_deg(0.0), 0.0);
    }

    #[test]
    fn precession_about_50_arcsec_per_year() {
        let per_year = general_precession_deg(0.01) * 3600.0;
        assert!((per_year - 50.29).abs() < 0.01, "got {per_year}");
    }

    #[test]
    fn obliquity_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.4393).abs() < 1e-4);
    }

    #[test]
    fn node_at_j2000() {
        assert!((mean_node_deg(0.0) - 125.0446).abs() < 1e-3);
    }

    #[test]
    fn node_regresses() {
        let a = mean_node_deg(0.0);
        let b = mean_node_deg(0.001);
        let motion = (b - a + 540.0).rem_euclid(360.0) - 180.0;
        assert!(motion < 0.0, "node moved {motion}");
    }
}
