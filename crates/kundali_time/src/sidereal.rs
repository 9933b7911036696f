//! Greenwich Mean Sidereal Time and local sidereal time.
//!
//! Inputs are UT Julian Dates. The GMST polynomial is the Capitaine et al.
//! (2003) expression on top of the Earth Rotation Angle (IERS 2010, eq 5.15).

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians, [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - t * 0.0000000368))));
    (earth_rotation_angle_rad(jd_ut) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time for an east-positive longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_rad(jd_ut) + longitude_east_deg.to_radians()).rem_euclid(TAU)
}
