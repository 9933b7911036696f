//! Calendar and time-scale helpers for chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - `CivilTime`, a wall-clock birth instant with a fixed UTC offset
//! - Greenwich and local sidereal time
//!
//! All Julian Dates handled here are on the UT scale. The analytical
//! ephemeris downstream is not precise enough for the TT−UT difference
//! to matter, so no ΔT model is applied.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilTime, Weekday, jd_to_datetime, weekday_from_jd};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
