//! Julian Date ↔ calendar conversions.
//!
//! Algorithm: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7,
//! restricted to the proleptic Gregorian calendar.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Convert a Gregorian calendar date with fractional day to a Julian Date.
///
/// `day` carries the time of day as a fraction (e.g. 1.5 = noon on the 1st).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Date to `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "got {jd}");
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 Oct 4.81 → JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "got {jd}");
    }

    #[test]
    fn january_and_february_shift_year() {
        let jd = calendar_to_jd(1972, 2, 29.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (1972, 2));
        assert!((d - 29.0).abs() < 1e-9);
    }

    #[test]
    fn round_trip_preserves_fraction() {
        let jd = calendar_to_jd(1963, 9, 6.25);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (1963, 9));
        assert!((d - 6.25).abs() < 1e-8, "day = {d}");
    }

    #[test]
    fn centuries_at_j2000_is_zero() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + DAYS_PER_JULIAN_CENTURY) - 1.0).abs() < 1e-15);
    }
}
