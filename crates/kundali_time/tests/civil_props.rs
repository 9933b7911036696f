//! Property tests for civil-time conversion.

use kundali_time::{CivilTime, jd_to_calendar};
use proptest::prelude::*;

proptest! {
    /// A later wall-clock minute on the same day is always a later JD.
    #[test]
    fn later_minute_is_later_jd(
        year in 1800i32..2050,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..23,
        minute in 0u32..59,
    ) {
        let a = CivilTime::new(year, month, day, hour, minute, 0.0, 0.0).to_jd_ut().unwrap();
        let b = CivilTime::new(year, month, day, hour, minute + 1, 0.0, 0.0).to_jd_ut().unwrap();
        prop_assert!(b > a);
        prop_assert!(((b - a) * 1440.0 - 1.0).abs() < 1e-6);
    }

    /// UT-offset zero instants land back on the same calendar day.
    #[test]
    fn utc_instant_keeps_its_day(
        year in 1800i32..2050,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
    ) {
        let jd = CivilTime::new(year, month, day, hour, 0, 0.0, 0.0).to_jd_ut().unwrap();
        let (y, m, d) = jd_to_calendar(jd);
        prop_assert_eq!((y, m, d.floor() as u32), (year, month, day));
    }
}
