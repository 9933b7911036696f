//! Wall-clock birth instants with a fixed UTC offset.
//!
//! `CivilTime` is what a request carries: local calendar date, local clock
//! time and the offset from UTC in hours (e.g. +5.5 for IST). It converts to
//! a UT Julian Date for every downstream computation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd};

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Largest UTC offset in use anywhere (Line Islands, +14).
const MAX_OFFSET_HOURS: f64 = 14.0;

/// Local calendar date and clock time with a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    #[serde(default)]
    pub second: f64,
    /// Offset from UTC in hours, east positive.
    #[serde(default)]
    pub utc_offset_hours: f64,
}

impl CivilTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }

    /// Check that the fields form a real instant.
    pub fn validate(&self) -> Result<(), TimeError> {
        if NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 || self.minute > 59 || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            });
        }
        if !self.utc_offset_hours.is_finite() || self.utc_offset_hours.abs() > MAX_OFFSET_HOURS {
            return Err(TimeError::InvalidOffset(self.utc_offset_hours));
        }
        Ok(())
    }

    /// Local clock time as hours since local midnight.
    pub fn local_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Convert to a UT Julian Date after validation.
    pub fn to_jd_ut(&self) -> Result<f64, TimeError> {
        self.validate()?;
        let ut_hours = self.local_hours() - self.utc_offset_hours;
        Ok(calendar_to_jd(self.year, self.month, self.day as f64 + ut_hours / 24.0))
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total_minutes = (self.utc_offset_hours * 60.0).round() as i32;
        let sign = if total_minutes < 0 { '-' } else { '+' };
        let abs = total_minutes.unsigned_abs();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{sign}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second as u32,
            abs / 60,
            abs % 60
        )
    }
}

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// 0 = Sunday .. 6 = Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Self {
        ALL_WEEKDAYS[(i % 7) as usize]
    }
}

/// Weekday of the civil day containing `jd` (for a UT JD this is the UT day;
/// callers shift by the UTC offset first for a local weekday).
pub fn weekday_from_jd(jd: f64) -> Weekday {
    let n = (jd + 1.5).floor().rem_euclid(7.0) as u8;
    Weekday::from_index(n)
}

/// Convert a UT Julian Date to a `chrono` UTC timestamp (millisecond
/// resolution).
pub fn jd_to_datetime(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::UnrepresentableJd(jd));
    }
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if millis.abs() > i64::MAX as f64 {
        return Err(TimeError::UnrepresentableJd(jd));
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64).ok_or(TimeError::UnrepresentableJd(jd))
}
