//! Error types for calendar and civil-time handling.

use thiserror::Error;

/// Errors from civil-time validation and conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not form a real calendar date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Hour/minute/second outside the wall-clock range.
    #[error("invalid time of day {hour:02}:{minute:02}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: f64 },

    /// UTC offset outside [-14, +14] hours.
    #[error("utc offset {0} h is outside [-14, 14]")]
    InvalidOffset(f64),

    /// A Julian Date that cannot be represented as a calendar instant.
    #[error("julian date {0} is not representable")]
    UnrepresentableJd(f64),
}
