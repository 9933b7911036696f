//! Ephemeris error types.

use thiserror::Error;

use crate::Body;

/// Errors returned by an [`Ephemeris`](crate::Ephemeris) implementation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The instant is outside the span the source can evaluate.
    #[error("julian date {jd} is outside the supported range {start}..{end}")]
    OutOfRange { jd: f64, start: f64, end: f64 },

    /// The instant is NaN or infinite.
    #[error("julian date must be finite")]
    NonFiniteEpoch,

    /// The source has no data for this body.
    #[error("no ephemeris data for {0}")]
    NoData(Body),

    /// The source produced a non-finite coordinate.
    #[error("ephemeris produced a non-finite value for {0}")]
    Degenerate(Body),
}
