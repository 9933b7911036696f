//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from Vedic base calculations.
///
/// Boundary arithmetic (wraparound at 360°, segment edges) never produces
/// an error; it is absorbed by normalization and clamping.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// House system name not recognised.
    #[error("unknown house system: {0}")]
    UnknownHouseSystem(String),

    /// Divisional chart code not present in the rule table.
    #[error("unsupported divisional chart: {0}")]
    UnsupportedDivisor(String),

    /// Sign number outside 1..=12.
    #[error("sign number {0} is outside 1..=12")]
    InvalidSign(u8),

    /// A non-finite angle reached a calculator.
    #[error("non-finite {0}")]
    NonFinite(&'static str),

    /// Shadbala is only defined for the seven classical grahas.
    #[error("{0} has no shadbala of its own")]
    NodeHasNoShadbala(&'static str),

    /// Requested dasha depth exceeds what the engine generates.
    #[error("dasha depth {requested} exceeds maximum {max}")]
    DashaDepth { requested: u8, max: u8 },
}
