//! Ephemeris seam for chart computation.
//!
//! Downstream crates consume positions through the [`Ephemeris`] trait and
//! never depend on a concrete source. This crate ships one source,
//! [`AnalyticEphemeris`], which evaluates closed-form series and needs no
//! data files, plus an [`EphemerisSession`] that memoizes lookups for the
//! lifetime of one request.

pub mod analytic;
pub mod ayanamsha;
pub mod error;
pub mod frames;
pub mod kepler;
pub mod moon;
pub mod session;

use serde::Serialize;

use kundali_time::jd_to_centuries;

pub use analytic::AnalyticEphemeris;
pub use ayanamsha::{ALL_AYANAMSHAS, AyanamshaSystem};
pub use error::EphemerisError;
pub use frames::{general_precession_deg, mean_obliquity_deg};
pub use session::{EphemerisSession, QueryStats};

/// Bodies an ephemeris source can be asked for.
///
/// The lunar node is a computed point rather than a physical body, but every
/// chart needs it alongside the planets so it is served through the same
/// contract. The descending node is always the ascending node + 180°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    MeanNode,
}

pub const ALL_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::MeanNode,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::MeanNode => "Mean Node",
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geocentric ecliptic state of one body at one instant.
///
/// Longitude is tropical, referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyState {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
    /// Longitude rate in degrees/day; negative while retrograde.
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
}

/// A deterministic, side-effect-free position source.
pub trait Ephemeris: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Inclusive `(first, last)` UT Julian Dates the source can evaluate.
    fn supported_range(&self) -> (f64, f64);

    /// Geocentric state of `body` at `jd_ut`.
    fn body_state(&self, body: Body, jd_ut: f64) -> Result<BodyState, EphemerisError>;

    /// Ayanamsha in degrees for `system` at `jd_ut`.
    fn ayanamsha_deg(&self, system: AyanamshaSystem, jd_ut: f64) -> Result<f64, EphemerisError> {
        self.check_epoch(jd_ut)?;
        Ok(system.value_deg(jd_to_centuries(jd_ut)))
    }

    /// Reject non-finite or out-of-range instants.
    fn check_epoch(&self, jd_ut: f64) -> Result<(), EphemerisError> {
        if !jd_ut.is_finite() {
            return Err(EphemerisError::NonFiniteEpoch);
        }
        let (start, end) = self.supported_range();
        if jd_ut < start || jd_ut > end {
            return Err(EphemerisError::OutOfRange {
                jd: jd_ut,
                start,
                end,
            });
        }
        Ok(())
    }
}
