//! Request-level errors.
//!
//! Lower layers have their own error enums; they are folded into the
//! three categories a caller can act on, exposed through [`ChartError::kind`].

use serde::Serialize;
use thiserror::Error;

use kundali_ephem::{Body, EphemerisError};
use kundali_time::TimeError;
use kundali_vedic::VedicError;

/// Coarse error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    InvalidInput,
    UnsupportedConfiguration,
    EphemerisUnavailable,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::InvalidInput => "invalid input",
            Self::UnsupportedConfiguration => "unsupported configuration",
            Self::EphemerisUnavailable => "ephemeris unavailable",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth details or a request file that cannot describe a real chart.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A name in the preferences that does not resolve.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// The ephemeris failed for one body; the whole request is abandoned.
    #[error("ephemeris unavailable for {body} at jd {jd}: {source}")]
    EphemerisUnavailable {
        body: Body,
        jd: f64,
        #[source]
        source: EphemerisError,
    },

    /// The ephemeris could not supply the ayanamsha.
    #[error("ayanamsha {system} unavailable at jd {jd}: {source}")]
    AyanamshaUnavailable {
        system: &'static str,
        jd: f64,
        #[source]
        source: EphemerisError,
    },
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::UnsupportedConfiguration(_) => ErrorKind::UnsupportedConfiguration,
            Self::EphemerisUnavailable { .. } | Self::AyanamshaUnavailable { .. } => {
                ErrorKind::EphemerisUnavailable
            }
        }
    }

    pub(crate) fn ephemeris(body: Body, jd: f64) -> impl FnOnce(EphemerisError) -> Self {
        move |source| Self::EphemerisUnavailable { body, jd, source }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::UnknownHouseSystem(_)
            | VedicError::UnsupportedDivisor(_)
            | VedicError::DashaDepth { .. } => Self::UnsupportedConfiguration(e.to_string()),
            _ => Self::InvalidInput(e.to_string()),
        }
    }
}

impl From<toml::de::Error> for ChartError {
    fn from(e: toml::de::Error) -> Self {
        Self::InvalidInput(format!("request file: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vedic_errors_map_to_categories() {
        let e: ChartError = VedicError::UnknownHouseSystem("koch".into()).into();
        assert_eq!(e.kind(), ErrorKind::UnsupportedConfiguration);
        let e: ChartError = VedicError::NonFinite("longitude").into();
        assert_eq!(e.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn time_errors_are_invalid_input() {
        let e: ChartError = TimeError::InvalidOffset(20.0).into();
        assert_eq!(e.kind(), ErrorKind::InvalidInput);
        assert!(e.to_string().contains("utc offset"));
    }

    #[test]
    fn ephemeris_error_keeps_body() {
        let e = ChartError::ephemeris(Body::Saturn, 2_451_545.0)(EphemerisError::NoData(Body::Saturn));
        assert_eq!(e.kind(), ErrorKind::EphemerisUnavailable);
        assert!(e.to_string().contains("Saturn"));
    }
}
