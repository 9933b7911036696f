//! Input checks run before any calculation.

use tracing::warn;

use kundali_ephem::Ephemeris;
use kundali_vedic::HouseSystem;

use crate::config::BirthDetails;
use crate::error::ChartError;

/// Beyond this latitude the ecliptic can lie along the horizon and
/// quadrant cusps become unstable.
const POLAR_CIRCLE_DEG: f64 = 66.56;

/// Validate birth details against `source` and return the UT Julian Date.
pub fn validate_birth(
    birth: &BirthDetails,
    house_system: HouseSystem,
    source: &dyn Ephemeris,
) -> Result<f64, ChartError> {
    let lat = birth.latitude_deg;
    let lon = birth.longitude_deg;
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(ChartError::InvalidInput(format!(
            "latitude {lat} is outside [-90, 90]"
        )));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(ChartError::InvalidInput(format!(
            "longitude {lon} is outside [-180, 180]"
        )));
    }

    let jd = birth.time.to_jd_ut()?;
    let (start, end) = source.supported_range();
    if jd < start || jd > end {
        return Err(ChartError::InvalidInput(format!(
            "{} is outside the ephemeris range (jd {start}..{end})",
            birth.time
        )));
    }

    if lat.abs() > POLAR_CIRCLE_DEG && matches!(house_system, HouseSystem::Porphyry | HouseSystem::Sripati) {
        warn!(
            latitude = lat,
            system = house_system.name(),
            "quadrant houses beyond the polar circle"
        );
    }
    Ok(jd)
}
