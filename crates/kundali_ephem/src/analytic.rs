//! Closed-form ephemeris: Keplerian planets, periodic-term Moon, mean node.

use kundali_time::jd_to_centuries;

use crate::error::EphemerisError;
use crate::frames::{general_precession_deg, mean_node_deg};
use crate::kepler::{FIT_END_JD, FIT_START_JD, Orbit, heliocentric_position};
use crate::moon::{KM_PER_AU, lunar_coordinates};
use crate::{Body, BodyState, Ephemeris};

/// Half-width of the symmetric difference used for speeds, in days.
const SPEED_HALF_STEP_DAYS: f64 = 0.5;

/// Low-precision analytical ephemeris valid 1800-01-01 .. 2050-12-31.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// `(longitude°, latitude°, distance AU)` of date, no speed.
    fn ecliptic(&self, body: Body, jd_ut: f64) -> (f64, f64, f64) {
        let t = jd_to_centuries(jd_ut);
        match body {
            Body::Moon => {
                let c = lunar_coordinates(t);
                (c.longitude_deg, c.latitude_deg, c.distance_km / KM_PER_AU)
            }
            Body::MeanNode => (mean_node_deg(t), 0.0, 0.0),
            _ => {
                let earth = heliocentric_position(Orbit::EarthMoonBarycenter, t);
                let geo = match planet_orbit(body) {
                    Some(orbit) => {
                        let p = heliocentric_position(orbit, t);
                        [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]]
                    }
                    None => [-earth[0], -earth[1], -earth[2]],
                };
                let rho = (geo[0] * geo[0] + geo[1] * geo[1]).sqrt();
                let lon_j2000 = geo[1].atan2(geo[0]).to_degrees();
                let lat = geo[2].atan2(rho).to_degrees();
                let dist = (rho * rho + geo[2] * geo[2]).sqrt();
                ((lon_j2000 + general_precession_deg(t)).rem_euclid(360.0), lat, dist)
            }
        }
    }
}

fn planet_orbit(body: Body) -> Option<Orbit> {
    match body {
        Body::Mercury => Some(Orbit::Mercury),
        Body::Venus => Some(Orbit::Venus),
        Body::Mars => Some(Orbit::Mars),
        Body::Jupiter => Some(Orbit::Jupiter),
        Body::Saturn => Some(Orbit::Saturn),
        Body::Sun | Body::Moon | Body::MeanNode => None,
    }
}

/// Signed shortest arc from `a` to `b` in degrees, (-180, 180].
fn signed_arc(a: f64, b: f64) -> f64 {
    let d = (b - a).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

impl Ephemeris for AnalyticEphemeris {
    fn name(&self) -> &'static str {
        "analytic"
    }

    fn supported_range(&self) -> (f64, f64) {
        (FIT_START_JD, FIT_END_JD)
    }

    fn body_state(&self, body: Body, jd_ut: f64) -> Result<BodyState, EphemerisError> {
        self.check_epoch(jd_ut)?;

        let (lon, lat, dist) = self.ecliptic(body, jd_ut);
        let (before, _, _) = self.ecliptic(body, jd_ut - SPEED_HALF_STEP_DAYS);
        let (after, _, _) = self.ecliptic(body, jd_ut + SPEED_HALF_STEP_DAYS);
        let speed = signed_arc(before, after) / (2.0 * SPEED_HALF_STEP_DAYS);

        if !(lon.is_finite() && lat.is_finite() && dist.is_finite() && speed.is_finite()) {
            return Err(EphemerisError::Degenerate(body));
        }
        Ok(BodyState {
            longitude_deg: lon,
            latitude_deg: lat,
            distance_au: dist,
            speed_deg_per_day: speed,
            retrograde: speed < 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const J2000: f64 = 2_451_545.0;

    #[test]
    fn sun_at_j2000() {
        // Apparent λ☉ ≈ 280.37°; geometric mean-of-date ≈ 280.38°
        let s = AnalyticEphemeris.body_state(Body::Sun, J2000).unwrap();
        assert!((s.longitude_deg - 280.38).abs() < 0.05, "λ = {}", s.longitude_deg);
        assert!((s.speed_deg_per_day - 1.019).abs() < 0.01);
        assert!(!s.retrograde);
    }

    #[test]
    fn node_is_always_retrograde() {
        let s = AnalyticEphemeris.body_state(Body::MeanNode, J2000).unwrap();
        assert!(s.retrograde);
        assert!((s.speed_deg_per_day + 0.0529).abs() < 0.001);
    }

    #[test]
    fn moon_speed_is_plausible() {
        for i in 0..30 {
            let s = AnalyticEphemeris.body_state(Body::Moon, J2000 + i as f64).unwrap();
            assert!((11.5..15.5).contains(&s.speed_deg_per_day), "speed {}", s.speed_deg_per_day);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        let err = AnalyticEphemeris.body_state(Body::Sun, 2_300_000.0).unwrap_err();
        assert!(matches!(err, EphemerisError::OutOfRange { .. }));
        let err = AnalyticEphemeris.body_state(Body::Sun, f64::NAN).unwrap_err();
        assert_eq!(err, EphemerisError::NonFiniteEpoch);
    }

    #[test]
    fn signed_arc_wraps() {
        assert!((signed_arc(359.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((signed_arc(1.0, 359.0) + 2.0).abs() < 1e-12);
    }
}
