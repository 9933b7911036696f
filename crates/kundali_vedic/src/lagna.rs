//! Lagna (ascendant) and MC from local sidereal time.
//!
//! Standard spherical astronomy (Meeus, ch. 13). Inputs are the local
//! sidereal time, geographic latitude and the obliquity of the ecliptic;
//! outputs are ecliptic longitudes of date in degrees, [0, 360).

use crate::util::normalize_360;

/// Ecliptic longitude of the ascendant.
///
/// `Asc = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))`, which picks the
/// eastern intersection of the horizon and the ecliptic.
pub fn ascendant_deg(lst_rad: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    normalize_360(asc.to_degrees())
}

/// Ecliptic longitude of the midheaven: `atan2(sin θ, cos θ·cos ε)`.
pub fn mc_deg(lst_rad: f64, obliquity_deg: f64) -> f64 {
    let eps = obliquity_deg.to_radians();
    normalize_360(f64::atan2(lst_rad.sin(), lst_rad.cos() * eps.cos()).to_degrees())
}

/// Ascendant and MC together.
pub fn lagna_and_mc_deg(lst_rad: f64, latitude_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    (
        ascendant_deg(lst_rad, latitude_deg, obliquity_deg),
        mc_deg(lst_rad, obliquity_deg),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::arc_forward;

    const OBLIQUITY: f64 = 23.4393;

    #[test]
    fn equator_at_zero_lst() {
        // θ = 0 on the equator: MC at 0° Aries, ascendant at 90°.
        let (asc, mc) = lagna_and_mc_deg(0.0, 0.0, OBLIQUITY);
        assert!((asc - 90.0).abs() < 1e-9, "asc = {asc}");
        assert!(mc.abs() < 1e-9 || (mc - 360.0).abs() < 1e-9, "mc = {mc}");
    }

    #[test]
    fn ascendant_leads_mc() {
        // The ascendant is always in the quadrant east of the MC.
        for step in 0..24 {
            let lst = step as f64 * 15.0_f64.to_radians();
            for lat in [-50.0, -20.0, 0.0, 28.6, 55.0] {
                let (asc, mc) = lagna_and_mc_deg(lst, lat, OBLIQUITY);
                let arc = arc_forward(mc, asc);
                assert!(arc > 0.0 && arc < 180.0, "lst {step}h lat {lat}: arc {arc}");
            }
        }
    }

    #[test]
    fn quarter_turn_on_equator() {
        // θ = 90°: MC at 90°, ascendant on the equator at 180°.
        let (asc, mc) = lagna_and_mc_deg(std::f64::consts::FRAC_PI_2, 0.0, OBLIQUITY);
        assert!((mc - 90.0).abs() < 1e-9);
        assert!((asc - 180.0).abs() < 1e-9);
    }
}
