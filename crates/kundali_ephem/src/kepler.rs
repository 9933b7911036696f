//! Heliocentric planet positions from mean Keplerian elements.
//!
//! Elements and secular rates are the 1800–2050 fit published by JPL
//! (Standish, "Keplerian Elements for Approximate Positions of the Major
//! Planets"), referred to the mean ecliptic and equinox of J2000.0.
//! Accuracy is a few arcminutes for the inner planets and up to ~10′ for
//! Saturn inside the fit interval.

/// Earliest JD of the element fit (1800-01-01).
pub const FIT_START_JD: f64 = 2_378_496.5;

/// Latest JD of the element fit (2050-12-31).
pub const FIT_END_JD: f64 = 2_470_171.5;

/// Orbits available in the element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orbit {
    Mercury,
    Venus,
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
}

/// `[value at J2000, rate per Julian century]` for
/// a (au), e, I (deg), L (deg), ϖ (deg), Ω (deg).
type Elements = [[f64; 2]; 6];

#[rustfmt::skip]
const ELEMENTS: [Elements; 6] = [
    // Mercury
    [[0.38709927, 0.00000037], [0.20563593, 0.00001906], [7.00497902, -0.00594749],
     [252.25032350, 149472.67411175], [77.45779628, 0.16047689], [48.33076593, -0.12534081]],
    // Venus
    [[0.72333566, 0.00000390], [0.00677672, -0.00004107], [3.39467605, -0.00078890],
     [181.97909950, 58517.81538729], [131.60246718, 0.00268329], [76.67984255, -0.27769418]],
    // Earth-Moon barycenter
    [[1.00000261, 0.00000562], [0.01671123, -0.00004392], [-0.00001531, -0.01294668],
     [100.46457166, 35999.37244981], [102.93768193, 0.32327364], [0.0, 0.0]],
    // Mars
    [[1.52371034, 0.00001847], [0.09339410, 0.00007882], [1.84969142, -0.00813131],
     [-4.55343205, 19140.30268499], [-23.94362959, 0.44441088], [49.55953891, -0.29257343]],
    // Jupiter
    [[5.20288700, -0.00011607], [0.04838624, -0.00013253], [1.30439695, -0.00183714],
     [34.39644051, 3034.74612775], [14.72847983, 0.21252668], [100.47390909, 0.20469106]],
    // Saturn
    [[9.53667594, -0.00125060], [0.05386179, -0.00050991], [2.48599187, 0.00193609],
     [49.95424423, 1222.49362201], [92.59887831, -0.41897216], [113.66242448, -0.28867794]],
];

impl Orbit {
    const fn table_index(self) -> usize {
        match self {
            Self::Mercury => 0,
            Self::Venus => 1,
            Self::EarthMoonBarycenter => 2,
            Self::Mars => 3,
            Self::Jupiter => 4,
            Self::Saturn => 5,
        }
    }
}

/// Solve Kepler's equation `M = E − e·sin E` by Newton iteration.
pub fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly_rad + e * mean_anomaly_rad.sin();
    for _ in 0..30 {
        let delta = (mean_anomaly_rad - (ecc_anomaly - e * ecc_anomaly.sin()))
            / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly += delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc_anomaly
}

/// Heliocentric ecliptic J2000 position in AU at `t` centuries past J2000.
pub fn heliocentric_position(orbit: Orbit, t: f64) -> [f64; 3] {
    let el = &ELEMENTS[orbit.table_index()];
    let at = |k: usize| el[k][0] + el[k][1] * t;
    let (a, e, incl, mean_lon, peri_lon, node) = (at(0), at(1), at(2), at(3), at(4), at(5));

    let arg_peri = (peri_lon - node).to_radians();
    let mut m = (mean_lon - peri_lon).rem_euclid(360.0);
    if m > 180.0 {
        m -= 360.0;
    }
    let ecc_anomaly = solve_kepler(m.to_radians(), e);

    // Orbital-plane coordinates, x toward perihelion.
    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.to_radians().sin_cos();
    let (si, ci) = incl.to_radians().sin_cos();

    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_orbit_is_identity() {
        let m = 1.234;
        assert!((solve_kepler(m, 0.0) - m).abs() < 1e-12);
    }

    #[test]
    fn kepler_residual_is_small() {
        let (m, e) = (2.5, 0.2);
        let big_e = solve_kepler(m, e);
        assert!((big_e - e * big_e.sin() - m).abs() < 1e-12);
    }

    #[test]
    fn earth_distance_near_one_au() {
        let p = heliocentric_position(Orbit::EarthMoonBarycenter, 0.0);
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 0.983).abs() < 0.01, "r = {r}");
    }

    #[test]
    fn jupiter_stays_near_ecliptic() {
        for i in 0..10 {
            let p = heliocentric_position(Orbit::Jupiter, -1.0 + i as f64 * 0.15);
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((p[2] / r).abs() < 0.03);
        }
    }
}
