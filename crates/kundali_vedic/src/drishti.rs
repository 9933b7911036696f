//! Planetary aspect strength (virupa drishti).
//!
//! Strength is a piecewise-linear function of the forward arc from the
//! aspecting graha to the target, plus a bonus for the special aspects of
//! Mars, Jupiter and Saturn. Full aspect is 60 virupas.

use crate::graha::Graha;
use crate::util::arc_forward;

/// `(graha, arc windows, bonus)` for the special aspects.
const SPECIAL_ASPECTS: [(Graha, [(f64, f64); 2], f64); 3] = [
    (Graha::Mangal, [(90.0, 120.0), (210.0, 240.0)], 15.0),
    (Graha::Guru, [(120.0, 150.0), (240.0, 270.0)], 30.0),
    (Graha::Shani, [(60.0, 90.0), (270.0, 300.0)], 45.0),
];

/// Base virupa for a forward arc in degrees.
///
/// 0 below 30°, rising to 45 at 90°, back to 0 at 150°, 60 at 180°,
/// then falling linearly to 0 at 300°.
pub fn base_virupa(arc_deg: f64) -> f64 {
    let a = arc_deg.rem_euclid(360.0);
    match a {
        a if a < 30.0 => 0.0,
        a if a < 90.0 => (a - 30.0) * 0.75,
        a if a < 150.0 => 45.0 - (a - 90.0) * 0.75,
        a if a < 180.0 => (a - 150.0) * 2.0,
        a if a < 300.0 => 60.0 - (a - 180.0) * 0.5,
        _ => 0.0,
    }
}

/// Bonus virupa for a graha's special aspect at this arc.
pub fn special_virupa(graha: Graha, arc_deg: f64) -> f64 {
    let a = arc_deg.rem_euclid(360.0);
    SPECIAL_ASPECTS
        .iter()
        .find(|(g, _, _)| *g == graha)
        .filter(|(_, windows, _)| windows.iter().any(|(lo, hi)| (*lo..*hi).contains(&a)))
        .map_or(0.0, |(_, _, bonus)| *bonus)
}

/// Total aspect strength from `source_lon` (ruled by `graha`) onto `target_lon`.
pub fn drishti_virupa(graha: Graha, source_lon: f64, target_lon: f64) -> f64 {
    let arc = arc_forward(source_lon, target_lon);
    base_virupa(arc) + special_virupa(graha, arc)
}
