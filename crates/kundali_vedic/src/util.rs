//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs can round up to exactly 360.0 after the shift;
/// those are folded back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Forward arc from `a` to `b` in degrees, [0, 360).
pub fn arc_forward(a: f64, b: f64) -> f64 {
    normalize_360(b - a)
}

/// Shortest separation between two longitudes, [0, 180].
pub fn separation(a: f64, b: f64) -> f64 {
    let d = arc_forward(a, b);
    if d > 180.0 { 360.0 - d } else { d }
}

/// Sign index (0-based) containing a longitude.
pub fn sign_index_of(lon: f64) -> u8 {
    ((normalize_360(lon) / 30.0).floor() as u8).min(11)
}

/// Round to one decimal place.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
