//! The 27 nakshatras and their padas.
//!
//! Each nakshatra spans 13°20′, each pada 3°20′. Ashwini begins at 0°
//! sidereal. Exposed numbers are 1-based (Ashwini = 1, pada 1..=4).

use serde::Serialize;

use crate::util::normalize_360;

/// Span of one nakshatra in degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada in degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Ashwini = 1, Revati = 27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada within the nakshatra, 1..=4.
    pub pada: u8,
    /// Degrees into the nakshatra, [0, 13.333…).
    pub degrees_in_nakshatra: f64,
}

impl NakshatraInfo {
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fn elapsed_fraction(&self) -> f64 {
        (self.degrees_in_nakshatra / NAKSHATRA_SPAN).clamp(0.0, 1.0)
    }
}

/// Nakshatra and pada of a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra = (lon - idx as f64 * NAKSHATRA_SPAN).max(0.0);
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8 + 1).clamp(1, 4);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        pada,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ashwini_starts_at_zero() {
        let n = nakshatra_from_longitude(0.0);
        assert_eq!(n.nakshatra, Nakshatra::Ashwini);
        assert_eq!(n.nakshatra.number(), 1);
        assert_eq!(n.pada, 1);
    }

    #[test]
    fn revati_ends_below_360() {
        let n = nakshatra_from_longitude(359.999_999);
        assert_eq!(n.nakshatra, Nakshatra::Revati);
        assert_eq!(n.nakshatra.number(), 27);
        assert_eq!(n.pada, 4);
    }

    #[test]
    fn exact_boundaries() {
        for i in 0..27u8 {
            let n = nakshatra_from_longitude(i as f64 * NAKSHATRA_SPAN);
            let num = n.nakshatra.number();
            assert!(num == i + 1 || num == i, "boundary {i}: got {num}");
            assert!((1..=4).contains(&n.pada));
        }
    }

    #[test]
    fn pada_quarters() {
        let base = 12.0 * NAKSHATRA_SPAN;
        for q in 0..4u8 {
            let lon = base + (q as f64 + 0.5) * PADA_SPAN;
            let n = nakshatra_from_longitude(lon);
            assert_eq!(n.nakshatra, Nakshatra::Hasta);
            assert_eq!(n.pada, q + 1);
        }
    }

    #[test]
    fn negative_wraps_to_revati() {
        assert_eq!(nakshatra_from_longitude(-1.0).nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn elapsed_fraction_midpoint() {
        let n = nakshatra_from_longitude(NAKSHATRA_SPAN / 2.0);
        assert!((n.elapsed_fraction() - 0.5).abs() < 1e-12);
    }
}
