//! Rashi (zodiac sign) classification.
//!
//! 12 equal signs of 30°, Mesha at 0° sidereal. Signs carry a 0-based
//! `index()` for table lookups and a 1-based `number()` for output.

use serde::Serialize;

use crate::util::{normalize_360, sign_index_of};

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Triplicity of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number (Mesha = 1).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Sign from a 0-based index; wraps modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Sign from a 1-based number, `None` outside 1..=12.
    pub const fn from_number(number: u8) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(ALL_RASHIS[(number - 1) as usize])
        } else {
            None
        }
    }

    /// Odd signs in the 1-based sense: Mesha, Mithuna, Simha ...
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

/// Sign containing a sidereal longitude, with the offset into it.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> (Rashi, f64) {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = sign_index_of(lon);
    let within = (lon - idx as f64 * 30.0).clamp(0.0, 30.0 - f64::EPSILON * 32.0);
    (Rashi::from_index(idx), within)
}
