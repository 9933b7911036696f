//! The nine grahas and sign lordship.

use serde::Serialize;

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas, excluding the lunar nodes.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Case-insensitive lookup by Sanskrit or English name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_GRAHAS.into_iter().find(|g| {
            g.name().eq_ignore_ascii_case(name) || g.english_name().eq_ignore_ascii_case(name)
        })
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Sign rulership table, indexed by 0-based sign.
pub const SIGN_LORDS: [Graha; 12] = [
    Graha::Mangal,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
    Graha::Surya,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Shani,
    Graha::Guru,
];

pub const fn rashi_lord(rashi: Rashi) -> Graha {
    SIGN_LORDS[rashi.index() as usize]
}

/// Lord of a 0-based sign index; indices wrap modulo 12.
pub const fn rashi_lord_by_index(rashi_index: u8) -> Graha {
    SIGN_LORDS[(rashi_index % 12) as usize]
}

/// The n-th sign counted from `rashi_index` (0-based sign, 1-based count).
///
/// `nth_rashi_from(0, 1)` is the same sign, `nth_rashi_from(0, 12)` the previous.
pub fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((rashi_index as u16 + offset as u16 + 11) % 12) as u8
}
