//! Graha dignity, friendship and natural classification.
//!
//! Everything here is driven by the immutable tables at the top of the
//! module, indexed by `Graha::index()` for the seven classical grahas.
//! The lunar nodes have no classical dignity and are treated as neutral.

use serde::Serialize;

use crate::graha::{Graha, rashi_lord_by_index};
use crate::util::{normalize_360, sign_index_of};

/// Exaltation point (sidereal degrees) of each classical graha.
/// Debilitation is the opposite point.
pub const EXALTATION_DEG: [f64; 7] = [10.0, 33.0, 298.0, 165.0, 95.0, 357.0, 200.0];

/// Degrees of the exaltation sign, from 0°, that count as exalted.
/// Chandra and Buddh share that sign with their moolatrikona.
pub const EXALTATION_SPAN_DEG: [f64; 7] = [30.0, 3.0, 30.0, 15.0, 30.0, 30.0, 30.0];

/// Moolatrikona as `(sign index, start°, end°)` within the sign.
pub const MOOLATRIKONA: [(u8, f64, f64); 7] = [
    (4, 0.0, 20.0),
    (1, 4.0, 20.0),
    (0, 0.0, 12.0),
    (5, 16.0, 20.0),
    (8, 0.0, 10.0),
    (6, 0.0, 15.0),
    (10, 0.0, 20.0),
];

/// Signs owned by each classical graha (0-based indices).
pub const OWN_SIGNS: [&[u8]; 7] = [&[4], &[3], &[0, 7], &[2, 5], &[8, 11], &[1, 6], &[9, 10]];

/// Natural friendship: +1 friend, 0 neutral, −1 enemy. Row = graha, column = other.
pub const NATURAL_FRIENDSHIP: [[i8; 7]; 7] = [
    [0, 1, 1, 0, 1, -1, -1],
    [1, 0, 0, 1, 0, 0, 0],
    [1, 1, 0, -1, 1, 0, 0],
    [1, -1, 0, 0, 0, 1, 0],
    [1, 1, 1, -1, 0, -1, 0],
    [-1, -1, 0, 1, 0, 0, 1],
    [-1, -1, -1, 1, 0, 1, 0],
];

/// Weekday lords, Sunday first.
pub const WEEKDAY_LORDS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Descending orbital order used to step through horas.
const CHALDEAN_ORDER: [Graha; 7] = [
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaturalRelation {
    Friend,
    Neutral,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalRelation {
    Friend,
    Enemy,
}

/// Dignity of a graha in a sign, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dignity {
    Exalted,
    Moolatrikone,
    OwnSign,
    AdhiMitra,
    Mitra,
    Sama,
    Shatru,
    AdhiShatru,
    Debilitated,
}

impl Dignity {
    /// Lower-case label used in reasoning text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exalted => "exalted",
            Self::Moolatrikone => "moolatrikona",
            Self::OwnSign => "own sign",
            Self::AdhiMitra => "great friend's sign",
            Self::Mitra => "friend's sign",
            Self::Sama => "neutral sign",
            Self::Shatru => "enemy's sign",
            Self::AdhiShatru => "great enemy's sign",
            Self::Debilitated => "debilitated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

impl BeneficNature {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Benefic => "benefic",
            Self::Malefic => "malefic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Neuter,
}

pub const fn natural_relation(graha: Graha, other: Graha) -> NaturalRelation {
    if graha.is_node() || other.is_node() {
        return NaturalRelation::Neutral;
    }
    match NATURAL_FRIENDSHIP[graha.index() as usize][other.index() as usize] {
        1 => NaturalRelation::Friend,
        -1 => NaturalRelation::Enemy,
        _ => NaturalRelation::Neutral,
    }
}

/// Friend if `other` sits in the 2nd, 3rd, 4th, 10th, 11th or 12th sign from `graha`.
pub fn temporal_relation(graha_sign: u8, other_sign: u8) -> TemporalRelation {
    match (other_sign as i16 - graha_sign as i16).rem_euclid(12) {
        1 | 2 | 3 | 9 | 10 | 11 => TemporalRelation::Friend,
        _ => TemporalRelation::Enemy,
    }
}

/// Five-fold compound relationship expressed as the matching dignity.
pub fn compound_relation(natural: NaturalRelation, temporal: TemporalRelation) -> Dignity {
    use NaturalRelation as N;
    use TemporalRelation as T;
    match (natural, temporal) {
        (N::Friend, T::Friend) => Dignity::AdhiMitra,
        (N::Neutral, T::Friend) => Dignity::Mitra,
        (N::Friend, T::Enemy) | (N::Enemy, T::Friend) => Dignity::Sama,
        (N::Neutral, T::Enemy) => Dignity::Shatru,
        (N::Enemy, T::Enemy) => Dignity::AdhiShatru,
    }
}

pub fn exaltation_deg(graha: Graha) -> Option<f64> {
    (!graha.is_node()).then(|| EXALTATION_DEG[graha.index() as usize])
}

pub fn debilitation_deg(graha: Graha) -> Option<f64> {
    exaltation_deg(graha).map(|e| normalize_360(e + 180.0))
}

pub fn own_signs(graha: Graha) -> &'static [u8] {
    if graha.is_node() {
        &[]
    } else {
        OWN_SIGNS[graha.index() as usize]
    }
}

fn in_moolatrikona(graha: Graha, sidereal_lon: f64) -> bool {
    if graha.is_node() {
        return false;
    }
    let (sign, start, end) = MOOLATRIKONA[graha.index() as usize];
    let lon = normalize_360(sidereal_lon);
    if sign_index_of(lon) != sign {
        return false;
    }
    let within = lon - sign as f64 * 30.0;
    within >= start && within < end
}

/// Dignity of `graha` placed in sign `sign_index`.
///
/// `sidereal_lon` decides exaltation and moolatrikona; `sign_index` is the
/// sign being judged, which differs from the longitude's sign when scoring
/// divisional placements. `positions` holds the sign of each classical
/// graha in the same chart, for the temporal half of the compound
/// relationship with the sign lord.
pub fn dignity_in_sign(
    graha: Graha,
    sidereal_lon: f64,
    sign_index: u8,
    positions: &[u8; 7],
) -> Dignity {
    if graha.is_node() {
        return Dignity::Sama;
    }
    let gi = graha.index() as usize;
    let exalt_sign = (EXALTATION_DEG[gi] / 30.0) as u8;
    let debil_sign = (exalt_sign + 6) % 12;
    let same_sign = sign_index == sign_index_of(sidereal_lon);
    let within_exalt_sign = normalize_360(sidereal_lon) - exalt_sign as f64 * 30.0;
    if sign_index == exalt_sign && (!same_sign || within_exalt_sign < EXALTATION_SPAN_DEG[gi]) {
        return Dignity::Exalted;
    }
    if sign_index == debil_sign {
        return Dignity::Debilitated;
    }
    if same_sign && in_moolatrikona(graha, sidereal_lon) {
        return Dignity::Moolatrikone;
    }
    if OWN_SIGNS[gi].contains(&sign_index) {
        return Dignity::OwnSign;
    }

    let lord = rashi_lord_by_index(sign_index);
    let natural = natural_relation(graha, lord);
    let temporal = temporal_relation(positions[gi], positions[lord.index() as usize]);
    compound_relation(natural, temporal)
}

pub const fn natural_nature(graha: Graha) -> BeneficNature {
    match graha {
        Graha::Chandra | Graha::Buddh | Graha::Guru | Graha::Shukra => BeneficNature::Benefic,
        Graha::Surya | Graha::Mangal | Graha::Shani | Graha::Rahu | Graha::Ketu => {
            BeneficNature::Malefic
        }
    }
}

/// The Moon is benefic once it is at least 72° from the Sun on either side.
pub fn moon_nature(moon_sun_elongation: f64) -> BeneficNature {
    let elong = normalize_360(moon_sun_elongation);
    let phase = if elong <= 180.0 { elong } else { 360.0 - elong };
    if phase >= 72.0 {
        BeneficNature::Benefic
    } else {
        BeneficNature::Malefic
    }
}

/// Nature used by strength rules: Moon by phase, Mercury follows the Moon.
pub fn functional_nature(graha: Graha, moon_sun_elongation: f64) -> BeneficNature {
    match graha {
        Graha::Chandra | Graha::Buddh => moon_nature(moon_sun_elongation),
        _ => natural_nature(graha),
    }
}

pub const fn gender(graha: Graha) -> Gender {
    match graha {
        Graha::Surya | Graha::Mangal | Graha::Guru => Gender::Male,
        Graha::Chandra | Graha::Shukra => Gender::Female,
        Graha::Buddh | Graha::Shani | Graha::Rahu | Graha::Ketu => Gender::Neuter,
    }
}

/// Lord of the `hora_index`-th planetary hour (0 = first hour after sunrise).
pub fn hora_lord(weekday_lord: Graha, hora_index: u8) -> Graha {
    let start = CHALDEAN_ORDER
        .iter()
        .position(|g| *g == weekday_lord)
        .unwrap_or(3);
    CHALDEAN_ORDER[(start + hora_index as usize) % 7]
}
