//! Tropical → sidereal position resolution.

use serde::Serialize;

use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Sidereal placement of a point.
///
/// Sign, nakshatra and pada numbers are 1-based. Degree-in-sign is in
/// [0, 30), nakshatra number in 1..=27, pada in 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiderealPosition {
    pub longitude_deg: f64,
    pub sign: Rashi,
    pub sign_number: u8,
    pub degree_in_sign: f64,
    pub nakshatra: Nakshatra,
    pub nakshatra_number: u8,
    pub pada: u8,
    pub degree_in_nakshatra: f64,
}

impl SiderealPosition {
    /// 0-based sign index for table lookups.
    pub fn sign_index(&self) -> u8 {
        self.sign.index()
    }
}

/// Stateless resolver from tropical longitude + ayanamsha.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionResolver;

impl PositionResolver {
    /// `sidereal = (tropical − ayanamsha) mod 360`, then classify.
    pub fn resolve(&self, tropical_lon_deg: f64, ayanamsha_deg: f64) -> SiderealPosition {
        self.from_sidereal(tropical_lon_deg - ayanamsha_deg)
    }

    pub fn from_sidereal(&self, sidereal_lon_deg: f64) -> SiderealPosition {
        let lon = normalize_360(sidereal_lon_deg);
        let (sign, degree_in_sign) = rashi_from_longitude(lon);
        let nak = nakshatra_from_longitude(lon);
        SiderealPosition {
            longitude_deg: lon,
            sign,
            sign_number: sign.number(),
            degree_in_sign,
            nakshatra: nak.nakshatra,
            nakshatra_number: nak.nakshatra.number(),
            pada: nak.pada,
            degree_in_nakshatra: nak.degrees_in_nakshatra,
        }
    }
}
