//! Dasha balance remaining at birth.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

use super::cycle::VimshottariCycle;

/// Where the Moon sits at birth and what is left of the first lord's period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthBalance {
    pub nakshatra: Nakshatra,
    pub lord: Graha,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    pub balance_years: f64,
}

pub fn birth_balance(cycle: &VimshottariCycle, moon_sidereal_lon: f64) -> BirthBalance {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let lord = cycle.lord_of_nakshatra(info.nakshatra.index());
    let elapsed_fraction = info.elapsed_fraction();
    BirthBalance {
        nakshatra: info.nakshatra,
        lord,
        elapsed_fraction,
        balance_years: cycle.years(lord) * (1.0 - elapsed_fraction),
    }
}
