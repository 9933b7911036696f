//! House (bhava) division strategies.
//!
//! A house system is a [`HouseStrategy`]: given the ascendant and MC it
//! yields the twelve house starting longitudes, and it decides which house
//! a longitude falls in. [`HouseSystem`] names the built-in strategies and
//! is what configuration resolves to.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::Rashi;
use crate::util::{arc_forward, normalize_360, sign_index_of};

/// Angles a house strategy may draw on. Both are sidereal longitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseContext {
    pub ascendant_deg: f64,
    pub mc_deg: f64,
}

/// A pluggable house division.
pub trait HouseStrategy: Send + Sync {
    fn system(&self) -> HouseSystem;

    /// Start longitude of houses 1..=12 (index 0 = house 1).
    fn cusps(&self, ctx: &HouseContext) -> [f64; 12];

    /// 1-based house containing `lon`, given this strategy's cusps.
    fn house_of(&self, cusps: &[f64; 12], lon: f64) -> u8 {
        house_by_arcs(cusps, lon)
    }
}

/// Built-in house systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseSystem {
    /// 30° houses starting at the ascendant degree.
    Equal,
    /// Each sign is one house, the ascendant's sign being the first.
    WholeSign,
    /// Quadrants between the angles trisected in longitude.
    Porphyry,
    /// Porphyry points taken as house middles, boundaries halfway between.
    Sripati,
}

pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 4] = [
    HouseSystem::Equal,
    HouseSystem::WholeSign,
    HouseSystem::Porphyry,
    HouseSystem::Sripati,
];

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::WholeSign => "whole-sign",
            Self::Porphyry => "porphyry",
            Self::Sripati => "sripati",
        }
    }

    /// Resolve a configuration name. Case, spaces, `-` and `_` are ignored.
    pub fn from_name(name: &str) -> Result<Self, VedicError> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "equal" | "equalhouse" => Ok(Self::Equal),
            "wholesign" | "whole" | "rashi" => Ok(Self::WholeSign),
            "porphyry" | "quadrant" => Ok(Self::Porphyry),
            "sripati" | "sripathi" => Ok(Self::Sripati),
            _ => Err(VedicError::UnknownHouseSystem(name.to_string())),
        }
    }

    pub fn strategy(self) -> &'static dyn HouseStrategy {
        match self {
            Self::Equal => &EqualHouses,
            Self::WholeSign => &WholeSignHouses,
            Self::Porphyry => &PorphyryHouses,
            Self::Sripati => &SripatiHouses,
        }
    }
}

impl std::fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub struct EqualHouses;
pub struct WholeSignHouses;
pub struct PorphyryHouses;
pub struct SripatiHouses;

impl HouseStrategy for EqualHouses {
    fn system(&self) -> HouseSystem {
        HouseSystem::Equal
    }

    fn cusps(&self, ctx: &HouseContext) -> [f64; 12] {
        std::array::from_fn(|i| normalize_360(ctx.ascendant_deg + i as f64 * 30.0))
    }
}

impl HouseStrategy for WholeSignHouses {
    fn system(&self) -> HouseSystem {
        HouseSystem::WholeSign
    }

    fn cusps(&self, ctx: &HouseContext) -> [f64; 12] {
        let first = sign_index_of(ctx.ascendant_deg) as usize;
        std::array::from_fn(|i| ((first + i) % 12) as f64 * 30.0)
    }

    fn house_of(&self, cusps: &[f64; 12], lon: f64) -> u8 {
        let first = sign_index_of(cusps[0]);
        (sign_index_of(lon) + 12 - first) % 12 + 1
    }
}

impl HouseStrategy for PorphyryHouses {
    fn system(&self) -> HouseSystem {
        HouseSystem::Porphyry
    }

    fn cusps(&self, ctx: &HouseContext) -> [f64; 12] {
        trisected_quadrants(ctx.ascendant_deg, ctx.mc_deg)
    }
}

impl HouseStrategy for SripatiHouses {
    fn system(&self) -> HouseSystem {
        HouseSystem::Sripati
    }

    fn cusps(&self, ctx: &HouseContext) -> [f64; 12] {
        let madhya = trisected_quadrants(ctx.ascendant_deg, ctx.mc_deg);
        std::array::from_fn(|i| {
            let prev = madhya[(i + 11) % 12];
            normalize_360(prev + arc_forward(prev, madhya[i]) / 2.0)
        })
    }
}

/// Ascendant, IC, descendant and MC with each quadrant cut in three.
fn trisected_quadrants(asc: f64, mc: f64) -> [f64; 12] {
    let angles = [
        normalize_360(asc),
        normalize_360(mc + 180.0),
        normalize_360(asc + 180.0),
        normalize_360(mc),
    ];
    let mut cusps = [0.0; 12];
    for (q, &start) in angles.iter().enumerate() {
        let arc = arc_forward(start, angles[(q + 1) % 4]);
        for k in 0..3 {
            cusps[q * 3 + k] = normalize_360(start + arc * k as f64 / 3.0);
        }
    }
    cusps
}

/// House whose forward arc from its cusp contains `lon`.
fn house_by_arcs(cusps: &[f64; 12], lon: f64) -> u8 {
    let mut nearest = (0usize, f64::INFINITY);
    for i in 0..12 {
        let into = arc_forward(cusps[i], lon);
        if into < arc_forward(cusps[i], cusps[(i + 1) % 12]) {
            return i as u8 + 1;
        }
        if into < nearest.1 {
            nearest = (i, into);
        }
    }
    nearest.0 as u8 + 1
}

/// One computed house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct House {
    /// 1..=12.
    pub number: u8,
    pub cusp_deg: f64,
    pub end_deg: f64,
    /// Sign the cusp falls in.
    pub sign: Rashi,
    pub sign_number: u8,
}

/// Twelve houses for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Houses {
    pub system: HouseSystem,
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    pub houses: [House; 12],
}

impl Houses {
    pub fn cusps(&self) -> [f64; 12] {
        std::array::from_fn(|i| self.houses[i].cusp_deg)
    }

    /// 1-based house containing a sidereal longitude.
    pub fn house_of(&self, sidereal_lon: f64) -> u8 {
        self.system.strategy().house_of(&self.cusps(), sidereal_lon)
    }

    /// House `number` (1..=12); out-of-range numbers wrap.
    pub fn house(&self, number: u8) -> &House {
        &self.houses[(number as usize + 11) % 12]
    }
}

/// Stateless entry point over the strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct HouseCalculator;

impl HouseCalculator {
    pub fn compute(&self, ctx: &HouseContext, strategy: &dyn HouseStrategy) -> Houses {
        let cusps = strategy.cusps(ctx);
        let houses = std::array::from_fn(|i| {
            let sign = Rashi::from_index(sign_index_of(cusps[i]));
            House {
                number: i as u8 + 1,
                cusp_deg: cusps[i],
                end_deg: cusps[(i + 1) % 12],
                sign,
                sign_number: sign.number(),
            }
        });
        Houses {
            system: strategy.system(),
            ascendant_deg: normalize_360(ctx.ascendant_deg),
            mc_deg: normalize_360(ctx.mc_deg),
            houses,
        }
    }

    pub fn compute_by_name(&self, ctx: &HouseContext, name: &str) -> Result<Houses, VedicError> {
        let system = HouseSystem::from_name(name)?;
        Ok(self.compute(ctx, system.strategy()))
    }
}
