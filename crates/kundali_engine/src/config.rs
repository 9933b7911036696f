//! Request configuration.
//!
//! [`ChartRequest`] is what callers hand in, either built in code or read
//! from TOML. Its [`Preferences`] hold plain names; [`Preferences::resolve`]
//! turns them into typed values in one place so an unknown name is
//! rejected before any calculation starts.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use kundali_ephem::AyanamshaSystem;
use kundali_time::CivilTime;
use kundali_vedic::{HouseSystem, VargaTable};

use crate::error::ChartError;

/// Birth instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    #[serde(flatten)]
    pub time: CivilTime,
    /// Geodetic latitude, north positive.
    pub latitude_deg: f64,
    /// Longitude, east positive.
    pub longitude_deg: f64,
}

impl BirthDetails {
    pub fn new(time: CivilTime, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            time,
            latitude_deg,
            longitude_deg,
        }
    }

    /// Parse `YYYY-MM-DD` and `HH:MM[:SS]` strings.
    pub fn parse(
        date: &str,
        time: &str,
        utc_offset_hours: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, ChartError> {
        let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| ChartError::InvalidInput(format!("date {date:?}: {e}")))?;
        let t = NaiveTime::parse_from_str(time.trim(), "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M"))
            .map_err(|e| ChartError::InvalidInput(format!("time {time:?}: {e}")))?;
        let civil = CivilTime::new(
            d.year(),
            d.month(),
            d.day(),
            t.hour(),
            t.minute(),
            t.second() as f64,
            utc_offset_hours,
        );
        Ok(Self::new(civil, latitude_deg, longitude_deg))
    }
}

/// Score adjustment for each dignity band, in strength points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DignityAdjustments {
    pub exalted: f64,
    pub moolatrikona: f64,
    pub own_sign: f64,
    pub friendly: f64,
    pub neutral: f64,
    pub inimical: f64,
    pub debilitated: f64,
}

impl Default for DignityAdjustments {
    fn default() -> Self {
        Self {
            exalted: 15.0,
            moolatrikona: 10.0,
            own_sign: 8.0,
            friendly: 3.0,
            neutral: 0.0,
            inimical: -3.0,
            debilitated: -15.0,
        }
    }
}

/// Weights of the intensity model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Share of Shadbala in a lord's strength.
    pub shadbala: f64,
    /// Share of Ashtakavarga in a lord's strength.
    pub ashtakavarga: f64,
    /// Share of the Mahadasha lord in a pair's score.
    pub maha: f64,
    /// Share of the Antardasha lord in a pair's score.
    pub antar: f64,
    pub dignity: DignityAdjustments,
    pub benefic: f64,
    pub malefic: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            shadbala: 0.6,
            ashtakavarga: 0.4,
            maha: 0.7,
            antar: 0.3,
            dignity: DignityAdjustments::default(),
            benefic: 5.0,
            malefic: -5.0,
        }
    }
}

impl ScoringWeights {
    fn validate(&self) -> Result<(), ChartError> {
        let pairs = [
            ("shadbala/ashtakavarga", self.shadbala, self.ashtakavarga),
            ("maha/antar", self.maha, self.antar),
        ];
        for (name, a, b) in pairs {
            if !(a.is_finite() && b.is_finite()) || a < 0.0 || b < 0.0 || (a + b - 1.0).abs() > 1e-6 {
                return Err(ChartError::UnsupportedConfiguration(format!(
                    "{name} weights must be non-negative and sum to 1, got {a} and {b}"
                )));
            }
        }
        Ok(())
    }
}

fn default_ayanamsha() -> String {
    "lahiri".to_string()
}

fn default_house_system() -> String {
    "whole_sign".to_string()
}

fn default_divisors() -> Vec<String> {
    ["D1", "D9", "D10"].map(String::from).to_vec()
}

fn default_dasha_depth() -> u8 {
    3
}

/// User-facing preferences, by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_ayanamsha")]
    pub ayanamsha: String,
    #[serde(default = "default_house_system")]
    pub house_system: String,
    /// Divisional chart codes such as `"D9"`, `"10"` or `"navamsa"`.
    #[serde(default = "default_divisors")]
    pub divisors: Vec<String>,
    #[serde(default = "default_dasha_depth")]
    pub dasha_depth: u8,
    #[serde(default)]
    pub weights: ScoringWeights,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            ayanamsha: default_ayanamsha(),
            house_system: default_house_system(),
            divisors: default_divisors(),
            dasha_depth: default_dasha_depth(),
            weights: ScoringWeights::default(),
        }
    }
}

/// Preferences with every name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPreferences {
    pub ayanamsha: AyanamshaSystem,
    pub house_system: HouseSystem,
    pub divisors: Vec<u16>,
    pub dasha_depth: u8,
    pub weights: ScoringWeights,
}

impl Preferences {
    pub fn resolve(&self, vargas: &VargaTable) -> Result<ResolvedPreferences, ChartError> {
        let ayanamsha = AyanamshaSystem::from_name(&self.ayanamsha).ok_or_else(|| {
            ChartError::UnsupportedConfiguration(format!("unknown ayanamsha: {}", self.ayanamsha))
        })?;
        let house_system = HouseSystem::from_name(&self.house_system)?;
        let mut divisors = Vec::with_capacity(self.divisors.len());
        for code in &self.divisors {
            let d = vargas.resolve(code)?;
            if !divisors.contains(&d) {
                divisors.push(d);
            }
        }
        if !(1..=kundali_vedic::dasha::MAX_DASHA_DEPTH).contains(&self.dasha_depth) {
            return Err(ChartError::UnsupportedConfiguration(format!(
                "dasha depth {} outside 1..={}",
                self.dasha_depth,
                kundali_vedic::dasha::MAX_DASHA_DEPTH
            )));
        }
        self.weights.validate()?;
        Ok(ResolvedPreferences {
            ayanamsha,
            house_system,
            divisors,
            dasha_depth: self.dasha_depth,
            weights: self.weights,
        })
    }
}

/// One chart request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub birth: BirthDetails,
    #[serde(default)]
    pub preferences: Preferences,
}

impl ChartRequest {
    pub fn new(birth: BirthDetails, preferences: Preferences) -> Self {
        Self { birth, preferences }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ChartError> {
        Ok(toml::from_str(s)?)
    }
}
