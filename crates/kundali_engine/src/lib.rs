//! Chart requests end to end.
//!
//! Resolves preferences, validates birth details, pulls positions from an
//! [`kundali_ephem::Ephemeris`] and runs every calculator in
//! `kundali_vedic` to produce one [`ChartResult`], including the
//! life-area intensity table.

pub mod chart;
pub mod config;
pub mod error;
pub mod intensity;
pub mod kala;
pub mod validation;

pub use chart::{
    AscendantInfo, AyanamshaInfo, ChartCalculator, ChartResult, DashaPeriodView, DashaView,
    PlanetPlacement, StrengthScore, graha_to_body,
};
pub use config::{
    BirthDetails, ChartRequest, DignityAdjustments, Preferences, ResolvedPreferences,
    ScoringWeights,
};
pub use error::{ChartError, ErrorKind};
pub use intensity::{
    ALL_LIFE_AREAS, GrahaProfile, IntensityRecord, IntensityScoringEngine, LifeArea, LordStrength,
};
pub use validation::validate_birth;
