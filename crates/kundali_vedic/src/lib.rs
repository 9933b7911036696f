//! Pure Vedic chart mathematics.
//!
//! Everything here works on sidereal longitudes and static rule tables and
//! knows nothing about ephemerides or time zones:
//! - sign, nakshatra and pada resolution
//! - lagna, MC and pluggable house systems
//! - dignity, friendship and planetary aspects
//! - divisional (varga) charts
//! - Vimshottari dasha tree
//! - Shadbala and Ashtakavarga strength

pub mod ashtakavarga;
pub mod dasha;
pub mod dignity;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod house;
pub mod lagna;
pub mod nakshatra;
pub mod position;
pub mod rashi;
pub mod shadbala;
pub mod util;
pub mod varga;

pub use ashtakavarga::{Ashtakavarga, AshtakavargaCalculator, Bhinna, BinduTable, Sarva};
pub use dasha::{
    BirthBalance, DashaEngine, DashaHierarchy, DashaLevel, DashaNode, DashaPeriod, DashaSnapshot,
    PeriodPair, VIMSHOTTARI_CYCLE, VimshottariCycle, period_pairs, snapshot,
};
pub use dignity::{BeneficNature, Dignity, dignity_in_sign, functional_nature, natural_nature};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord, rashi_lord_by_index};
pub use house::{
    ALL_HOUSE_SYSTEMS, House, HouseCalculator, HouseContext, HouseStrategy, HouseSystem, Houses,
};
pub use lagna::{ascendant_deg, lagna_and_mc_deg, mc_deg};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use position::{PositionResolver, SiderealPosition};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude};
pub use shadbala::{
    KalaInputs, ShadbalaBreakdown, ShadbalaCalculator, ShadbalaInputs, ShadbalaRules,
    graha_percent, saptavarga_signs,
};
pub use util::{normalize_360, round1};
pub use varga::{
    DivisionalChart, DivisionalChartCalculator, DivisionalPosition, SAPTAVARGA, VargaDefinition,
    VargaRule, VargaTable,
};
