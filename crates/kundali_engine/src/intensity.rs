//! Life-area intensity scores for every (Mahadasha, Antardasha) pair.
//!
//! A lord's strength for an area blends its Shadbala percentage with its
//! Ashtakavarga percentage over the area's primary houses, then shifts by
//! dignity and nature. A pair's score weighs the Mahadasha lord over the
//! Antardasha lord and is reported on a 1..=10 scale.

use std::collections::HashMap;

use serde::Serialize;

use kundali_vedic::{Ashtakavarga, BeneficNature, Dignity, Graha, PeriodPair, rashi_lord_by_index, round1};

use crate::config::ScoringWeights;

/// Areas of life that get a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LifeArea {
    Wealth,
    Business,
    Health,
    Marriage,
    Children,
    Career,
}

pub const ALL_LIFE_AREAS: [LifeArea; 6] = [
    LifeArea::Wealth,
    LifeArea::Business,
    LifeArea::Health,
    LifeArea::Marriage,
    LifeArea::Children,
    LifeArea::Career,
];

/// Non-zero factors a single lord can contribute.
const FACTORS_PER_LORD: u8 = 5;

impl LifeArea {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wealth => "Wealth",
            Self::Business => "Business",
            Self::Health => "Health",
            Self::Marriage => "Marriage",
            Self::Children => "Children",
            Self::Career => "Career",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_LIFE_AREAS
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Houses that signify this area.
    pub const fn primary_houses(self) -> &'static [u8] {
        match self {
            Self::Wealth => &[2, 11],
            Self::Business => &[7, 10],
            Self::Health => &[1, 6],
            Self::Marriage => &[7],
            Self::Children => &[5],
            Self::Career => &[10],
        }
    }
}

/// What the scorer needs to know about one graha in the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaProfile {
    pub graha: Graha,
    /// House occupied (1..=12).
    pub house: u8,
    pub dignity: Dignity,
    pub nature: BeneficNature,
    pub shadbala_percent: f64,
}

/// Strength of one lord for one area, with its parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LordStrength {
    pub graha: Graha,
    pub shadbala_percent: f64,
    pub ashtakavarga_percent: f64,
    pub dignity_adjustment: f64,
    pub nature_adjustment: f64,
    /// Occupies or rules one of the area's primary houses.
    pub house_link: bool,
    /// Clamped to 0..=100.
    pub total: f64,
}

impl LordStrength {
    fn nonzero_factors(&self) -> u8 {
        [
            self.shadbala_percent != 0.0,
            self.ashtakavarga_percent != 0.0,
            self.dignity_adjustment != 0.0,
            self.nature_adjustment != 0.0,
            self.house_link,
        ]
        .into_iter()
        .filter(|&f| f)
        .count() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntensityRecord {
    pub maha: Graha,
    pub antar: Graha,
    pub area: LifeArea,
    pub start_jd: f64,
    pub end_jd: f64,
    /// 1.0..=10.0, one decimal.
    pub score: f64,
    /// Share of non-zero factors, 0..=1.
    pub confidence: f64,
    pub reasoning: String,
}

/// Scores pairs against a fixed chart.
#[derive(Debug)]
pub struct IntensityScoringEngine<'c> {
    weights: &'c ScoringWeights,
    ashtakavarga: &'c Ashtakavarga,
    profiles: HashMap<Graha, GrahaProfile>,
}

impl<'c> IntensityScoringEngine<'c> {
    pub fn new(
        weights: &'c ScoringWeights,
        ashtakavarga: &'c Ashtakavarga,
        profiles: impl IntoIterator<Item = GrahaProfile>,
    ) -> Self {
        Self {
            weights,
            ashtakavarga,
            profiles: profiles.into_iter().map(|p| (p.graha, p)).collect(),
        }
    }

    fn dignity_adjustment(&self, dignity: Dignity) -> f64 {
        let d = &self.weights.dignity;
        match dignity {
            Dignity::Exalted => d.exalted,
            Dignity::Moolatrikone => d.moolatrikona,
            Dignity::OwnSign => d.own_sign,
            Dignity::AdhiMitra | Dignity::Mitra => d.friendly,
            Dignity::Sama => d.neutral,
            Dignity::Shatru | Dignity::AdhiShatru => d.inimical,
            Dignity::Debilitated => d.debilitated,
        }
    }

    fn house_link(&self, profile: &GrahaProfile, houses: &[u8]) -> bool {
        let lagna = self.ashtakavarga.lagna_sign;
        houses.iter().any(|&h| {
            h == profile.house
                || (!profile.graha.is_node()
                    && rashi_lord_by_index((lagna + h - 1) % 12) == profile.graha)
        })
    }

    /// Strength of `graha` for `area`; a graha missing from the chart scores 0.
    pub fn strength(&self, graha: Graha, area: LifeArea) -> LordStrength {
        let houses = area.primary_houses();
        let Some(profile) = self.profiles.get(&graha) else {
            return LordStrength {
                graha,
                shadbala_percent: 0.0,
                ashtakavarga_percent: 0.0,
                dignity_adjustment: 0.0,
                nature_adjustment: 0.0,
                house_link: false,
                total: 0.0,
            };
        };
        let av = self.ashtakavarga.percent(graha, houses);
        let dignity_adjustment = self.dignity_adjustment(profile.dignity);
        let nature_adjustment = match profile.nature {
            BeneficNature::Benefic => self.weights.benefic,
            BeneficNature::Malefic => self.weights.malefic,
        };
        let base = self.weights.shadbala * profile.shadbala_percent + self.weights.ashtakavarga * av;
        LordStrength {
            graha,
            shadbala_percent: profile.shadbala_percent,
            ashtakavarga_percent: av,
            dignity_adjustment,
            nature_adjustment,
            house_link: self.house_link(profile, houses),
            total: (base + dignity_adjustment + nature_adjustment).clamp(0.0, 100.0),
        }
    }

    pub fn score(&self, pair: &PeriodPair, area: LifeArea) -> IntensityRecord {
        let maha = self.strength(pair.maha, area);
        let antar = self.strength(pair.antar, area);
        let weighted = self.weights.maha * maha.total + self.weights.antar * antar.total;
        let score = round1(weighted / 10.0).clamp(1.0, 10.0);
        let confidence = (maha.nonzero_factors() + antar.nonzero_factors()) as f64
            / (2 * FACTORS_PER_LORD) as f64;
        IntensityRecord {
            maha: pair.maha,
            antar: pair.antar,
            area,
            start_jd: pair.start_jd,
            end_jd: pair.end_jd,
            score,
            confidence,
            reasoning: self.reasoning(area, &maha, &antar, weighted),
        }
    }

    /// Six records per pair, areas in [`ALL_LIFE_AREAS`] order.
    pub fn score_all(&self, pairs: &[PeriodPair]) -> Vec<IntensityRecord> {
        pairs
            .iter()
            .flat_map(|p| ALL_LIFE_AREAS.into_iter().map(move |a| (p, a)))
            .map(|(p, a)| self.score(p, a))
            .collect()
    }

    fn describe(&self, s: &LordStrength, level: &str) -> String {
        match self.profiles.get(&s.graha) {
            Some(p) => format!(
                "{} {level} (house {}, {}, {})",
                s.graha.english_name(),
                p.house,
                p.dignity.label(),
                p.nature.label()
            ),
            None => format!("{} {level}", s.graha.english_name()),
        }
    }

    fn reasoning(&self, area: LifeArea, maha: &LordStrength, antar: &LordStrength, weighted: f64) -> String {
        let houses: Vec<String> = area.primary_houses().iter().map(u8::to_string).collect();
        format!(
            "{}: {} with {}; primary houses {}; combined strength {:.1}",
            area.name(),
            self.describe(maha, "Mahadasha"),
            self.describe(antar, "Antardasha"),
            houses.join(", "),
            weighted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_vedic::{AshtakavargaCalculator, BinduTable};

    const EPS: f64 = 1e-9;

    fn chart_av() -> Ashtakavarga {
        let table = BinduTable::classical();
        // Lagna Vrishabha.
        AshtakavargaCalculator::new(&table).compute(&[3, 5, 3, 3, 8, 1, 1], 1)
    }

    fn profile(graha: Graha, house: u8, dignity: Dignity, nature: BeneficNature, pct: f64) -> GrahaProfile {
        GrahaProfile {
            graha,
            house,
            dignity,
            nature,
            shadbala_percent: pct,
        }
    }

    fn pair(maha: Graha, antar: Graha) -> PeriodPair {
        PeriodPair {
            maha,
            antar,
            start_jd: 0.0,
            end_jd: 1.0,
        }
    }

    #[test]
    fn primary_houses_table() {
        assert_eq!(LifeArea::Wealth.primary_houses(), &[2, 11]);
        assert_eq!(LifeArea::Career.primary_houses(), &[10]);
        assert_eq!(ALL_LIFE_AREAS.len(), 6);
        assert_eq!(LifeArea::from_name(" marriage"), Some(LifeArea::Marriage));
        assert_eq!(LifeArea::from_name("fame"), None);
    }

    #[test]
    fn strength_blends_and_adjusts() {
        let w = ScoringWeights::default();
        let av = chart_av();
        let engine = IntensityScoringEngine::new(
            &w,
            &av,
            [profile(Graha::Guru, 10, Dignity::Exalted, BeneficNature::Benefic, 50.0)],
        );
        let s = engine.strength(Graha::Guru, LifeArea::Career);
        let expected = 0.6 * 50.0 + 0.4 * av.percent(Graha::Guru, &[10]) + 15.0 + 5.0;
        assert!((s.total - expected.min(100.0)).abs() < EPS);
        assert!(s.house_link);
        assert_eq!(s.nonzero_factors(), if s.ashtakavarga_percent > 0.0 { 5 } else { 4 });
    }

    #[test]
    fn strength_is_clamped() {
        let w = ScoringWeights::default();
        let av = chart_av();
        let engine = IntensityScoringEngine::new(
            &w,
            &av,
            [profile(Graha::Shani, 3, Dignity::Debilitated, BeneficNature::Malefic, 0.0)],
        );
        let s = engine.strength(Graha::Shani, LifeArea::Children);
        assert!(s.total >= 0.0);
    }

    #[test]
    fn lordship_counts_as_house_link() {
        let w = ScoringWeights::default();
        let av = chart_av();
        // Vrishabha lagna: house 10 is Kumbha, ruled by Shani.
        let engine = IntensityScoringEngine::new(
            &w,
            &av,
            [profile(Graha::Shani, 4, Dignity::Sama, BeneficNature::Malefic, 40.0)],
        );
        assert!(engine.strength(Graha::Shani, LifeArea::Career).house_link);
        assert!(!engine.strength(Graha::Shani, LifeArea::Children).house_link);
    }

    #[test]
    fn score_floor_and_reasoning() {
        let w = ScoringWeights::default();
        let av = chart_av();
        let engine = IntensityScoringEngine::new(&w, &av, []);
        let r = engine.score(&pair(Graha::Rahu, Graha::Ketu), LifeArea::Health);
        assert_eq!(r.score, 1.0);
        assert_eq!(r.confidence, 0.0);
        assert_eq!(
            r.reasoning,
            "Health: Rahu Mahadasha with Ketu Antardasha; primary houses 1, 6; combined strength 0.0"
        );
    }

    #[test]
    fn score_weighs_maha_over_antar() {
        let w = ScoringWeights::default();
        let av = chart_av();
        let engine = IntensityScoringEngine::new(
            &w,
            &av,
            [
                profile(Graha::Guru, 10, Dignity::Exalted, BeneficNature::Benefic, 90.0),
                profile(Graha::Shani, 3, Dignity::Debilitated, BeneficNature::Malefic, 10.0),
            ],
        );
        let a = engine.score(&pair(Graha::Guru, Graha::Shani), LifeArea::Career);
        let b = engine.score(&pair(Graha::Shani, Graha::Guru), LifeArea::Career);
        assert!(a.score > b.score);
        assert!((1.0..=10.0).contains(&a.score));
        assert_eq!(a.score, round1(a.score));
        assert!(a.reasoning.starts_with("Career: Jupiter Mahadasha (house 10, exalted, benefic) with Saturn Antardasha (house 3, debilitated, malefic)"));
    }

    #[test]
    fn six_records_per_pair() {
        let w = ScoringWeights::default();
        let av = chart_av();
        let engine = IntensityScoringEngine::new(&w, &av, []);
        let pairs = [pair(Graha::Surya, Graha::Chandra), pair(Graha::Chandra, Graha::Mangal)];
        let records = engine.score_all(&pairs);
        assert_eq!(records.len(), 12);
        assert_eq!(records[0].area, LifeArea::Wealth);
        assert_eq!(records[6].maha, Graha::Chandra);
    }
}
