//! Shadbala, the six-fold strength of the seven classical grahas.
//!
//! Components, all in shashtiamsas (1/60 rupa):
//! - sthana: uchcha, saptavargaja, ojhayugma, kendradi, drekkana
//! - dig
//! - kala: nathonnatha, paksha, tribhaga, abda, masa, vara, hora, ayana, yuddha
//! - cheshta
//! - naisargika
//! - drik
//!
//! Every constant lives in [`ShadbalaRules`], which is handed to the
//! [`ShadbalaCalculator`]. The nodes have no shadbala of their own; see
//! [`graha_percent`].

use serde::Serialize;

use crate::dignity::{
    BeneficNature, Dignity, Gender, dignity_in_sign, exaltation_deg, functional_nature, gender,
};
use crate::drishti::drishti_virupa;
use crate::error::VedicError;
use crate::graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord_by_index};
use crate::util::{normalize_360, separation, sign_index_of};
use crate::varga::{DivisionalChartCalculator, SAPTAVARGA};

/// Position of the navamsa row in saptavarga sign tables.
const NAVAMSA_ROW: usize = 4;

/// Relative weight of each component in the percentage total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentWeights {
    pub sthana: f64,
    pub dig: f64,
    pub kala: f64,
    pub cheshta: f64,
    pub naisargika: f64,
    pub drik: f64,
}

/// Immutable rule tables for shadbala, indexed by `Graha::index()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadbalaRules {
    /// Natural strength.
    pub naisargika: [f64; 7],
    /// House in which each graha has full directional strength.
    pub dig_bala_bhava: [u8; 7],
    /// Speed (deg/day) that earns full cheshta bala.
    pub max_speed: [f64; 7],
    /// Minimum total for a graha to count as strong.
    pub required: [f64; 7],
    /// Saptavargaja points per dignity, strongest first (see [`Dignity`]).
    pub saptavargaja_points: [f64; 9],
    pub weights: ComponentWeights,
    /// Practical maxima used to normalise sthana, dig, kala, cheshta, naisargika.
    pub maxima: [f64; 5],
    /// Drik bala is mapped from `[-drik_span, drik_span]` onto 0..1.
    pub drik_span: f64,
}

impl Default for ShadbalaRules {
    fn default() -> Self {
        Self::classical()
    }
}

impl ShadbalaRules {
    pub fn classical() -> Self {
        Self {
            naisargika: [60.0, 51.43, 17.14, 25.71, 34.29, 42.86, 8.57],
            dig_bala_bhava: [10, 4, 10, 1, 1, 4, 7],
            max_speed: [1.0, 15.0, 0.8, 2.2, 0.25, 1.6, 0.13],
            required: [390.0, 360.0, 300.0, 420.0, 390.0, 330.0, 300.0],
            saptavargaja_points: [30.0, 22.5, 20.0, 15.0, 10.0, 7.5, 5.0, 2.5, 1.25],
            weights: ComponentWeights {
                sthana: 0.25,
                dig: 0.15,
                kala: 0.20,
                cheshta: 0.15,
                naisargika: 0.10,
                drik: 0.15,
            },
            maxima: [375.0, 60.0, 390.0, 60.0, 60.0],
            drik_span: 60.0,
        }
    }

    fn dignity_points(&self, dignity: Dignity) -> f64 {
        let row = match dignity {
            Dignity::Exalted => 0,
            Dignity::Moolatrikone => 1,
            Dignity::OwnSign => 2,
            Dignity::AdhiMitra => 3,
            Dignity::Mitra => 4,
            Dignity::Sama => 5,
            Dignity::Shatru => 6,
            Dignity::AdhiShatru => 7,
            Dignity::Debilitated => 8,
        };
        self.saptavargaja_points[row]
    }
}

/// Temporal facts about the birth moment needed by kala bala.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KalaInputs {
    pub is_daytime: bool,
    /// Fraction (0..1) of the current day or night already elapsed.
    pub day_night_fraction: f64,
    /// Moon − Sun sidereal longitude, degrees.
    pub moon_sun_elongation: f64,
    pub year_lord: Graha,
    pub month_lord: Graha,
    pub weekday_lord: Graha,
    pub hora_lord: Graha,
    /// Declination of each classical graha, degrees.
    pub declinations: [f64; 7],
}

/// Everything the calculator reads for one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadbalaInputs {
    /// Sidereal longitudes of all nine grahas (nodes aspect too).
    pub sidereal_lons: [f64; 9],
    /// House number (1..=12) of each classical graha.
    pub bhava_numbers: [u8; 7],
    /// Longitudinal speed, deg/day.
    pub speeds: [f64; 7],
    pub kala: KalaInputs,
    /// `varga_signs[row][graha]`: sign index in each saptavarga chart.
    pub varga_signs: [[u8; 7]; 7],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SthanaBala {
    pub uchcha: f64,
    pub saptavargaja: f64,
    pub ojhayugma: f64,
    pub kendradi: f64,
    pub drekkana: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct KalaBala {
    pub nathonnatha: f64,
    pub paksha: f64,
    pub tribhaga: f64,
    pub abda: f64,
    pub masa: f64,
    pub vara: f64,
    pub hora: f64,
    pub ayana: f64,
    pub yuddha: f64,
    pub total: f64,
}

/// Full breakdown for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadbalaBreakdown {
    pub graha: Graha,
    pub sthana: SthanaBala,
    pub dig: f64,
    pub kala: KalaBala,
    pub cheshta: f64,
    pub naisargika: f64,
    pub drik: f64,
    pub total_shashtiamsas: f64,
    pub total_rupas: f64,
    pub required_strength: f64,
    pub is_strong: bool,
    /// Weighted, normalised total in 0..=100.
    pub percent: f64,
}

/// Computes shadbala against a borrowed rule table.
#[derive(Debug, Clone, Copy)]
pub struct ShadbalaCalculator<'r> {
    rules: &'r ShadbalaRules,
}

impl<'r> ShadbalaCalculator<'r> {
    pub fn new(rules: &'r ShadbalaRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r ShadbalaRules {
        self.rules
    }

    /// 60 at exaltation, falling linearly to 0 at debilitation.
    pub fn uchcha(&self, graha: Graha, sidereal_lon: f64) -> f64 {
        exaltation_deg(graha).map_or(0.0, |ex| 60.0 * (1.0 - separation(sidereal_lon, ex) / 180.0))
    }

    /// Dignity points summed over the seven saptavarga charts, each judged
    /// with that chart's own sign positions.
    pub fn saptavargaja(&self, graha: Graha, sidereal_lon: f64, varga_signs: &[[u8; 7]; 7]) -> f64 {
        if graha.is_node() {
            return 0.0;
        }
        let gi = graha.index() as usize;
        varga_signs
            .iter()
            .map(|row| self.rules.dignity_points(dignity_in_sign(graha, sidereal_lon, row[gi], row)))
            .sum()
    }

    /// 15 for the rashi and 15 for the navamsa when their parity suits the
    /// graha's gender: odd for male and neuter, even for female.
    pub fn ojhayugma(&self, graha: Graha, rashi_index: u8, navamsa_index: u8) -> f64 {
        if graha.is_node() {
            return 0.0;
        }
        let wants_odd = gender(graha) != Gender::Female;
        // Index 0 (Mesha) is an odd sign.
        let suits = |idx: u8| (idx % 2 == 0) == wants_odd;
        [rashi_index, navamsa_index]
            .into_iter()
            .filter(|&i| suits(i))
            .count() as f64
            * 15.0
    }

    /// Kendra 60, panaphara 30, apoklima 15.
    pub fn kendradi(&self, bhava_number: u8) -> f64 {
        match bhava_number {
            1 | 4 | 7 | 10 => 60.0,
            2 | 5 | 8 | 11 => 30.0,
            3 | 6 | 9 | 12 => 15.0,
            _ => 0.0,
        }
    }

    /// 15 when the decanate matches gender: male first, female second, neuter third.
    pub fn drekkana(&self, graha: Graha, sidereal_lon: f64) -> f64 {
        if graha.is_node() {
            return 0.0;
        }
        let lon = normalize_360(sidereal_lon);
        let decanate = (((lon % 30.0) / 10.0) as u8).min(2);
        let wanted = match gender(graha) {
            Gender::Male => 0,
            Gender::Female => 1,
            Gender::Neuter => 2,
        };
        if decanate == wanted { 15.0 } else { 0.0 }
    }

    pub fn sthana(&self, graha: Graha, inputs: &ShadbalaInputs) -> SthanaBala {
        if graha.is_node() {
            return SthanaBala::default();
        }
        let gi = graha.index() as usize;
        let lon = inputs.sidereal_lons[gi];
        let uchcha = self.uchcha(graha, lon);
        let saptavargaja = self.saptavargaja(graha, lon, &inputs.varga_signs);
        let ojhayugma = self.ojhayugma(
            graha,
            sign_index_of(normalize_360(lon)),
            inputs.varga_signs[NAVAMSA_ROW][gi],
        );
        let kendradi = self.kendradi(inputs.bhava_numbers[gi]);
        let drekkana = self.drekkana(graha, lon);
        SthanaBala {
            uchcha,
            saptavargaja,
            ojhayugma,
            kendradi,
            drekkana,
            total: uchcha + saptavargaja + ojhayugma + kendradi + drekkana,
        }
    }

    /// 60 in the graha's strongest house, 0 in the opposite one.
    pub fn dig(&self, graha: Graha, bhava_number: u8) -> f64 {
        if graha.is_node() || !(1..=12).contains(&bhava_number) {
            return 0.0;
        }
        let best = self.rules.dig_bala_bhava[graha.index() as usize];
        let diff = (bhava_number as i16 - best as i16).rem_euclid(12);
        let dist = diff.min(12 - diff).min(6);
        60.0 * (1.0 - dist as f64 / 6.0)
    }

    pub fn nathonnatha(&self, graha: Graha, kala: &KalaInputs) -> f64 {
        match (functional_nature(graha, kala.moon_sun_elongation), kala.is_daytime) {
            (BeneficNature::Malefic, true) | (BeneficNature::Benefic, false) => 60.0,
            _ => 0.0,
        }
    }

    /// Benefics gain towards full moon, malefics towards new moon.
    /// The Moon always counts as benefic here.
    pub fn paksha(&self, graha: Graha, moon_sun_elongation: f64) -> f64 {
        let phase = separation(moon_sun_elongation, 0.0);
        let waxing = phase / 3.0;
        let nature = if graha == Graha::Chandra {
            BeneficNature::Benefic
        } else {
            functional_nature(graha, moon_sun_elongation)
        };
        match nature {
            BeneficNature::Benefic => waxing,
            BeneficNature::Malefic => 60.0 - waxing,
        }
    }

    /// The Sun always; otherwise the lord of the current third of day or night.
    pub fn tribhaga(&self, graha: Graha, kala: &KalaInputs) -> f64 {
        if graha == Graha::Surya {
            return 60.0;
        }
        let third = ((kala.day_night_fraction.clamp(0.0, 1.0) * 3.0) as usize).min(2);
        let lords = if kala.is_daytime {
            [Graha::Guru, Graha::Buddh, Graha::Shani]
        } else {
            [Graha::Chandra, Graha::Shukra, Graha::Mangal]
        };
        if lords[third] == graha { 60.0 } else { 0.0 }
    }

    /// Declination-based strength; benefics favour north, malefics south.
    pub fn ayana(&self, graha: Graha, declination_deg: f64, moon_sun_elongation: f64) -> f64 {
        let kranti = declination_deg.clamp(-24.0, 24.0);
        let score = match functional_nature(graha, moon_sun_elongation) {
            BeneficNature::Benefic => (24.0 + kranti) / 48.0 * 60.0,
            BeneficNature::Malefic => (24.0 - kranti) / 48.0 * 60.0,
        };
        score.max(0.0)
    }

    /// Planetary war between Mars..Saturn closer than 1°: the graha with
    /// the higher declination gains 60, the other loses 60.
    pub fn yuddha(&self, graha: Graha, lons: &[f64; 9], declinations: &[f64; 7]) -> f64 {
        let gi = graha.index() as usize;
        if !(2..7).contains(&gi) {
            return 0.0;
        }
        (2..7)
            .filter(|&oi| oi != gi && separation(lons[gi], lons[oi]) < 1.0)
            .map(|oi| match declinations[gi].partial_cmp(&declinations[oi]) {
                Some(std::cmp::Ordering::Greater) => 60.0,
                Some(std::cmp::Ordering::Less) => -60.0,
                _ => 0.0,
            })
            .sum()
    }

    pub fn kala(&self, graha: Graha, inputs: &ShadbalaInputs) -> KalaBala {
        if graha.is_node() {
            return KalaBala::default();
        }
        let k = &inputs.kala;
        let gi = graha.index() as usize;
        let lord_points = |lord: Graha, points: f64| if lord == graha { points } else { 0.0 };
        let nathonnatha = self.nathonnatha(graha, k);
        let paksha = self.paksha(graha, k.moon_sun_elongation);
        let tribhaga = self.tribhaga(graha, k);
        let abda = lord_points(k.year_lord, 15.0);
        let masa = lord_points(k.month_lord, 30.0);
        let vara = lord_points(k.weekday_lord, 45.0);
        let hora = lord_points(k.hora_lord, 60.0);
        let ayana = self.ayana(graha, k.declinations[gi], k.moon_sun_elongation);
        let yuddha = self.yuddha(graha, &inputs.sidereal_lons, &k.declinations);
        KalaBala {
            nathonnatha,
            paksha,
            tribhaga,
            abda,
            masa,
            vara,
            hora,
            ayana,
            yuddha,
            total: nathonnatha + paksha + tribhaga + abda + masa + vara + hora + ayana + yuddha,
        }
    }

    /// Retrograde earns full strength; Sun and Moon have none.
    pub fn cheshta(&self, graha: Graha, speed_deg_per_day: f64) -> f64 {
        let gi = graha.index() as usize;
        if !(2..7).contains(&gi) {
            return 0.0;
        }
        if speed_deg_per_day < 0.0 {
            60.0
        } else {
            (speed_deg_per_day / self.rules.max_speed[gi] * 60.0).min(60.0)
        }
    }

    pub fn naisargika(&self, graha: Graha) -> f64 {
        if graha.is_node() {
            0.0
        } else {
            self.rules.naisargika[graha.index() as usize]
        }
    }

    /// A quarter of (benefic − malefic) aspect virupas received.
    pub fn drik(&self, graha: Graha, lons: &[f64; 9], moon_sun_elongation: f64) -> f64 {
        if graha.is_node() {
            return 0.0;
        }
        let target = lons[graha.index() as usize];
        let net: f64 = ALL_GRAHAS
            .into_iter()
            .filter(|&src| src != graha)
            .map(|src| {
                let v = drishti_virupa(src, lons[src.index() as usize], target);
                match functional_nature(src, moon_sun_elongation) {
                    BeneficNature::Benefic => v,
                    BeneficNature::Malefic => -v,
                }
            })
            .sum();
        net / 4.0
    }

    /// Weighted 0..=100 total from component values.
    pub fn percent(&self, sthana: f64, dig: f64, kala: f64, cheshta: f64, naisargika: f64, drik: f64) -> f64 {
        let w = &self.rules.weights;
        let m = &self.rules.maxima;
        let unit = |v: f64, max: f64| if max > 0.0 { (v / max).clamp(0.0, 1.0) } else { 0.0 };
        let span = self.rules.drik_span;
        let drik_unit = ((drik + span) / (2.0 * span)).clamp(0.0, 1.0);
        100.0
            * (w.sthana * unit(sthana, m[0])
                + w.dig * unit(dig, m[1])
                + w.kala * unit(kala, m[2])
                + w.cheshta * unit(cheshta, m[3])
                + w.naisargika * unit(naisargika, m[4])
                + w.drik * drik_unit)
    }

    /// Complete breakdown for one classical graha.
    ///
    /// Nodes are rejected: their strength is borrowed, see [`graha_percent`].
    pub fn compute(&self, graha: Graha, inputs: &ShadbalaInputs) -> Result<ShadbalaBreakdown, VedicError> {
        if graha.is_node() {
            return Err(VedicError::NodeHasNoShadbala(graha.name()));
        }
        for lon in inputs.sidereal_lons {
            if !lon.is_finite() {
                return Err(VedicError::NonFinite("sidereal longitude"));
            }
        }
        let gi = graha.index() as usize;
        let sthana = self.sthana(graha, inputs);
        let dig = self.dig(graha, inputs.bhava_numbers[gi]);
        let kala = self.kala(graha, inputs);
        let cheshta = self.cheshta(graha, inputs.speeds[gi]);
        let naisargika = self.naisargika(graha);
        let drik = self.drik(graha, &inputs.sidereal_lons, inputs.kala.moon_sun_elongation);
        let total = sthana.total + dig + kala.total + cheshta + naisargika + drik;
        let required = self.rules.required[gi];
        Ok(ShadbalaBreakdown {
            graha,
            sthana,
            dig,
            kala,
            cheshta,
            naisargika,
            drik,
            total_shashtiamsas: total,
            total_rupas: total / 60.0,
            required_strength: required,
            is_strong: total >= required,
            percent: self.percent(sthana.total, dig, kala.total, cheshta, naisargika, drik),
        })
    }

    /// Breakdowns for the seven classical grahas in index order.
    pub fn compute_all(&self, inputs: &ShadbalaInputs) -> Result<Vec<ShadbalaBreakdown>, VedicError> {
        SAPTA_GRAHAS.into_iter().map(|g| self.compute(g, inputs)).collect()
    }
}

/// Saptavarga sign table for the classical grahas, rows in [`SAPTAVARGA`] order.
pub fn saptavarga_signs(
    vargas: &DivisionalChartCalculator<'_>,
    sidereal_lons: &[f64; 7],
) -> Result<[[u8; 7]; 7], VedicError> {
    let mut out = [[0u8; 7]; 7];
    for (gi, &lon) in sidereal_lons.iter().enumerate() {
        let signs = vargas.sign_indices(lon, &SAPTAVARGA)?;
        for (row, sign) in signs.into_iter().enumerate() {
            out[row][gi] = sign;
        }
    }
    Ok(out)
}

/// Shadbala percentage for any graha.
///
/// The nodes borrow the percentage of the lord of the sign they occupy.
/// `breakdowns` must be in classical graha order.
pub fn graha_percent(breakdowns: &[ShadbalaBreakdown], graha: Graha, sign_index: u8) -> f64 {
    let source = if graha.is_node() {
        rashi_lord_by_index(sign_index)
    } else {
        graha
    };
    breakdowns
        .get(source.index() as usize)
        .map_or(0.0, |b| b.percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn calc() -> ShadbalaCalculator<'static> {
        static RULES: std::sync::OnceLock<ShadbalaRules> = std::sync::OnceLock::new();
        ShadbalaCalculator::new(RULES.get_or_init(ShadbalaRules::classical))
    }

    fn kala_inputs() -> KalaInputs {
        KalaInputs {
            is_daytime: true,
            day_night_fraction: 0.5,
            moon_sun_elongation: 180.0,
            year_lord: Graha::Surya,
            month_lord: Graha::Chandra,
            weekday_lord: Graha::Mangal,
            hora_lord: Graha::Buddh,
            declinations: [0.0; 7],
        }
    }

    fn inputs() -> ShadbalaInputs {
        ShadbalaInputs {
            sidereal_lons: [10.0, 40.0, 100.0, 150.0, 200.0, 250.0, 300.0, 120.0, 300.0],
            bhava_numbers: [10, 4, 1, 5, 7, 9, 11],
            speeds: [1.0, 13.0, 0.5, -0.3, 0.1, 1.2, 0.05],
            kala: kala_inputs(),
            varga_signs: [[0, 1, 3, 5, 6, 8, 10]; 7],
        }
    }

    #[test]
    fn uchcha_peaks_at_exaltation() {
        let c = calc();
        assert!((c.uchcha(Graha::Surya, 10.0) - 60.0).abs() < EPS);
        assert!(c.uchcha(Graha::Surya, 190.0).abs() < EPS);
        assert!((c.uchcha(Graha::Surya, 100.0) - 30.0).abs() < EPS);
        assert_eq!(c.uchcha(Graha::Rahu, 10.0), 0.0);
    }

    #[test]
    fn ojhayugma_parity() {
        let c = calc();
        // Mesha (index 0) is odd.
        assert_eq!(c.ojhayugma(Graha::Surya, 0, 2), 30.0);
        assert_eq!(c.ojhayugma(Graha::Chandra, 1, 3), 30.0);
        assert_eq!(c.ojhayugma(Graha::Chandra, 0, 3), 15.0);
        assert_eq!(c.ojhayugma(Graha::Shani, 1, 1), 0.0);
    }

    #[test]
    fn kendradi_and_drekkana() {
        let c = calc();
        assert_eq!(c.kendradi(7), 60.0);
        assert_eq!(c.kendradi(11), 30.0);
        assert_eq!(c.kendradi(12), 15.0);
        assert_eq!(c.kendradi(0), 0.0);
        assert_eq!(c.drekkana(Graha::Surya, 5.0), 15.0);
        assert_eq!(c.drekkana(Graha::Chandra, 45.0), 15.0);
        assert_eq!(c.drekkana(Graha::Buddh, 29.9), 15.0);
        assert_eq!(c.drekkana(Graha::Buddh, 5.0), 0.0);
    }

    #[test]
    fn dig_bala_is_symmetric() {
        let c = calc();
        assert_eq!(c.dig(Graha::Surya, 10), 60.0);
        assert_eq!(c.dig(Graha::Surya, 4), 0.0);
        assert!((c.dig(Graha::Surya, 1) - 30.0).abs() < EPS);
        assert!((c.dig(Graha::Surya, 7) - 30.0).abs() < EPS);
        assert_eq!(c.dig(Graha::Shani, 13), 0.0);
    }

    #[test]
    fn paksha_at_full_moon() {
        let c = calc();
        assert!((c.paksha(Graha::Guru, 180.0) - 60.0).abs() < EPS);
        assert!(c.paksha(Graha::Shani, 180.0).abs() < EPS);
        // The Moon uses the benefic curve even when waning.
        assert!((c.paksha(Graha::Chandra, 30.0) - 10.0).abs() < EPS);
    }

    #[test]
    fn tribhaga_thirds() {
        let c = calc();
        let mut k = kala_inputs();
        assert_eq!(c.tribhaga(Graha::Buddh, &k), 60.0);
        assert_eq!(c.tribhaga(Graha::Surya, &k), 60.0);
        k.is_daytime = false;
        k.day_night_fraction = 0.9;
        assert_eq!(c.tribhaga(Graha::Mangal, &k), 60.0);
        assert_eq!(c.tribhaga(Graha::Buddh, &k), 0.0);
    }

    #[test]
    fn yuddha_winner_and_loser() {
        let c = calc();
        let mut lons = [0.0; 9];
        lons[2] = 100.0;
        lons[4] = 100.5;
        lons[3] = 200.0;
        lons[5] = 250.0;
        lons[6] = 300.0;
        let mut dec = [0.0; 7];
        dec[2] = 5.0;
        dec[4] = -2.0;
        assert_eq!(c.yuddha(Graha::Mangal, &lons, &dec), 60.0);
        assert_eq!(c.yuddha(Graha::Guru, &lons, &dec), -60.0);
        assert_eq!(c.yuddha(Graha::Shani, &lons, &dec), 0.0);
        assert_eq!(c.yuddha(Graha::Surya, &lons, &dec), 0.0);
    }

    #[test]
    fn cheshta_rules() {
        let c = calc();
        assert_eq!(c.cheshta(Graha::Buddh, -0.5), 60.0);
        assert!((c.cheshta(Graha::Mangal, 0.4) - 30.0).abs() < EPS);
        assert_eq!(c.cheshta(Graha::Shani, 1.0), 60.0);
        assert_eq!(c.cheshta(Graha::Surya, 1.0), 0.0);
    }

    #[test]
    fn drik_sign_follows_aspecting_nature() {
        let c = calc();
        // Only Jupiter aspects Sun from 180° away; everything else conjunct.
        let mut lons = [0.0; 9];
        lons[4] = 180.0;
        let d = c.drik(Graha::Surya, &lons, 180.0);
        assert!((d - 15.0).abs() < EPS, "drik {d}");
    }

    #[test]
    fn full_breakdown_is_consistent() {
        let c = calc();
        let all = c.compute_all(&inputs()).unwrap();
        assert_eq!(all.len(), 7);
        for b in &all {
            let sum = b.sthana.total + b.dig + b.kala.total + b.cheshta + b.naisargika + b.drik;
            assert!((b.total_shashtiamsas - sum).abs() < EPS);
            assert!((b.total_rupas * 60.0 - b.total_shashtiamsas).abs() < EPS);
            assert!((0.0..=100.0).contains(&b.percent), "{:?} {}", b.graha, b.percent);
        }
    }

    #[test]
    fn percent_bounds() {
        let c = calc();
        assert!((c.percent(1e6, 1e6, 1e6, 1e6, 1e6, 1e6) - 100.0).abs() < EPS);
        assert!(c.percent(0.0, 0.0, 0.0, 0.0, 0.0, -1e6).abs() < EPS);
    }

    #[test]
    fn nodes_borrow_sign_lord() {
        let c = calc();
        let all = c.compute_all(&inputs()).unwrap();
        // Mesha is ruled by Mangal.
        assert_eq!(graha_percent(&all, Graha::Rahu, 0), all[2].percent);
        assert_eq!(graha_percent(&all, Graha::Guru, 0), all[4].percent);
        assert!(c.compute(Graha::Ketu, &inputs()).is_err());
    }

    #[test]
    fn saptavarga_rows_start_with_rashi() {
        let table = crate::varga::VargaTable::classical();
        let vargas = DivisionalChartCalculator::new(&table);
        let lons = [10.0, 40.0, 100.0, 150.0, 200.0, 250.0, 300.0];
        let signs = saptavarga_signs(&vargas, &lons).unwrap();
        assert_eq!(signs[0], [0, 1, 3, 5, 6, 8, 10]);
        // 10° Mesha: navamsa 4 → Karka.
        assert_eq!(signs[NAVAMSA_ROW][0], 3);
    }
}
