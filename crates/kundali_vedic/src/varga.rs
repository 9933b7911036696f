//! Divisional (varga) charts.
//!
//! A varga divides each 30° sign into N equal parts and maps every part to
//! a target sign. The mapping for each divisor is a [`VargaRule`] held in a
//! [`VargaTable`]; the calculator looks rules up by divisor and never
//! branches on the divisor itself. New divisors are supported by adding a
//! [`VargaDefinition`] to the table.

use serde::Serialize;

use crate::error::VedicError;
use crate::graha::Graha;
use crate::rashi::{Element, Rashi};
use crate::util::{normalize_360, sign_index_of};

/// How division `k` of a natal sign maps to a target sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VargaRule {
    /// The natal sign itself.
    Identity,
    /// Start at `natal × 2`, step one sign per division.
    Hora,
    /// Start at the natal sign, step `n` signs per division.
    Step(u8),
    /// Odd signs start at the natal sign, even signs `n` signs later.
    OddEvenOffset(u8),
    /// Fixed start sign per element: fire, earth, air, water.
    ByElement([u8; 4]),
    /// Fixed start sign for odd and even natal signs.
    OddEvenStart { odd: u8, even: u8 },
    /// Start at the natal sign, step one sign per division.
    Sequential,
}

impl VargaRule {
    /// Target sign index for division `div` of natal sign `natal` (both 0-based).
    pub fn target(self, natal: Rashi, div: u16) -> u8 {
        let n = natal.index() as u16;
        let (start, step) = match self {
            Self::Identity => return natal.index(),
            Self::Hora => (n * 2, 1),
            Self::Step(s) => (n, s as u16),
            Self::OddEvenOffset(off) => {
                if natal.is_odd() {
                    (n, 1)
                } else {
                    (n + off as u16, 1)
                }
            }
            Self::ByElement(starts) => {
                let e = match natal.element() {
                    Element::Fire => 0,
                    Element::Earth => 1,
                    Element::Air => 2,
                    Element::Water => 3,
                };
                (starts[e] as u16, 1)
            }
            Self::OddEvenStart { odd, even } => {
                (if natal.is_odd() { odd } else { even } as u16, 1)
            }
            Self::Sequential => (n, 1),
        };
        ((start + div * step) % 12) as u8
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VargaDefinition {
    pub divisor: u16,
    pub name: &'static str,
    pub rule: VargaRule,
}

const fn def(divisor: u16, name: &'static str, rule: VargaRule) -> VargaDefinition {
    VargaDefinition {
        divisor,
        name,
        rule,
    }
}

/// The sixteen classical divisional charts.
pub const SHODASHAVARGA: [VargaDefinition; 16] = [
    def(1, "Rashi", VargaRule::Identity),
    def(2, "Hora", VargaRule::Hora),
    def(3, "Drekkana", VargaRule::Step(4)),
    def(4, "Chaturthamsa", VargaRule::Sequential),
    def(7, "Saptamsa", VargaRule::OddEvenOffset(6)),
    def(9, "Navamsa", VargaRule::ByElement([0, 9, 6, 3])),
    def(10, "Dasamsa", VargaRule::OddEvenOffset(8)),
    def(12, "Dwadasamsa", VargaRule::Sequential),
    def(16, "Shodasamsa", VargaRule::ByElement([0, 4, 8, 0])),
    def(20, "Vimsamsa", VargaRule::ByElement([0, 8, 4, 0])),
    def(24, "Chaturvimsamsa", VargaRule::OddEvenOffset(4)),
    def(27, "Bhamsa", VargaRule::Sequential),
    def(30, "Trimsamsa", VargaRule::OddEvenStart { odd: 0, even: 11 }),
    def(40, "Khavedamsa", VargaRule::OddEvenOffset(6)),
    def(45, "Akshavedamsa", VargaRule::Sequential),
    def(60, "Shashtiamsa", VargaRule::ByElement([0, 9, 6, 3])),
];

/// Divisors used by saptavargaja strength, in table order.
pub const SAPTAVARGA: [u16; 7] = [1, 2, 3, 7, 9, 12, 30];

/// Immutable set of varga rules keyed by divisor.
#[derive(Debug, Clone, PartialEq)]
pub struct VargaTable {
    defs: Vec<VargaDefinition>,
}

impl Default for VargaTable {
    fn default() -> Self {
        Self::classical()
    }
}

impl VargaTable {
    pub fn classical() -> Self {
        Self {
            defs: SHODASHAVARGA.to_vec(),
        }
    }

    /// A table with `extra` added; an existing divisor is replaced.
    pub fn with(mut self, extra: VargaDefinition) -> Self {
        self.defs.retain(|d| d.divisor != extra.divisor);
        self.defs.push(extra);
        self.defs.sort_by_key(|d| d.divisor);
        self
    }

    pub fn get(&self, divisor: u16) -> Option<&VargaDefinition> {
        self.defs.iter().find(|d| d.divisor == divisor)
    }

    pub fn divisors(&self) -> impl Iterator<Item = u16> + '_ {
        self.defs.iter().map(|d| d.divisor)
    }

    /// Resolve `"D9"`, `"9"` or `"navamsa"` to a divisor in this table.
    pub fn resolve(&self, code: &str) -> Result<u16, VedicError> {
        let trimmed = code.trim();
        let digits = trimmed
            .strip_prefix('D')
            .or_else(|| trimmed.strip_prefix('d'))
            .unwrap_or(trimmed);
        let found = match digits.parse::<u16>() {
            Ok(n) => self.get(n),
            Err(_) => self.defs.iter().find(|d| d.name.eq_ignore_ascii_case(trimmed)),
        };
        found
            .map(|d| d.divisor)
            .ok_or_else(|| VedicError::UnsupportedDivisor(code.to_string()))
    }
}

/// Placement of one point in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DivisionalPosition {
    pub divisor: u16,
    pub sign: Rashi,
    pub sign_number: u8,
    /// Longitude in the divisional chart, the division stretched to 30°.
    pub longitude_deg: f64,
}

/// One graha's placement in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DivisionalPlacement {
    pub graha: Graha,
    #[serde(flatten)]
    pub position: DivisionalPosition,
}

/// A whole divisional chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalChart {
    pub divisor: u16,
    pub name: &'static str,
    pub ascendant: DivisionalPosition,
    pub placements: Vec<DivisionalPlacement>,
}

/// Applies a [`VargaTable`] to signs and longitudes.
#[derive(Debug, Clone, Copy)]
pub struct DivisionalChartCalculator<'t> {
    table: &'t VargaTable,
}

impl<'t> DivisionalChartCalculator<'t> {
    pub fn new(table: &'t VargaTable) -> Self {
        Self { table }
    }

    fn rule(&self, divisor: u16) -> Result<&'t VargaDefinition, VedicError> {
        self.table
            .get(divisor)
            .ok_or_else(|| VedicError::UnsupportedDivisor(format!("D{divisor}")))
    }

    /// Divisional sign number (1-based) for a natal sign number and degree.
    pub fn compute(
        &self,
        sign_number: u8,
        degree_in_sign: f64,
        divisor: u16,
    ) -> Result<u8, VedicError> {
        let natal = Rashi::from_number(sign_number).ok_or(VedicError::InvalidSign(sign_number))?;
        if !degree_in_sign.is_finite() {
            return Err(VedicError::NonFinite("degree in sign"));
        }
        let def = self.rule(divisor)?;
        let (div, _) = division_of(degree_in_sign, divisor);
        Ok(def.rule.target(natal, div) + 1)
    }

    /// Full divisional placement of a sidereal longitude.
    pub fn position(
        &self,
        sidereal_lon: f64,
        divisor: u16,
    ) -> Result<DivisionalPosition, VedicError> {
        let def = self.rule(divisor)?;
        let lon = normalize_360(sidereal_lon);
        let natal_idx = sign_index_of(lon);
        let (div, fraction) = division_of(lon - natal_idx as f64 * 30.0, divisor);
        let target = def.rule.target(Rashi::from_index(natal_idx), div);
        let longitude_deg = if def.rule == VargaRule::Identity {
            lon
        } else {
            normalize_360(target as f64 * 30.0 + fraction * 30.0)
        };
        let sign = Rashi::from_index(target);
        Ok(DivisionalPosition {
            divisor,
            sign,
            sign_number: sign.number(),
            longitude_deg,
        })
    }

    /// Sign index (0-based) of a longitude in each of `divisors`.
    pub fn sign_indices<const N: usize>(
        &self,
        sidereal_lon: f64,
        divisors: &[u16; N],
    ) -> Result<[u8; N], VedicError> {
        let mut out = [0u8; N];
        for (slot, &d) in out.iter_mut().zip(divisors) {
            *slot = self.position(sidereal_lon, d)?.sign.index();
        }
        Ok(out)
    }

    /// Divisional chart for an ascendant and a set of grahas.
    pub fn chart(
        &self,
        divisor: u16,
        ascendant_lon: f64,
        grahas: &[(Graha, f64)],
    ) -> Result<DivisionalChart, VedicError> {
        let def = self.rule(divisor)?;
        let placements = grahas
            .iter()
            .map(|&(graha, lon)| {
                Ok(DivisionalPlacement {
                    graha,
                    position: self.position(lon, divisor)?,
                })
            })
            .collect::<Result<Vec<_>, VedicError>>()?;
        Ok(DivisionalChart {
            divisor,
            name: def.name,
            ascendant: self.position(ascendant_lon, divisor)?,
            placements,
        })
    }
}

/// `(division index, fraction through that division)` for a degree in sign.
fn division_of(degree_in_sign: f64, divisor: u16) -> (u16, f64) {
    let n = divisor.max(1);
    let span = 30.0 / n as f64;
    let d = degree_in_sign.clamp(0.0, 30.0);
    let div = ((d / span).floor() as u16).min(n - 1);
    let fraction = ((d - div as f64 * span) / span).clamp(0.0, 1.0 - f64::EPSILON);
    (div, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(table: &VargaTable) -> DivisionalChartCalculator<'_> {
        DivisionalChartCalculator::new(table)
    }

    #[test]
    fn d1_is_identity() {
        let t = VargaTable::classical();
        for sign in 1..=12u8 {
            for deg in [0.0, 7.5, 15.0, 29.999] {
                assert_eq!(calc(&t).compute(sign, deg, 1).unwrap(), sign);
            }
        }
    }

    #[test]
    fn navamsa_by_element() {
        let t = VargaTable::classical();
        let c = calc(&t);
        assert_eq!(c.compute(1, 0.0, 9).unwrap(), 1);
        assert_eq!(c.compute(1, 29.9, 9).unwrap(), 9);
        // Kanya is earth: starts from Makara.
        assert_eq!(c.compute(6, 0.1, 9).unwrap(), 10);
        assert_eq!(c.compute(6, 14.699, 9).unwrap(), 2);
        assert_eq!(c.compute(4, 0.1, 9).unwrap(), 4);
    }

    #[test]
    fn hora_and_drekkana() {
        let t = VargaTable::classical();
        let c = calc(&t);
        assert_eq!(c.compute(1, 5.0, 2).unwrap(), 1);
        assert_eq!(c.compute(1, 20.0, 2).unwrap(), 2);
        assert_eq!(c.compute(2, 5.0, 2).unwrap(), 3);
        assert_eq!(c.compute(1, 25.0, 3).unwrap(), 9);
        assert_eq!(c.compute(1, 15.0, 3).unwrap(), 5);
    }

    #[test]
    fn dasamsa_even_sign_offset() {
        let t = VargaTable::classical();
        let c = calc(&t);
        assert_eq!(c.compute(1, 1.0, 10).unwrap(), 1);
        assert_eq!(c.compute(2, 1.0, 10).unwrap(), 10);
    }

    #[test]
    fn trimsamsa_even_starts_at_meena() {
        let t = VargaTable::classical();
        assert_eq!(calc(&t).compute(2, 0.5, 30).unwrap(), 12);
        assert_eq!(calc(&t).compute(3, 0.5, 30).unwrap(), 1);
    }

    #[test]
    fn degree_thirty_clamps_to_last_division() {
        let t = VargaTable::classical();
        assert_eq!(calc(&t).compute(1, 30.0, 9).unwrap(), 9);
    }

    #[test]
    fn longitude_stretches_division() {
        let t = VargaTable::classical();
        // 1°40′ Mesha is the middle of the first navamsa → 15° Mesha.
        let p = calc(&t).position(10.0 / 6.0, 9).unwrap();
        assert_eq!(p.sign, Rashi::Mesha);
        assert!((p.longitude_deg - 15.0).abs() < 1e-9);
    }

    #[test]
    fn unsupported_divisor_is_an_error() {
        let t = VargaTable::classical();
        assert!(matches!(
            calc(&t).compute(1, 1.0, 5),
            Err(VedicError::UnsupportedDivisor(_))
        ));
        assert!(matches!(
            calc(&t).compute(13, 1.0, 9),
            Err(VedicError::InvalidSign(13))
        ));
    }

    #[test]
    fn table_can_be_extended() {
        let t = VargaTable::classical().with(VargaDefinition {
            divisor: 5,
            name: "Panchamsa",
            rule: VargaRule::Sequential,
        });
        assert_eq!(calc(&t).compute(3, 13.0, 5).unwrap(), 5);
        assert_eq!(t.divisors().count(), 17);
    }

    #[test]
    fn resolves_codes_and_names() {
        let t = VargaTable::classical();
        assert_eq!(t.resolve("D9"), Ok(9));
        assert_eq!(t.resolve("60"), Ok(60));
        assert_eq!(t.resolve("navamsa"), Ok(9));
        assert!(t.resolve("D11").is_err());
        assert!(t.resolve("nonsense").is_err());
    }

    #[test]
    fn chart_places_every_graha() {
        let t = VargaTable::classical();
        let chart = calc(&t)
            .chart(9, 42.23, &[(Graha::Surya, 90.91), (Graha::Chandra, 164.699)])
            .unwrap();
        assert_eq!(chart.name, "Navamsa");
        assert_eq!(chart.placements.len(), 2);
        assert_eq!(chart.placements[1].position.sign, Rashi::Vrishabha);
    }
}
