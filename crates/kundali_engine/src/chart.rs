//! Chart orchestration: one request in, one immutable result out.
//!
//! Bridges the ephemeris and the pure Vedic calculators. Every body is
//! queried once through an [`EphemerisSession`]; the stages after that
//! only read the collected longitudes.

use serde::Serialize;
use tracing::debug;

use kundali_ephem::{Body, BodyState, Ephemeris, EphemerisSession, QueryStats, mean_obliquity_deg};
use kundali_time::{jd_to_centuries, jd_to_datetime, local_sidereal_time_rad};
use kundali_vedic::{
    ALL_GRAHAS, Ashtakavarga, AshtakavargaCalculator, BeneficNature, BinduTable, BirthBalance,
    DashaEngine, DashaHierarchy, DashaLevel, DashaNode, DashaSnapshot, Dignity, DivisionalChart,
    DivisionalChartCalculator, Graha, HouseCalculator, HouseContext, Houses, PositionResolver,
    ShadbalaBreakdown, ShadbalaCalculator, ShadbalaInputs, ShadbalaRules,
    SiderealPosition, VargaTable, dignity_in_sign, functional_nature, graha_percent,
    lagna_and_mc_deg, normalize_360, period_pairs, saptavarga_signs, snapshot,
};

use crate::config::{BirthDetails, ChartRequest, ResolvedPreferences};
use crate::error::ChartError;
use crate::intensity::{GrahaProfile, IntensityRecord, IntensityScoringEngine};
use crate::kala::kala_inputs;
use crate::validation::validate_birth;

/// Ephemeris body behind a graha. Ketu shares Rahu's body.
pub fn graha_to_body(graha: Graha) -> Body {
    match graha {
        Graha::Surya => Body::Sun,
        Graha::Chandra => Body::Moon,
        Graha::Mangal => Body::Mars,
        Graha::Buddh => Body::Mercury,
        Graha::Guru => Body::Jupiter,
        Graha::Shukra => Body::Venus,
        Graha::Shani => Body::Saturn,
        Graha::Rahu | Graha::Ketu => Body::MeanNode,
    }
}

/// One graha in the natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPlacement {
    pub graha: Graha,
    pub name: &'static str,
    pub tropical_longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
    #[serde(flatten)]
    pub position: SiderealPosition,
    /// 1..=12 under the requested house system.
    pub house: u8,
    pub dignity: Dignity,
    pub nature: BeneficNature,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AscendantInfo {
    pub tropical_longitude_deg: f64,
    #[serde(flatten)]
    pub position: SiderealPosition,
    /// Sidereal MC.
    pub mc_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AyanamshaInfo {
    pub system: &'static str,
    pub value_deg: f64,
}

/// Both strength systems for one graha.
///
/// The nodes have no Shadbala breakdown or bhinna chart of their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthScore {
    pub graha: Graha,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadbala: Option<ShadbalaBreakdown>,
    /// 0..=100; borrowed from the sign lord for the nodes.
    pub shadbala_percent: f64,
    /// Bindus in houses 1..=12.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ashtakavarga_bindus: Option<[u8; 12]>,
}

/// A dasha period with civil timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriodView {
    pub lord: Graha,
    pub level: DashaLevel,
    pub start_jd: f64,
    pub end_jd: f64,
    /// ISO-8601, UTC.
    pub start: String,
    pub end: String,
    pub duration_years: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DashaPeriodView>,
}

impl DashaPeriodView {
    fn from_node(node: &DashaNode) -> Result<Self, ChartError> {
        let p = &node.period;
        Ok(Self {
            lord: p.lord,
            level: p.level,
            start_jd: p.start_jd,
            end_jd: p.end_jd,
            start: jd_to_datetime(p.start_jd)?.to_rfc3339(),
            end: jd_to_datetime(p.end_jd)?.to_rfc3339(),
            duration_years: p.duration_years(),
            children: node
                .children
                .iter()
                .map(Self::from_node)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaView {
    pub balance: BirthBalance,
    pub depth: u8,
    pub periods: Vec<DashaPeriodView>,
}

/// Everything computed for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub birth: BirthDetails,
    pub jd_ut: f64,
    pub ayanamsha: AyanamshaInfo,
    pub ascendant: AscendantInfo,
    pub houses: Houses,
    pub planets: Vec<PlanetPlacement>,
    pub strengths: Vec<StrengthScore>,
    pub ashtakavarga: Ashtakavarga,
    pub divisional_charts: Vec<DivisionalChart>,
    pub dasha: DashaView,
    pub intensity: Vec<IntensityRecord>,
    pub ephemeris_stats: QueryStats,
    #[serde(skip)]
    hierarchy: DashaHierarchy,
}

impl ChartResult {
    pub fn planet(&self, graha: Graha) -> Option<&PlanetPlacement> {
        self.planets.iter().find(|p| p.graha == graha)
    }

    /// Grahas in house `number`, in graha order.
    pub fn occupants(&self, number: u8) -> Vec<Graha> {
        self.planets
            .iter()
            .filter(|p| p.house == number)
            .map(|p| p.graha)
            .collect()
    }

    /// Periods running at `jd_ut`, Mahadasha first.
    pub fn dasha_at(&self, jd_ut: f64) -> DashaSnapshot {
        snapshot(&self.hierarchy, jd_ut)
    }
}

/// Computes charts against one ephemeris source and fixed rule tables.
pub struct ChartCalculator<'e> {
    ephemeris: &'e dyn Ephemeris,
    vargas: VargaTable,
    shadbala_rules: ShadbalaRules,
    bindus: BinduTable,
    dasha: DashaEngine,
}

impl std::fmt::Debug for ChartCalculator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartCalculator")
            .field("ephemeris", &self.ephemeris.name())
            .finish_non_exhaustive()
    }
}

impl<'e> ChartCalculator<'e> {
    /// Classical rule tables over `ephemeris`.
    pub fn new(ephemeris: &'e dyn Ephemeris) -> Self {
        Self {
            ephemeris,
            vargas: VargaTable::classical(),
            shadbala_rules: ShadbalaRules::classical(),
            bindus: BinduTable::classical(),
            dasha: DashaEngine::vimshottari(),
        }
    }

    pub fn with_vargas(mut self, vargas: VargaTable) -> Self {
        self.vargas = vargas;
        self
    }

    pub fn with_shadbala_rules(mut self, rules: ShadbalaRules) -> Self {
        self.shadbala_rules = rules;
        self
    }

    pub fn with_bindus(mut self, bindus: BinduTable) -> Self {
        self.bindus = bindus;
        self
    }

    pub fn vargas(&self) -> &VargaTable {
        &self.vargas
    }

    /// Full chart for `request`. Fails as a whole; there is no partial result.
    #[tracing::instrument(skip_all, fields(birth = %request.birth.time, ephemeris = self.ephemeris.name()))]
    pub fn compute(&self, request: &ChartRequest) -> Result<ChartResult, ChartError> {
        let prefs = request.preferences.resolve(&self.vargas)?;
        let birth = request.birth;
        let jd = validate_birth(&birth, prefs.house_system, self.ephemeris)?;
        let mut session = EphemerisSession::new(self.ephemeris);

        let aya = session
            .ayanamsha_deg(prefs.ayanamsha, jd)
            .map_err(|source| ChartError::AyanamshaUnavailable {
                system: prefs.ayanamsha.name(),
                jd,
                source,
            })?;
        let states = graha_states(&mut session, jd)?;
        debug!(ayanamsha = aya, system = prefs.ayanamsha.name(), "positions fetched");

        let resolver = PositionResolver;
        let obliquity = mean_obliquity_deg(jd_to_centuries(jd));
        let lst = local_sidereal_time_rad(jd, birth.longitude_deg);
        let (asc_trop, mc_trop) = lagna_and_mc_deg(lst, birth.latitude_deg, obliquity);
        let ascendant = AscendantInfo {
            tropical_longitude_deg: asc_trop,
            position: resolver.resolve(asc_trop, aya),
            mc_deg: normalize_360(mc_trop - aya),
        };
        let houses = HouseCalculator.compute(
            &HouseContext {
                ascendant_deg: ascendant.position.longitude_deg,
                mc_deg: ascendant.mc_deg,
            },
            prefs.house_system.strategy(),
        );
        debug!(
            lagna = %ascendant.position.sign.name(),
            system = prefs.house_system.name(),
            "houses computed"
        );

        let sidereal: [SiderealPosition; 9] =
            states.map(|s| resolver.resolve(s.longitude_deg, aya));
        let sid_lons = sidereal.map(|p| p.longitude_deg);
        let sapta_lons: [f64; 7] = std::array::from_fn(|i| sid_lons[i]);
        let sapta_signs: [u8; 7] = std::array::from_fn(|i| sidereal[i].sign_index());
        let elongation = normalize_360(sid_lons[1] - sid_lons[0]);
        let house_numbers = sid_lons.map(|lon| houses.house_of(lon));

        let planets: Vec<PlanetPlacement> = ALL_GRAHAS
            .into_iter()
            .map(|g| {
                let i = g.index() as usize;
                let state = &states[i];
                PlanetPlacement {
                    graha: g,
                    name: g.english_name(),
                    tropical_longitude_deg: state.longitude_deg,
                    latitude_deg: state.latitude_deg,
                    distance_au: state.distance_au,
                    speed_deg_per_day: state.speed_deg_per_day,
                    retrograde: state.retrograde,
                    position: sidereal[i],
                    house: house_numbers[i],
                    dignity: dignity_in_sign(g, sid_lons[i], sidereal[i].sign_index(), &sapta_signs),
                    nature: functional_nature(g, elongation),
                }
            })
            .collect();

        let varga_calc = DivisionalChartCalculator::new(&self.vargas);
        let tropical: [(f64, f64); 7] =
            std::array::from_fn(|i| (states[i].longitude_deg, states[i].latitude_deg));
        let inputs = ShadbalaInputs {
            sidereal_lons: sid_lons,
            bhava_numbers: std::array::from_fn(|i| house_numbers[i]),
            speeds: std::array::from_fn(|i| states[i].speed_deg_per_day),
            kala: kala_inputs(
                jd,
                birth.latitude_deg,
                birth.longitude_deg,
                sid_lons[0],
                sid_lons[1],
                &tropical,
                obliquity,
            ),
            varga_signs: saptavarga_signs(&varga_calc, &sapta_lons)?,
        };
        let breakdowns = ShadbalaCalculator::new(&self.shadbala_rules).compute_all(&inputs)?;
        debug!(daytime = inputs.kala.is_daytime, "shadbala computed");

        let ashtakavarga = AshtakavargaCalculator::new(&self.bindus)
            .compute(&sapta_signs, ascendant.position.sign_index());
        debug!(
            sav_total = ashtakavarga.sarva.bindus.iter().map(|&b| u32::from(b)).sum::<u32>(),
            "ashtakavarga computed"
        );

        let strengths: Vec<StrengthScore> = ALL_GRAHAS
            .into_iter()
            .map(|g| StrengthScore {
                graha: g,
                shadbala: breakdowns.get(g.index() as usize).filter(|_| !g.is_node()).copied(),
                shadbala_percent: graha_percent(
                    &breakdowns,
                    g,
                    sidereal[g.index() as usize].sign_index(),
                ),
                ashtakavarga_bindus: (!g.is_node()).then(|| {
                    std::array::from_fn(|h| {
                        ashtakavarga.bindus_in_house(g, h as u8 + 1).unwrap_or(0)
                    })
                }),
            })
            .collect();

        let graha_lons: Vec<(Graha, f64)> = ALL_GRAHAS.into_iter().zip(sid_lons).collect();
        let divisional_charts = prefs
            .divisors
            .iter()
            .map(|&d| varga_calc.chart(d, ascendant.position.longitude_deg, &graha_lons))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(charts = divisional_charts.len(), "divisional charts computed");

        let (hierarchy, dasha) = self.dasha_tree(jd, sid_lons[1], &prefs)?;

        let profiles = planets.iter().zip(&strengths).map(|(p, s)| GrahaProfile {
            graha: p.graha,
            house: p.house,
            dignity: p.dignity,
            nature: p.nature,
            shadbala_percent: s.shadbala_percent,
        });
        let scorer = IntensityScoringEngine::new(&prefs.weights, &ashtakavarga, profiles);
        let intensity = scorer.score_all(&period_pairs(&hierarchy));
        debug!(records = intensity.len(), "intensity scored");

        let hierarchy = truncated(hierarchy, prefs.dasha_depth);
        let stats = session.stats();
        debug!(evaluations = stats.evaluations, cache_hits = stats.cache_hits, "chart complete");

        Ok(ChartResult {
            birth,
            jd_ut: jd,
            ayanamsha: AyanamshaInfo {
                system: prefs.ayanamsha.name(),
                value_deg: aya,
            },
            ascendant,
            houses,
            planets,
            strengths,
            ashtakavarga,
            divisional_charts,
            dasha,
            intensity,
            ephemeris_stats: stats,
            hierarchy,
        })
    }

    /// Dasha tree at least two levels deep, so the (Maha, Antar) table
    /// always exists, and the view at the requested depth.
    fn dasha_tree(
        &self,
        jd: f64,
        moon_sidereal_lon: f64,
        prefs: &ResolvedPreferences,
    ) -> Result<(DashaHierarchy, DashaView), ChartError> {
        let hierarchy = self
            .dasha
            .hierarchy(jd, moon_sidereal_lon, prefs.dasha_depth.max(2))?;
        let periods = truncated(hierarchy.clone(), prefs.dasha_depth)
            .tree()
            .iter()
            .map(DashaPeriodView::from_node)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            lord = %hierarchy.balance.lord.name(),
            mahadashas = periods.len(),
            "dasha tree built"
        );
        let view = DashaView {
            balance: hierarchy.balance,
            depth: prefs.dasha_depth,
            periods,
        };
        Ok((hierarchy, view))
    }
}

fn truncated(mut hierarchy: DashaHierarchy, depth: u8) -> DashaHierarchy {
    hierarchy.levels.truncate(depth as usize);
    hierarchy
}

/// States of all nine grahas in graha order; Ketu mirrors Rahu.
fn graha_states(session: &mut EphemerisSession<'_>, jd: f64) -> Result<[BodyState; 9], ChartError> {
    let mut out = [BodyState {
        longitude_deg: 0.0,
        latitude_deg: 0.0,
        distance_au: 0.0,
        speed_deg_per_day: 0.0,
        retrograde: false,
    }; 9];
    for g in ALL_GRAHAS {
        let body = graha_to_body(g);
        let state = session
            .body_state(body, jd)
            .map_err(ChartError::ephemeris(body, jd))?;
        out[g.index() as usize] = if g == Graha::Ketu {
            BodyState {
                longitude_deg: normalize_360(state.longitude_deg + 180.0),
                latitude_deg: -state.latitude_deg,
                ..state
            }
        } else {
            state
        };
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_vedic::SAPTA_GRAHAS;

    #[test]
    fn every_graha_has_a_body() {
        for g in SAPTA_GRAHAS {
            assert_ne!(graha_to_body(g), Body::MeanNode, "{}", g.name());
        }
        assert_eq!(graha_to_body(Graha::Rahu), Body::MeanNode);
        assert_eq!(graha_to_body(Graha::Ketu), Body::MeanNode);
    }

    #[test]
    fn truncation_keeps_shallow_levels() {
        let engine = DashaEngine::vimshottari();
        let h = engine.hierarchy(2_441_515.365_97, 164.699, 3).unwrap();
        let t = truncated(h.clone(), 1);
        assert_eq!(t.depth(), 1);
        assert_eq!(t.levels[0], h.levels[0]);
    }
}
