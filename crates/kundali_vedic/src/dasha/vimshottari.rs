//! Builds the Vimshottari tree from the Moon's birth longitude.

use tracing::debug;

use crate::error::VedicError;
use crate::graha::Graha;

use super::balance::{BirthBalance, birth_balance};
use super::cycle::{VIMSHOTTARI_CYCLE, VimshottariCycle};
use super::subperiod::proportional_children;
use super::types::{DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod, MAX_DASHA_DEPTH};

/// Depth-parameterised builder over a [`VimshottariCycle`].
#[derive(Debug, Clone, Default)]
pub struct DashaEngine {
    cycle: VimshottariCycle,
}

impl DashaEngine {
    pub fn new(cycle: VimshottariCycle) -> Self {
        Self { cycle }
    }

    pub fn vimshottari() -> Self {
        Self::new(VIMSHOTTARI_CYCLE)
    }

    pub fn cycle(&self) -> &VimshottariCycle {
        &self.cycle
    }

    /// Mahadashas covering exactly one full cycle from birth.
    ///
    /// The first lord runs for its remaining balance, the other eight for
    /// their full periods, and the first lord returns at the end for the
    /// part it had already spent before birth. That closing period is
    /// zero-length when the Moon is exactly at a nakshatra's start.
    pub fn mahadashas(&self, birth_jd: f64, moon_sidereal_lon: f64) -> (BirthBalance, Vec<DashaPeriod>) {
        let balance = birth_balance(&self.cycle, moon_sidereal_lon);
        let cycle_end = birth_jd + self.cycle.total_days();
        let mut periods = Vec::with_capacity(10);
        let mut cursor = birth_jd;
        let mut push = |lord: Graha, years: f64, periods: &mut Vec<DashaPeriod>| {
            let start = cursor;
            cursor += years * DAYS_PER_YEAR;
            periods.push(DashaPeriod {
                lord,
                start_jd: start,
                end_jd: cursor,
                level: DashaLevel::Mahadasha,
                order: periods.len() as u16 + 1,
                parent_idx: 0,
            });
        };

        push(balance.lord, balance.balance_years, &mut periods);
        for (lord, years) in self.cycle.sequence_from(balance.lord).skip(1) {
            push(lord, years, &mut periods);
        }
        push(
            balance.lord,
            self.cycle.years(balance.lord) * balance.elapsed_fraction,
            &mut periods,
        );
        if let Some(last) = periods.last_mut() {
            last.end_jd = cycle_end;
        }
        (balance, periods)
    }

    /// Tree down to `depth` levels (1 = mahadashas only, 3 = pratyantardashas).
    pub fn hierarchy(
        &self,
        birth_jd: f64,
        moon_sidereal_lon: f64,
        depth: u8,
    ) -> Result<DashaHierarchy, VedicError> {
        if depth == 0 || depth > MAX_DASHA_DEPTH {
            return Err(VedicError::DashaDepth {
                requested: depth,
                max: MAX_DASHA_DEPTH,
            });
        }
        if !birth_jd.is_finite() || !moon_sidereal_lon.is_finite() {
            return Err(VedicError::NonFinite("dasha birth input"));
        }
        let (balance, mahas) = self.mahadashas(birth_jd, moon_sidereal_lon);
        debug!(
            lord = %balance.lord.name(),
            balance_years = balance.balance_years,
            "vimshottari balance"
        );

        let mut levels = vec![mahas];
        let mut level = DashaLevel::Mahadasha;
        while levels.len() < depth as usize {
            let Some(child_level) = level.child() else {
                break;
            };
            let parents = &levels[levels.len() - 1];
            let next: Vec<DashaPeriod> = parents
                .iter()
                .enumerate()
                .flat_map(|(pi, p)| proportional_children(&self.cycle, p, child_level, pi as u32))
                .collect();
            debug!(level = child_level.name(), periods = next.len(), "dasha level built");
            levels.push(next);
            level = child_level;
        }

        Ok(DashaHierarchy {
            birth_jd,
            balance,
            levels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRTH: f64 = 2_441_515.365_97;
    const EPS: f64 = 1e-6;

    #[test]
    fn ten_mahadashas_span_full_cycle() {
        let (balance, mahas) = DashaEngine::vimshottari().mahadashas(BIRTH, 164.699);
        assert_eq!(balance.lord, Graha::Chandra);
        assert_eq!(mahas.len(), 10);
        assert_eq!(mahas[0].lord, Graha::Chandra);
        assert_eq!(mahas[1].lord, Graha::Mangal);
        assert_eq!(mahas[9].lord, Graha::Chandra);
        let total: f64 = mahas.iter().map(DashaPeriod::duration_years).sum();
        assert!((total - 120.0).abs() < EPS, "total {total}");
        assert_eq!(mahas[9].end_jd, BIRTH + 120.0 * DAYS_PER_YEAR);
        // First and last Chandra periods add up to one full Chandra period.
        assert!((mahas[0].duration_years() + mahas[9].duration_years() - 10.0).abs() < EPS);
    }

    #[test]
    fn depth_three_counts() {
        let h = DashaEngine::vimshottari().hierarchy(BIRTH, 164.699, 3).unwrap();
        assert_eq!(h.depth(), 3);
        assert_eq!(h.level(DashaLevel::Mahadasha).len(), 10);
        assert_eq!(h.level(DashaLevel::Antardasha).len(), 90);
        assert_eq!(h.level(DashaLevel::Pratyantardasha).len(), 810);
        assert_eq!(h.children_of(0, 4).count(), 9);
    }

    #[test]
    fn invalid_depth_rejected() {
        let engine = DashaEngine::vimshottari();
        assert_eq!(
            engine.hierarchy(BIRTH, 10.0, 0),
            Err(VedicError::DashaDepth { requested: 0, max: 3 })
        );
        assert!(engine.hierarchy(BIRTH, 10.0, 4).is_err());
    }

    #[test]
    fn zero_elapsed_leaves_empty_closing_period() {
        let (_, mahas) = DashaEngine::vimshottari().mahadashas(BIRTH, 0.0);
        assert_eq!(mahas[0].lord, Graha::Ketu);
        assert!(mahas[9].duration_days().abs() < EPS);
    }

    #[test]
    fn tree_nests_children() {
        let h = DashaEngine::vimshottari().hierarchy(BIRTH, 164.699, 2).unwrap();
        let tree = h.tree();
        assert_eq!(tree.len(), 10);
        assert!(tree.iter().all(|n| n.children.len() == 9));
        assert!(tree[0].children[0].children.is_empty());
    }
}
