//! Lookups over a built [`DashaHierarchy`].

use serde::Serialize;

use crate::graha::Graha;

use super::types::{DashaHierarchy, DashaPeriod, DashaSnapshot};

/// Index of the period containing `jd`, by binary search over sorted, gapless periods.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods.get(idx).filter(|p| p.contains(jd)).map(|_| idx)
}

/// Periods running at `jd`, one per level.
///
/// Zero-length periods never contain an instant, so the chain skips them.
pub fn snapshot(hierarchy: &DashaHierarchy, jd: f64) -> DashaSnapshot {
    let mut periods = Vec::with_capacity(hierarchy.depth());
    let mut parent: Option<usize> = None;
    for level in &hierarchy.levels {
        let found = match parent {
            None => find_active_period(level, jd),
            Some(pi) => {
                // Siblings are contiguous, so search only the parent's slice.
                let first = level.partition_point(|p| (p.parent_idx as usize) < pi);
                let last = level.partition_point(|p| (p.parent_idx as usize) <= pi);
                find_active_period(&level[first..last], jd).map(|i| first + i)
            }
        };
        match found {
            Some(i) => {
                periods.push(level[i]);
                parent = Some(i);
            }
            None => break,
        }
    }
    DashaSnapshot { query_jd: jd, periods }
}

/// One (Mahadasha, Antardasha) combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodPair {
    pub maha: Graha,
    pub antar: Graha,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Flat (Maha, Antar) table in chronological order.
pub fn period_pairs(hierarchy: &DashaHierarchy) -> Vec<PeriodPair> {
    let (Some(mahas), Some(antars)) = (hierarchy.levels.first(), hierarchy.levels.get(1)) else {
        return Vec::new();
    };
    antars
        .iter()
        .filter_map(|a| {
            mahas.get(a.parent_idx as usize).map(|m| PeriodPair {
                maha: m.lord,
                antar: a.lord,
                start_jd: a.start_jd,
                end_jd: a.end_jd,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::DashaEngine;
    use crate::dasha::types::DashaLevel;

    const BIRTH: f64 = 2_441_515.365_97;

    fn tree() -> DashaHierarchy {
        DashaEngine::vimshottari().hierarchy(BIRTH, 164.699, 3).unwrap()
    }

    #[test]
    fn snapshot_at_birth_is_first_chain() {
        let h = tree();
        let s = snapshot(&h, BIRTH);
        assert_eq!(s.periods.len(), 3);
        assert!(s.periods.iter().all(|p| p.lord == Graha::Chandra));
    }

    #[test]
    fn snapshot_matches_linear_scan() {
        let h = tree();
        for years in [0.5, 3.0, 17.25, 60.0, 119.9] {
            let jd = BIRTH + years * 365.25;
            let s = snapshot(&h, jd);
            assert_eq!(s.periods.len(), 3, "at {years} years");
            for (depth, p) in s.periods.iter().enumerate() {
                assert!(p.contains(jd));
                assert_eq!(p.level, DashaLevel::ALL[depth]);
                let scan = h.levels[depth].iter().filter(|q| q.contains(jd)).count();
                assert_eq!(scan, 1);
            }
        }
    }

    #[test]
    fn outside_range_is_empty() {
        let h = tree();
        assert!(snapshot(&h, BIRTH - 1.0).periods.is_empty());
        assert!(snapshot(&h, BIRTH + 121.0 * 365.25).periods.is_empty());
    }

    #[test]
    fn ninety_pairs() {
        let pairs = period_pairs(&tree());
        assert_eq!(pairs.len(), 90);
        assert_eq!((pairs[0].maha, pairs[0].antar), (Graha::Chandra, Graha::Chandra));
        assert_eq!((pairs[1].maha, pairs[1].antar), (Graha::Chandra, Graha::Mangal));
        for w in pairs.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
    }
}
