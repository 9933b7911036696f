//! Integration tests for the Vimshottari tree.

use kundali_vedic::dasha::{DAYS_PER_YEAR, DashaLevel, DashaPeriod, MAX_DASHA_DEPTH};
use kundali_vedic::{DashaEngine, DashaHierarchy, Graha, period_pairs, snapshot};
use proptest::prelude::*;

const BIRTH: f64 = 2_451_545.0;
const EPS_DAYS: f64 = 1e-6;

fn full_tree(moon: f64) -> DashaHierarchy {
    DashaEngine::vimshottari()
        .hierarchy(BIRTH, moon, MAX_DASHA_DEPTH)
        .unwrap()
}

fn assert_tiles(h: &DashaHierarchy) {
    for depth in 0..h.depth() - 1 {
        for (pi, parent) in h.levels[depth].iter().enumerate() {
            let kids: Vec<&DashaPeriod> = h.children_of(depth, pi).collect();
            assert_eq!(kids.len(), 9);
            assert_eq!(kids[0].start_jd, parent.start_jd);
            assert_eq!(kids[8].end_jd, parent.end_jd);
            for w in kids.windows(2) {
                assert_eq!(w[0].end_jd, w[1].start_jd);
            }
            let sum: f64 = kids.iter().map(|k| k.duration_days()).sum();
            assert!(
                (sum - parent.duration_days()).abs() < EPS_DAYS,
                "depth {depth} parent {pi}: {sum} vs {}",
                parent.duration_days()
            );
        }
    }
}

#[test]
fn moon_in_hasta_starts_with_chandra() {
    // Sidereal Moon of the 1972-07-17 Vijayawada chart.
    let h = full_tree(164.699);
    assert_eq!(h.balance.lord, Graha::Chandra);
    assert_eq!(h.balance.nakshatra.number(), 13);
    assert!((h.balance.elapsed_fraction - 0.352).abs() < 1e-3);
    assert!((h.balance.balance_years - 6.48).abs() < 0.01);
}

#[test]
fn mahadashas_sum_to_120_years() {
    for moon in [0.0, 13.0, 164.699, 200.0, 352.28, 359.99] {
        let h = full_tree(moon);
        let mahas = h.level(DashaLevel::Mahadasha);
        let total: f64 = mahas.iter().map(DashaPeriod::duration_days).sum();
        assert!(
            (total - 120.0 * DAYS_PER_YEAR).abs() < EPS_DAYS,
            "moon {moon}: {total}"
        );
        assert_eq!(mahas.first().unwrap().start_jd, BIRTH);
        assert_eq!(mahas.last().unwrap().end_jd, BIRTH + 120.0 * DAYS_PER_YEAR);
    }
}

#[test]
fn children_tile_parents_at_every_level() {
    assert_tiles(&full_tree(352.28));
}

#[test]
fn ninety_maha_antar_combinations() {
    let pairs = period_pairs(&full_tree(352.28));
    assert_eq!(pairs.len(), 90);
    // Revati is ruled by Buddh.
    assert_eq!(pairs[0].maha, Graha::Buddh);
    assert_eq!(pairs[89].maha, Graha::Buddh);
    assert_eq!(pairs[89].end_jd, BIRTH + 120.0 * DAYS_PER_YEAR);
}

#[test]
fn snapshot_chain_is_nested() {
    let h = full_tree(100.0);
    let s = snapshot(&h, BIRTH + 45.3 * DAYS_PER_YEAR);
    assert_eq!(s.periods.len(), 3);
    assert!(s.periods[0].start_jd <= s.periods[1].start_jd);
    assert!(s.periods[2].end_jd <= s.periods[1].end_jd);
}

proptest! {
    #[test]
    fn any_moon_tiles_the_full_cycle(moon in 0.0f64..360.0) {
        let h = DashaEngine::vimshottari().hierarchy(BIRTH, moon, 2).unwrap();
        let mahas = h.level(DashaLevel::Mahadasha);
        prop_assert_eq!(mahas.len(), 10);
        prop_assert_eq!(mahas[0].lord, mahas[9].lord);
        let total: f64 = mahas.iter().map(DashaPeriod::duration_days).sum();
        prop_assert!((total - 120.0 * DAYS_PER_YEAR).abs() < EPS_DAYS);
        prop_assert_eq!(period_pairs(&h).len(), 90);
        for w in mahas.windows(2) {
            prop_assert_eq!(w[0].end_jd, w[1].start_jd);
        }
    }
}
