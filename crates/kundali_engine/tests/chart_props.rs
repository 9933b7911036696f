//! Universal properties over random births.

use proptest::prelude::*;

use kundali_engine::{BirthDetails, ChartCalculator, ChartRequest, Preferences};
use kundali_ephem::AnalyticEphemeris;
use kundali_time::CivilTime;

fn birth() -> impl Strategy<Value = BirthDetails> {
    (
        1850i32..2040,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        -60.0f64..60.0,
        -180.0f64..180.0,
    )
        .prop_map(|(y, mo, d, h, mi, lat, lon)| {
            let offset = (lon / 15.0).round();
            BirthDetails::new(CivilTime::new(y, mo, d, h, mi, 0.0, offset), lat, lon)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn any_birth_in_range_gives_a_full_table(b in birth()) {
        let chart = ChartCalculator::new(&AnalyticEphemeris)
            .compute(&ChartRequest::new(b, Preferences::default()))
            .unwrap();
        prop_assert_eq!(chart.intensity.len(), 540);
        prop_assert!(chart.intensity.iter().all(|r| (1.0..=10.0).contains(&r.score)));

        let years: f64 = chart.dasha.periods.iter().map(|p| p.duration_years).sum();
        prop_assert!((years - 120.0).abs() < 1e-6, "years {}", years);
        for maha in &chart.dasha.periods {
            let first = &maha.children[0];
            let last = &maha.children[maha.children.len() - 1];
            prop_assert_eq!(first.start_jd, maha.start_jd);
            prop_assert_eq!(last.end_jd, maha.end_jd);
        }
        for p in &chart.planets {
            prop_assert!((1..=27).contains(&p.position.nakshatra_number));
            prop_assert!((1..=4).contains(&p.position.pada));
        }
    }
}
