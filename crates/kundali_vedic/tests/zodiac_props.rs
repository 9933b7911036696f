//! Universal properties of sign, nakshatra, varga and house resolution.

use kundali_vedic::{
    DivisionalChartCalculator, HouseCalculator, HouseContext, HouseSystem, PositionResolver,
    VargaTable, nakshatra_from_longitude,
};
use proptest::prelude::*;

#[test]
fn every_nakshatra_boundary_is_one_based() {
    let resolver = PositionResolver;
    for k in 0..27 {
        let start = k as f64 * 360.0 / 27.0;
        let p = resolver.from_sidereal(start + 1e-9);
        assert_eq!(p.nakshatra_number, k + 1, "at {start}");
        assert_eq!(p.pada, 1);
    }
    let last = resolver.from_sidereal(360.0 - 1e-9);
    assert_eq!((last.nakshatra_number, last.pada, last.sign_number), (27, 4, 12));
}

#[test]
fn whole_sign_1963_delhi() {
    // Lagna 203.84° (Tula); Mars at 182.59° is the only graha in house 1.
    let ctx = HouseContext {
        ascendant_deg: 203.84,
        mc_deg: 113.0,
    };
    let houses = HouseCalculator.compute(&ctx, HouseSystem::WholeSign.strategy());
    assert_eq!(houses.house(1).sign_number, 7);
    assert_eq!(houses.house_of(182.59), 1);
    assert_eq!(houses.house_of(352.28), 6);
}

proptest! {
    #[test]
    fn nakshatra_and_pada_in_range(lon in -720.0f64..720.0) {
        let info = nakshatra_from_longitude(lon);
        prop_assert!((1..=27).contains(&info.nakshatra.number()));
        prop_assert!((1..=4).contains(&info.pada));
        let p = PositionResolver.resolve(lon, 23.85);
        prop_assert!((1..=12).contains(&p.sign_number));
        prop_assert!((0.0..30.0).contains(&p.degree_in_sign));
    }

    #[test]
    fn divisor_one_is_identity(sign in 1u8..=12, deg in 0.0f64..30.0) {
        let table = VargaTable::classical();
        let calc = DivisionalChartCalculator::new(&table);
        prop_assert_eq!(calc.compute(sign, deg, 1).unwrap(), sign);
    }

    #[test]
    fn every_divisor_lands_on_a_sign(lon in 0.0f64..360.0) {
        let table = VargaTable::classical();
        let calc = DivisionalChartCalculator::new(&table);
        for d in table.divisors() {
            let p = calc.position(lon, d).unwrap();
            prop_assert!((1..=12).contains(&p.sign_number));
            prop_assert!((0.0..360.0).contains(&p.longitude_deg));
        }
    }

    #[test]
    fn houses_cover_every_longitude(asc in 0.0f64..360.0, lon in 0.0f64..360.0) {
        let ctx = HouseContext { ascendant_deg: asc, mc_deg: (asc + 270.0) % 360.0 };
        for system in kundali_vedic::ALL_HOUSE_SYSTEMS {
            let h = HouseCalculator.compute(&ctx, system.strategy());
            prop_assert!((1..=12).contains(&h.house_of(lon)));
        }
    }
}
