//! Proportional division of a period into sub-periods.

use super::cycle::VimshottariCycle;
use super::types::{DashaLevel, DashaPeriod};

/// Overwrite the last child's end with the parent's, absorbing rounding drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Nine children of `parent`, starting from its own lord, each lasting the
/// lord's share of the 120-year cycle scaled to the parent's length.
pub fn proportional_children(
    cycle: &VimshottariCycle,
    parent: &DashaPeriod,
    level: DashaLevel,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    let span = parent.duration_days();
    let total = cycle.total_years();
    let mut cursor = parent.start_jd;
    let mut children: Vec<DashaPeriod> = cycle
        .sequence_from(parent.lord)
        .enumerate()
        .map(|(i, (lord, years))| {
            let start = cursor;
            cursor += span * years / total;
            DashaPeriod {
                lord,
                start_jd: start,
                end_jd: cursor,
                level,
                order: i as u16 + 1,
                parent_idx,
            }
        })
        .collect();
    snap_last_child_end(&mut children, parent.end_jd);
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::cycle::VIMSHOTTARI_CYCLE;
    use crate::dasha::types::DAYS_PER_YEAR;
    use crate::graha::Graha;

    fn maha(lord: Graha, years: f64) -> DashaPeriod {
        DashaPeriod {
            lord,
            start_jd: 2_451_545.0,
            end_jd: 2_451_545.0 + years * DAYS_PER_YEAR,
            level: DashaLevel::Mahadasha,
            order: 1,
            parent_idx: 0,
        }
    }

    #[test]
    fn children_tile_parent() {
        let parent = maha(Graha::Guru, 16.0);
        let kids = proportional_children(&VIMSHOTTARI_CYCLE, &parent, DashaLevel::Antardasha, 3);
        assert_eq!(kids.len(), 9);
        assert_eq!(kids[0].lord, Graha::Guru);
        assert_eq!(kids[0].start_jd, parent.start_jd);
        assert_eq!(kids[8].end_jd, parent.end_jd);
        for w in kids.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
        assert!(kids.iter().all(|k| k.parent_idx == 3));
    }

    #[test]
    fn guru_guru_antardasha_length() {
        // 16 × 16 / 120 years.
        let parent = maha(Graha::Guru, 16.0);
        let kids = proportional_children(&VIMSHOTTARI_CYCLE, &parent, DashaLevel::Antardasha, 0);
        assert!((kids[0].duration_years() - 16.0 * 16.0 / 120.0).abs() < 1e-9);
    }
}
