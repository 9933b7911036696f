//! The nine-lord Vimshottari cycle.

use crate::graha::Graha;

use super::types::DAYS_PER_YEAR;

/// Lords in cycle order with their full periods in years.
#[derive(Debug, Clone, PartialEq)]
pub struct VimshottariCycle {
    pub lords: [(Graha, f64); 9],
}

/// Ketu 7, Shukra 20, Surya 6, Chandra 10, Mangal 7, Rahu 18, Guru 16,
/// Shani 19, Buddh 17: 120 years.
pub const VIMSHOTTARI_CYCLE: VimshottariCycle = VimshottariCycle {
    lords: [
        (Graha::Ketu, 7.0),
        (Graha::Shukra, 20.0),
        (Graha::Surya, 6.0),
        (Graha::Chandra, 10.0),
        (Graha::Mangal, 7.0),
        (Graha::Rahu, 18.0),
        (Graha::Guru, 16.0),
        (Graha::Shani, 19.0),
        (Graha::Buddh, 17.0),
    ],
};

impl Default for VimshottariCycle {
    fn default() -> Self {
        VIMSHOTTARI_CYCLE
    }
}

impl VimshottariCycle {
    pub fn total_years(&self) -> f64 {
        self.lords.iter().map(|(_, y)| y).sum()
    }

    pub fn total_days(&self) -> f64 {
        self.total_years() * DAYS_PER_YEAR
    }

    /// Nakshatras are assigned to lords in cycle order, three rounds of nine.
    pub fn lord_of_nakshatra(&self, nakshatra_index: u8) -> Graha {
        self.lords[(nakshatra_index % 9) as usize].0
    }

    pub fn position(&self, lord: Graha) -> Option<usize> {
        self.lords.iter().position(|(g, _)| *g == lord)
    }

    pub fn years(&self, lord: Graha) -> f64 {
        self.position(lord).map_or(0.0, |i| self.lords[i].1)
    }

    /// The nine lords starting from `lord`.
    pub fn sequence_from(&self, lord: Graha) -> impl Iterator<Item = (Graha, f64)> + '_ {
        let start = self.position(lord).unwrap_or(0);
        (0..9).map(move |k| self.lords[(start + k) % 9])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_spans_120_years() {
        assert!((VIMSHOTTARI_CYCLE.total_years() - 120.0).abs() < 1e-12);
    }

    #[test]
    fn nakshatra_lords_repeat_every_nine() {
        let c = &VIMSHOTTARI_CYCLE;
        assert_eq!(c.lord_of_nakshatra(0), Graha::Ketu);
        assert_eq!(c.lord_of_nakshatra(3), Graha::Chandra);
        assert_eq!(c.lord_of_nakshatra(12), Graha::Chandra);
        assert_eq!(c.lord_of_nakshatra(26), Graha::Buddh);
    }

    #[test]
    fn sequence_wraps() {
        let seq: Vec<Graha> = VIMSHOTTARI_CYCLE.sequence_from(Graha::Shani).map(|(g, _)| g).collect();
        assert_eq!(seq[0], Graha::Shani);
        assert_eq!(seq[1], Graha::Buddh);
        assert_eq!(seq[2], Graha::Ketu);
        assert_eq!(seq.len(), 9);
    }
}
