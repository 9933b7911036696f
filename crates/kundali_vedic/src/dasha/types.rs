//! Types shared by the dasha builder and its queries.

use serde::Serialize;

use crate::graha::Graha;

use super::balance::BirthBalance;

/// Julian year, used for every dasha length.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Deepest level the engine builds (Pratyantardasha).
pub const MAX_DASHA_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
}

impl DashaLevel {
    pub const ALL: [Self; 3] = [Self::Mahadasha, Self::Antardasha, Self::Pratyantardasha];

    pub const fn depth(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// One period at any level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    /// JD (UT), inclusive.
    pub start_jd: f64,
    /// JD (UT), exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-based position among siblings.
    pub order: u16,
    /// Index of the parent in the level above; 0 for mahadashas.
    pub parent_idx: u32,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// All levels of a dasha tree, shallowest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaHierarchy {
    pub birth_jd: f64,
    pub balance: BirthBalance,
    pub levels: Vec<Vec<DashaPeriod>>,
}

impl DashaHierarchy {
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, level: DashaLevel) -> &[DashaPeriod] {
        self.levels
            .get(level.depth() as usize)
            .map_or(&[], Vec::as_slice)
    }

    /// Children of `levels[depth][idx]`.
    pub fn children_of(&self, depth: usize, idx: usize) -> impl Iterator<Item = &DashaPeriod> {
        self.levels
            .get(depth + 1)
            .into_iter()
            .flatten()
            .filter(move |p| p.parent_idx as usize == idx)
    }

    /// Nested view of the tree.
    pub fn tree(&self) -> Vec<DashaNode> {
        (0..self.levels.first().map_or(0, Vec::len))
            .map(|i| self.node(0, i))
            .collect()
    }

    fn node(&self, depth: usize, idx: usize) -> DashaNode {
        let children = match self.levels.get(depth + 1) {
            Some(next) => next
                .iter()
                .enumerate()
                .filter(|(_, p)| p.parent_idx as usize == idx)
                .map(|(ci, _)| self.node(depth + 1, ci))
                .collect(),
            None => Vec::new(),
        };
        DashaNode {
            period: self.levels[depth][idx],
            children,
        }
    }
}

/// A period with its sub-periods nested underneath.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaNode {
    #[serde(flatten)]
    pub period: DashaPeriod,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DashaNode>,
}

/// The chain of periods running at one instant, shallowest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaSnapshot {
    pub query_jd: f64,
    pub periods: Vec<DashaPeriod>,
}
