//! Vimshottari dasha: the 120-year planetary period tree.
//!
//! The Moon's nakshatra at birth picks the first lord and how much of its
//! period is already spent. Mahadashas then follow the nine-lord cycle;
//! every level below divides its parent in the same proportions, starting
//! from the parent's own lord.
//!
//! Levels are stored flat, one `Vec` per depth, with children pointing at
//! their parent by index.

pub mod balance;
pub mod cycle;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, birth_balance};
pub use cycle::{VIMSHOTTARI_CYCLE, VimshottariCycle};
pub use query::{PeriodPair, find_active_period, period_pairs, snapshot};
pub use subperiod::{proportional_children, snap_last_child_end};
pub use types::{
    DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaNode, DashaPeriod, DashaSnapshot,
    MAX_DASHA_DEPTH,
};
pub use vimshottari::DashaEngine;
