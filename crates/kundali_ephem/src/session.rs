//! Per-request memoization over an [`Ephemeris`].
//!
//! A session is created at the start of one chart computation, threaded
//! through every stage that needs positions, and dropped at the end. Keys
//! use `jd.to_bits()`: every stage of one request derives its instants from
//! the same arithmetic, so equal instants are bit-identical.

use std::collections::HashMap;

use serde::Serialize;

use crate::ayanamsha::AyanamshaSystem;
use crate::error::EphemerisError;
use crate::{Body, BodyState, Ephemeris};

/// Telemetry from one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct QueryStats {
    pub evaluations: u32,
    pub cache_hits: u32,
}

/// Memoizing view over an ephemeris source.
pub struct EphemerisSession<'a> {
    source: &'a dyn Ephemeris,
    states: HashMap<(Body, u64), BodyState>,
    ayanamshas: HashMap<(AyanamshaSystem, u64), f64>,
    stats: QueryStats,
}

impl std::fmt::Debug for EphemerisSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EphemerisSession")
            .field("source", &self.source.name())
            .field("cached_states", &self.states.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a> EphemerisSession<'a> {
    pub fn new(source: &'a dyn Ephemeris) -> Self {
        Self {
            source,
            states: HashMap::with_capacity(16),
            ayanamshas: HashMap::with_capacity(2),
            stats: QueryStats::default(),
        }
    }

    pub fn source(&self) -> &'a dyn Ephemeris {
        self.source
    }

    /// Body state at `jd_ut`, evaluated at most once per session.
    pub fn body_state(&mut self, body: Body, jd_ut: f64) -> Result<BodyState, EphemerisError> {
        let key = (body, jd_ut.to_bits());
        if let Some(state) = self.states.get(&key) {
            self.stats.cache_hits += 1;
            tracing::trace!(%body, jd_ut, "ephemeris cache hit");
            return Ok(*state);
        }
        let state = self.source.body_state(body, jd_ut)?;
        self.stats.evaluations += 1;
        tracing::trace!(%body, jd_ut, lon = state.longitude_deg, "ephemeris evaluated");
        self.states.insert(key, state);
        Ok(state)
    }

    /// Ayanamsha at `jd_ut`, evaluated at most once per session.
    pub fn ayanamsha_deg(
        &mut self,
        system: AyanamshaSystem,
        jd_ut: f64,
    ) -> Result<f64, EphemerisError> {
        let key = (system, jd_ut.to_bits());
        if let Some(value) = self.ayanamshas.get(&key) {
            self.stats.cache_hits += 1;
            return Ok(*value);
        }
        let value = self.source.ayanamsha_deg(system, jd_ut)?;
        self.stats.evaluations += 1;
        self.ayanamshas.insert(key, value);
        Ok(value)
    }

    pub fn stats(&self) -> QueryStats {
        self.stats
    }
}
