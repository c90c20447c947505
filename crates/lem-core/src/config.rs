//! Solver configuration.
//!
//! Every constant used by the scorer, the selector, the distributor, and the
//! turn simulator lives here.  [`SolverConfig::default`] is the canonical
//! policy: changing any value changes which paths are selected and therefore
//! the whole move log.

use crate::{CoreError, CoreResult};

/// Heuristic constants for path scoring, path selection, ant distribution,
/// and per-turn priority.
///
/// Typically left at its default; the `lem-in` binary can load overrides from
/// a JSON file when the `serde` feature is enabled.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    // ── Path scoring ──────────────────────────────────────────────────────
    /// Weight of the length sub-score in the composite.  Default 0.4.
    pub length_weight: f64,

    /// Weight of the independence sub-score.  Default 0.3.
    pub independence_weight: f64,

    /// Weight of the connectivity (bottleneck) sub-score.  Default 0.2.
    pub connectivity_weight: f64,

    /// Weight of the geometric position sub-score.  Default 0.1.
    pub position_weight: f64,

    /// Multiplier applied to the mean interior degree to obtain the
    /// connectivity sub-score.  Default 20.
    pub connectivity_scale: f64,

    // ── Path selection ────────────────────────────────────────────────────
    /// Paths accepted unconditionally (subject only to the per-pair overlap
    /// limit) before the total-overlap budget applies.  Default 2.
    pub min_paths: usize,

    /// Per-pair overlap limit is `(len_a + len_b) / overlap_divisor`
    /// (integer division).  Default 8.
    pub overlap_divisor: usize,

    // ── Ant distribution ──────────────────────────────────────────────────
    /// Per-assigned-ant interference cost on inefficient paths.  Default 0.8.
    pub interference_factor: f64,

    /// Cost per still-unassigned ant once a path runs out of headroom.
    /// Default 0.5.
    pub backlog_factor: f64,

    /// Start-up delay growth per queue position.  Default 1.5.
    pub delay_factor: f64,

    /// Weight of `1 / node_count` in path efficiency.  Default 0.6.
    pub efficiency_length_weight: f64,

    /// Weight of normalised interior degree in path efficiency.  Default 0.4.
    pub efficiency_degree_weight: f64,

    /// Interior degree at which the efficiency degree term saturates.
    /// Default 4.
    pub degree_normaliser: f64,

    // ── Turn priority ─────────────────────────────────────────────────────
    /// Priority bonus for ants that already left the start room.  Default 0.5.
    pub departed_bonus: f64,

    /// Priority bonus for waiting ants whose delay has elapsed.  Default 0.3.
    pub ready_bonus: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            length_weight:            0.4,
            independence_weight:      0.3,
            connectivity_weight:      0.2,
            position_weight:          0.1,
            connectivity_scale:       20.0,
            min_paths:                2,
            overlap_divisor:          8,
            interference_factor:      0.8,
            backlog_factor:           0.5,
            delay_factor:             1.5,
            efficiency_length_weight: 0.6,
            efficiency_degree_weight: 0.4,
            degree_normaliser:        4.0,
            departed_bonus:           0.5,
            ready_bonus:              0.3,
        }
    }
}

impl SolverConfig {
    /// Reject configurations that would make the solver divide by zero or
    /// compare NaN scores.
    pub fn validate(&self) -> CoreResult<()> {
        let factors = [
            ("length_weight",            self.length_weight),
            ("independence_weight",      self.independence_weight),
            ("connectivity_weight",      self.connectivity_weight),
            ("position_weight",          self.position_weight),
            ("connectivity_scale",       self.connectivity_scale),
            ("interference_factor",      self.interference_factor),
            ("backlog_factor",           self.backlog_factor),
            ("delay_factor",             self.delay_factor),
            ("efficiency_length_weight", self.efficiency_length_weight),
            ("efficiency_degree_weight", self.efficiency_degree_weight),
            ("departed_bonus",           self.departed_bonus),
            ("ready_bonus",              self.ready_bonus),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if !(self.degree_normaliser.is_finite() && self.degree_normaliser > 0.0) {
            return Err(CoreError::Config(format!(
                "degree_normaliser must be positive, got {}",
                self.degree_normaliser
            )));
        }
        if self.overlap_divisor == 0 {
            return Err(CoreError::Config("overlap_divisor must be non-zero".into()));
        }
        // A zero length weight would let efficiency reach zero and stall the
        // distributor's batch sizing.
        if self.efficiency_length_weight == 0.0 {
            return Err(CoreError::Config(
                "efficiency_length_weight must be positive".into(),
            ));
        }
        Ok(())
    }
}
