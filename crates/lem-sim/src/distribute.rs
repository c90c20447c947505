//! Greedy ant distribution across the selected paths.
//!
//! Each round picks the path with the lowest estimated completion time and
//! hands it a batch of ants:
//!
//! ```text
//! headroom  = max(0, 1 - assigned / edges)
//! estimate  = edges
//!           + assigned · interference · (1 - efficiency)
//!           + (1 - headroom) · unassigned · backlog
//! batch     = min(floor(estimate / (edges · efficiency)), unassigned)
//! delay(k)  = min(floor(k · (1 - efficiency) · delay_factor), edges - 1)
//! ```
//!
//! `k` is the ant's position within its batch.  The loop ends when every ant
//! is assigned or no path can take a non-empty batch; the shrinking
//! `unassigned` counter bounds the number of rounds.

use lem_colony::Colony;
use lem_core::{AntId, SolverConfig};
use lem_paths::Path;

use crate::Ant;

/// Running assignment state for one selected path.
#[derive(Debug, Clone)]
pub struct PathLoad<'p> {
    pub path:       &'p Path,
    /// Ants assigned so far.
    pub ants:       u32,
    pub efficiency: f64,
}

impl<'p> PathLoad<'p> {
    pub fn new(colony: &Colony, path: &'p Path, config: &SolverConfig) -> Self {
        Self { path, ants: 0, efficiency: path_efficiency(colony, path, config) }
    }

    /// Estimated completion time if this path takes the next batch while
    /// `unassigned` ants remain.
    pub fn estimate(&self, unassigned: u32, config: &SolverConfig) -> f64 {
        let edges = self.path.edge_count() as f64;
        let load = f64::from(self.ants);
        let headroom = (1.0 - load / edges).max(0.0);

        edges
            + load * config.interference_factor * (1.0 - self.efficiency)
            + (1.0 - headroom) * f64::from(unassigned) * config.backlog_factor
    }

    /// Batch size for a round won with `estimate`.
    pub fn batch(&self, estimate: f64, unassigned: u32) -> u32 {
        let edges = self.path.edge_count() as f64;
        let fits = (estimate / (edges * self.efficiency)).floor();
        // Float-to-int casts saturate; NaN becomes 0.
        (fits as u64).min(u64::from(unassigned)) as u32
    }

    /// Start-up delay for the ant at `position` within a batch.
    pub fn delay(&self, position: u32, config: &SolverConfig) -> u32 {
        let raw = (f64::from(position) * (1.0 - self.efficiency) * config.delay_factor).floor();
        let cap = self.path.edge_count().saturating_sub(1) as u32;
        (raw as u32).min(cap)
    }
}

/// How smoothly ants flow through `path`, in `(0, 1]` with default weights.
///
/// `1.0` for a direct path; otherwise a blend of shortness and mean interior
/// degree (saturating at `degree_normaliser`).
pub fn path_efficiency(colony: &Colony, path: &Path, config: &SolverConfig) -> f64 {
    match path.mean_interior_degree(colony) {
        None => 1.0,
        Some(mean) => {
            config.efficiency_length_weight * (1.0 / path.len() as f64)
                + config.efficiency_degree_weight * (mean / config.degree_normaliser).min(1.0)
        }
    }
}

/// Create the colony's ants, assigning each to one of `paths`.
///
/// Ant ids are dense and 1-based, in assignment order.  `Ant::path` indexes
/// into `paths`.
pub fn distribute(colony: &Colony, paths: &[Path], config: &SolverConfig) -> Vec<Ant> {
    let mut loads: Vec<PathLoad<'_>> = paths
        .iter()
        .map(|p| PathLoad::new(colony, p, config))
        .collect();

    let mut ants = Vec::with_capacity(colony.ant_count() as usize);
    let mut next_id = AntId::FIRST;
    let mut unassigned = colony.ant_count();

    while unassigned > 0 {
        let mut best: Option<(usize, f64, u32)> = None;
        for (i, load) in loads.iter().enumerate() {
            let estimate = load.estimate(unassigned, config);
            let batch = load.batch(estimate, unassigned);
            if batch == 0 {
                continue;
            }
            if best.is_none_or(|(_, t, _)| estimate < t) {
                best = Some((i, estimate, batch));
            }
        }

        let Some((i, estimate, batch)) = best else {
            tracing::warn!(unassigned, "no path can take another batch; ants left unassigned");
            break;
        };

        let load = &mut loads[i];
        for position in 0..batch {
            ants.push(Ant::new(next_id, i, load.delay(position, config)));
            next_id = next_id.next();
        }
        load.ants += batch;
        unassigned -= batch;

        tracing::debug!(path = i, batch, estimate, unassigned, "assigned batch");
    }

    ants
}
