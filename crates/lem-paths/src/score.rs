//! Composite path scoring.
//!
//! Each candidate receives four sub-scores, each roughly in `0..=100`:
//!
//! | Sub-score      | Formula                                                   |
//! |----------------|-----------------------------------------------------------|
//! | `length`       | `100 / node_count`                                        |
//! | `independence` | `100 / (1 + Σ shared interior rooms with every other path)` |
//! | `connectivity` | `100` for a direct path, else `mean interior degree × scale` |
//! | `position`     | `100 / (1 + mean interior deviation from the start–end line)` |
//!
//! The connectivity score has no upper clamp; dense colonies can exceed 100,
//! which is harmless because scores are only compared with each other.
//!
//! ```text
//! composite = w_len·length + w_ind·independence + w_con·connectivity + w_pos·position
//! ```

use rustc_hash::FxHashSet;

use lem_colony::Colony;
use lem_core::{Point, RoomId, SolverConfig};

use crate::Path;

/// The four sub-scores and their weighted sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathScore {
    pub length:       f64,
    pub independence: f64,
    pub connectivity: f64,
    pub position:     f64,
    pub composite:    f64,
}

/// A candidate path with its score.
#[derive(Debug, Clone)]
pub struct ScoredPath {
    pub path:  Path,
    pub score: PathScore,
}

/// Score every candidate against the whole candidate set and return them
/// best first.
///
/// The sort is stable: candidates with equal composite scores keep their
/// enumeration order, so the result is fully determined by the input order.
pub fn score_paths(colony: &Colony, paths: Vec<Path>, config: &SolverConfig) -> Vec<ScoredPath> {
    let interiors: Vec<FxHashSet<RoomId>> = paths
        .iter()
        .map(|p| p.interior().iter().copied().collect())
        .collect();

    let start = colony.pos(colony.start());
    let end   = colony.pos(colony.end());

    let mut scored: Vec<ScoredPath> = paths
        .into_iter()
        .enumerate()
        .map(|(i, path)| {
            let shared: usize = interiors
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, other)| interiors[i].intersection(other).count())
                .sum();

            let length       = 100.0 / path.len() as f64;
            let independence = 100.0 / (1.0 + shared as f64);
            let connectivity = connectivity_score(colony, &path, config);
            let position     = position_score(colony, &path, start, end);
            let composite    = config.length_weight * length
                + config.independence_weight * independence
                + config.connectivity_weight * connectivity
                + config.position_weight * position;

            ScoredPath {
                path,
                score: PathScore { length, independence, connectivity, position, composite },
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.composite.total_cmp(&a.score.composite));
    scored
}

fn connectivity_score(colony: &Colony, path: &Path, config: &SolverConfig) -> f64 {
    match path.mean_interior_degree(colony) {
        None => 100.0,
        Some(mean) => mean * config.connectivity_scale,
    }
}

fn position_score(colony: &Colony, path: &Path, start: Point, end: Point) -> f64 {
    let interior = path.interior();
    if interior.is_empty() {
        return 100.0;
    }
    let mut total = 0.0;
    for &room in interior {
        match colony.pos(room).distance_to_line(start, end) {
            Some(d) => total += d,
            // Start and end share coordinates: no reference line.
            None => return 100.0,
        }
    }
    100.0 / (1.0 + total / interior.len() as f64)
}
