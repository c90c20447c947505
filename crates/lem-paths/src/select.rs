//! Greedy low-overlap path selection.
//!
//! Walks the scored candidates best first and keeps a small set of paths the
//! ants will use concurrently.  Two rules decide acceptance:
//!
//! 1. **Pair limit**: a candidate is rejected outright if it shares more
//!    than `(len_candidate + len_accepted) / overlap_divisor` interior rooms
//!    (integer division) with any single accepted path.
//! 2. **Overlap budget**: otherwise it is accepted if its total shared
//!    interior rooms across all accepted paths is at most the number of
//!    accepted paths, or unconditionally while fewer than `min_paths` paths
//!    have been accepted.
//!
//! The walk stops once `target_path_count(ants)` candidates have been
//! examined *and* at least `min_paths` paths are accepted.  Both rules and the
//! stop condition are pinned by golden tests; altering them changes the move
//! log.

use lem_core::SolverConfig;

use crate::{Path, ScoredPath};

/// `floor(sqrt(ants)) + 1`.
pub fn target_path_count(ant_count: u32) -> usize {
    ant_count.isqrt() as usize + 1
}

/// Select paths from `scored` (best first).  Returns paths in acceptance
/// order, never empty unless `scored` is.
pub fn select_paths(scored: &[ScoredPath], ant_count: u32, config: &SolverConfig) -> Vec<Path> {
    let target = target_path_count(ant_count);
    let mut accepted: Vec<&Path> = Vec::new();

    for (examined, candidate) in scored.iter().enumerate() {
        if examined >= target && accepted.len() >= config.min_paths {
            break;
        }

        let Some(total) = total_overlap(&candidate.path, &accepted, config) else {
            tracing::trace!(rank = examined, "candidate exceeds pair overlap limit");
            continue;
        };

        if accepted.len() < config.min_paths || total <= accepted.len() {
            accepted.push(&candidate.path);
        } else {
            tracing::trace!(rank = examined, total, "candidate exceeds overlap budget");
        }
    }

    if accepted.is_empty() {
        if let Some(best) = scored.first() {
            accepted.push(&best.path);
        }
    }

    tracing::debug!(
        candidates = scored.len(),
        target,
        selected = accepted.len(),
        "selected paths"
    );
    accepted.into_iter().cloned().collect()
}

/// Total shared interior rooms between `candidate` and every accepted path,
/// or `None` if any single pair exceeds the pair limit.
fn total_overlap(candidate: &Path, accepted: &[&Path], config: &SolverConfig) -> Option<usize> {
    let mut total = 0;
    for other in accepted {
        let shared = candidate.shared_interior(other);
        let limit  = (candidate.len() + other.len()) / config.overlap_divisor;
        if shared > limit {
            return None;
        }
        total += shared;
    }
    Some(total)
}
