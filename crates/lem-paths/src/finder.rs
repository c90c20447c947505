//! Path enumeration trait and the default exhaustive depth-first finder.
//!
//! # Pluggability
//!
//! `lem-sim` calls enumeration through the [`PathFinder`] trait, so callers
//! can substitute a bounded or pre-computed finder without touching the
//! scorer, selector, or simulator.
//!
//! # Cost
//!
//! [`DfsPathFinder`] returns *every* simple start→end path.  The number of
//! simple paths is exponential in the worst case for densely connected
//! colonies and there is deliberately no depth or count cutoff: truncating
//! the candidate set would change which paths get selected.

use lem_colony::Colony;
use lem_core::RoomId;

use crate::{Path, PathError, PathResult};

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable enumeration of candidate start→end paths.
pub trait PathFinder {
    /// Return candidate paths in discovery order.
    ///
    /// Returns [`PathError::NoRoute`] when the end room is unreachable; an
    /// `Ok` result is never empty.
    fn find_paths(&self, colony: &Colony) -> PathResult<Vec<Path>>;
}

// ── DfsPathFinder ─────────────────────────────────────────────────────────────

/// Exhaustive depth-first search over simple paths.
///
/// At each room the unvisited neighbours are explored in ascending rank:
///
/// ```text
/// rank(n) = manhattan(n, end) / (1 + degree(n))
/// ```
///
/// Close, well-connected rooms come first, so promising paths are discovered
/// early.  Ties keep adjacency order.  The ranking only changes discovery
/// order; the set of paths is always complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsPathFinder;

impl PathFinder for DfsPathFinder {
    fn find_paths(&self, colony: &Colony) -> PathResult<Vec<Path>> {
        let mut search = Search::new(colony);
        search.run();

        tracing::debug!(paths = search.found.len(), "enumerated candidate paths");

        if search.found.is_empty() {
            return Err(PathError::NoRoute {
                start: colony.name(colony.start()).to_owned(),
                end:   colony.name(colony.end()).to_owned(),
            });
        }
        Ok(search.found)
    }
}

// ── DFS internals ─────────────────────────────────────────────────────────────

/// One room on the current prefix and its remaining branches.
struct Frame {
    room:   RoomId,
    /// Unvisited neighbours in ascending rank, fixed when the room is entered.
    next:   Vec<RoomId>,
    cursor: usize,
}

/// Depth-first search on an explicit stack; depth is bounded by the room
/// count, not by the native call stack.
struct Search<'c> {
    colony:  &'c Colony,
    /// Neighbour rank per room, computed once up front.
    rank:    Vec<f64>,
    /// `true` for rooms on the current prefix only; cleared on backtrack.
    on_path: Vec<bool>,
    prefix:  Vec<RoomId>,
    stack:   Vec<Frame>,
    found:   Vec<Path>,
}

impl<'c> Search<'c> {
    fn new(colony: &'c Colony) -> Self {
        let goal = colony.pos(colony.end());
        let rank = colony
            .rooms()
            .map(|(id, room)| {
                let distance = room.pos.manhattan(goal) as f64;
                distance / (1.0 + f64::from(colony.degree(id)))
            })
            .collect();
        Self {
            colony,
            rank,
            on_path: vec![false; colony.room_count()],
            prefix:  Vec::new(),
            stack:   Vec::new(),
            found:   Vec::new(),
        }
    }

    fn run(&mut self) {
        self.enter(self.colony.start());

        while let Some(frame) = self.stack.last_mut() {
            match frame.next.get(frame.cursor).copied() {
                Some(n) => {
                    frame.cursor += 1;
                    self.enter(n);
                }
                None => {
                    let room = frame.room;
                    self.stack.pop();
                    self.prefix.pop();
                    self.on_path[room.index()] = false;
                }
            }
        }
    }

    /// Extend the prefix with `room`.  Reaching the end records a path and
    /// backtracks immediately; any other room pushes a frame.
    fn enter(&mut self, room: RoomId) {
        self.prefix.push(room);

        if room == self.colony.end() {
            self.found.push(Path::new(self.prefix.clone()));
            self.prefix.pop();
            return;
        }

        self.on_path[room.index()] = true;
        let mut next: Vec<RoomId> = self
            .colony
            .neighbors(room)
            .iter()
            .copied()
            .filter(|n| !self.on_path[n.index()])
            .collect();
        // Stable sort keeps adjacency order among equal ranks.
        next.sort_by(|a, b| self.rank[a.index()].total_cmp(&self.rank[b.index()]));

        self.stack.push(Frame { room, next, cursor: 0 });
    }
}
