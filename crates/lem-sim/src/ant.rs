//! Per-ant state.

use lem_core::{AntId, SolverConfig, Turn};

/// Where an ant is along its assigned path.
///
/// Advances monotonically `Waiting → At(0) → At(1) → … → At(len - 1)`; never
/// regresses and never skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Not yet departed.
    Waiting,
    /// At this index of the path's room sequence.
    At(usize),
}

/// One ant: identity, assigned path, cursor, and start-up delay.
///
/// Created by [`distribute`](crate::distribute) and mutated only by the
/// simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ant {
    pub id:     AntId,
    /// Index into the simulator's selected paths.
    pub path:   usize,
    pub cursor: Cursor,
    /// Turns to wait before the first move.
    pub delay:  u32,
}

impl Ant {
    pub fn new(id: AntId, path: usize, delay: u32) -> Self {
        Self { id, path, cursor: Cursor::Waiting, delay }
    }

    #[inline]
    pub fn is_departed(&self) -> bool {
        self.cursor != Cursor::Waiting
    }

    /// `true` once the ant stands on the last room of a path of `path_len`
    /// rooms.
    #[inline]
    pub fn is_finished(&self, path_len: usize) -> bool {
        self.cursor == Cursor::At(path_len - 1)
    }

    /// Departed ants are always ready; waiting ants once their delay elapsed.
    #[inline]
    pub fn is_ready(&self, turn: Turn) -> bool {
        self.is_departed() || turn.has_elapsed(self.delay)
    }

    /// Index of the room the next move enters.
    #[inline]
    pub fn next_index(&self) -> usize {
        match self.cursor {
            Cursor::Waiting => 0,
            Cursor::At(i) => i + 1,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.cursor = Cursor::At(self.next_index());
    }

    /// Movement priority this turn; higher moves first.
    ///
    /// Departed ants score their progress fraction `(i + 1) / len` plus the
    /// departed bonus.  Waiting ants score the ready bonus once their delay has
    /// elapsed, zero before.
    pub fn priority(&self, path_len: usize, turn: Turn, config: &SolverConfig) -> f64 {
        match self.cursor {
            Cursor::At(i) => (i + 1) as f64 / path_len as f64 + config.departed_bonus,
            Cursor::Waiting if turn.has_elapsed(self.delay) => config.ready_bonus,
            Cursor::Waiting => 0.0,
        }
    }
}
