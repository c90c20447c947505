//! The `Sim` struct and its turn loop.

use std::fmt;

use rustc_hash::FxHashSet;

use lem_colony::Colony;
use lem_core::{AntId, RoomId, SolverConfig, Turn};
use lem_paths::Path;

use crate::{Ant, Cursor, SimObserver};

// ── Moves and the move log ────────────────────────────────────────────────────

/// One ant entering one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub ant:  AntId,
    pub room: RoomId,
}

impl Move {
    /// Render as the `L<ant>-<room>` output token.
    pub fn token(&self, colony: &Colony) -> String {
        MoveToken { mv: *self, colony }.to_string()
    }

    pub fn display<'a>(&self, colony: &'a Colony) -> MoveToken<'a> {
        MoveToken { mv: *self, colony }
    }
}

/// [`fmt::Display`] adapter returned by [`Move::display`].
pub struct MoveToken<'a> {
    mv:     Move,
    colony: &'a Colony,
}

impl fmt::Display for MoveToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}-{}", self.mv.ant.0, self.colony.name(self.mv.room))
    }
}

/// The moves recorded in one turn, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedTurn {
    pub turn:  Turn,
    pub moves: Vec<Move>,
}

impl LoggedTurn {
    /// Space-separated tokens for this turn.
    pub fn line(&self, colony: &Colony) -> String {
        let mut line = String::new();
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&mv.token(colony));
        }
        line
    }
}

/// Every non-empty turn of a run, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    pub turns: Vec<LoggedTurn>,
}

impl MoveLog {
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// One output line per logged turn.
    pub fn lines(&self, colony: &Colony) -> Vec<String> {
        self.turns.iter().map(|t| t.line(colony)).collect()
    }

    /// Total recorded moves across all turns.
    pub fn move_count(&self) -> usize {
        self.turns.iter().map(|t| t.moves.len()).sum()
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The turn-based ant simulator.
///
/// Each turn:
///
/// 1. **Occupancy**: the set of interior rooms currently holding an ant.
/// 2. **Order**: ants not yet at the end, by descending priority; ties by
///    ascending [`AntId`].
/// 3. **Advance**: in that order, each ready ant moves one room forward if the
///    next room is the start, the end, or unoccupied.  Leaving a room frees it
///    for ants later in the same turn.
///
/// Departures into the start room count as movement but are not recorded.
/// The loop ends on the first turn in which no ant moves, so it terminates
/// even if ants on crossing paths block each other.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<'c> {
    colony: &'c Colony,
    config: SolverConfig,
    paths:  Vec<Path>,
    ants:   Vec<Ant>,
    /// Next turn to execute.
    turn:   Turn,
}

impl<'c> Sim<'c> {
    pub(crate) fn new(colony: &'c Colony, config: SolverConfig, paths: Vec<Path>, ants: Vec<Ant>) -> Self {
        Self { colony, config, paths, ants, turn: Turn::ZERO }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn colony(&self) -> &'c Colony {
        self.colony
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Selected paths; `Ant::path` indexes into this slice.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Number of turns in which something moved so far.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The room `ant` currently stands on, `None` before departure.
    pub fn room_of(&self, ant: &Ant) -> Option<RoomId> {
        match ant.cursor {
            Cursor::Waiting => None,
            Cursor::At(i) => Some(self.paths[ant.path].rooms()[i]),
        }
    }

    /// `true` once every ant stands on the end room.
    pub fn is_finished(&self) -> bool {
        self.ants.iter().all(|a| a.is_finished(self.paths[a.path].len()))
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run turns until nothing moves and return the recorded log.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> MoveLog {
        let mut log = MoveLog::default();
        loop {
            let turn = self.turn;
            observer.on_turn_start(turn);
            let Some(moves) = self.step() else {
                break;
            };
            if moves.is_empty() {
                continue;
            }
            observer.on_turn_end(turn, &moves, self.colony);
            log.turns.push(LoggedTurn { turn, moves });
        }

        observer.on_sim_end(self.turn, log.len());

        if !self.is_finished() {
            let stranded = self
                .ants
                .iter()
                .filter(|a| !a.is_finished(self.paths[a.path].len()))
                .count();
            tracing::warn!(stranded, turn = %self.turn, "simulation stalled before every ant arrived");
        } else {
            tracing::debug!(turns = %self.turn, logged = log.len(), "simulation complete");
        }
        log
    }

    /// Execute one turn.
    ///
    /// Returns the recorded moves (possibly empty if the only movement was
    /// departures), or `None` if no ant could move; in that case the turn
    /// counter is not advanced.
    pub fn step(&mut self) -> Option<Vec<Move>> {
        let turn = self.turn;
        let colony = self.colony;

        let mut occupied: FxHashSet<RoomId> = self
            .ants
            .iter()
            .filter_map(|a| self.room_of(a))
            .filter(|&r| !colony.is_terminal(r))
            .collect();

        let order = self.movement_order(turn);

        let mut moved = false;
        let mut moves = Vec::new();
        for i in order {
            let ant = &self.ants[i];
            if !ant.is_ready(turn) {
                continue;
            }
            let rooms = self.paths[ant.path].rooms();
            let next = rooms[ant.next_index()];
            let terminal = colony.is_terminal(next);
            if !terminal && occupied.contains(&next) {
                continue;
            }

            if let Cursor::At(j) = ant.cursor {
                occupied.remove(&rooms[j]);
            }
            if !terminal {
                occupied.insert(next);
            }
            let id = ant.id;
            self.ants[i].advance();
            moved = true;

            if next != colony.start() {
                moves.push(Move { ant: id, room: next });
            }
        }

        if !moved {
            return None;
        }
        tracing::trace!(%turn, moves = moves.len(), "turn executed");
        self.turn = turn.next();
        Some(moves)
    }

    // ── Internal ──────────────────────────────────────────────────────────

    /// Indices of unfinished ants, highest priority first.
    fn movement_order(&self, turn: Turn) -> Vec<usize> {
        let mut ranked: Vec<(f64, usize)> = self
            .ants
            .iter()
            .enumerate()
            .filter(|(_, a)| !a.is_finished(self.paths[a.path].len()))
            .map(|(i, a)| (a.priority(self.paths[a.path].len(), turn, &self.config), i))
            .collect();

        ranked.sort_by(|(pa, ia), (pb, ib)| {
            pb.total_cmp(pa)
                .then_with(|| self.ants[*ia].id.cmp(&self.ants[*ib].id))
        });
        ranked.into_iter().map(|(_, i)| i).collect()
    }
}
