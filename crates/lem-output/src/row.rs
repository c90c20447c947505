//! Plain data row type written by output backends.

use serde::Serialize;

use lem_colony::Colony;
use lem_sim::Move;

/// One recorded move, resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRow {
    /// 1-based report line this move appears on.
    pub turn: u32,
    pub ant:  u32,
    pub room: String,
}

impl MoveRow {
    pub fn new(turn: u32, mv: &Move, colony: &Colony) -> Self {
        Self { turn, ant: mv.ant.0, room: colony.name(mv.room).to_owned() }
    }

    /// The `L<ant>-<room>` token.
    pub fn token(&self) -> String {
        format!("L{}-{}", self.ant, self.room)
    }
}
