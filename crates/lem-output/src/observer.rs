//! `MoveLogObserver<W>`: bridges `SimObserver` to a `MoveWriter`.

use lem_colony::Colony;
use lem_core::Turn;
use lem_sim::{Move, SimObserver};

use crate::{MoveRow, MoveWriter, OutputError, OutputResult};

/// A [`SimObserver`] that streams every logged turn to a [`MoveWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].  Once a write fails, later turns are
/// skipped.
pub struct MoveLogObserver<W: MoveWriter> {
    writer:     W,
    /// Report lines written so far.
    lines:      u32,
    last_error: Option<OutputError>,
}

impl<W: MoveWriter> MoveLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Number of turns written.
    pub fn lines_written(&self) -> u32 {
        self.lines
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: MoveWriter> SimObserver for MoveLogObserver<W> {
    fn on_turn_end(&mut self, _turn: Turn, moves: &[Move], colony: &Colony) {
        if self.last_error.is_some() {
            return;
        }
        self.lines += 1;
        let rows: Vec<MoveRow> = moves
            .iter()
            .map(|mv| MoveRow::new(self.lines, mv, colony))
            .collect();
        let result = self.writer.write_turn(self.lines, &rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_turn: Turn, _logged_turns: usize) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
