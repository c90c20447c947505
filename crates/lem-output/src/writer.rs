//! The `MoveWriter` trait implemented by all backend writers.

use crate::{MoveRow, OutputResult};

/// Trait implemented by the text and CSV writers.
///
/// Errors surface through [`MoveLogObserver::take_error`][crate::MoveLogObserver::take_error]
/// when driven by the observer.
pub trait MoveWriter {
    /// Record the raw input lines.  Called once, before any turn.
    fn write_input(&mut self, lines: &[String]) -> OutputResult<()>;

    /// Write one logged turn.  `turn` is the 1-based report line number;
    /// `rows` are in movement order.
    fn write_turn(&mut self, turn: u32, rows: &[MoveRow]) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: MoveWriter + ?Sized> MoveWriter for Box<W> {
    fn write_input(&mut self, lines: &[String]) -> OutputResult<()> {
        (**self).write_input(lines)
    }

    fn write_turn(&mut self, turn: u32, rows: &[MoveRow]) -> OutputResult<()> {
        (**self).write_turn(turn, rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// Fan-out: every call goes to each writer in order, stopping at the first
/// error.
impl<W: MoveWriter> MoveWriter for Vec<W> {
    fn write_input(&mut self, lines: &[String]) -> OutputResult<()> {
        self.iter_mut().try_for_each(|w| w.write_input(lines))
    }

    fn write_turn(&mut self, turn: u32, rows: &[MoveRow]) -> OutputResult<()> {
        self.iter_mut().try_for_each(|w| w.write_turn(turn, rows))
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.iter_mut().try_for_each(|w| w.finish())
    }
}
