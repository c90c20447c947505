//! The lem-in text report.
//!
//! ```text
//! <every input line, verbatim>
//!
//! L1-a L3-b
//! L1-end L3-end L2-a L4-b
//! ```

use std::io::Write;

use crate::{MoveRow, MoveWriter, OutputResult};

/// Writes the input echo and one line of move tokens per turn.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MoveWriter for TextWriter<W> {
    fn write_input(&mut self, lines: &[String]) -> OutputResult<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn write_turn(&mut self, _turn: u32, rows: &[MoveRow]) -> OutputResult<()> {
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b" ")?;
            }
            write!(self.out, "L{}-{}", row.ant, row.room)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
