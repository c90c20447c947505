//! CSV output backend.
//!
//! Creates `moves.csv` in the configured output directory with one
//! `turn,ant,room` row per recorded move.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::{MoveRow, MoveWriter, OutputResult};

/// Writes every recorded move to `moves.csv`.
pub struct CsvWriter {
    moves:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `moves.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        // Header written by hand so an empty run still gets one.
        let mut moves = WriterBuilder::new()
            .has_headers(false)
            .from_path(dir.join("moves.csv"))?;
        moves.write_record(["turn", "ant", "room"])?;

        Ok(Self { moves, finished: false })
    }
}

impl MoveWriter for CsvWriter {
    fn write_input(&mut self, _lines: &[String]) -> OutputResult<()> {
        Ok(())
    }

    fn write_turn(&mut self, _turn: u32, rows: &[MoveRow]) -> OutputResult<()> {
        for row in rows {
            self.moves.serialize(row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        Ok(())
    }
}
