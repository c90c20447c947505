//! `lem-output`: move-log writers for the lem-in router.
//!
//! | Writer         | Destination                  | Content                                  |
//! |----------------|------------------------------|------------------------------------------|
//! | [`TextWriter`] | any `io::Write` (stdout)     | input echo, blank line, one line per turn |
//! | [`CsvWriter`]  | `moves.csv` in a directory   | one `turn,ant,room` row per move          |
//!
//! All writers implement [`MoveWriter`] and are driven by [`MoveLogObserver`],
//! which implements `lem_sim::SimObserver`.  A `Vec` of writers is itself a
//! writer, so one run can feed several destinations.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lem_output::{MoveLogObserver, MoveWriter, TextWriter};
//!
//! let mut text = TextWriter::new(io::stdout().lock());
//! text.write_input(colony.input())?;
//! let mut obs = MoveLogObserver::new(text);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::MoveLogObserver;
pub use row::MoveRow;
pub use text::TextWriter;
pub use writer::MoveWriter;
