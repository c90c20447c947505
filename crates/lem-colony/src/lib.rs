//! `lem-colony`: the static colony graph and its text-format parser.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`colony`] | `Room`, `Colony` (CSR adjacency), `ColonyBuilder`          |
//! | [`parser`] | `parse_colony`, `load_colony`: the line-oriented map format |
//! | [`error`]  | `ColonyError`, `ColonyResult<T>`                           |
//!
//! A [`Colony`] is built once and is read-only afterwards: every later stage
//! (path enumeration, scoring, simulation) borrows it immutably.

pub mod colony;
pub mod error;
pub mod parser;


pub use colony::{Colony, ColonyBuilder, Room};
pub use error::{ColonyError, ColonyResult};
pub use parser::{load_colony, parse_colony};
