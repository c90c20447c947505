//! `lem-sim`: ant distribution and the turn loop.
//!
//! # Pipeline
//!
//! ```text
//! SimBuilder::build
//!   ① find_paths   : PathFinder over the colony (default: DfsPathFinder)
//!   ② score_paths  : composite score, best first
//!   ③ select_paths : greedy low-overlap subset
//!   ④ distribute   : ants + start-up delays per selected path
//! Sim::run
//!   for each turn until no ant moves:
//!     seed occupancy from current interior positions
//!     order movable ants by priority (ties: ascending AntId)
//!     advance each ready ant whose next room is terminal or free
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lem_colony::parse_colony;
//! use lem_sim::{NoopObserver, SimBuilder};
//!
//! let colony = parse_colony(&text)?;
//! let mut sim = SimBuilder::new(&colony).build()?;
//! let log = sim.run(&mut NoopObserver);
//! for line in log.lines(&colony) {
//!     println!("{line}");
//! }
//! ```

pub mod ant;
pub mod builder;
pub mod distribute;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use ant::{Ant, Cursor};
pub use builder::SimBuilder;
pub use distribute::{PathLoad, distribute, path_efficiency};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{LoggedTurn, Move, MoveLog, MoveToken, Sim};
