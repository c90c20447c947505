//! Simulation observer trait for progress reporting and move collection.

use lem_colony::Colony;
use lem_core::Turn;

use crate::Move;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// turn loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_turn_end(&mut self, turn: Turn, moves: &[Move], _colony: &Colony) {
///         eprintln!("{turn}: {} moves", moves.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each attempted turn, including the final turn in
    /// which nothing moves.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called for every turn that produced at least one recorded move, in
    /// output order.
    ///
    /// Turns in which the only movement was ants departing into the start
    /// room are not reported.
    fn on_turn_end(&mut self, _turn: Turn, _moves: &[Move], _colony: &Colony) {}

    /// Called once after the loop ends.  `final_turn` is the number of turns
    /// in which something moved; `logged_turns` the number reported through
    /// `on_turn_end`.
    fn on_sim_end(&mut self, _final_turn: Turn, _logged_turns: usize) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
