//! Fluent builder for constructing a [`Sim`].

use lem_colony::Colony;
use lem_core::SolverConfig;
use lem_paths::{DfsPathFinder, PathFinder, score_paths, select_paths};

use crate::{Sim, SimError, SimResult, distribute};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                    |
/// |-----------------|----------------------------|
/// | `.config(c)`    | `SolverConfig::default()`  |
/// | `.finder(f)`    | [`DfsPathFinder`]          |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(&colony)
///     .config(config)
///     .build()?;
/// let log = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<'c, F: PathFinder = DfsPathFinder> {
    colony: &'c Colony,
    config: SolverConfig,
    finder: F,
}

impl<'c> SimBuilder<'c> {
    pub fn new(colony: &'c Colony) -> Self {
        Self { colony, config: SolverConfig::default(), finder: DfsPathFinder }
    }
}

impl<'c, F: PathFinder> SimBuilder<'c, F> {
    pub fn config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the path enumeration strategy.
    pub fn finder<G: PathFinder>(self, finder: G) -> SimBuilder<'c, G> {
        SimBuilder { colony: self.colony, config: self.config, finder }
    }

    /// Validate the config, enumerate, score and select paths, distribute the
    /// ants, and return a ready-to-run [`Sim`].
    ///
    /// Fails with a topology error when the end room is unreachable.
    pub fn build(self) -> SimResult<Sim<'c>> {
        self.config.validate()?;
        let colony = self.colony;

        let candidates = self.finder.find_paths(colony)?;
        let scored = score_paths(colony, candidates, &self.config);
        let paths = select_paths(&scored, colony.ant_count(), &self.config);
        if paths.is_empty() {
            return Err(SimError::NoPaths);
        }

        let ants = distribute(colony, &paths, &self.config);

        tracing::debug!(paths = paths.len(), ants = ants.len(), "simulation ready");
        Ok(Sim::new(colony, self.config, paths, ants))
    }
}
