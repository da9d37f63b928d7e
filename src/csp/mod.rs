//! Constraint satisfaction over binary constraints.
//!
//! ## Overview
//!
//! [`CspSearch`] runs one of the [`CspStrategy`] variants on a
//! [`ConstraintProblem`]:
//!
//! - **Backtracking**: depth-first assignment, checking assigned neighbours
//! - **Forward checking**: prune neighbour domains after each assignment
//! - **AC-FC**: [`ac3`] once as preprocessing, then forward checking
//! - **MAC**: AC-3 up front and again after every assignment
//!
//! Domains are persistent [`im`] maps, one snapshot per recursion level, so
//! backtracking never has to undo domain changes.
//!
//! ## Usage
//!
//! ```rust
//! use ai_search::csp::{is_solution, CspConfig, CspSearch, CspSolver, CspStrategy};
//! use ai_search::games::latin::LatinSquare;
//!
//! let puzzle = LatinSquare::new(3, &[(0, 0, 1), (1, 1, 3)]);
//! let mut solver = CspSearch::new(CspConfig::for_strategy(CspStrategy::MaintainingArcConsistency));
//!
//! let solution = solver.solve(&puzzle).unwrap().unwrap();
//! assert!(is_solution(&puzzle, &solution));
//! ```

pub mod arc;
mod backtracking;
pub mod config;
pub mod problem;

pub use arc::ac3;
pub use config::{CspConfig, CspStrategy, VariableOrdering};
pub use problem::{initial_domains, is_solution, Assignment, ConstraintProblem, Domains};

use log::debug;

use crate::core::Result;
use crate::search::stats::Tracker;
use crate::search::{ProgressFn, SearchStats};

use backtracking::Backtracker;

/// A solver for constraint problems.
pub trait CspSolver {
    /// Find an assignment satisfying every constraint, or `Ok(None)`.
    fn solve<P: ConstraintProblem>(&mut self, problem: &P) -> Result<Option<Assignment<P::Var, P::Value>>>;

    /// Statistics of the last `solve`. `expansions` counts recursive calls.
    fn stats(&self) -> &SearchStats;
}

/// Configurable constraint solver.
pub struct CspSearch {
    config: CspConfig,
    progress: Option<ProgressFn>,
    stats: SearchStats,
}

impl CspSearch {
    /// Create a new solver.
    pub fn new(config: CspConfig) -> Self {
        Self {
            config,
            progress: None,
            stats: SearchStats::default(),
        }
    }

    /// Set a progress callback, called every `progress_interval` recursive calls.
    pub fn with_progress<F: FnMut(&SearchStats) + 'static>(mut self, progress: F) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &CspConfig {
        &self.config
    }
}

impl Default for CspSearch {
    fn default() -> Self {
        Self::new(CspConfig::default())
    }
}

impl CspSolver for CspSearch {
    fn solve<P: ConstraintProblem>(&mut self, problem: &P) -> Result<Option<Assignment<P::Var, P::Value>>> {
        let strategy = self.config.strategy;
        debug!("{strategy}: starting with {:?} ordering", self.config.ordering);

        let mut tracker = Tracker::new(
            self.config.max_calls,
            self.config.progress_interval,
            self.progress.as_mut(),
        );

        let result = match strategy {
            CspStrategy::AcForwardChecking | CspStrategy::MaintainingArcConsistency => {
                match ac3(problem, initial_domains(problem)) {
                    Ok(Some(domains)) => {
                        Backtracker::new(problem, strategy, self.config.ordering, &mut tracker).run(domains)
                    }
                    other => other.map(|_| None),
                }
            }
            _ => Backtracker::new(problem, strategy, self.config.ordering, &mut tracker)
                .run(initial_domains(problem)),
        };

        self.stats = tracker.finish();
        match &result {
            Ok(Some(_)) => debug!("{strategy}: solved after {} calls", self.stats.expansions),
            Ok(None) => debug!("{strategy}: no solution after {} calls", self.stats.expansions),
            Err(err) => debug!("{strategy}: failed: {err}"),
        }
        result
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Solve `problem` with `strategy` and default settings.
pub fn solve_csp<P: ConstraintProblem>(
    problem: &P,
    strategy: CspStrategy,
) -> Result<Option<Assignment<P::Var, P::Value>>> {
    CspSearch::new(CspConfig::for_strategy(strategy)).solve(problem)
}
