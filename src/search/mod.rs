//! Graph search over caller-defined state spaces.
//!
//! ## Overview
//!
//! One entry point, [`GraphSearch`], runs any of the strategies named by
//! [`Strategy`]:
//!
//! - **Uninformed**: depth-first, breadth-first, uniform-cost, iterative deepening
//! - **Informed**: greedy best-first, A*, IDA* (need a heuristic)
//!
//! A search returns `Ok(Some(solution))` with the path from the initial state
//! to a goal, or `Ok(None)` when no goal is reachable. Errors are reserved
//! for broken inputs (NaN heuristics, negative costs, a missing heuristic).
//!
//! ## Usage
//!
//! ```rust
//! use ai_search::core::SearchProblem;
//! use ai_search::search::{GraphSearch, SearchConfig, Strategy};
//!
//! struct Countdown;
//!
//! impl SearchProblem for Countdown {
//!     type State = u32;
//!     fn initial_state(&self) -> u32 { 5 }
//!     fn is_goal(&self, s: &u32) -> bool { *s == 0 }
//!     fn successors(&self, s: &u32) -> Vec<(u32, f64)> {
//!         if *s == 0 { vec![] } else { vec![(s - 1, 1.0)] }
//!     }
//! }
//!
//! let mut search = GraphSearch::new(SearchConfig::for_strategy(Strategy::AStar))
//!     .with_heuristic(|s: &u32| f64::from(*s));
//! let solution = search.solve(&Countdown).unwrap().unwrap();
//! assert_eq!(solution.path, vec![5, 4, 3, 2, 1, 0]);
//! ```

pub mod config;
mod informed;
pub mod stats;
mod uninformed;

pub use config::{SearchConfig, Strategy};
pub use stats::{ProgressFn, SearchStats};

use std::hash::Hash;

use log::debug;

use crate::core::{Heuristic, Result, SearchError, SearchProblem, Solution};

use stats::Tracker;

/// Graph search context.
///
/// Generic over the state type. Owns the configuration, the optional
/// heuristic and progress callback, and the statistics of the last run.
pub struct GraphSearch<S> {
    /// Search configuration.
    config: SearchConfig,

    /// Heuristic for informed strategies.
    heuristic: Option<Box<dyn Heuristic<S>>>,

    /// Progress callback.
    progress: Option<ProgressFn>,

    /// Statistics of the last `solve`.
    stats: SearchStats,
}

impl<S: Clone + Eq + Hash> GraphSearch<S> {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            heuristic: None,
            progress: None,
            stats: SearchStats::default(),
        }
    }

    /// Set the heuristic used by greedy, A* and IDA*.
    pub fn with_heuristic<H: Heuristic<S> + 'static>(mut self, heuristic: H) -> Self {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    /// Set a progress callback, called every `progress_interval` expansions.
    pub fn with_progress<F: FnMut(&SearchStats) + 'static>(mut self, progress: F) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    /// Run the configured strategy on `problem`.
    ///
    /// Returns `Ok(None)` when the goal is unreachable, the IDS/IDA* limits
    /// are reached, or the expansion budget runs out (check
    /// [`SearchStats::budget_exhausted`]).
    pub fn solve<P>(&mut self, problem: &P) -> Result<Option<Solution<S>>>
    where
        P: SearchProblem<State = S>,
    {
        let strategy = self.config.strategy;
        let heuristic = self.heuristic.as_deref();

        debug!("{strategy}: starting search");
        let mut tracker = Tracker::new(
            self.config.max_expansions,
            self.config.progress_interval,
            self.progress.as_mut(),
        );

        let result = match (strategy, heuristic) {
            (Strategy::DepthFirst, _) => uninformed::depth_first(problem, &mut tracker),
            (Strategy::BreadthFirst, _) => uninformed::breadth_first(problem, &mut tracker),
            (Strategy::UniformCost, _) => uninformed::uniform_cost(problem, &mut tracker),
            (Strategy::IterativeDeepening, _) => uninformed::iterative_deepening(
                problem,
                self.config.ids_start_depth,
                self.config.max_depth,
                &mut tracker,
            ),
            (Strategy::Greedy, Some(h)) => informed::greedy(problem, h, &mut tracker),
            (Strategy::AStar, Some(h)) => informed::a_star(problem, h, &mut tracker),
            (Strategy::IdaStar, Some(h)) => {
                informed::ida_star(problem, h, self.config.max_iterations, &mut tracker)
            }
            (Strategy::Greedy | Strategy::AStar | Strategy::IdaStar, None) => {
                Err(SearchError::MissingHeuristic { strategy: strategy.name() })
            }
        };

        self.stats = tracker.finish();
        match &result {
            Ok(Some(solution)) => debug!(
                "{strategy}: solved, {} steps, cost {}, {} expansions",
                solution.depth(),
                solution.cost,
                self.stats.expansions
            ),
            Ok(None) => debug!("{strategy}: no solution after {} expansions", self.stats.expansions),
            Err(err) => debug!("{strategy}: failed: {err}"),
        }
        result
    }

    /// Get statistics of the last run.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Run `strategy` with default settings and no heuristic.
///
/// Convenience for uninformed strategies; informed strategies fail with
/// `MissingHeuristic`.
pub fn solve<P: SearchProblem>(problem: &P, strategy: Strategy) -> Result<Option<Solution<P::State>>> {
    GraphSearch::new(SearchConfig::for_strategy(strategy)).solve(problem)
}

/// Run an informed `strategy` with default settings and the given heuristic.
pub fn solve_informed<P, H>(
    problem: &P,
    strategy: Strategy,
    heuristic: H,
) -> Result<Option<Solution<P::State>>>
where
    P: SearchProblem,
    H: Heuristic<P::State> + 'static,
{
    GraphSearch::new(SearchConfig::for_strategy(strategy))
        .with_heuristic(heuristic)
        .solve(problem)
}
