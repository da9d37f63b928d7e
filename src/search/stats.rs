//! Search statistics and progress reporting.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Statistics collected during a single solver invocation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States (or game/CSP nodes) expanded.
    pub expansions: u64,

    /// Successor entries added to the frontier.
    pub generated: u64,

    /// Largest frontier size observed.
    pub max_frontier: usize,

    /// Deepest path length (in steps) expanded.
    pub max_depth: usize,

    /// Deepening rounds (IDS limits, IDA* bounds). Zero for one-shot searches.
    pub iterations: u32,

    /// Set when the expansion budget stopped the search early.
    pub budget_exhausted: bool,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate expansions per second.
    #[must_use]
    pub fn expansions_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.expansions as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average successors generated per expansion.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expansions == 0 {
            0.0
        } else {
            self.generated as f64 / self.expansions as f64
        }
    }
}

/// Progress callback, invoked with the running statistics.
pub type ProgressFn = Box<dyn FnMut(&SearchStats)>;

/// Bookkeeping shared by every strategy during one run.
///
/// Counts expansions, enforces the expansion budget (0 = unlimited) and
/// calls the progress callback every `interval` expansions.
pub(crate) struct Tracker<'a> {
    stats: SearchStats,
    max_expansions: u64,
    interval: u64,
    progress: Option<&'a mut ProgressFn>,
    start: Instant,
}

impl<'a> Tracker<'a> {
    pub(crate) fn new(max_expansions: u64, interval: u64, progress: Option<&'a mut ProgressFn>) -> Self {
        Self {
            stats: SearchStats::default(),
            max_expansions,
            interval,
            progress,
            start: Instant::now(),
        }
    }

    /// Tracker with no budget and no callback.
    #[cfg(test)]
    pub(crate) fn unlimited() -> Self {
        Self::new(0, 0, None)
    }

    /// Record one expansion at `depth`. Returns `false` once the budget is spent.
    pub(crate) fn expand(&mut self, depth: usize) -> bool {
        if self.max_expansions > 0 && self.stats.expansions >= self.max_expansions {
            self.stats.budget_exhausted = true;
            return false;
        }

        self.stats.expansions += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if self.interval > 0 && self.stats.expansions % self.interval == 0 {
            if let Some(progress) = self.progress.as_mut() {
                progress(&self.stats);
            }
        }
        true
    }

    pub(crate) fn generated(&mut self, count: u64) {
        self.stats.generated += count;
    }

    pub(crate) fn frontier(&mut self, len: usize) {
        self.stats.max_frontier = self.stats.max_frontier.max(len);
    }

    pub(crate) fn next_iteration(&mut self) {
        self.stats.iterations += 1;
    }

    pub(crate) fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Stop the clock and hand back the statistics.
    pub(crate) fn finish(mut self) -> SearchStats {
        self.stats.time_us = self.start.elapsed().as_micros() as u64;
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.expansions, 0);
        assert_eq!(stats.branching_factor(), 0.0);
        assert!(!stats.budget_exhausted);
    }

    #[test]
    fn test_expansions_per_second() {
        let mut stats = SearchStats::new();
        stats.expansions = 1000;
        stats.time_us = 1_000_000;

        assert_eq!(stats.expansions_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.expansions = 100;
        stats.generated = 50;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_tracker_budget() {
        let mut tracker = Tracker::new(2, 0, None);
        assert!(tracker.expand(0));
        assert!(tracker.expand(3));
        assert!(!tracker.expand(4));

        let stats = tracker.finish();
        assert_eq!(stats.expansions, 2);
        assert_eq!(stats.max_depth, 3);
        assert!(stats.budget_exhausted);
    }

    #[test]
    fn test_tracker_progress_interval() {
        let calls = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&calls);
        let mut progress: ProgressFn = Box::new(move |_| seen.set(seen.get() + 1));

        let mut tracker = Tracker::new(0, 3, Some(&mut progress));
        for depth in 0..10 {
            tracker.expand(depth);
        }
        drop(tracker);

        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.expansions = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
