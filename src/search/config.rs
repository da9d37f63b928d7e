//! Graph search configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::SearchError;

/// Which graph search strategy to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Depth-first search (LIFO frontier).
    DepthFirst,
    /// Breadth-first search (FIFO frontier).
    BreadthFirst,
    /// Uniform-cost search (priority = path cost).
    UniformCost,
    /// Iterative deepening depth-first search.
    IterativeDeepening,
    /// Greedy best-first search (priority = heuristic).
    Greedy,
    /// A* search (priority = path cost + heuristic).
    AStar,
    /// Iterative deepening A*.
    IdaStar,
}

impl Strategy {
    /// All strategies, uninformed first.
    pub const ALL: [Strategy; 7] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::IterativeDeepening,
        Strategy::Greedy,
        Strategy::AStar,
        Strategy::IdaStar,
    ];

    /// Short name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::UniformCost => "ucs",
            Strategy::IterativeDeepening => "ids",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "astar",
            Strategy::IdaStar => "idastar",
        }
    }

    /// Whether the strategy needs a heuristic.
    #[must_use]
    pub const fn is_informed(self) -> bool {
        matches!(self, Strategy::Greedy | Strategy::AStar | Strategy::IdaStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| SearchError::NotImplemented {
                what: format!("search strategy '{}'", s.trim()),
            })
    }
}

/// Graph search configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Strategy to run.
    pub strategy: Strategy,

    /// First depth limit tried by iterative deepening.
    pub ids_start_depth: usize,

    /// Last depth limit tried by iterative deepening.
    pub max_depth: usize,

    /// Maximum number of bound increases for IDA*.
    pub max_iterations: u32,

    /// Stop after this many expansions (0 = unlimited).
    /// A search stopped this way reports no solution and sets
    /// `SearchStats::budget_exhausted`.
    pub max_expansions: u64,

    /// Call the progress callback every this many expansions (0 = never).
    pub progress_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::BreadthFirst,
            ids_start_depth: 2,
            max_depth: 100,
            max_iterations: 10_000,
            max_expansions: 0,
            progress_interval: 1_000,
        }
    }
}

impl SearchConfig {
    /// Default configuration for a given strategy.
    pub fn for_strategy(strategy: Strategy) -> Self {
        Self::default().with_strategy(strategy)
    }

    /// Create a new config with a different strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a new config with custom iterative deepening limits.
    pub fn with_depth_range(mut self, start: usize, max: usize) -> Self {
        self.ids_start_depth = start;
        self.max_depth = max;
        self
    }

    /// Create a new config with a custom expansion budget.
    pub fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = max;
        self
    }

    /// Create a new config with a custom progress interval.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Create a new config with a custom IDA* iteration cap.
    pub fn with_max_iterations(mut self, max: u32) -> Self {
        self.max_iterations = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.strategy, Strategy::BreadthFirst);
        assert_eq!(config.ids_start_depth, 2);
        assert_eq!(config.max_expansions, 0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::for_strategy(Strategy::IterativeDeepening)
            .with_depth_range(1, 20)
            .with_max_expansions(500);

        assert_eq!(config.strategy, Strategy::IterativeDeepening);
        assert_eq!(config.ids_start_depth, 1);
        assert_eq!(config.max_depth, 20);
        assert_eq!(config.max_expansions, 500);
    }

    #[test]
    fn test_strategy_from_str() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!(" AStar ".parse::<Strategy>(), Ok(Strategy::AStar));

        let err = "beam".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, SearchError::NotImplemented { .. }));
    }

    #[test]
    fn test_informed_flag() {
        assert!(!Strategy::UniformCost.is_informed());
        assert!(Strategy::Greedy.is_informed());
        assert!(Strategy::IdaStar.is_informed());
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::for_strategy(Strategy::AStar);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"a_star\""));

        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.strategy, Strategy::AStar);
    }
}
