//! Game-tree search configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::SearchError;

/// Which game-tree algorithm to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Opponents minimize.
    Minimax,
    /// Minimax values with alpha-beta pruning.
    AlphaBeta,
    /// Opponents choose uniformly at random.
    Expectimax,
}

impl AgentKind {
    /// All kinds.
    pub const ALL: [AgentKind; 3] = [AgentKind::Minimax, AgentKind::AlphaBeta, AgentKind::Expectimax];

    /// Short name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AgentKind::Minimax => "minimax",
            AgentKind::AlphaBeta => "alphabeta",
            AgentKind::Expectimax => "expectimax",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AgentKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| SearchError::NotImplemented {
                what: format!("game agent '{}'", s.trim()),
            })
    }
}

/// Game-tree search configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSearchConfig {
    /// Algorithm to run.
    pub kind: AgentKind,

    /// Lookahead in plies (one ply = every agent moves once). Must be >= 1.
    pub depth: u32,

    /// Random seed for root tie-breaking.
    /// Same seed produces the same sequence of choices.
    pub seed: u64,
}

impl Default for GameSearchConfig {
    fn default() -> Self {
        Self {
            kind: AgentKind::Minimax,
            depth: 2,
            seed: 42,
        }
    }
}

impl GameSearchConfig {
    /// Default configuration for a given algorithm.
    pub fn for_kind(kind: AgentKind) -> Self {
        Self { kind, ..Self::default() }
    }

    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameSearchConfig::default();
        assert_eq!(config.kind, AgentKind::Minimax);
        assert_eq!(config.depth, 2);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameSearchConfig::for_kind(AgentKind::Expectimax)
            .with_depth(4)
            .with_seed(7);

        assert_eq!(config.kind, AgentKind::Expectimax);
        assert_eq!(config.depth, 4);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("alpha-beta".parse::<AgentKind>(), Ok(AgentKind::AlphaBeta));
        assert_eq!("Alpha_Beta".parse::<AgentKind>(), Ok(AgentKind::AlphaBeta));
        assert_eq!("expectimax".parse::<AgentKind>(), Ok(AgentKind::Expectimax));
        assert!(matches!(
            "mcts".parse::<AgentKind>(),
            Err(SearchError::NotImplemented { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = GameSearchConfig::for_kind(AgentKind::AlphaBeta).with_depth(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameSearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.kind, AgentKind::AlphaBeta);
        assert_eq!(deserialized.depth, 3);
    }
}
