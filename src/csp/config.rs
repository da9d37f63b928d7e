//! Constraint solver configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::SearchError;

/// How values are propagated after each assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CspStrategy {
    /// Plain backtracking; checks assigned neighbours only.
    Backtracking,
    /// Prune neighbour domains after each assignment.
    ForwardChecking,
    /// AC-3 once up front, then forward checking.
    AcForwardChecking,
    /// AC-3 up front and after each assignment.
    MaintainingArcConsistency,
}

impl CspStrategy {
    pub const ALL: [CspStrategy; 4] = [
        CspStrategy::Backtracking,
        CspStrategy::ForwardChecking,
        CspStrategy::AcForwardChecking,
        CspStrategy::MaintainingArcConsistency,
    ];

    /// Short name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CspStrategy::Backtracking => "backtracking",
            CspStrategy::ForwardChecking => "fc",
            CspStrategy::AcForwardChecking => "ac-fc",
            CspStrategy::MaintainingArcConsistency => "mac",
        }
    }
}

impl fmt::Display for CspStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace(['-', '_'], "")
}

impl FromStr for CspStrategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        CspStrategy::ALL
            .into_iter()
            .find(|strategy| normalize(strategy.name()) == wanted)
            .ok_or_else(|| SearchError::NotImplemented {
                what: format!("constraint strategy '{}'", s.trim()),
            })
    }
}

/// Which unassigned variable to branch on next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableOrdering {
    /// First unassigned variable in `variables()` order.
    #[default]
    FirstUnassigned,
    /// Unassigned variable with the fewest remaining values; ties keep
    /// `variables()` order.
    MinimumRemainingValues,
    /// Whatever `ConstraintProblem::select_variable` picks.
    ProblemDefined,
}

/// Constraint solver configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CspConfig {
    pub strategy: CspStrategy,

    pub ordering: VariableOrdering,

    /// Maximum recursive calls (0 = unlimited).
    pub max_calls: u64,

    /// Progress callback interval, in recursive calls (0 = never).
    pub progress_interval: u64,
}

impl Default for CspConfig {
    fn default() -> Self {
        Self {
            strategy: CspStrategy::ForwardChecking,
            ordering: VariableOrdering::FirstUnassigned,
            max_calls: 0,
            progress_interval: 1000,
        }
    }
}

impl CspConfig {
    /// Default configuration for a given strategy.
    pub fn for_strategy(strategy: CspStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Create a new config with a custom variable ordering.
    pub fn with_ordering(mut self, ordering: VariableOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Create a new config with a call budget.
    pub fn with_max_calls(mut self, max_calls: u64) -> Self {
        self.max_calls = max_calls;
        self
    }

    /// Create a new config with a custom progress interval.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CspConfig::default();
        assert_eq!(config.strategy, CspStrategy::ForwardChecking);
        assert_eq!(config.ordering, VariableOrdering::FirstUnassigned);
        assert_eq!(config.max_calls, 0);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("AC_FC".parse::<CspStrategy>(), Ok(CspStrategy::AcForwardChecking));
        assert_eq!("mac".parse::<CspStrategy>(), Ok(CspStrategy::MaintainingArcConsistency));
        for strategy in CspStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<CspStrategy>(), Ok(strategy));
        }
        assert!(matches!(
            "min-conflicts".parse::<CspStrategy>(),
            Err(SearchError::NotImplemented { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = CspConfig::for_strategy(CspStrategy::MaintainingArcConsistency)
            .with_ordering(VariableOrdering::MinimumRemainingValues)
            .with_max_calls(500);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"maintaining_arc_consistency\""));
        assert!(json.contains("\"minimum_remaining_values\""));

        let deserialized: CspConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.strategy, CspStrategy::MaintainingArcConsistency);
        assert_eq!(deserialized.max_calls, 500);
    }
}
