//! Agent identification for turn-based games.
//!
//! Agent 0 is the maximizing agent (the one the search plays for); every
//! other agent is an opponent. Agents move in index order, wrapping back to
//! agent 0; one full cycle is a ply.

use serde::{Deserialize, Serialize};

/// Agent identifier, as wide as `GameState::agent_count`.
///
/// Agent indices are 0-based: the searching agent is `AgentId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub usize);

impl AgentId {
    /// The maximizing agent.
    pub const MAX: AgentId = AgentId(0);

    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Whether this is the maximizing agent.
    #[must_use]
    pub const fn is_max(self) -> bool {
        self.0 == 0
    }

    /// The agent that moves after this one, and the remaining depth once it
    /// does. Depth drops by one each time play wraps back to agent 0.
    #[must_use]
    pub fn advance(self, agent_count: usize, depth: u32) -> (AgentId, u32) {
        let next = (self.index() + 1) % agent_count.max(1);
        if next == 0 {
            (AgentId::MAX, depth.saturating_sub(1))
        } else {
            (AgentId(next), depth)
        }
    }

    /// Iterate over all agent IDs for a game with `agent_count` agents.
    ///
    /// ```
    /// use ai_search::core::AgentId;
    ///
    /// let agents: Vec<_> = AgentId::all(3).collect();
    /// assert_eq!(agents, vec![AgentId::new(0), AgentId::new(1), AgentId::new(2)]);
    /// ```
    pub fn all(agent_count: usize) -> impl Iterator<Item = AgentId> {
        (0..agent_count).map(AgentId)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_cycles_and_decrements() {
        let agent = AgentId::MAX;
        assert_eq!(agent.advance(3, 2), (AgentId::new(1), 2));
        assert_eq!(AgentId::new(1).advance(3, 2), (AgentId::new(2), 2));
        assert_eq!(AgentId::new(2).advance(3, 2), (AgentId::MAX, 1));
    }

    #[test]
    fn test_advance_single_agent() {
        assert_eq!(AgentId::MAX.advance(1, 3), (AgentId::MAX, 2));
        assert_eq!(AgentId::MAX.advance(1, 0), (AgentId::MAX, 0));
    }

    #[test]
    fn test_advance_past_255_agents() {
        assert_eq!(AgentId::new(255).advance(300, 5), (AgentId::new(256), 5));
        assert_eq!(AgentId::new(299).advance(300, 5), (AgentId::MAX, 4));
        assert_eq!(AgentId::all(300).last(), Some(AgentId::new(299)));
    }

    #[test]
    fn test_is_max() {
        assert!(AgentId::new(0).is_max());
        assert!(!AgentId::new(1).is_max());
        assert_eq!(AgentId::new(2).to_string(), "Agent 2");
    }
}
