//! Game-state contract for adversarial search.
//!
//! Games implement `GameState` to define:
//! - Which actions each agent may take
//! - The state an action leads to
//! - When the game is over, and its score
//!
//! The search calls into `GameState` but never interprets game-specific
//! concepts directly.

use std::fmt::Debug;

use crate::core::AgentId;

/// A state of a turn-based game with `agent_count()` agents.
///
/// ## Implementation Notes
///
/// - `apply_action` returns a new state; the search never mutates one
/// - `legal_actions` must be pure and non-empty for non-terminal states
/// - `is_terminal` covers both wins and losses
pub trait GameState: Clone {
    /// Action type.
    type Action: Clone + PartialEq + Debug;

    /// Check if the game is over (won or lost).
    fn is_terminal(&self) -> bool;

    /// Legal actions for `agent` in this state.
    fn legal_actions(&self, agent: AgentId) -> Vec<Self::Action>;

    /// The state after `agent` takes `action`.
    fn apply_action(&self, agent: AgentId, action: &Self::Action) -> Self;

    /// Number of agents, including agent 0.
    fn agent_count(&self) -> usize;

    /// Current game score from agent 0's point of view.
    fn score(&self) -> f64;
}

/// Static evaluation of a game state from agent 0's point of view.
///
/// Any `Fn(&G) -> f64` is an evaluator.
pub trait Evaluator<G> {
    /// Value of `state`; larger is better for agent 0.
    fn evaluate(&self, state: &G) -> f64;
}

impl<G, F> Evaluator<G> for F
where
    F: Fn(&G) -> f64,
{
    fn evaluate(&self, state: &G) -> f64 {
        self(state)
    }
}

/// Evaluates a state by its game score.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreEvaluator;

impl<G: GameState> Evaluator<G> for ScoreEvaluator {
    fn evaluate(&self, state: &G) -> f64 {
        state.score()
    }
}
