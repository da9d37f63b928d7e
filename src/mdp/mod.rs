//! Markov decision processes solved by value iteration.

pub mod value_iteration;

pub use value_iteration::{ValueIteration, ValueIterationConfig};

use std::hash::Hash;

/// A finite Markov decision process.
///
/// Rewards are attached to states: `reward(s)` is collected in `s`
/// whatever action is taken there.
pub trait MarkovDecisionProcess {
    /// State type.
    type State: Clone + Eq + Hash;

    /// Action type.
    type Action: Clone;

    /// Every state of the process.
    fn states(&self) -> Vec<Self::State>;

    /// Actions available in `state`. Empty for terminal states.
    fn possible_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Successor states of `action` in `state` with their probabilities.
    fn transitions(&self, state: &Self::State, action: &Self::Action) -> Vec<(Self::State, f64)>;

    /// Reward for being in `state`.
    fn reward(&self, state: &Self::State) -> f64;

    /// Whether `state` ends an episode.
    fn is_terminal(&self, state: &Self::State) -> bool;
}
