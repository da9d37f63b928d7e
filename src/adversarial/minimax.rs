//! Plain minimax: agent 0 maximizes, every other agent minimizes.

use crate::core::{AgentId, Result};
use crate::search::SearchStats;

use super::agent::{AgentCore, GameAgent};
use super::config::GameSearchConfig;
use super::game::{Evaluator, GameState};

/// Depth-limited minimax agent.
pub struct MinimaxAgent<G> {
    core: AgentCore<G>,
}

impl<G: GameState> MinimaxAgent<G> {
    /// Create a new minimax agent.
    pub fn new(config: &GameSearchConfig, evaluator: impl Evaluator<G> + 'static) -> Self {
        Self::boxed(config, Box::new(evaluator))
    }

    pub(crate) fn boxed(config: &GameSearchConfig, evaluator: Box<dyn Evaluator<G>>) -> Self {
        Self {
            core: AgentCore::new(config, evaluator),
        }
    }
}

/// Minimax value of `state` with `agent` to move and `depth` plies left.
fn value<G: GameState>(core: &mut AgentCore<G>, state: &G, agent: AgentId, depth: u32) -> Result<f64> {
    core.visit(depth);
    if let Some(leaf) = core.leaf(state, depth)? {
        return Ok(leaf);
    }

    let actions = state.legal_actions(agent);
    if actions.is_empty() {
        return core.evaluate(state);
    }

    let (next, next_depth) = agent.advance(state.agent_count(), depth);
    let mut best = if agent.is_max() { f64::NEG_INFINITY } else { f64::INFINITY };
    for action in &actions {
        let child = state.apply_action(agent, action);
        let v = value(core, &child, next, next_depth)?;
        best = if agent.is_max() { best.max(v) } else { best.min(v) };
    }
    core.backed_up(best)
}

impl<G: GameState> GameAgent<G> for MinimaxAgent<G> {
    fn action_values(&mut self, state: &G) -> Result<Vec<(G::Action, f64)>> {
        self.core.root_values(state, value)
    }

    fn get_action(&mut self, state: &G) -> Result<G::Action> {
        let values = self.action_values(state)?;
        self.core.choose(values)
    }

    fn stats(&self) -> &SearchStats {
        &self.core.stats
    }
}
