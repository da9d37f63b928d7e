//! Expectimax: opponents are chance nodes that choose uniformly at random.

use crate::core::{AgentId, Result};
use crate::search::SearchStats;

use super::agent::{AgentCore, GameAgent};
use super::config::GameSearchConfig;
use super::game::{Evaluator, GameState};

/// Depth-limited expectimax agent.
pub struct ExpectimaxAgent<G> {
    core: AgentCore<G>,
}

impl<G: GameState> ExpectimaxAgent<G> {
    /// Create a new expectimax agent.
    pub fn new(config: &GameSearchConfig, evaluator: impl Evaluator<G> + 'static) -> Self {
        Self::boxed(config, Box::new(evaluator))
    }

    pub(crate) fn boxed(config: &GameSearchConfig, evaluator: Box<dyn Evaluator<G>>) -> Self {
        Self {
            core: AgentCore::new(config, evaluator),
        }
    }
}

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

    if agent.is_max() {
        let mut best = f64::NEG_INFINITY;
        for action in &actions {
            let child = state.apply_action(agent, action);
            best = best.max(value(core, &child, next, next_depth)?);
        }
        core.backed_up(best)
    } else {
        let mut total = 0.0;
        for action in &actions {
            let child = state.apply_action(agent, action);
            total += value(core, &child, next, next_depth)?;
        }
        core.backed_up(total / actions.len() as f64)
    }
}

impl<G: GameState> GameAgent<G> for ExpectimaxAgent<G> {
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
