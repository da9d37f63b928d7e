//! Minimax with alpha-beta pruning.
//!
//! Every root action is searched with a full `(-inf, inf)` window, so the
//! root values are exact minimax values and the chosen action set matches
//! [`MinimaxAgent`](super::MinimaxAgent). Pruning only happens below the root.

use crate::core::{AgentId, Result};
use crate::search::SearchStats;

use super::agent::{AgentCore, GameAgent};
use super::config::GameSearchConfig;
use super::game::{Evaluator, GameState};

/// Depth-limited alpha-beta agent.
pub struct AlphaBetaAgent<G> {
    core: AgentCore<G>,
}

impl<G: GameState> AlphaBetaAgent<G> {
    /// Create a new alpha-beta agent.
    pub fn new(config: &GameSearchConfig, evaluator: impl Evaluator<G> + 'static) -> Self {
        Self::boxed(config, Box::new(evaluator))
    }

    pub(crate) fn boxed(config: &GameSearchConfig, evaluator: Box<dyn Evaluator<G>>) -> Self {
        Self {
            core: AgentCore::new(config, evaluator),
        }
    }
}

fn value<G: GameState>(
    core: &mut AgentCore<G>,
    state: &G,
    agent: AgentId,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
) -> Result<f64> {
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
            best = best.max(value(core, &child, next, next_depth, alpha, beta)?);
            if best >= beta {
                return Ok(best);
            }
            alpha = alpha.max(best);
        }
        core.backed_up(best)
    } else {
        let mut best = f64::INFINITY;
        for action in &actions {
            let child = state.apply_action(agent, action);
            best = best.min(value(core, &child, next, next_depth, alpha, beta)?);
            if best <= alpha {
                return Ok(best);
            }
            beta = beta.min(best);
        }
        core.backed_up(best)
    }
}

impl<G: GameState> GameAgent<G> for AlphaBetaAgent<G> {
    fn action_values(&mut self, state: &G) -> Result<Vec<(G::Action, f64)>> {
        self.core.root_values(state, |core, child, agent, depth| {
            value(core, child, agent, depth, f64::NEG_INFINITY, f64::INFINITY)
        })
    }

    fn get_action(&mut self, state: &G) -> Result<G::Action> {
        let values = self.action_values(state)?;
        self.core.choose(values)
    }

    fn stats(&self) -> &SearchStats {
        &self.core.stats
    }
}
