//! The `GameAgent` trait and the root decision shared by every algorithm.

use std::time::Instant;

use log::debug;
use smallvec::SmallVec;

use crate::core::error::check_priority;
use crate::core::{AgentId, Result, SearchError, SearchRng};
use crate::search::SearchStats;

use super::config::GameSearchConfig;
use super::game::{Evaluator, GameState};

/// A game-playing agent: picks an action for agent 0.
pub trait GameAgent<G: GameState> {
    /// Value of every legal root action, in `legal_actions` order.
    fn action_values(&mut self, state: &G) -> Result<Vec<(G::Action, f64)>>;

    /// Pick an action among those with the maximal value, uniformly at random.
    fn get_action(&mut self, state: &G) -> Result<G::Action>;

    /// Statistics of the last decision.
    fn stats(&self) -> &SearchStats;
}

/// State shared by the game-tree algorithms: depth, evaluator, RNG, stats.
pub(crate) struct AgentCore<G> {
    pub(crate) depth: u32,
    evaluator: Box<dyn Evaluator<G>>,
    rng: SearchRng,
    pub(crate) stats: SearchStats,
}

impl<G: GameState> AgentCore<G> {
    pub(crate) fn new(config: &GameSearchConfig, evaluator: Box<dyn Evaluator<G>>) -> Self {
        Self {
            depth: config.depth,
            evaluator,
            rng: SearchRng::new(config.seed),
            stats: SearchStats::default(),
        }
    }

    /// Count a visited node.
    pub(crate) fn visit(&mut self, depth: u32) {
        self.stats.expansions += 1;
        let ply = (self.depth - depth) as usize;
        self.stats.max_depth = self.stats.max_depth.max(ply);
    }

    /// Evaluator value of `state`. NaN is an error.
    pub(crate) fn evaluate(&self, state: &G) -> Result<f64> {
        check_priority(self.evaluator.evaluate(state), "game evaluation")
    }

    /// A value backed up from children. NaN (say, the mean of `+inf` and
    /// `-inf`) is an error.
    pub(crate) fn backed_up(&self, value: f64) -> Result<f64> {
        check_priority(value, "backed-up game value")
    }

    /// Leaf value when the node is terminal or out of depth.
    pub(crate) fn leaf(&self, state: &G, depth: u32) -> Result<Option<f64>> {
        if state.is_terminal() || depth == 0 {
            self.evaluate(state).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Value every root action of agent 0 with `child_value`, called as
    /// `child_value(core, successor, next_agent, remaining_depth)`.
    pub(crate) fn root_values<F>(&mut self, state: &G, mut child_value: F) -> Result<Vec<(G::Action, f64)>>
    where
        F: FnMut(&mut Self, &G, AgentId, u32) -> Result<f64>,
    {
        if self.depth == 0 {
            return Err(SearchError::InvalidDepth {
                message: "game search depth must be at least 1".to_string(),
            });
        }

        let actions = state.legal_actions(AgentId::MAX);
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        let start = Instant::now();
        self.stats.reset();

        let (next, depth) = AgentId::MAX.advance(state.agent_count(), self.depth);
        let mut values = Vec::with_capacity(actions.len());
        for action in actions {
            let child = state.apply_action(AgentId::MAX, &action);
            let value = child_value(self, &child, next, depth)?;
            values.push((action, self.backed_up(value)?));
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(values)
    }

    /// Break ties among the maximal root values uniformly at random.
    pub(crate) fn choose(&mut self, values: Vec<(G::Action, f64)>) -> Result<G::Action> {
        let best = values
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::NEG_INFINITY, f64::max);

        let tied: SmallVec<[usize; 8]> = values
            .iter()
            .enumerate()
            .filter(|(_, (_, v))| *v == best)
            .map(|(i, _)| i)
            .collect();

        let pick = *self.rng.choose(&tied).ok_or(SearchError::NoLegalActions)?;
        debug!(
            "root: best value {best} shared by {} of {} actions, {} nodes",
            tied.len(),
            values.len(),
            self.stats.expansions
        );

        values
            .into_iter()
            .nth(pick)
            .map(|(action, _)| action)
            .ok_or(SearchError::NoLegalActions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adversarial::ScoreEvaluator;

    /// One-shot game: agent 0 picks a number, the game ends with that score.
    #[derive(Clone)]
    struct Pick(Option<i32>);

    impl GameState for Pick {
        type Action = i32;

        fn is_terminal(&self) -> bool {
            self.0.is_some()
        }

        fn legal_actions(&self, _agent: AgentId) -> Vec<i32> {
            if self.0.is_some() {
                vec![]
            } else {
                vec![1, 3, 2, 3]
            }
        }

        fn apply_action(&self, _agent: AgentId, action: &i32) -> Self {
            Pick(Some(*action))
        }

        fn agent_count(&self) -> usize {
            1
        }

        fn score(&self) -> f64 {
            self.0.map_or(0.0, f64::from)
        }
    }

    fn core(depth: u32) -> AgentCore<Pick> {
        let config = GameSearchConfig::default().with_depth(depth);
        AgentCore::new(&config, Box::new(ScoreEvaluator))
    }

    #[test]
    fn test_root_values_in_action_order() {
        let mut core = core(1);
        let values = core
            .root_values(&Pick(None), |core, child, _, _| core.evaluate(child))
            .unwrap();
        assert_eq!(values, vec![(1, 1.0), (3, 3.0), (2, 2.0), (3, 3.0)]);
    }

    #[test]
    fn test_choose_only_maximal() {
        let mut core = core(1);
        for _ in 0..20 {
            let values = vec![(0, 1.0), (1, 5.0), (2, 5.0), (3, 4.0)];
            let action = core.choose(values).unwrap();
            assert!(action == 1 || action == 2);
        }
    }

    #[test]
    fn test_zero_depth_rejected() {
        let mut core = core(0);
        let err = core
            .root_values(&Pick(None), |core, child, _, _| core.evaluate(child))
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidDepth { .. }));
    }

    #[test]
    fn test_no_legal_actions_at_root() {
        let mut core = core(1);
        let err = core
            .root_values(&Pick(Some(1)), |core, child, _, _| core.evaluate(child))
            .unwrap_err();
        assert_eq!(err, SearchError::NoLegalActions);
    }

    #[test]
    fn test_nan_root_value_is_an_error() {
        let mut core = core(1);
        let err = core
            .root_values(&Pick(None), |_, _, _, _| Ok(f64::NAN))
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidPriority { .. }));
    }

    #[test]
    fn test_nan_evaluation_is_an_error() {
        let config = GameSearchConfig::default().with_depth(1);
        let core: AgentCore<Pick> = AgentCore::new(&config, Box::new(|_: &Pick| f64::NAN));
        assert!(matches!(
            core.evaluate(&Pick(Some(1))),
            Err(SearchError::InvalidPriority { .. })
        ));
    }
}
