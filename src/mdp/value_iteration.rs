//! Batch value iteration.
//!
//! Each sweep computes, from the previous sweep's values only,
//! `V_k(s) = R(s) + discount * max_a sum_s' P(s' | s, a) * V_{k-1}(s')`,
//! with the max over no actions taken as 0.

use std::time::Instant;

use log::{debug, trace};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Result, SearchError};
use crate::search::SearchStats;

use super::MarkovDecisionProcess;

/// Value iteration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueIterationConfig {
    /// Discount factor in `[0, 1]`.
    pub discount: f64,

    /// Number of sweeps over all states.
    pub iterations: u32,
}

impl Default for ValueIterationConfig {
    fn default() -> Self {
        Self {
            discount: 0.9,
            iterations: 100,
        }
    }
}

impl ValueIterationConfig {
    /// Create a new config with a custom discount.
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Create a new config with a custom number of sweeps.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

/// State values computed by value iteration, and the greedy policy they induce.
pub struct ValueIteration<'m, M: MarkovDecisionProcess> {
    mdp: &'m M,
    config: ValueIterationConfig,
    values: FxHashMap<M::State, f64>,
    residual: f64,
    stats: SearchStats,
}

impl<'m, M: MarkovDecisionProcess> ValueIteration<'m, M> {
    /// Run `iterations` sweeps with the given discount.
    pub fn run(mdp: &'m M, discount: f64, iterations: u32) -> Result<Self> {
        Self::with_config(
            mdp,
            ValueIterationConfig {
                discount,
                iterations,
            },
        )
    }

    /// Run value iteration as configured.
    pub fn with_config(mdp: &'m M, config: ValueIterationConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.discount) {
            return Err(SearchError::InvalidDiscount {
                discount: config.discount,
            });
        }

        let start = Instant::now();
        let states = mdp.states();
        let mut values: FxHashMap<M::State, f64> = FxHashMap::default();
        let mut residual = 0.0;
        let mut stats = SearchStats::default();

        for sweep in 0..config.iterations {
            let mut next = FxHashMap::default();
            next.reserve(states.len());
            residual = 0.0_f64;

            for state in &states {
                let best = mdp
                    .possible_actions(state)
                    .iter()
                    .map(|action| expected_value(mdp, &values, state, action))
                    .fold(None, |best: Option<f64>, q| Some(best.map_or(q, |b| b.max(q))))
                    .unwrap_or(0.0);

                let value = mdp.reward(state) + config.discount * best;
                let previous = values.get(state).copied().unwrap_or(0.0);
                residual = residual.max((value - previous).abs());
                next.insert(state.clone(), value);
                stats.expansions += 1;
            }

            values = next;
            stats.iterations += 1;
            trace!("value iteration: sweep {sweep} residual {residual}");
        }

        stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "value iteration: {} sweeps over {} states, final residual {residual}",
            config.iterations,
            states.len()
        );

        Ok(Self {
            mdp,
            config,
            values,
            residual,
            stats,
        })
    }

    /// Value of `state` after the last sweep (0 for unknown states).
    #[must_use]
    pub fn value(&self, state: &M::State) -> f64 {
        self.values.get(state).copied().unwrap_or(0.0)
    }

    /// Expected value of taking `action` in `state`; the reward itself for
    /// terminal states.
    #[must_use]
    pub fn q_value(&self, state: &M::State, action: &M::Action) -> f64 {
        if self.mdp.is_terminal(state) {
            return self.mdp.reward(state);
        }
        expected_value(self.mdp, &self.values, state, action)
    }

    /// Best action in `state`, `None` when it has no actions.
    /// Ties keep the first action in `possible_actions` order.
    pub fn policy(&self, state: &M::State) -> Option<M::Action> {
        let mut best: Option<(M::Action, f64)> = None;
        for action in self.mdp.possible_actions(state) {
            let q = self.q_value(state, &action);
            if best.as_ref().map_or(true, |(_, b)| q > *b) {
                best = Some((action, q));
            }
        }
        best.map(|(action, _)| action)
    }

    /// Action to take in `state`: the policy, without exploration.
    pub fn action(&self, state: &M::State) -> Option<M::Action> {
        self.policy(state)
    }

    /// Largest value change during the last sweep.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.residual
    }

    /// `expansions` counts state backups, `iterations` counts sweeps.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn config(&self) -> &ValueIterationConfig {
        &self.config
    }
}

fn expected_value<M: MarkovDecisionProcess>(
    mdp: &M,
    values: &FxHashMap<M::State, f64>,
    state: &M::State,
    action: &M::Action,
) -> f64 {
    mdp.transitions(state, action)
        .iter()
        .map(|(next, probability)| probability * values.get(next).copied().unwrap_or(0.0))
        .sum()
}
