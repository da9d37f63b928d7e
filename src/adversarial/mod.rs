//! Adversarial game-tree search.
//!
//! ## Overview
//!
//! Depth-limited search for agent 0 in a turn-based game with any number of
//! agents. Agents move in index order; one ply is a full cycle.
//!
//! - **Minimax**: opponents minimize
//! - **Alpha-Beta**: minimax values, fewer nodes visited
//! - **Expectimax**: opponents are uniformly random chance nodes
//!
//! Every agent values each root action of agent 0 and picks uniformly at
//! random among the actions with the maximal value. The RNG is seeded from
//! [`GameSearchConfig::seed`], so runs are reproducible.
//!
//! ## Usage
//!
//! ```rust
//! use ai_search::adversarial::{from_config, AgentKind, GameSearchConfig, ScoreEvaluator};
//! use ai_search::games::pursuit::Pursuit;
//!
//! let game = Pursuit::new(7, 1, &[6], &[2, 4]);
//! let config = GameSearchConfig::for_kind(AgentKind::AlphaBeta).with_depth(2);
//! let mut agent = from_config(&config, ScoreEvaluator);
//!
//! let action = agent.get_action(&game).unwrap();
//! println!("moving {:?}", action);
//! ```

pub mod agent;
mod alpha_beta;
pub mod config;
mod expectimax;
pub mod game;
mod minimax;

pub use agent::GameAgent;
pub use alpha_beta::AlphaBetaAgent;
pub use config::{AgentKind, GameSearchConfig};
pub use expectimax::ExpectimaxAgent;
pub use game::{Evaluator, GameState, ScoreEvaluator};
pub use minimax::MinimaxAgent;

/// Build the agent named by `config.kind`.
pub fn from_config<G>(config: &GameSearchConfig, evaluator: impl Evaluator<G> + 'static) -> Box<dyn GameAgent<G>>
where
    G: GameState + 'static,
{
    let evaluator: Box<dyn Evaluator<G>> = Box::new(evaluator);
    match config.kind {
        AgentKind::Minimax => Box::new(MinimaxAgent::boxed(config, evaluator)),
        AgentKind::AlphaBeta => Box::new(AlphaBetaAgent::boxed(config, evaluator)),
        AgentKind::Expectimax => Box::new(ExpectimaxAgent::boxed(config, evaluator)),
    }
}

/// Explicit game trees for unit tests.
#[cfg(test)]
pub(crate) mod test_tree {
    use super::GameState;
    use crate::core::AgentId;

    #[derive(Clone, Debug)]
    pub(crate) enum Tree {
        Leaf(f64),
        Branch(Vec<Tree>),
    }

    impl Tree {
        pub(crate) fn leaf(value: f64) -> Self {
            Tree::Leaf(value)
        }

        pub(crate) fn branch(children: Vec<Tree>) -> Self {
            Tree::Branch(children)
        }

        /// Root node of this tree played by `agents` agents.
        pub(crate) fn root(&self, agents: usize) -> Node {
            Node {
                tree: self.clone(),
                agents,
            }
        }
    }

    /// A position in a `Tree`. Any agent may pick any child; leaves are terminal.
    #[derive(Clone, Debug)]
    pub(crate) struct Node {
        tree: Tree,
        agents: usize,
    }

    impl Node {
        pub(crate) fn leaves_below(&self) -> f64 {
            fn count(tree: &Tree) -> usize {
                match tree {
                    Tree::Leaf(_) => 1,
                    Tree::Branch(children) => children.iter().map(count).sum(),
                }
            }
            count(&self.tree) as f64
        }
    }

    impl GameState for Node {
        type Action = usize;

        fn is_terminal(&self) -> bool {
            matches!(self.tree, Tree::Leaf(_))
        }

        fn legal_actions(&self, _agent: AgentId) -> Vec<usize> {
            match &self.tree {
                Tree::Leaf(_) => vec![],
                Tree::Branch(children) => (0..children.len()).collect(),
            }
        }

        fn apply_action(&self, _agent: AgentId, action: &usize) -> Self {
            match &self.tree {
                Tree::Branch(children) => Node {
                    tree: children[*action].clone(),
                    agents: self.agents,
                },
                Tree::Leaf(_) => self.clone(),
            }
        }

        fn agent_count(&self) -> usize {
            self.agents
        }

        fn score(&self) -> f64 {
            match self.tree {
                Tree::Leaf(value) => value,
                Tree::Branch(_) => 0.0,
            }
        }
    }
}
