//! # ai-search
//!
//! Classic AI search and decision algorithms over caller-defined problems.
//!
//! ## Design Principles
//!
//! 1. **Problem-Agnostic**: Solvers only see the traits in `core`, `adversarial`,
//!    `csp` and `mdp`. Domains implement those traits; solvers never change.
//!
//! 2. **N-Agent First**: Game-tree search takes `agent_count` from the state.
//!    Agent 0 maximizes; any number of opponents may follow.
//!
//! 3. **Configuration Over Inheritance**: Every family has one capability
//!    trait and a serde config that selects the variant.
//!
//! 4. **No Solution Is Not an Error**: Solvers return `Ok(None)` when nothing
//!    is found. `SearchError` is reserved for broken inputs.
//!
//! ## Modules
//!
//! - `core`: Problem contract, agent IDs, errors, RNG
//! - `frontier`: LIFO, FIFO and priority frontiers
//! - `search`: DFS, BFS, UCS, IDS, greedy, A*, IDA*
//! - `adversarial`: Minimax, alpha-beta, expectimax
//! - `csp`: Backtracking, forward checking, AC-3, MAC
//! - `mdp`: Value iteration
//! - `games`: Small reference domains

pub mod adversarial;
pub mod core;
pub mod csp;
pub mod frontier;
pub mod games;
pub mod mdp;
pub mod search;

// Re-export commonly used types
pub use crate::core::{AgentId, Heuristic, Result, SearchError, SearchProblem, SearchRng, Solution, ZeroHeuristic};

pub use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityQueue};

pub use crate::search::{solve, solve_informed, GraphSearch, SearchConfig, SearchStats, Strategy};

pub use crate::adversarial::{
    from_config, AgentKind, AlphaBetaAgent, Evaluator, ExpectimaxAgent, GameAgent, GameSearchConfig, GameState,
    MinimaxAgent, ScoreEvaluator,
};

pub use crate::csp::{ac3, solve_csp, ConstraintProblem, CspConfig, CspSearch, CspSolver, CspStrategy, VariableOrdering};

pub use crate::mdp::{MarkovDecisionProcess, ValueIteration, ValueIterationConfig};
