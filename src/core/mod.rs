//! Core types shared by every solver: problem contract, agents, errors, RNG.
//!
//! This module is domain-agnostic. Problem domains implement the traits
//! here rather than modifying the solvers.

pub mod agent;
pub mod error;
pub mod problem;
pub mod rng;

pub use agent::AgentId;
pub use error::{Result, SearchError};
pub use problem::{Heuristic, SearchProblem, Solution, ZeroHeuristic};
pub use rng::SearchRng;
