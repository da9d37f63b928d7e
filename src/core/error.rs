//! Error type shared by every solver in the crate.
//!
//! Failing to find a solution is not an error: solvers return `Ok(None)`.
//! `SearchError` covers broken inputs and unsupported requests.

use thiserror::Error;

/// Errors raised by search, game, constraint and MDP solvers.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    #[error("priority is not a number (NaN) for {context}")]
    InvalidPriority { context: &'static str },

    #[error("negative step cost {cost} is not allowed for {strategy}")]
    NegativeCost { cost: f64, strategy: &'static str },

    #[error("strategy {strategy} requires a heuristic")]
    MissingHeuristic { strategy: &'static str },

    #[error("no legal actions available at the root")]
    NoLegalActions,

    #[error("invalid depth: {message}")]
    InvalidDepth { message: String },

    #[error("variable {variable} is not part of the problem")]
    UnknownVariable { variable: String },

    #[error("discount {discount} must lie in [0, 1]")]
    InvalidDiscount { discount: f64 },

    #[error("not implemented: {what}")]
    NotImplemented { what: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Reject a NaN priority before it reaches an ordered structure.
pub(crate) fn check_priority(priority: f64, context: &'static str) -> Result<f64> {
    if priority.is_nan() {
        Err(SearchError::InvalidPriority { context })
    } else {
        Ok(priority)
    }
}
