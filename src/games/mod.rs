//! Small problem domains used in tests, benches and documentation.
//!
//! - `maze`: grid path finding ([`SearchProblem`](crate::core::SearchProblem))
//! - `sliding`: sliding-tile puzzle with two heuristics
//! - `latin`: Latin square completion ([`ConstraintProblem`](crate::csp::ConstraintProblem))
//! - `pursuit`: corridor chase for game-tree agents ([`GameState`](crate::adversarial::GameState))

pub mod latin;
pub mod maze;
pub mod pursuit;
pub mod sliding;
