//! State-space problem contract.
//!
//! Problems implement `SearchProblem` to define:
//! - The initial state
//! - Goal test
//! - Successor states with their step costs
//!
//! The solvers call into `SearchProblem` but never inspect the state
//! representation directly.

use std::hash::Hash;

/// A state-space search problem.
///
/// ## Implementation Notes
///
/// - `State` equality and hashing must agree: two states describing the same
///   configuration must compare and hash equal, or duplicate detection fails
/// - `successors` must be pure: equal states yield equal successor sets
/// - Step costs must be non-negative for the cost-ordered strategies
pub trait SearchProblem {
    /// State type. Solvers clone states but never mutate them.
    type State: Clone + Eq + Hash;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Check whether a state satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerate successor states paired with the cost of the step.
    ///
    /// Duplicates are allowed; solvers de-duplicate.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, f64)>;

    // === Convenience Methods ===

    /// Successor states without their step costs.
    fn neighbours(&self, state: &Self::State) -> Vec<Self::State> {
        self.successors(state).into_iter().map(|(s, _)| s).collect()
    }
}

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// Any `Fn(&S) -> f64` is a heuristic. Admissibility is the caller's promise,
/// not something the solvers check.
pub trait Heuristic<S> {
    /// Estimated remaining cost.
    fn estimate(&self, state: &S) -> f64;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> f64,
{
    fn estimate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// Heuristic that always returns zero. Turns A* into UCS.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> f64 {
        0.0
    }
}

/// A found path together with its total cost.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<S> {
    /// States from the initial state to the goal, inclusive.
    pub path: Vec<S>,

    /// Sum of step costs along `path`.
    pub cost: f64,
}

impl<S> Solution<S> {
    /// Number of steps (edges) in the path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The goal state at the end of the path.
    #[must_use]
    pub fn goal(&self) -> Option<&S> {
        self.path.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(u32);

    impl SearchProblem for Line {
        type State = u32;

        fn initial_state(&self) -> u32 {
            0
        }

        fn is_goal(&self, state: &u32) -> bool {
            *state == self.0
        }

        fn successors(&self, state: &u32) -> Vec<(u32, f64)> {
            if *state < self.0 {
                vec![(state + 1, 2.0)]
            } else {
                vec![]
            }
        }
    }

    #[test]
    fn test_neighbours_drop_costs() {
        let line = Line(3);
        assert_eq!(line.neighbours(&0), vec![1]);
        assert!(line.neighbours(&3).is_empty());
    }

    #[test]
    fn test_closure_heuristic() {
        let h = |s: &u32| f64::from(*s) * 2.0;
        assert_eq!(h.estimate(&3), 6.0);
        assert_eq!(Heuristic::<u32>::estimate(&ZeroHeuristic, &3), 0.0);
    }

    #[test]
    fn test_solution_depth() {
        let solution = Solution { path: vec![0, 1, 2], cost: 4.0 };
        assert_eq!(solution.depth(), 2);
        assert_eq!(solution.goal(), Some(&2));

        let empty: Solution<u32> = Solution { path: vec![], cost: 0.0 };
        assert_eq!(empty.depth(), 0);
        assert_eq!(empty.goal(), None);
    }
}
