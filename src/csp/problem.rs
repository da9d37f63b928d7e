//! Constraint problem contract for binary-constraint CSPs.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::core::{Result, SearchError};

/// Current domain of every variable.
///
/// Persistent map: cloning is O(1) and updates share structure, so each
/// recursion level keeps its own snapshot.
pub type Domains<V, X> = im::HashMap<V, im::Vector<X>>;

/// A (possibly partial) assignment of values to variables.
pub type Assignment<V, X> = FxHashMap<V, X>;

/// A constraint satisfaction problem with binary constraints.
///
/// Two variables constrain each other iff they are neighbours.
pub trait ConstraintProblem {
    /// Variable identifier.
    type Var: Clone + Eq + Hash + Debug;

    /// Value a variable can take.
    type Value: Clone + PartialEq + Debug;

    /// All variables, in the order used by `FirstUnassigned`.
    fn variables(&self) -> Vec<Self::Var>;

    /// Initial domain of `var`.
    fn domain(&self, var: &Self::Var) -> Vec<Self::Value>;

    /// Variables sharing a constraint with `var`.
    fn neighbours(&self, var: &Self::Var) -> Vec<Self::Var>;

    /// Whether `var = value` and `other = other_value` satisfy their constraint.
    fn consistent(&self, var: &Self::Var, value: &Self::Value, other: &Self::Var, other_value: &Self::Value) -> bool;

    /// Index into `unassigned` of the variable to branch on next, used by
    /// `VariableOrdering::ProblemDefined`. `unassigned` is never empty and
    /// keeps `variables()` order; an out-of-range index picks the first.
    fn select_variable(&self, unassigned: &[Self::Var], domains: &Domains<Self::Var, Self::Value>) -> usize {
        let _ = (unassigned, domains);
        0
    }
}

/// Initial domains of every variable.
pub fn initial_domains<P: ConstraintProblem>(problem: &P) -> Domains<P::Var, P::Value> {
    problem
        .variables()
        .into_iter()
        .map(|var| {
            let values: im::Vector<P::Value> = problem.domain(&var).into_iter().collect();
            (var, values)
        })
        .collect()
}

/// Check that `assignment` is complete and satisfies every constraint.
pub fn is_solution<P: ConstraintProblem>(problem: &P, assignment: &Assignment<P::Var, P::Value>) -> bool {
    problem.variables().iter().all(|var| {
        let Some(value) = assignment.get(var) else {
            return false;
        };
        problem.domain(var).contains(value)
            && problem.neighbours(var).iter().all(|other| {
                assignment
                    .get(other)
                    .map_or(true, |other_value| problem.consistent(var, value, other, other_value))
            })
    })
}

/// Domain of `var`, or `UnknownVariable`.
pub(crate) fn domain_of<'d, V: Hash + Eq + Clone + Debug, X: Clone>(
    domains: &'d Domains<V, X>,
    var: &V,
) -> Result<&'d im::Vector<X>> {
    domains.get(var).ok_or_else(|| SearchError::UnknownVariable {
        variable: format!("{var:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three mutually different variables over {0, 1, 2}.
    struct Triangle;

    impl ConstraintProblem for Triangle {
        type Var = char;
        type Value = u8;

        fn variables(&self) -> Vec<char> {
            vec!['a', 'b', 'c']
        }

        fn domain(&self, _var: &char) -> Vec<u8> {
            vec![0, 1, 2]
        }

        fn neighbours(&self, var: &char) -> Vec<char> {
            self.variables().into_iter().filter(|v| v != var).collect()
        }

        fn consistent(&self, _: &char, value: &u8, _: &char, other_value: &u8) -> bool {
            value != other_value
        }
    }

    #[test]
    fn test_initial_domains() {
        let domains = initial_domains(&Triangle);
        assert_eq!(domains.len(), 3);
        assert_eq!(domain_of(&domains, &'b').unwrap().len(), 3);
        assert!(matches!(
            domain_of(&domains, &'z'),
            Err(SearchError::UnknownVariable { .. })
        ));
    }

    #[test]
    fn test_is_solution() {
        let mut assignment = Assignment::default();
        assignment.insert('a', 0);
        assignment.insert('b', 1);
        assert!(!is_solution(&Triangle, &assignment));

        assignment.insert('c', 1);
        assert!(!is_solution(&Triangle, &assignment));

        assignment.insert('c', 2);
        assert!(is_solution(&Triangle, &assignment));
    }

    #[test]
    fn test_snapshots_are_independent() {
        let base = initial_domains(&Triangle);
        let mut next = base.clone();
        next.insert('a', im::Vector::unit(1));

        assert_eq!(domain_of(&base, &'a').unwrap().len(), 3);
        assert_eq!(domain_of(&next, &'a').unwrap().len(), 1);
    }
}
