//! AC-3 arc consistency.

use std::collections::VecDeque;

use log::trace;

use crate::core::Result;

use super::problem::{domain_of, ConstraintProblem, Domains};

type Pair<P> = (<P as ConstraintProblem>::Var, <P as ConstraintProblem>::Var);

/// Make every arc of `problem` consistent.
///
/// Returns the reduced domains, or `None` if some domain is wiped out (the
/// problem has no solution under `domains`).
pub fn ac3<P: ConstraintProblem>(
    problem: &P,
    domains: Domains<P::Var, P::Value>,
) -> Result<Option<Domains<P::Var, P::Value>>> {
    let mut queue = VecDeque::new();
    for var in problem.variables() {
        for other in problem.neighbours(&var) {
            queue.push_back((var.clone(), other));
        }
    }
    propagate(problem, domains, queue)
}

/// Revise arcs from `queue` until none changes a domain.
pub(crate) fn propagate<P: ConstraintProblem>(
    problem: &P,
    mut domains: Domains<P::Var, P::Value>,
    mut queue: VecDeque<Pair<P>>,
) -> Result<Option<Domains<P::Var, P::Value>>> {
    while let Some((var, other)) = queue.pop_front() {
        let Some(revised) = revise(problem, &domains, &var, &other)? else {
            continue;
        };

        if revised.is_empty() {
            trace!("ac3: domain of {var:?} wiped out");
            return Ok(None);
        }
        domains.insert(var.clone(), revised);

        for next in problem.neighbours(&var) {
            if next != other {
                queue.push_back((next, var.clone()));
            }
        }
    }
    Ok(Some(domains))
}

/// Values of `var` that still have a support in the domain of `other`.
/// `None` when nothing was removed.
fn revise<P: ConstraintProblem>(
    problem: &P,
    domains: &Domains<P::Var, P::Value>,
    var: &P::Var,
    other: &P::Var,
) -> Result<Option<im::Vector<P::Value>>> {
    let own = domain_of(domains, var)?;
    let theirs = domain_of(domains, other)?;

    let kept: im::Vector<P::Value> = own
        .iter()
        .filter(|value| {
            theirs
                .iter()
                .any(|other_value| problem.consistent(var, value, other, other_value))
        })
        .cloned()
        .collect();

    Ok((kept.len() != own.len()).then_some(kept))
}
