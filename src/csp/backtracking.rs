//! Recursive backtracking with optional propagation.

use std::collections::VecDeque;

use log::trace;

use crate::core::Result;
use crate::search::stats::Tracker;

use super::arc::propagate;
use super::config::{CspStrategy, VariableOrdering};
use super::problem::{domain_of, Assignment, ConstraintProblem, Domains};

pub(crate) struct Backtracker<'p, 'a, 't, P: ConstraintProblem> {
    problem: &'p P,
    variables: Vec<P::Var>,
    strategy: CspStrategy,
    ordering: VariableOrdering,
    tracker: &'a mut Tracker<'t>,
}

impl<'p, 'a, 't, P: ConstraintProblem> Backtracker<'p, 'a, 't, P> {
    pub(crate) fn new(
        problem: &'p P,
        strategy: CspStrategy,
        ordering: VariableOrdering,
        tracker: &'a mut Tracker<'t>,
    ) -> Self {
        Self {
            problem,
            variables: problem.variables(),
            strategy,
            ordering,
            tracker,
        }
    }

    /// Search from `domains`; `Ok(None)` when no assignment exists or the
    /// call budget ran out.
    pub(crate) fn run(
        mut self,
        domains: Domains<P::Var, P::Value>,
    ) -> Result<Option<Assignment<P::Var, P::Value>>> {
        let mut assignment = Assignment::default();
        if self.search(&domains, &mut assignment)? {
            Ok(Some(assignment))
        } else {
            Ok(None)
        }
    }

    fn search(
        &mut self,
        domains: &Domains<P::Var, P::Value>,
        assignment: &mut Assignment<P::Var, P::Value>,
    ) -> Result<bool> {
        if !self.tracker.expand(assignment.len()) {
            return Ok(false);
        }

        let Some(var) = self.select(domains, assignment) else {
            return Ok(true);
        };

        let values = domain_of(domains, &var)?.clone();
        for value in values.iter() {
            self.tracker.generated(1);

            let Some(next) = self.assign(domains, assignment, &var, value)? else {
                continue;
            };

            assignment.insert(var.clone(), value.clone());
            if self.search(&next, assignment)? {
                return Ok(true);
            }
            assignment.remove(&var);

            if self.tracker.stats().budget_exhausted {
                return Ok(false);
            }
        }

        trace!("{}: no value left for {var:?}", self.strategy);
        Ok(false)
    }

    /// Domains after `var = value`, or `None` if the value fails.
    fn assign(
        &self,
        domains: &Domains<P::Var, P::Value>,
        assignment: &Assignment<P::Var, P::Value>,
        var: &P::Var,
        value: &P::Value,
    ) -> Result<Option<Domains<P::Var, P::Value>>> {
        match self.strategy {
            CspStrategy::Backtracking => {
                let fits = self.problem.neighbours(var).iter().all(|other| {
                    assignment
                        .get(other)
                        .map_or(true, |other_value| self.problem.consistent(var, value, other, other_value))
                });
                Ok(fits.then(|| domains.clone()))
            }
            CspStrategy::ForwardChecking | CspStrategy::AcForwardChecking => {
                self.forward_check(domains, assignment, var, value)
            }
            CspStrategy::MaintainingArcConsistency => {
                let next = domains.update(var.clone(), im::Vector::unit(value.clone()));
                let queue: VecDeque<_> = self
                    .problem
                    .neighbours(var)
                    .into_iter()
                    .filter(|other| !assignment.contains_key(other))
                    .map(|other| (other, var.clone()))
                    .collect();
                propagate(self.problem, next, queue)
            }
        }
    }

    /// Fix `var` to `value` and drop unsupported values from unassigned
    /// neighbours. `None` on a wiped-out domain.
    fn forward_check(
        &self,
        domains: &Domains<P::Var, P::Value>,
        assignment: &Assignment<P::Var, P::Value>,
        var: &P::Var,
        value: &P::Value,
    ) -> Result<Option<Domains<P::Var, P::Value>>> {
        let mut next = domains.update(var.clone(), im::Vector::unit(value.clone()));

        for other in self.problem.neighbours(var) {
            if assignment.contains_key(&other) {
                continue;
            }

            let current = domain_of(&next, &other)?;
            let pruned: im::Vector<P::Value> = current
                .iter()
                .filter(|other_value| self.problem.consistent(var, value, &other, other_value))
                .cloned()
                .collect();

            if pruned.is_empty() {
                return Ok(None);
            }
            if pruned.len() != current.len() {
                next.insert(other, pruned);
            }
        }
        Ok(Some(next))
    }

    fn select(
        &self,
        domains: &Domains<P::Var, P::Value>,
        assignment: &Assignment<P::Var, P::Value>,
    ) -> Option<P::Var> {
        let mut unassigned = self.variables.iter().filter(|var| !assignment.contains_key(*var));
        match self.ordering {
            VariableOrdering::FirstUnassigned => unassigned.next().cloned(),
            VariableOrdering::MinimumRemainingValues => unassigned
                .min_by_key(|var| domains.get(*var).map_or(0, im::Vector::len))
                .cloned(),
            VariableOrdering::ProblemDefined => {
                let candidates: Vec<P::Var> = unassigned.cloned().collect();
                if candidates.is_empty() {
                    return None;
                }
                let pick = self.problem.select_variable(&candidates, domains);
                candidates.get(pick).or_else(|| candidates.first()).cloned()
            }
        }
    }
}
