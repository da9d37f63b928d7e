//! Informed strategies: greedy best-first, A* and IDA*.
//!
//! All three take the heuristic as a parameter. Nothing here assumes the
//! heuristic is admissible; optimality of A* and IDA* holds only when it is.

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::core::error::check_priority;
use crate::core::{Heuristic, Result, SearchError, SearchProblem, Solution};
use crate::frontier::PriorityQueue;

use super::stats::Tracker;
use super::uninformed::cheapest_first;

/// Greedy best-first search.
///
/// Orders the frontier by `h(state)` alone. States are marked visited when
/// discovered. Fast, not optimal.
pub(crate) fn greedy<P, H>(
    problem: &P,
    heuristic: &H,
    tracker: &mut Tracker<'_>,
) -> Result<Option<Solution<P::State>>>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    let start = problem.initial_state();
    let mut visited: FxHashSet<P::State> = FxHashSet::default();
    let mut open = PriorityQueue::new();

    let h = heuristic.estimate(&start);
    visited.insert(start.clone());
    open.push((vec![start], 0.0), h)?;

    while let Some(((path, cost), _)) = open.pop() {
        let Some(state) = path.last() else { continue };

        if problem.is_goal(state) {
            return Ok(Some(Solution { path, cost }));
        }

        if !tracker.expand(path.len() - 1) {
            debug!("greedy: expansion budget exhausted");
            return Ok(None);
        }

        let mut generated = 0;
        for (next, step) in problem.successors(state) {
            if !visited.insert(next.clone()) {
                continue;
            }
            let h = heuristic.estimate(&next);
            let mut next_path = path.clone();
            next_path.push(next);
            open.push((next_path, cost + step), h)?;
            generated += 1;
        }
        tracker.generated(generated);
        tracker.frontier(open.len());
    }

    Ok(None)
}

/// A* search.
///
/// Orders the frontier by `g + h` using true per-path cost `g`. With an
/// admissible, consistent heuristic the first goal popped is optimal; with
/// the zero heuristic this is uniform-cost search.
pub(crate) fn a_star<P, H>(
    problem: &P,
    heuristic: &H,
    tracker: &mut Tracker<'_>,
) -> Result<Option<Solution<P::State>>>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    cheapest_first(problem, "astar", |state| heuristic.estimate(state), tracker)
}

/// Iterative deepening A*.
///
/// Depth-first search bounded by `f = g + h`. The first bound is
/// `h(start)`; each round raises it to the smallest `f` that was pruned.
/// Stops at the first round that reaches a goal, when nothing was pruned,
/// or after `max_iterations` rounds. A round keeps no table of visited
/// states; a successor is skipped only when it already lies on the path.
pub(crate) fn ida_star<P, H>(
    problem: &P,
    heuristic: &H,
    max_iterations: u32,
    tracker: &mut Tracker<'_>,
) -> Result<Option<Solution<P::State>>>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    let start = problem.initial_state();
    let mut bound = check_priority(heuristic.estimate(&start), "ida* initial bound")?;

    for _ in 0..max_iterations {
        tracker.next_iteration();
        trace!("ida*: bound {bound}");

        match bounded_round(problem, heuristic, &start, bound, tracker)? {
            Round::Found(solution) => {
                debug!("ida*: goal with cost {} under bound {bound}", solution.cost);
                return Ok(Some(solution));
            }
            Round::Pruned(next) if next.is_finite() => bound = next,
            Round::Pruned(_) => {
                debug!("ida*: nothing pruned under bound {bound}, no solution");
                return Ok(None);
            }
            Round::OutOfBudget => return Ok(None),
        }
    }

    debug!("ida*: gave up after {max_iterations} bound increases");
    Ok(None)
}

enum Round<S> {
    Found(Solution<S>),
    /// Smallest `f` that exceeded the bound (infinite if none did).
    Pruned(f64),
    OutOfBudget,
}

fn bounded_round<P, H>(
    problem: &P,
    heuristic: &H,
    start: &P::State,
    bound: f64,
    tracker: &mut Tracker<'_>,
) -> Result<Round<P::State>>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    // Only the current path is remembered, so memory stays linear in the depth.
    let mut stack: Vec<(Vec<P::State>, f64)> = vec![(vec![start.clone()], 0.0)];
    let mut next_bound = f64::INFINITY;

    while let Some((path, g)) = stack.pop() {
        let Some(state) = path.last() else { continue };

        let f = check_priority(g + heuristic.estimate(state), "ida* node")?;
        if f > bound {
            next_bound = next_bound.min(f);
            continue;
        }

        if problem.is_goal(state) {
            return Ok(Round::Found(Solution { path, cost: g }));
        }

        if !tracker.expand(path.len() - 1) {
            return Ok(Round::OutOfBudget);
        }

        // Push the most promising child last so it pops first.
        let mut children = Vec::new();
        for (next, step) in problem.successors(state) {
            if step < 0.0 {
                return Err(SearchError::NegativeCost { cost: step, strategy: "idastar" });
            }
            if path.contains(&next) {
                continue;
            }
            let next_g = g + step;
            let f = check_priority(next_g + heuristic.estimate(&next), "ida* child")?;
            children.push((f, next, next_g));
        }
        children.sort_by(|a, b| b.0.total_cmp(&a.0));

        tracker.generated(children.len() as u64);
        for (_, next, next_g) in children {
            let mut next_path = path.clone();
            next_path.push(next);
            stack.push((next_path, next_g));
        }
        tracker.frontier(stack.len());
    }

    Ok(Round::Pruned(next_bound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ZeroHeuristic;

    /// Points on a number line; moves of +1 (cost 1) or +3 (cost 4).
    struct NumberLine {
        goal: i32,
    }

    impl SearchProblem for NumberLine {
        type State = i32;

        fn initial_state(&self) -> i32 {
            0
        }

        fn is_goal(&self, state: &i32) -> bool {
            *state == self.goal
        }

        fn successors(&self, state: &i32) -> Vec<(i32, f64)> {
            if *state >= self.goal {
                return vec![];
            }
            vec![(state + 3, 4.0), (state + 1, 1.0)]
        }
    }

    fn remaining(goal: i32) -> impl Fn(&i32) -> f64 {
        move |s: &i32| f64::from((goal - s).max(0))
    }

    #[test]
    fn test_a_star_optimal_with_admissible_heuristic() {
        let problem = NumberLine { goal: 6 };
        let mut tracker = Tracker::unlimited();
        let solution = a_star(&problem, &remaining(6), &mut tracker).unwrap().unwrap();
        assert_eq!(solution.cost, 6.0);
        assert_eq!(solution.depth(), 6);
    }

    #[test]
    fn test_greedy_follows_heuristic() {
        let problem = NumberLine { goal: 6 };
        let mut tracker = Tracker::unlimited();
        let solution = greedy(&problem, &remaining(6), &mut tracker).unwrap().unwrap();
        // Greedy jumps by 3 twice: reaches the goal but pays 8.
        assert_eq!(solution.path, vec![0, 3, 6]);
        assert_eq!(solution.cost, 8.0);
    }

    #[test]
    fn test_ida_star_matches_a_star() {
        for goal in 1..10 {
            let problem = NumberLine { goal };
            let mut t1 = Tracker::unlimited();
            let mut t2 = Tracker::unlimited();
            let a = a_star(&problem, &remaining(goal), &mut t1).unwrap().unwrap();
            let b = ida_star(&problem, &remaining(goal), 100, &mut t2).unwrap().unwrap();
            assert_eq!(a.cost, b.cost, "goal {goal}");
        }
    }

    #[test]
    fn test_ida_star_unsolvable() {
        // Overshooting past the goal is a dead end; goal -1 is unreachable.
        let problem = NumberLine { goal: -1 };
        let mut tracker = Tracker::unlimited();
        let h = |_: &i32| 0.0;
        assert!(ida_star(&problem, &h, 100, &mut tracker).unwrap().is_none());
    }

    #[test]
    fn test_nan_heuristic_is_an_error() {
        let problem = NumberLine { goal: 4 };
        let h = |s: &i32| if *s == 1 { f64::NAN } else { 0.0 };

        let mut tracker = Tracker::unlimited();
        let err = a_star(&problem, &h, &mut tracker).unwrap_err();
        assert!(matches!(err, SearchError::InvalidPriority { .. }));

        let mut tracker = Tracker::unlimited();
        let err = ida_star(&problem, &h, 10, &mut tracker).unwrap_err();
        assert!(matches!(err, SearchError::InvalidPriority { .. }));
    }

    /// Adjacency lists with unit costs; goal is a node index.
    struct Edges {
        adjacent: Vec<Vec<usize>>,
        goal: usize,
    }

    impl SearchProblem for Edges {
        type State = usize;

        fn initial_state(&self) -> usize {
            0
        }

        fn is_goal(&self, state: &usize) -> bool {
            *state == self.goal
        }

        fn successors(&self, state: &usize) -> Vec<(usize, f64)> {
            self.adjacent.get(*state).map_or_else(Vec::new, |next| next.iter().map(|&n| (n, 1.0)).collect())
        }
    }

    #[test]
    fn test_ida_star_reexpands_transpositions() {
        // 3 is reached through both 1 and 2; the goal is unreachable.
        let problem = Edges {
            adjacent: vec![vec![1, 2], vec![3], vec![3], vec![]],
            goal: 9,
        };
        let mut tracker = Tracker::unlimited();
        assert!(ida_star(&problem, &ZeroHeuristic, 100, &mut tracker).unwrap().is_none());

        // Bounds 0, 1, 2 expand 1 + 3 + 5 nodes: 3 is expanded once per path.
        let stats = tracker.finish();
        assert_eq!(stats.iterations, 3);
        assert_eq!(stats.expansions, 9);
    }

    #[test]
    fn test_ida_star_skips_states_on_the_path() {
        let problem = Edges {
            adjacent: vec![vec![1], vec![0, 1, 2], vec![]],
            goal: 2,
        };
        let mut tracker = Tracker::unlimited();
        let solution = ida_star(&problem, &ZeroHeuristic, 100, &mut tracker).unwrap().unwrap();
        assert_eq!(solution.path, vec![0, 1, 2]);
        assert_eq!(solution.cost, 2.0);
    }
}
