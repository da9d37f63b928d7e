//! Uninformed strategies: DFS, BFS, UCS and iterative deepening.
//!
//! Every frontier entry owns its full path. Paths that share a prefix are
//! independent copies, so popping one never disturbs another.

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Result, SearchError, SearchProblem, Solution};
use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityQueue};

use super::stats::Tracker;

/// Frontier entry for insertion-ordered searches: a path and its cost.
type PathEntry<S> = (Vec<S>, f64);

/// Depth-first search.
///
/// Returns the first goal path popped from a LIFO frontier. States are
/// marked visited when discovered, so no state is ever queued twice.
pub(crate) fn depth_first<P: SearchProblem>(
    problem: &P,
    tracker: &mut Tracker<'_>,
) -> Result<Option<Solution<P::State>>> {
    frontier_search(problem, LifoFrontier::new(), tracker)
}

/// Breadth-first search.
///
/// Same as [`depth_first`] with a FIFO frontier. Returns a path with the
/// fewest steps.
pub(crate) fn breadth_first<P: SearchProblem>(
    problem: &P,
    tracker: &mut Tracker<'_>,
) -> Result<Option<Solution<P::State>>> {
    frontier_search(problem, FifoFrontier::new(), tracker)
}

fn frontier_search<P, F>(
    problem: &P,
    mut frontier: F,
    tracker: &mut Tracker<'_>,
) -> Result<Option<Solution<P::State>>>
where
    P: SearchProblem,
    F: Frontier<PathEntry<P::State>>,
{
    let start = problem.initial_state();
    let mut visited: FxHashSet<P::State> = FxHashSet::default();
    visited.insert(start.clone());
    frontier.push((vec![start], 0.0));

    while let Some((path, cost)) = frontier.pop() {
        let Some(state) = path.last() else { continue };

        if problem.is_goal(state) {
            return Ok(Some(Solution { path, cost }));
        }

        if !tracker.expand(path.len() - 1) {
            debug!("expansion budget exhausted after {} expansions", tracker.stats().expansions);
            return Ok(None);
        }

        let mut generated = 0;
        for (next, step) in problem.successors(state) {
            if visited.insert(next.clone()) {
                let mut next_path = path.clone();
                next_path.push(next);
                frontier.push((next_path, cost + step));
                generated += 1;
            }
        }
        trace!("expanded depth {} -> {} new entries", path.len() - 1, generated);
        tracker.generated(generated);
        tracker.frontier(frontier.len());
    }

    Ok(None)
}

/// Uniform-cost search.
///
/// Pops the cheapest path first. Keeps the best known cost per state and
/// re-queues a state only when a cheaper path reaches it; stale entries are
/// skipped when popped. Optimal for non-negative step costs.
pub(crate) fn uniform_cost<P: SearchProblem>(
    problem: &P,
    tracker: &mut Tracker<'_>,
) -> Result<Option<Solution<P::State>>> {
    cheapest_first(problem, "ucs", |_| 0.0, tracker)
}

/// Shared body of UCS and A*: best-first on `g + h` with a best-`g` table.
pub(crate) fn cheapest_first<P, H>(
    problem: &P,
    strategy: &'static str,
    heuristic: H,
    tracker: &mut Tracker<'_>,
) -> Result<Option<Solution<P::State>>>
where
    P: SearchProblem,
    H: Fn(&P::State) -> f64,
{
    let start = problem.initial_state();
    let mut best_g: FxHashMap<P::State, f64> = FxHashMap::default();
    let mut open = PriorityQueue::new();

    let h = heuristic(&start);
    best_g.insert(start.clone(), 0.0);
    open.push((vec![start], 0.0), h)?;

    while let Some(((path, g), _)) = open.pop() {
        let Some(state) = path.last() else { continue };

        if best_g.get(state).is_some_and(|&known| g > known) {
            continue;
        }

        if problem.is_goal(state) {
            return Ok(Some(Solution { path, cost: g }));
        }

        if !tracker.expand(path.len() - 1) {
            debug!("{strategy}: expansion budget exhausted");
            return Ok(None);
        }

        let mut generated = 0;
        for (next, step) in problem.successors(state) {
            if step < 0.0 {
                return Err(SearchError::NegativeCost { cost: step, strategy });
            }

            let next_g = g + step;
            if best_g.get(&next).is_some_and(|&known| known <= next_g) {
                continue;
            }

            let f = next_g + heuristic(&next);
            best_g.insert(next.clone(), next_g);
            let mut next_path = path.clone();
            next_path.push(next);
            open.push((next_path, next_g), f)?;
            generated += 1;
        }
        tracker.generated(generated);
        tracker.frontier(open.len());
    }

    Ok(None)
}

/// Iterative deepening depth-first search.
///
/// Runs a depth-limited DFS for each limit in `start_depth..=max_depth`,
/// from scratch each time. Within one round a state is re-expanded only
/// when reached at a shallower depth than previously recorded. Memory use
/// grows with the depth, not with the number of states.
pub(crate) fn iterative_deepening<P: SearchProblem>(
    problem: &P,
    start_depth: usize,
    max_depth: usize,
    tracker: &mut Tracker<'_>,
) -> Result<Option<Solution<P::State>>> {
    if start_depth > max_depth {
        return Err(SearchError::InvalidDepth {
            message: format!("iterative deepening range {start_depth}..={max_depth} is empty"),
        });
    }

    let start = problem.initial_state();
    if problem.is_goal(&start) {
        return Ok(Some(Solution { path: vec![start], cost: 0.0 }));
    }

    for limit in start_depth..=max_depth {
        tracker.next_iteration();
        trace!("ids: depth limit {limit}");

        match depth_limited(problem, &start, limit, tracker)? {
            Limited::Found(solution) => {
                debug!("ids: goal at depth {} (limit {limit})", solution.depth());
                return Ok(Some(solution));
            }
            Limited::Exhausted => {
                debug!("ids: search space exhausted at limit {limit}");
                return Ok(None);
            }
            Limited::Cutoff => {}
            Limited::OutOfBudget => return Ok(None),
        }
    }

    Ok(None)
}

/// Outcome of a single depth-limited round.
enum Limited<S> {
    Found(Solution<S>),
    /// Some path was cut by the limit; a deeper round may succeed.
    Cutoff,
    /// Nothing was cut: a deeper limit cannot help.
    Exhausted,
    OutOfBudget,
}

fn depth_limited<P: SearchProblem>(
    problem: &P,
    start: &P::State,
    limit: usize,
    tracker: &mut Tracker<'_>,
) -> Result<Limited<P::State>> {
    let mut depths: FxHashMap<P::State, usize> = FxHashMap::default();
    depths.insert(start.clone(), 0);

    let mut stack = LifoFrontier::new();
    stack.push((vec![start.clone()], 0.0));
    let mut cut = false;

    while let Some((path, cost)) = stack.pop() {
        let Some(state) = path.last() else { continue };
        let depth = path.len() - 1;

        if problem.is_goal(state) {
            return Ok(Limited::Found(Solution { path, cost }));
        }

        if depth >= limit {
            cut = true;
            continue;
        }

        if !tracker.expand(depth) {
            return Ok(Limited::OutOfBudget);
        }

        let mut generated = 0;
        for (next, step) in problem.successors(state) {
            let next_depth = depth + 1;
            if depths.get(&next).is_some_and(|&seen| seen <= next_depth) {
                continue;
            }
            depths.insert(next.clone(), next_depth);
            let mut next_path = path.clone();
            next_path.push(next);
            stack.push((next_path, cost + step));
            generated += 1;
        }
        tracker.generated(generated);
        tracker.frontier(stack.len());
    }

    Ok(if cut { Limited::Cutoff } else { Limited::Exhausted })
}
