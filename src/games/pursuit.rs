//! Pursuit on a corridor: a runner collects food while ghosts chase it.
//!
//! Agent 0 is the runner; agents `1..=ghosts` are the ghosts. The runner
//! wins by eating every food pellet and loses when it shares a cell with a
//! ghost.

use smallvec::SmallVec;

use crate::adversarial::GameState;
use crate::core::AgentId;

const FOOD_SCORE: i32 = 10;
const STEP_SCORE: i32 = -1;
const WIN_SCORE: i32 = 500;
const LOSE_SCORE: i32 = -500;

/// A move along the corridor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Stop,
}

/// Game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

/// Corridor pursuit state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pursuit {
    width: usize,
    runner: usize,
    ghosts: SmallVec<[usize; 4]>,
    food: Vec<bool>,
    total_food: usize,
    score: i32,
    outcome: Outcome,
}

impl Pursuit {
    /// Create a corridor of `width` cells with the runner, ghosts and food
    /// at the given cells. Food under the runner is eaten at once.
    ///
    /// # Panics
    ///
    /// If a position lies outside the corridor.
    pub fn new(width: usize, runner: usize, ghosts: &[usize], food: &[usize]) -> Self {
        assert!(runner < width, "Runner is outside the corridor");
        assert!(ghosts.iter().all(|&g| g < width), "Ghost is outside the corridor");
        assert!(food.iter().all(|&f| f < width), "Food is outside the corridor");

        let mut cells = vec![false; width];
        for &f in food {
            cells[f] = true;
        }
        let total_food = cells.iter().filter(|&&f| f).count();

        let mut state = Self {
            width,
            runner,
            ghosts: ghosts.iter().copied().collect(),
            food: cells,
            total_food,
            score: 0,
            outcome: Outcome::Playing,
        };
        state.settle();
        state
    }

    pub fn runner(&self) -> usize {
        self.runner
    }

    pub fn ghosts(&self) -> &[usize] {
        &self.ghosts
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn food_left(&self) -> usize {
        self.food.iter().filter(|&&f| f).count()
    }

    pub fn food_eaten(&self) -> usize {
        self.total_food - self.food_left()
    }

    /// Distance from the runner to the closest ghost.
    pub fn nearest_ghost(&self) -> Option<usize> {
        self.ghosts.iter().map(|&g| g.abs_diff(self.runner)).min()
    }

    fn step(&self, from: usize, action: Move) -> Option<usize> {
        match action {
            Move::Left => from.checked_sub(1),
            Move::Right => Some(from + 1).filter(|&to| to < self.width),
            Move::Stop => Some(from),
        }
    }

    /// Eat food, then resolve win and loss.
    fn settle(&mut self) {
        if self.outcome != Outcome::Playing {
            return;
        }
        if self.ghosts.contains(&self.runner) {
            self.outcome = Outcome::Lost;
            self.score += LOSE_SCORE;
            return;
        }
        if std::mem::take(&mut self.food[self.runner]) {
            self.score += FOOD_SCORE;
        }
        if self.food_left() == 0 {
            self.outcome = Outcome::Won;
            self.score += WIN_SCORE;
        }
    }
}

impl GameState for Pursuit {
    type Action = Move;

    fn is_terminal(&self) -> bool {
        self.outcome != Outcome::Playing
    }

    /// The runner may stop; ghosts must move when they can.
    fn legal_actions(&self, agent: AgentId) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }

        let from = if agent.is_max() {
            self.runner
        } else {
            match self.ghosts.get(agent.index() - 1) {
                Some(&g) => g,
                None => return Vec::new(),
            }
        };

        let mut actions: Vec<Move> = [Move::Left, Move::Right]
            .into_iter()
            .filter(|&m| self.step(from, m).is_some())
            .collect();
        if agent.is_max() || actions.is_empty() {
            actions.push(Move::Stop);
        }
        actions
    }

    fn apply_action(&self, agent: AgentId, action: &Move) -> Self {
        let mut next = self.clone();
        if agent.is_max() {
            next.runner = self.step(self.runner, *action).unwrap_or(self.runner);
            next.score += STEP_SCORE;
        } else if let Some(ghost) = next.ghosts.get_mut(agent.index() - 1) {
            *ghost = self.step(*ghost, *action).unwrap_or(*ghost);
        }
        next.settle();
        next
    }

    fn agent_count(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn score(&self) -> f64 {
        f64::from(self.score)
    }
}

/// Evaluation for game-tree agents: 1000 for a win, -1000 for a loss,
/// otherwise 3 points per pellet eaten, minus a penalty for a ghost one
/// cell away.
pub fn pursuit_evaluation(state: &Pursuit) -> f64 {
    match state.outcome() {
        Outcome::Won => 1000.0,
        Outcome::Lost => -1000.0,
        Outcome::Playing => {
            let danger = if state.nearest_ghost() == Some(1) { 5.0 } else { 0.0 };
            3.0 * state.food_eaten() as f64 - danger
        }
    }
}
