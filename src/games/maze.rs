//! Grid maze: walk from `S` to `G` through open cells.

use crate::core::SearchProblem;

/// Grid position as `(x, y)`, `y` growing downwards.
pub type Pos = (usize, usize);

/// A rectangular maze.
///
/// ```
/// use ai_search::games::maze::Maze;
///
/// let maze = Maze::from_ascii("S.#\n#.G");
/// assert_eq!(maze.start(), (0, 0));
/// assert_eq!(maze.goal(), (2, 1));
/// ```
#[derive(Clone, Debug)]
pub struct Maze {
    open: Vec<Vec<bool>>,
    start: Pos,
    goal: Pos,
}

impl Maze {
    /// Parse a maze: `#` is a wall, anything else is open, `S` marks the
    /// start and `G` the goal.
    ///
    /// # Panics
    ///
    /// If the rows differ in length or `S` / `G` is missing.
    pub fn from_ascii(text: &str) -> Self {
        let mut open = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (y, line) in text.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, c) in line.chars().enumerate() {
                match c {
                    'S' => start = Some((x, y)),
                    'G' => goal = Some((x, y)),
                    _ => {}
                }
                row.push(c != '#');
            }
            open.push(row);
        }

        let width = open.first().map_or(0, Vec::len);
        assert!(open.iter().all(|row| row.len() == width), "Maze rows must have equal width");

        Self {
            open,
            start: start.expect("Maze needs a start cell 'S'"),
            goal: goal.expect("Maze needs a goal cell 'G'"),
        }
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn width(&self) -> usize {
        self.open.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.open.len()
    }

    /// Whether `(x, y)` is inside the maze and not a wall.
    pub fn is_open(&self, (x, y): Pos) -> bool {
        self.open.get(y).and_then(|row| row.get(x)).copied().unwrap_or(false)
    }

    /// Manhattan distance to the goal. Admissible for unit moves.
    pub fn manhattan(&self, (x, y): &Pos) -> f64 {
        (x.abs_diff(self.goal.0) + y.abs_diff(self.goal.1)) as f64
    }
}

impl SearchProblem for Maze {
    type State = Pos;

    fn initial_state(&self) -> Pos {
        self.start
    }

    fn is_goal(&self, state: &Pos) -> bool {
        *state == self.goal
    }

    /// Down, up, right, left; each step costs 1.
    fn successors(&self, &(x, y): &Pos) -> Vec<(Pos, f64)> {
        let mut next = Vec::with_capacity(4);
        let candidates = [
            Some((x, y + 1)),
            y.checked_sub(1).map(|y| (x, y)),
            Some((x + 1, y)),
            x.checked_sub(1).map(|x| (x, y)),
        ];
        for pos in candidates.into_iter().flatten() {
            if self.is_open(pos) {
                next.push((pos, 1.0));
            }
        }
        next
    }
}
