//! Sliding-tile puzzle (8-puzzle, 15-puzzle, ...).
//!
//! Tile 0 is the blank. The goal is `1, 2, ..., n*n - 1, 0` in row-major order.

use smallvec::SmallVec;

use crate::core::{SearchProblem, SearchRng};

/// Row-major tile layout.
pub type Tiles = SmallVec<[u8; 16]>;

/// A sliding puzzle instance.
#[derive(Clone, Debug)]
pub struct SlidingPuzzle {
    size: usize,
    start: Tiles,
}

impl SlidingPuzzle {
    /// Create a puzzle of side `size` from a row-major tile list.
    ///
    /// # Panics
    ///
    /// If `tiles` is not a permutation of `0..size*size`.
    pub fn new(size: usize, tiles: &[u8]) -> Self {
        let mut sorted = tiles.to_vec();
        sorted.sort_unstable();
        assert!(
            sorted.iter().enumerate().all(|(i, &t)| usize::from(t) == i) && sorted.len() == size * size,
            "Tiles must be a permutation of 0..{}",
            size * size
        );
        Self {
            size,
            start: tiles.iter().copied().collect(),
        }
    }

    /// A puzzle reached by `moves` random blank moves from the goal.
    /// Always solvable. A 1x1 puzzle has no moves and stays solved.
    ///
    /// # Panics
    ///
    /// If `size` is 0 or above 16 (tiles are stored as `u8`).
    pub fn scrambled(size: usize, moves: usize, rng: &mut SearchRng) -> Self {
        assert!((1..=16).contains(&size), "Puzzle size must be in 1..=16, got {size}");
        let mut puzzle = Self {
            size,
            start: goal_tiles(size),
        };
        for _ in 0..moves {
            let next = puzzle.successors(&puzzle.start);
            let Some((tiles, _)) = rng.choose(&next) else { break };
            puzzle.start = tiles.clone();
        }
        puzzle
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> &Tiles {
        &self.start
    }

    /// Whether the goal is reachable from the start (permutation parity).
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.start.iter().copied().filter(|&t| t != 0).collect();
        let inversions = tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|&&b| *a > b).count())
            .sum::<usize>();

        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row_from_bottom = self.size - self.blank(&self.start) / self.size;
            (inversions + blank_row_from_bottom) % 2 == 1
        }
    }

    /// Sum of Manhattan distances of every tile to its goal cell. Admissible.
    pub fn manhattan(&self, tiles: &Tiles) -> f64 {
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != 0)
            .map(|(i, &t)| {
                let target = usize::from(t) - 1;
                (i / self.size).abs_diff(target / self.size) + (i % self.size).abs_diff(target % self.size)
            })
            .sum::<usize>() as f64
    }

    /// Misplaced tiles plus Manhattan distance.
    ///
    /// Not admissible: it can overestimate, so A* may return a costlier path.
    /// Faster on hard instances.
    pub fn misplaced_plus_manhattan(&self, tiles: &Tiles) -> f64 {
        let misplaced = tiles
            .iter()
            .enumerate()
            .filter(|&(i, &t)| t != 0 && usize::from(t) != i + 1)
            .count();
        misplaced as f64 + self.manhattan(tiles)
    }

    fn blank(&self, tiles: &Tiles) -> usize {
        tiles.iter().position(|&t| t == 0).unwrap_or(0)
    }
}

/// Solved layout. Callers keep `size <= 16` so every tile fits in a `u8`.
fn goal_tiles(size: usize) -> Tiles {
    let cells = size * size;
    (1..cells).map(|t| t as u8).chain(std::iter::once(0)).collect()
}

impl SearchProblem for SlidingPuzzle {
    type State = Tiles;

    fn initial_state(&self) -> Tiles {
        self.start.clone()
    }

    fn is_goal(&self, tiles: &Tiles) -> bool {
        *tiles == goal_tiles(self.size)
    }

    /// Blank moves up, down, left, right; each costs 1.
    fn successors(&self, tiles: &Tiles) -> Vec<(Tiles, f64)> {
        let blank = self.blank(tiles);
        let (row, col) = (blank / self.size, blank % self.size);

        let mut targets = SmallVec::<[usize; 4]>::new();
        if row > 0 {
            targets.push(blank - self.size);
        }
        if row + 1 < self.size {
            targets.push(blank + self.size);
        }
        if col > 0 {
            targets.push(blank - 1);
        }
        if col + 1 < self.size {
            targets.push(blank + 1);
        }

        targets
            .into_iter()
            .map(|target| {
                let mut next = tiles.clone();
                next.swap(blank, target);
                (next, 1.0)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_and_heuristics() {
        let puzzle = SlidingPuzzle::new(3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert!(puzzle.is_goal(puzzle.start()));
        assert_eq!(puzzle.manhattan(puzzle.start()), 0.0);

        let tiles: Tiles = [1, 2, 3, 4, 5, 6, 0, 7, 8].into_iter().collect();
        assert_eq!(puzzle.manhattan(&tiles), 2.0);
        assert_eq!(puzzle.misplaced_plus_manhattan(&tiles), 4.0);
    }

    #[test]
    fn test_corner_blank_has_two_moves() {
        let puzzle = SlidingPuzzle::new(3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(puzzle.successors(puzzle.start()).len(), 2);
    }

    #[test]
    fn test_solvability() {
        assert!(SlidingPuzzle::new(3, &[1, 2, 3, 4, 5, 6, 0, 7, 8]).is_solvable());
        assert!(!SlidingPuzzle::new(3, &[2, 1, 3, 4, 5, 6, 7, 8, 0]).is_solvable());
        assert!(SlidingPuzzle::new(2, &[1, 2, 3, 0]).is_solvable());
        assert!(!SlidingPuzzle::new(2, &[2, 1, 3, 0]).is_solvable());
    }

    #[test]
    fn test_scrambled_is_solvable() {
        let mut rng = SearchRng::new(7);
        let puzzle = SlidingPuzzle::scrambled(3, 30, &mut rng);
        assert!(puzzle.is_solvable());
    }

    #[test]
    fn test_single_cell_scramble_stays_solved() {
        let mut rng = SearchRng::new(1);
        let puzzle = SlidingPuzzle::scrambled(1, 10, &mut rng);
        assert_eq!(puzzle.start().as_slice(), &[0]);
        assert!(puzzle.is_goal(puzzle.start()));
    }

    #[test]
    #[should_panic(expected = "1..=16")]
    fn test_scramble_rejects_oversized_board() {
        let mut rng = SearchRng::new(1);
        SlidingPuzzle::scrambled(17, 1, &mut rng);
    }

    #[test]
    #[should_panic(expected = "permutation")]
    fn test_rejects_bad_tiles() {
        SlidingPuzzle::new(2, &[1, 1, 2, 0]);
    }
}
