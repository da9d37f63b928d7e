//! Latin square completion: fill an `n x n` grid with `1..=n` so that no
//! value repeats in a row or column.

use crate::csp::ConstraintProblem;

/// Grid cell as `(row, col)`.
pub type Cell = (usize, usize);

/// A partially filled Latin square.
#[derive(Clone, Debug)]
pub struct LatinSquare {
    size: usize,
    givens: Vec<Option<u8>>,
}

impl LatinSquare {
    /// Create a puzzle of side `size` with `(row, col, value)` clues.
    ///
    /// # Panics
    ///
    /// If a clue lies outside the grid or its value outside `1..=size`.
    pub fn new(size: usize, givens: &[(usize, usize, u8)]) -> Self {
        let mut cells = vec![None; size * size];
        for &(row, col, value) in givens {
            assert!(row < size && col < size, "Clue ({row}, {col}) is outside the grid");
            assert!(
                (1..=size).contains(&usize::from(value)),
                "Clue value {value} is outside 1..={size}"
            );
            cells[row * size + col] = Some(value);
        }
        Self { size, givens: cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Clue at `cell`, if any.
    pub fn given(&self, (row, col): Cell) -> Option<u8> {
        self.givens.get(row * self.size + col).copied().flatten()
    }
}

impl ConstraintProblem for LatinSquare {
    type Var = Cell;
    type Value = u8;

    fn variables(&self) -> Vec<Cell> {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .collect()
    }

    fn domain(&self, &cell: &Cell) -> Vec<u8> {
        match self.given(cell) {
            Some(value) => vec![value],
            None => (1..=self.size).map(|v| v as u8).collect(),
        }
    }

    fn neighbours(&self, &(row, col): &Cell) -> Vec<Cell> {
        let same_row = (0..self.size).filter(move |&c| c != col).map(move |c| (row, c));
        let same_col = (0..self.size).filter(move |&r| r != row).map(move |r| (r, col));
        same_row.chain(same_col).collect()
    }

    fn consistent(&self, _: &Cell, value: &u8, _: &Cell, other_value: &u8) -> bool {
        value != other_value
    }
}
