//! The 3x3 grid of cells.

use crate::coordinate::{Coordinate, SIZE};
use crate::error::GameError;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board, row-major, row 0 at the top.
///
/// The only mutation is [`Board::place`], which writes a mark into an empty
/// cell. Marked cells never change again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// Returns `Ok(true)` when the mark was written and `Ok(false)` when the
    /// cell was already occupied, in which case the board is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCoordinate`] if the coordinate is off the board.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<bool, GameError> {
        let coord = Coordinate::new(row, col)?;
        Ok(self.place_at(coord, mark))
    }

    /// Places `mark` at an already validated coordinate.
    pub fn place_at(&mut self, coord: Coordinate, mark: Mark) -> bool {
        let cell = &mut self.cells[coord.row()][coord.col()];
        if !cell.is_empty() {
            debug!(%coord, existing = ?cell, "Cell already occupied");
            return false;
        }
        *cell = Cell::Marked(mark);
        true
    }

    /// Read-only view of every cell.
    pub fn grid(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Gets the cell at a coordinate.
    pub fn get(&self, coord: Coordinate) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Checks if the cell at a coordinate is empty.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.get(coord).is_empty()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        Coordinate::ALL.into_iter().map(|coord| (coord, self.get(coord)))
    }

    /// Number of cells still empty.
    pub fn empty_count(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_empty()).count()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Formats the board as text, numbering empty cells 1-9.
    pub fn render_text(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => result.push_str(&(row * SIZE + col + 1).to_string()),
                    Cell::Marked(mark) => result.push_str(&mark.to_string()),
                }
                if col < SIZE - 1 {
                    result.push('|');
                }
            }
            if row < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_text())
    }
}
