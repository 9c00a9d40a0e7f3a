//! Validated board coordinates.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// A zero-based `(row, col)` pair, both in `0..3`.
///
/// Row 0 is the top row and column 0 the left-most column. Values can only
/// be built through [`Coordinate::new`] or [`Coordinate::from_index`], so a
/// `Coordinate` in hand is always on the board. Deserialization goes through
/// the same check; the serialized form is a `[row, col]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate::at(0, 0),
        Coordinate::at(0, 1),
        Coordinate::at(0, 2),
        Coordinate::at(1, 0),
        Coordinate::at(1, 1),
        Coordinate::at(1, 2),
        Coordinate::at(2, 0),
        Coordinate::at(2, 1),
        Coordinate::at(2, 2),
    ];

    /// Creates a coordinate, rejecting values off the board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCoordinate`] if `row` or `col` is 3 or more.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        Ok(Self::at(row, col))
    }

    /// Unchecked constructor for the constant tables in this crate.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts to a row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Human-readable label such as `Top-left` or `Center`.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = GameError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}
