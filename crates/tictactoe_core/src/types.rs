//! Core domain types: marks, cells, players and seats.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Token a player leaves on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// Player one's mark.
    #[display("X")]
    X,
    /// Player two's mark.
    #[display("O")]
    O,
}

/// A single square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No token yet.
    #[default]
    Empty,
    /// Holds a player's mark. Never reverts to `Empty`.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// One of the two fixed places at the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Seat {
    /// Moves first, plays `X`.
    #[display("Player one")]
    One,
    /// Moves second, plays `O`.
    #[display("Player two")]
    Two,
}

impl Seat {
    /// The other seat. Turn order is this flip and nothing more.
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// The mark owned by whoever sits here.
    pub fn mark(self) -> Mark {
        match self {
            Seat::One => Mark::X,
            Seat::Two => Mark::O,
        }
    }

    /// The seat that owns `mark`.
    pub fn of(mark: Mark) -> Self {
        match mark {
            Mark::X => Seat::One,
            Mark::O => Seat::Two,
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// A named player. Immutable for the duration of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Mark placed by this player.
    mark: Mark,
}

impl Player {
    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
