//! Error taxonomy for board placement and turns.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Error that can occur when placing a mark or playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum GameError {
    /// Row or column outside `0..=2`. Indicates a caller bug, not a user action.
    #[display("Coordinate ({row}, {col}) is outside the 3x3 board")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },

    /// The game reached a win or a draw.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl GameError {
    /// Returns true if the error is an expected no-op the player can recover from.
    ///
    /// `InvalidCoordinate` is the only contract violation; the front end
    /// should never produce it from real input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::CellOccupied { .. } | GameError::GameAlreadyOver
        )
    }
}

/// Error raised when a deserialized [`Game`](crate::Game) is not a state
/// real play could reach.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SnapshotError {
    /// Replaying the recorded history hit a move the engine rejects.
    #[display("Move {index} of the recorded history is illegal: {source}")]
    IllegalMove {
        /// Zero-based position in the history.
        index: usize,
        /// Why the engine rejected the move.
        source: GameError,
    },

    /// The recorded state differs from what its history produces.
    #[display("Recorded {field} does not match the move history")]
    StateMismatch {
        /// Which part of the state disagrees.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_kinds() {
        assert!(GameError::CellOccupied { row: 0, col: 0 }.is_recoverable());
        assert!(GameError::GameAlreadyOver.is_recoverable());
        assert!(!GameError::InvalidCoordinate { row: 3, col: 0 }.is_recoverable());
    }

    #[test]
    fn test_display_mentions_coordinates() {
        let err = GameError::InvalidCoordinate { row: 5, col: 1 };
        assert_eq!(err.to_string(), "Coordinate (5, 1) is outside the 3x3 board");
    }

    #[test]
    fn test_snapshot_error_display() {
        let err = SnapshotError::IllegalMove {
            index: 5,
            source: GameError::GameAlreadyOver,
        };
        assert_eq!(
            err.to_string(),
            "Move 5 of the recorded history is illegal: Game is already over"
        );
        let err = SnapshotError::StateMismatch { field: "status" };
        assert_eq!(
            err.to_string(),
            "Recorded status does not match the move history"
        );
    }
}
