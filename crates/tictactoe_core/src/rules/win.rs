//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::types::{Cell, Mark};
use tracing::instrument;

/// Three coordinates that win when they share a mark.
pub type Line = [Coordinate; 3];

/// The 8 lines in check order: rows top to bottom, columns left to right,
/// then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Coordinate::at(0, 0), Coordinate::at(0, 1), Coordinate::at(0, 2)],
    [Coordinate::at(1, 0), Coordinate::at(1, 1), Coordinate::at(1, 2)],
    [Coordinate::at(2, 0), Coordinate::at(2, 1), Coordinate::at(2, 2)],
    // Columns
    [Coordinate::at(0, 0), Coordinate::at(1, 0), Coordinate::at(2, 0)],
    [Coordinate::at(0, 1), Coordinate::at(1, 1), Coordinate::at(2, 1)],
    [Coordinate::at(0, 2), Coordinate::at(1, 2), Coordinate::at(2, 2)],
    // Diagonals
    [Coordinate::at(0, 0), Coordinate::at(1, 1), Coordinate::at(2, 2)],
    [Coordinate::at(0, 2), Coordinate::at(1, 1), Coordinate::at(2, 0)],
];

/// Returns the first completed line and its mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.into_iter().find_map(|line @ [a, b, c]| match board.get(a) {
        Cell::Marked(mark)
            if board.get(b) == Cell::Marked(mark) && board.get(c) == Cell::Marked(mark) =>
        {
            Some((mark, line))
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark holds three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(row, col, mark) in marks {
            board.place(row, col, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)]);
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[(0, 1, Mark::O), (1, 1, Mark::O), (2, 1, Mark::O)]);
        assert_eq!(winning_line(&board), Some((Mark::O, LINES[4])));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[(0, 0, Mark::O), (1, 1, Mark::O), (2, 2, Mark::O)]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(0, 2, Mark::X), (1, 1, Mark::X), (2, 0, Mark::X)]);
        assert_eq!(winning_line(&board), Some((Mark::X, LINES[7])));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, 0, Mark::X), (0, 1, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[(0, 0, Mark::X), (0, 1, Mark::O), (0, 2, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_checked_before_columns() {
        // Top row and left column both complete; the row comes first.
        let board = board_with(&[
            (0, 0, Mark::X),
            (0, 1, Mark::X),
            (0, 2, Mark::X),
            (1, 0, Mark::X),
            (2, 0, Mark::X),
        ]);
        assert_eq!(winning_line(&board), Some((Mark::X, LINES[0])));
    }
}
