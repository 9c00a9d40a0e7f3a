//! Keyboard mapping onto board cells.

use crossterm::event::KeyCode;
use tictactoe_core::{Coordinate, SIZE};

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Coordinate, key: KeyCode) -> Coordinate {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(SIZE - 1)),
        _ => return cursor,
    };
    Coordinate::new(row, col).unwrap_or(cursor)
}

/// Maps `1`-`9` to cells in reading order.
pub fn digit_cell(c: char) -> Option<Coordinate> {
    match c.to_digit(10)? {
        0 => None,
        d => Coordinate::from_index(d as usize - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_move_within_board() {
        assert_eq!(move_cursor(at(1, 1), KeyCode::Up), at(0, 1));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Down), at(2, 1));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Left), at(1, 0));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Right), at(1, 2));
    }

    #[test]
    fn test_move_stops_at_edges() {
        assert_eq!(move_cursor(at(0, 0), KeyCode::Up), at(0, 0));
        assert_eq!(move_cursor(at(0, 0), KeyCode::Left), at(0, 0));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Down), at(2, 2));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Right), at(2, 2));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(at(1, 2), KeyCode::Enter), at(1, 2));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_cell('1'), Some(at(0, 0)));
        assert_eq!(digit_cell('5'), Some(at(1, 1)));
        assert_eq!(digit_cell('9'), Some(at(2, 2)));
        assert_eq!(digit_cell('0'), None);
        assert_eq!(digit_cell('x'), None);
    }
}
