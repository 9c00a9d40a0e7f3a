//! Player-facing text describing where a game stands.

use tictactoe_core::{Game, GameStatus};

/// One-line status: whose turn it is, who won, or a draw.
pub fn status_line(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress => {
            let player = game.active_player();
            format!("{}'s turn ({})", player.name(), player.mark())
        }
        GameStatus::Won(_) => match game.winner() {
            Some(player) => format!("{} wins!", player.name()),
            None => "Game over".to_string(),
        },
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        let mut game = Game::new("Ada", "Grace");
        assert_eq!(status_line(&game), "Ada's turn (X)");

        game.play_turn(1, 1).unwrap();
        assert_eq!(status_line(&game), "Grace's turn (O)");

        for (row, col) in [(0, 0), (0, 1), (2, 2), (2, 1)] {
            game.play_turn(row, col).unwrap();
        }
        assert_eq!(status_line(&game), "Ada wins!");
    }
}
