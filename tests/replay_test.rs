//! Tests for non-interactive replay.

use tictactoe::{AppConfig, MoveParseError, replay, status_line};
use tictactoe_core::{Coordinate, Game, GameError, GameStatus, Mark};

fn game() -> Game {
    Game::new("Ada", "Grace")
}

#[test]
fn test_replay_to_a_win() {
    let mut game = game();
    let summary = replay(&mut game, &["0,0", "1,1", "0,1", "2,2", "0,2"]).unwrap();

    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(summary.status, "Ada wins!");
    assert_eq!(summary.board, "X|X|X\n-+-+-\n4|O|6\n-+-+-\n7|8|O");
    assert!(summary.skipped.is_empty());
}

#[test]
fn test_replay_to_a_draw() {
    let mut game = game();
    let moves = ["0,0", "1,1", "0,2", "0,1", "2,1", "2,0", "1,0", "1,2", "2,2"];
    let summary = replay(&mut game, &moves).unwrap();

    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(summary.status, "It's a draw!");
    assert_eq!(
        summary.to_string(),
        "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X\nIt's a draw!"
    );
}

#[test]
fn test_rejected_moves_are_skipped() {
    let mut game = game();
    let summary = replay(
        &mut game,
        &["1,1", "1,1", "0,0", "0,1", "1,0", "0,2", "1,2", "2,2"],
    )
    .unwrap();

    // The second 1,1 is O's attempt; O then plays 0,0 instead.
    let occupied = (
        Coordinate::new(1, 1).unwrap(),
        GameError::CellOccupied { row: 1, col: 1 },
    );
    assert_eq!(summary.skipped.first(), Some(&occupied));
    assert_eq!(game.history().len(), 7);
    assert!(
        summary
            .to_string()
            .starts_with("skipped Center (1, 1): Cell (1, 1) is already occupied\n")
    );
}

#[test]
fn test_moves_after_the_end_are_skipped() {
    let mut game = game();
    let moves = ["0,0", "1,1", "0,1", "2,2", "0,2", "2,0"];
    let summary = replay(&mut game, &moves).unwrap();

    assert_eq!(
        summary.skipped,
        vec![(Coordinate::new(2, 0).unwrap(), GameError::GameAlreadyOver)]
    );
    assert_eq!(status_line(&game), "Ada wins!");
}

#[test]
fn test_malformed_move_leaves_game_untouched() {
    let mut game = game();
    let err = replay(&mut game, &["0,0", "oops", "1,1"]).unwrap_err();

    assert_eq!(
        err,
        MoveParseError::Malformed {
            text: "oops".to_string()
        }
    );
    assert!(game.history().is_empty());
}

#[test]
fn test_off_board_move_is_a_parse_error() {
    let mut game = game();
    let err = replay(&mut game, &["4,4"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Move '4,4' is off the board: Coordinate (4, 4) is outside the 3x3 board"
    );
}

#[test]
fn test_config_names_flow_into_status() {
    let toml = "[players]\none = \"Ada\"\ntwo = \"Grace\"";
    let config = AppConfig::from_toml(toml).unwrap();
    let mut game = Game::new(config.players().one(), config.players().two());
    replay(&mut game, &["1,1"]).unwrap();
    assert_eq!(status_line(&game), "Grace's turn (O)");
}
