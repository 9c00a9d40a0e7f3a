//! Application state and logic.

use crate::config::{AppConfig, DisplayConfig};
use crate::status::status_line;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_core::{Coordinate, Game, GameError, Mark};
use tracing::{debug, info, instrument, warn};

use super::input::{digit_cell, move_cursor};
use super::ui::BoardLayout;

/// Main application state.
///
/// Holds the only [`Game`] of the session. Every key press or click is
/// turned into a `play_turn`, `reset` or cursor move on it.
pub struct App {
    game: Game,
    display: DisplayConfig,
    cursor: Coordinate,
    notice: Option<String>,
    layout: Option<BoardLayout>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game: Game::new(config.players().one(), config.players().two()),
            display: config.display().clone(),
            cursor: Self::home(),
            notice: None,
            layout: None,
            should_quit: false,
        }
    }

    fn home() -> Coordinate {
        Coordinate::ALL[4]
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Glyph drawn for a mark.
    pub fn glyph(&self, mark: Mark) -> &str {
        self.display.glyph(mark)
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        let line = status_line(&self.game);
        if self.game.is_over() {
            format!("{} Press 'r' to restart or 'q' to quit.", line)
        } else {
            line
        }
    }

    /// Remembers where the board was drawn for mouse hit-testing.
    pub fn set_board_layout(&mut self, layout: BoardLayout) {
        self.layout = Some(layout);
    }

    /// Plays the active player's mark at `coord`.
    #[instrument(skip_all, fields(coord = %coord))]
    pub fn play(&mut self, coord: Coordinate) {
        self.cursor = coord;
        match self.game.play_at(coord) {
            Ok(status) => {
                debug!(?status, "Move applied");
                self.notice = None;
            }
            Err(GameError::CellOccupied { .. }) => {
                self.notice = Some(format!(
                    "{} is taken. {}, choose another cell.",
                    coord.label(),
                    self.game.active_player().name()
                ));
            }
            Err(GameError::GameAlreadyOver) => {
                self.notice = Some(format!(
                    "{} Press 'r' to play again.",
                    status_line(&self.game)
                ));
            }
            Err(e @ GameError::InvalidCoordinate { .. }) => {
                warn!(error = %e, "Front end produced an off-board move");
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(coord) = digit_cell(c) {
                    self.play(coord);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    /// Handles a mouse event; a left click on a cell plays it.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let hit = self
            .layout
            .and_then(|layout| layout.cell_at(event.column, event.row));
        match hit {
            Some(coord) => self.play(coord),
            None => debug!(
                column = event.column,
                row = event.row,
                "Click outside the board"
            ),
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Self::home();
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;
    use tictactoe_core::{Cell, GameStatus, Seat};

    fn app() -> App {
        let config = AppConfig::default()
            .with_player_names(Some("Ada".to_string()), Some("Grace".to_string()))
            .unwrap();
        App::new(&config)
    }

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_initial_status() {
        let app = app();
        assert_eq!(app.status_message(), "Ada's turn (X)");
        assert_eq!(app.cursor(), at(1, 1));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_digit_keys_play() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.game().board().get(at(0, 0)), Cell::Marked(Mark::X));
        assert_eq!(app.status_message(), "Grace's turn (O)");
    }

    #[test]
    fn test_occupied_cell_shows_notice() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().active_seat(), Seat::Two);
        assert_eq!(
            app.status_message(),
            "Center is taken. Grace, choose another cell."
        );

        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.status_message(), "Ada's turn (X)");
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().board().get(at(0, 0)), Cell::Marked(Mark::X));
    }

    #[test]
    fn test_click_plays_cell_under_pointer() {
        let mut app = app();
        let layout = BoardLayout::new(Rect::new(0, 3, 80, 18));
        app.set_board_layout(layout);

        let rect = layout.cell_rect(at(2, 1));
        app.handle_mouse(click(rect.x + 1, rect.y + 1));
        assert_eq!(app.game().board().get(at(2, 1)), Cell::Marked(Mark::X));

        // Outside the board: nothing happens.
        app.handle_mouse(click(0, 0));
        assert_eq!(app.game().history().len(), 1);
    }

    #[test]
    fn test_click_before_first_draw_is_ignored() {
        let mut app = app();
        app.handle_mouse(click(10, 10));
        assert!(app.game().history().is_empty());
    }

    #[test]
    fn test_win_then_restart() {
        let mut app = app();
        for c in ['1', '5', '2', '9', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        assert_eq!(app.game().status(), GameStatus::Won(Mark::X));
        assert_eq!(
            app.status_message(),
            "Ada wins! Press 'r' to restart or 'q' to quit."
        );

        app.handle_key(KeyCode::Char('7'));
        assert_eq!(app.status_message(), "Ada wins! Press 'r' to play again.");

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game().status(), GameStatus::InProgress);
        assert!(app.game().history().is_empty());
        assert_eq!(app.status_message(), "Ada's turn (X)");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
