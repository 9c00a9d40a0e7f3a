//! Turn engine: two players, alternation and terminal-state evaluation.

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::error::{GameError, SnapshotError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules;
use crate::types::{Mark, Player, Seat};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win for the mark.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the board and both players. Player one (`X`) always moves first, and
/// the active seat flips after every accepted move that does not end the
/// game. Once the status is `Won` or `Draw` every further turn is rejected
/// until [`Game::reset`].
///
/// A deserialized game is rebuilt by replaying its history, so a snapshot
/// that real play could not produce is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) active: Seat,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Coordinate>,
}

impl Game {
    /// Creates a new game. Player one plays `X` and moves first.
    #[instrument(skip_all)]
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        let one = Player::new(player_one, Seat::One.mark());
        let two = Player::new(player_two, Seat::Two.mark());
        info!(player_one = %one, player_two = %two, "Creating new game");
        Self {
            board: Board::new(),
            players: [one, two],
            active: Seat::One,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Plays the active player's mark at `(row, col)`.
    ///
    /// Returns the status after the move. A winning move leaves the winner
    /// active; any other accepted move hands the turn to the other player.
    ///
    /// # Errors
    ///
    /// Every error leaves the game exactly as it was:
    /// - [`GameError::GameAlreadyOver`] once the game is won or drawn.
    /// - [`GameError::InvalidCoordinate`] if `row` or `col` is off the board.
    /// - [`GameError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(player = %self.active_player()))]
    pub fn play_turn(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            debug!(status = ?self.status, "Turn rejected: game over");
            return Err(GameError::GameAlreadyOver);
        }

        let coord = Coordinate::new(row, col).inspect_err(|e| {
            warn!(error = %e, "Turn rejected: invalid coordinate");
        })?;

        let mark = self.active.mark();
        if !self.board.place_at(coord, mark) {
            debug!(%coord, "Turn rejected: cell occupied");
            return Err(GameError::CellOccupied { row, col });
        }
        self.history.push(coord);

        self.status = if let Some(winner) = rules::check_winner(&self.board) {
            info!(%winner, moves = self.history.len(), "Game won");
            GameStatus::Won(winner)
        } else if rules::is_full(&self.board) {
            info!("Game drawn");
            GameStatus::Draw
        } else {
            self.active = self.active.other();
            debug!(next = %self.active_player(), "Turn passed");
            GameStatus::InProgress
        };

        debug_assert!(
            GameInvariants::check_all(&*self).is_ok(),
            "game invariants violated: {:?}",
            GameInvariants::check_all(&*self)
        );

        Ok(self.status)
    }

    /// Plays at an already validated coordinate.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play_turn`], minus `InvalidCoordinate`.
    pub fn play_at(&mut self, coord: Coordinate) -> Result<GameStatus, GameError> {
        self.play_turn(coord.row(), coord.col())
    }

    /// Starts over: empty board, player one to move, history cleared.
    ///
    /// Player names are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        let [one, two] = self.players.clone();
        *self = Self::new(one.name(), two.name());
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players, player one first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.slot()]
    }

    /// Returns whose move is expected.
    ///
    /// After a win this stays on the winner.
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Returns the player whose move is expected.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(mark) => Some(self.player(Seat::of(mark))),
            _ => None,
        }
    }

    /// Returns the coordinates played so far, in order.
    pub fn history(&self) -> &[Coordinate] {
        &self.history
    }
}

/// Wire form of a [`Game`] before it is checked.
#[derive(Deserialize)]
struct GameSnapshot {
    board: Board,
    players: [Player; 2],
    active: Seat,
    status: GameStatus,
    history: Vec<Coordinate>,
}

impl GameSnapshot {
    /// Replays the history on a fresh game and requires the result to match.
    #[instrument(skip_all, fields(moves = self.history.len()))]
    fn restore(self) -> Result<Game, SnapshotError> {
        let [one, two] = &self.players;
        let mut game = Game::new(one.name(), two.name());
        for (index, &coord) in self.history.iter().enumerate() {
            game.play_at(coord)
                .map_err(|source| SnapshotError::IllegalMove { index, source })?;
        }

        let mismatch = if game.players != self.players {
            Some("players")
        } else if game.board != self.board {
            Some("board")
        } else if game.status != self.status {
            Some("status")
        } else if game.active != self.active {
            Some("active seat")
        } else {
            None
        };
        match mismatch {
            Some(field) => {
                warn!(field, "Snapshot rejected");
                Err(SnapshotError::StateMismatch { field })
            }
            None => Ok(game),
        }
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        GameSnapshot::deserialize(deserializer)?
            .restore()
            .map_err(serde::de::Error::custom)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new("Player 1", "Player 2")
    }
}
