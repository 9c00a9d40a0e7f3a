//! Pure tic-tac-toe game logic.
//!
//! The crate has no I/O. A front end holds a [`Game`], reads its board,
//! active player and status, and drives it with [`Game::play_turn`] and
//! [`Game::reset`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameError, GameStatus, Mark};
//!
//! let mut game = Game::new("Ada", "Grace");
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     game.play_turn(row, col)?;
//! }
//! assert_eq!(game.play_turn(0, 2)?, GameStatus::Won(Mark::X));
//! assert_eq!(game.play_turn(2, 0), Err(GameError::GameAlreadyOver));
//! # Ok::<(), GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coordinate;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use board::Board;
pub use coordinate::{Coordinate, SIZE};
pub use error::{GameError, SnapshotError};
pub use game::{Game, GameStatus};
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use types::{Cell, Mark, Player, Seat};
