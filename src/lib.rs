//! Tic-tac-toe in the terminal.
//!
//! The game logic lives in [`tictactoe_core`]; this crate is the shell
//! around it.
//!
//! # Architecture
//!
//! - **Config**: TOML file for player names, glyphs and logging
//! - **TUI**: ratatui board bound to mouse clicks and keys
//! - **Replay**: non-interactive play from `row,col` moves
//!
//! # Example
//!
//! ```
//! use tictactoe::{AppConfig, replay};
//! use tictactoe_core::Game;
//!
//! let config = AppConfig::default();
//! let mut game = Game::new(config.players().one(), config.players().two());
//! let summary = replay(&mut game, &["0,0", "1,1", "0,1", "2,2", "0,2"])?;
//! assert_eq!(summary.status, "Player 1 wins!");
//! # Ok::<(), tictactoe::MoveParseError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod replay;
mod status;
pub mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DisplayConfig, LoggingConfig, PlayersConfig};

// Crate-level exports - Replay
pub use replay::{MoveParseError, ReplaySummary, parse_move, replay};

// Crate-level exports - Status text
pub use status::status_line;
