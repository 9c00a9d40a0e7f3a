//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Name for player one (X), overrides the config file
    #[arg(long, global = true)]
    pub player_one: Option<String>,

    /// Name for player two (O), overrides the config file
    #[arg(long, global = true)]
    pub player_two: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI (mouse or keyboard)
    Play,

    /// Play a fixed list of moves and print the result
    Replay {
        /// Moves as zero-based ROW,COL pairs, e.g. `0,0 1,1 0,1`
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
