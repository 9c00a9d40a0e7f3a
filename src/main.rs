//! Tic-tac-toe - command-line entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe::{AppConfig, Cli, Command, tui};
use tictactoe_core::Game;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config =
        AppConfig::load(&cli.config)?.with_player_names(cli.player_one, cli.player_two)?;

    match cli.command {
        Command::Play => tui::run_tui(&config),
        Command::Replay { moves } => run_replay(&config, &moves),
    }
}

/// Plays the given moves and prints the board and result.
#[instrument(skip_all, fields(moves = moves.len()))]
fn run_replay(config: &AppConfig, moves: &[String]) -> Result<()> {
    initialize_stderr_tracing(config);

    let mut game = Game::new(config.players().one(), config.players().two());
    let summary = tictactoe::replay(&mut game, moves)?;
    info!(status = ?game.status(), "Replay finished");

    println!("{}", summary);
    Ok(())
}

fn initialize_stderr_tracing(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging().filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
