//! Terminal UI: renders the board and routes clicks and keys to the game.

mod app;
mod input;
mod ui;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

pub use app::App;
pub use input::{digit_cell, move_cursor};
pub use ui::{BoardLayout, CELL_HEIGHT, CELL_WIDTH};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the user quits.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    // Log to a file so tracing output does not tear the screen
    let log_file = std::fs::File::create(config.logging().file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            config.logging().file().display()
        )
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging().filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draws, waits for one event, applies it. Repeats until quit.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let mut layout = None;
        terminal.draw(|frame| layout = Some(ui::draw(frame, app)))?;
        if let Some(layout) = layout {
            app.set_board_layout(layout);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }
    Ok(())
}
