//! Non-interactive play from a list of `row,col` moves.

use crate::status::status_line;
use derive_more::{Display, Error};
use tictactoe_core::{Coordinate, Game, GameError};
use tracing::{info, instrument, warn};

/// Error parsing move text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveParseError {
    /// Text is not two comma-separated parts.
    #[display("Move '{text}' must look like ROW,COL")]
    Malformed {
        /// The offending text.
        text: String,
    },

    /// A part is not a non-negative integer.
    #[display("Move '{text}' has a part that is not a number")]
    NotANumber {
        /// The offending text.
        text: String,
    },

    /// Numbers parse but point off the board.
    #[display("Move '{text}' is off the board: {source}")]
    OffBoard {
        /// The offending text.
        text: String,
        /// Underlying coordinate error.
        source: GameError,
    },
}

/// Parses `row,col` (zero-based, whitespace tolerated) into a coordinate.
pub fn parse_move(text: &str) -> Result<Coordinate, MoveParseError> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| MoveParseError::Malformed {
            text: text.to_string(),
        })?;

    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| MoveParseError::NotANumber {
                text: text.to_string(),
            })
    };
    let (row, col) = (parse(row)?, parse(col)?);

    Coordinate::new(row, col).map_err(|source| MoveParseError::OffBoard {
        text: text.to_string(),
        source,
    })
}

/// What happened during a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Final board as text.
    pub board: String,
    /// Final status line.
    pub status: String,
    /// Moves the engine refused, with the reason.
    pub skipped: Vec<(Coordinate, GameError)>,
}

impl std::fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (coord, err) in &self.skipped {
            writeln!(f, "skipped {}: {}", coord, err)?;
        }
        writeln!(f, "{}", self.board)?;
        write!(f, "{}", self.status)
    }
}

/// Plays every move in order on `game`.
///
/// All text is parsed before the first move is played, so malformed input
/// leaves the game untouched. Moves the engine rejects (occupied cell, game
/// already over) are skipped and reported.
#[instrument(skip(game, moves), fields(count = moves.len()))]
pub fn replay<S: AsRef<str>>(
    game: &mut Game,
    moves: &[S],
) -> Result<ReplaySummary, MoveParseError> {
    let coords = moves
        .iter()
        .map(|text| parse_move(text.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut skipped = Vec::new();
    for coord in coords {
        match game.play_at(coord) {
            Ok(status) => info!(%coord, ?status, "Move played"),
            Err(e) => {
                warn!(%coord, error = %e, "Move skipped");
                skipped.push((coord, e));
            }
        }
    }

    Ok(ReplaySummary {
        board: game.board().render_text(),
        status: status_line(game),
        skipped,
    })
}
