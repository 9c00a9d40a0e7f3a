//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The engine asserts them in debug builds and they can be tested
//! independently.

use crate::game::{Game, GameStatus};
use crate::types::{Cell, Seat};
use std::collections::HashSet;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// Every played coordinate is marked exactly once and nothing else is.
#[derive(Debug, Clone, Copy)]
pub struct HistoryMatchesBoard;

impl Invariant<Game> for HistoryMatchesBoard {
    fn holds(game: &Game) -> bool {
        let unique: HashSet<_> = game.history.iter().collect();
        let marked = game.board.cells().filter(|(_, cell)| !cell.is_empty()).count();

        unique.len() == game.history.len()
            && marked == game.history.len()
            && game.history.iter().all(|&coord| !game.board.is_empty(coord))
    }

    fn description() -> &'static str {
        "Marked cells match the move history one to one"
    }
}

/// Moves alternate marks, player one first.
#[derive(Debug, Clone, Copy)]
pub struct AlternatingMarks;

impl Invariant<Game> for AlternatingMarks {
    fn holds(game: &Game) -> bool {
        game.history.iter().enumerate().all(|(i, &coord)| {
            let seat = if i % 2 == 0 { Seat::One } else { Seat::Two };
            game.board.get(coord) == Cell::Marked(game.player(seat).mark())
        })
    }

    fn description() -> &'static str {
        "Marks alternate between players starting with player one"
    }
}

/// While in progress, player one is active exactly when an even number of
/// moves has been played.
#[derive(Debug, Clone, Copy)]
pub struct ActiveSeatConsistent;

impl Invariant<Game> for ActiveSeatConsistent {
    fn holds(game: &Game) -> bool {
        match game.status {
            GameStatus::InProgress => {
                let expected = if game.history.len() % 2 == 0 {
                    Seat::One
                } else {
                    Seat::Two
                };
                game.active == expected
            }
            // The player who moved last stays active.
            GameStatus::Won(_) | GameStatus::Draw => {
                let expected = if game.history.len() % 2 == 1 {
                    Seat::One
                } else {
                    Seat::Two
                };
                game.active == expected
            }
        }
    }

    fn description() -> &'static str {
        "Active player follows the number of moves played"
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type GameInvariants = (HistoryMatchesBoard, AlternatingMarks, ActiveSeatConsistent);
