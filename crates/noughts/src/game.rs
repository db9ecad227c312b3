//! One round of play.

use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Errors that can occur when playing a position.
///
/// Callers that want the board-game convention of silently ignoring
/// illegal input can discard the error; state is guaranteed
/// unchanged either way.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error,
)]
pub enum MoveError {
    /// The square is already occupied.
    #[display("square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),
    /// The round has already ended.
    #[display("the round is already over")]
    RoundOver,
}

/// State of a single round: board, turn, outcome, history.
///
/// `Game` only moves forward: once an outcome is stored, every
/// further [`Game::play`] is rejected until the owner replaces the
/// round. Score accrual across rounds lives in
/// [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: Option<Outcome>,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new round: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Plays the current player's mark at the given position.
    ///
    /// On success the mark is placed, the turn flips, and the board
    /// is re-evaluated for a terminal outcome.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::RoundOver`] if an outcome already exists
    /// and [`MoveError::SquareOccupied`] if the square is taken. A
    /// rejected play leaves board, turn, outcome and history
    /// untouched.
    #[instrument(skip(self), fields(position = %pos, player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::RoundOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        self.to_move = self.to_move.opponent();
        self.outcome = rules::evaluate(&self.board);

        debug!(board = %self.board, outcome = ?self.outcome, "move accepted");
        Ok(())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the terminal outcome, if the round has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns true once the round has a terminal outcome.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns the move history, in play order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
