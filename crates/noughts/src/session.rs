//! Session management: rounds plus the running score.

use super::game::{Game, MoveError};
use super::position::Position;
use super::score::Scoreboard;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A play session: the current round and the scoreboard.
///
/// The scoreboard outlives individual rounds; [`Session::reset_game`]
/// starts a fresh round without touching it. The scoreboard is only
/// written here, when a round reaches its outcome, so every finished
/// round is counted exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Session {
    /// The round currently being played.
    game: Game,
    /// Win and draw counters across rounds.
    scoreboard: Scoreboard,
}

impl Session {
    /// Creates a new session: fresh round, zeroed scoreboard.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            scoreboard: Scoreboard::new(),
        }
    }

    /// Plays the current player's mark at the given position.
    ///
    /// If the move ends the round, the matching scoreboard counter
    /// is incremented. A rejected move changes nothing; the UI
    /// treats the error as a silent no-op.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from [`Game::play`].
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        self.game.play(pos)?;

        if let Some(outcome) = self.game.outcome() {
            self.scoreboard.record(outcome);
            info!(%outcome, scoreboard = ?self.scoreboard, "round finished");
        }

        Ok(())
    }

    /// Starts a new round. The scoreboard is kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        debug!("starting new round");
        self.game = Game::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
