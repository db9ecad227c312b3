//! Running score across rounds.

use super::outcome::Outcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Win and draw counters for a session.
///
/// Counters never decrease; each finished round increments exactly
/// one of them. Only [`Session`](crate::Session) records results,
/// so the counters cannot drift from the rounds actually played.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize,
)]
pub struct Scoreboard {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
    /// Drawn rounds.
    draws: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished round.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        use super::types::Player;

        match outcome {
            Outcome::Winner {
                player: Player::X, ..
            } => self.x += 1,
            Outcome::Winner {
                player: Player::O, ..
            } => self.o += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}
