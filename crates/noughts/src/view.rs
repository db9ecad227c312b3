//! Display values derived from game state.
//!
//! Everything a frontend shows beyond the raw marks is a pure
//! function of the current state. Computing these here keeps the
//! rendering layer free of game logic and avoids storing values
//! that could fall out of sync.

use super::game::Game;
use super::outcome::Outcome;
use super::position::Position;
use super::types::Player;
use derive_getters::Getters;

/// Semantic color class of the status line.
///
/// The frontend maps tones to its palette; the core only decides
/// which tone applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Colored for player X.
    X,
    /// Colored for player O.
    O,
    /// Colored for a drawn round.
    Draw,
}

impl From<Player> for Tone {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Tone::X,
            Player::O => Tone::O,
        }
    }
}

/// Status line: text plus its tone.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Status {
    /// Status text.
    text: String,
    /// Tone the text should be rendered in.
    tone: Tone,
}

/// Derives the status line for the current state.
pub fn status(game: &Game) -> Status {
    match game.outcome() {
        Some(Outcome::Winner { player, .. }) => Status {
            text: format!("Winner: {player}"),
            tone: player.into(),
        },
        Some(Outcome::Draw) => Status {
            text: "Draw!".to_string(),
            tone: Tone::Draw,
        },
        None => Status {
            text: format!("Player {}'s Turn", game.to_move()),
            tone: game.to_move().into(),
        },
    }
}

/// Whether the cell belongs to the winning line.
pub fn is_winning_cell(game: &Game, pos: Position) -> bool {
    game.outcome()
        .and_then(|outcome| outcome.line())
        .is_some_and(|line| line.contains(&pos))
}

/// Whether the cell accepts no further interaction.
///
/// A cell is disabled once occupied, or once the round is over and
/// it is not part of the winning line. Winning cells stay visually
/// distinct, but the whole board stops accepting moves on any
/// terminal state.
pub fn is_disabled(game: &Game, pos: Position) -> bool {
    !game.board().is_empty(pos) || (game.is_over() && !is_winning_cell(game, pos))
}
