//! Pure noughts-and-crosses game logic.
//!
//! This crate holds everything a frontend needs to run a
//! pass-the-device tic-tac-toe session, with no rendering
//! dependencies of its own:
//!
//! - **Rules**: win and draw evaluation over a board snapshot
//! - **Game**: one round of play (board, turn, outcome, history)
//! - **Session**: a sequence of rounds with a running scoreboard
//! - **View**: display values derived from state (status line,
//!   winning cells, disabled cells)
//!
//! # Example
//!
//! ```
//! use noughts::{Position, Session};
//!
//! let mut session = Session::new();
//! session.play(Position::Center)?;
//! session.play(Position::TopLeft)?;
//! assert!(session.game().outcome().is_none());
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod outcome;
mod position;
pub mod rules;
mod score;
mod session;
mod types;
pub mod view;

pub use game::{Game, MoveError};
pub use outcome::Outcome;
pub use position::Position;
pub use score::Scoreboard;
pub use session::Session;
pub use types::{Board, Player, Square};
