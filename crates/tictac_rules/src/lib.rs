//! Tic-tac-toe rules for a single shared board.
//!
//! This crate holds everything about the game that does not depend on how
//! players are connected: markers, the board, the fixed win-line table,
//! outcome evaluation and the invariants a well-formed game never breaks.
//!
//! # Example
//!
//! ```
//! use tictac_rules::{GameState, Marker, Move, Outcome, Position};
//!
//! let mut game = GameState::new();
//! for (player, position) in [
//!     (Marker::X, Position::TopLeft),
//!     (Marker::O, Position::MiddleLeft),
//!     (Marker::X, Position::TopCenter),
//!     (Marker::O, Position::Center),
//!     (Marker::X, Position::TopRight),
//! ] {
//!     game.place(Move::new(player, position)).unwrap();
//! }
//!
//! let outcome = game.outcome().unwrap();
//! assert_eq!(outcome.winner(), Some(Marker::X));
//! assert_eq!(outcome.winning_cells(), vec![0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{LINES, WinLine, find_winning_line, is_draw, is_full};
pub use state::GameState;
pub use types::{Board, Marker, Square};
