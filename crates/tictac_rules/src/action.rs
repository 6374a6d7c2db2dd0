//! Move requests and the ways they can be refused.

use super::{Marker, Position};
use tracing::instrument;

/// A player's claim to place their marker at a position.
///
/// Moves are transient: they are validated against the current state and
/// either applied or discarded, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The marker the submitting player claims to be.
    pub player: Marker,
    /// Target position.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument(level = "trace")]
    pub fn new(player: Marker, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index does not name a square.
    #[display("Index {} is outside the board", _0)]
    OutOfBounds(#[error(not(source))] i64),

    /// The square is already taken.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The claimed marker is not the one to move.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Marker),
}
