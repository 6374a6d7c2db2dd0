//! The board together with the turn pointer.

use super::rules::{find_winning_line, is_full};
use super::{Board, Marker, Move, MoveError, Outcome, Square};
use tracing::{instrument, trace};

/// Complete state of one game: the board and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    next_player: Marker,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_player: Marker::X,
        }
    }

    /// Builds a state from parts without checking consistency.
    ///
    /// Meant for restoring or staging positions; pair it with
    /// [`GameInvariants`](crate::GameInvariants) when the input is untrusted.
    pub fn from_parts(board: Board, next_player: Marker) -> Self {
        Self { board, next_player }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the marker allowed to move next.
    pub fn next_player(&self) -> Marker {
        self.next_player
    }

    /// Checks a move against the current state without applying it.
    pub fn validate(&self, mv: &Move) -> Result<(), MoveError> {
        if mv.player != self.next_player {
            return Err(MoveError::WrongPlayer(mv.player));
        }
        if !self.board.is_empty(mv.position) {
            return Err(MoveError::SquareOccupied(mv.position));
        }
        Ok(())
    }

    /// Validates and applies a move, then hands the turn to the opponent.
    ///
    /// On error nothing changes.
    #[instrument(skip(self), fields(board = %self.board.display()))]
    pub fn place(&mut self, mv: Move) -> Result<(), MoveError> {
        self.validate(&mv)?;
        self.board.set(mv.position, Square::Occupied(mv.player));
        self.next_player = mv.player.opponent();
        trace!(%mv, next = %self.next_player, "Move placed");
        Ok(())
    }

    /// Evaluates the board: a completed line first, then a full board.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some((marker, line)) = find_winning_line(&self.board) {
            Some(Outcome::Winner { marker, line })
        } else if is_full(&self.board) {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Clears the board and gives the first move back to X.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_place_flips_turn() {
        let mut game = GameState::new();
        game.place(Move::new(Marker::X, Position::Center)).unwrap();
        assert_eq!(game.next_player(), Marker::O);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Marker::X));
    }

    #[test]
    fn test_wrong_player_leaves_state_untouched() {
        let mut game = GameState::new();
        let before = game.clone();
        let err = game.place(Move::new(Marker::O, Position::Center)).unwrap_err();
        assert_eq!(err, MoveError::WrongPlayer(Marker::O));
        assert_eq!(game, before);
    }

    #[test]
    fn test_occupied_square_rejected_for_correct_player() {
        let mut game = GameState::new();
        game.place(Move::new(Marker::X, Position::Center)).unwrap();
        let before = game.clone();
        let err = game.place(Move::new(Marker::O, Position::Center)).unwrap_err();
        assert_eq!(err, MoveError::SquareOccupied(Position::Center));
        assert_eq!(game, before);
    }

    #[test]
    fn test_reset_restores_fresh_game() {
        let mut game = GameState::new();
        game.place(Move::new(Marker::X, Position::TopLeft)).unwrap();
        game.reset();
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_no_outcome_mid_game() {
        let mut game = GameState::new();
        game.place(Move::new(Marker::X, Position::TopLeft)).unwrap();
        assert_eq!(game.outcome(), None);
    }
}
