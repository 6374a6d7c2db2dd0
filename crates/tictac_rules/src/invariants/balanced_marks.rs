//! Balanced marks invariant: X never falls behind O, nor gets two ahead.

use super::Invariant;
use crate::{GameState, Marker};

/// Invariant: marker counts agree with the turn pointer.
///
/// X moves first and turns strictly alternate, so with X to move both
/// markers appear equally often, and with O to move X leads by one.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Marker::X);
        let o = state.board().count(Marker::O);
        match state.next_player() {
            Marker::X => x == o,
            Marker::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Marker counts must match the turn pointer (X first, strict alternation)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Move, Position, Square};

    #[test]
    fn test_holds_through_alternating_moves() {
        let mut game = GameState::new();
        for (i, pos) in [Position::Center, Position::TopLeft, Position::BottomRight]
            .into_iter()
            .enumerate()
        {
            let player = if i % 2 == 0 { Marker::X } else { Marker::O };
            game.place(Move::new(player, pos)).unwrap();
            assert!(BalancedMarksInvariant::holds(&game));
        }
    }

    #[test]
    fn test_detects_extra_marker() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Marker::X));
        board.set(Position::TopLeft, Square::Occupied(Marker::X));
        let state = GameState::from_parts(board, Marker::O);
        assert!(!BalancedMarksInvariant::holds(&state));
    }

    #[test]
    fn test_detects_stale_turn_pointer() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Marker::X));
        let state = GameState::from_parts(board, Marker::X);
        assert!(!BalancedMarksInvariant::holds(&state));
    }
}
