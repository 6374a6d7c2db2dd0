//! Single winner invariant: both markers can never hold a line at once.

use super::Invariant;
use crate::rules::LINES;
use crate::{GameState, Marker, Square};

/// Invariant: at most one marker owns a completed line.
///
/// The game ends on the move that completes the first line, so a board
/// where X and O both have three in a row is unreachable.
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    fn owns_line(state: &GameState, marker: Marker) -> bool {
        LINES.iter().any(|line| {
            line.positions()
                .iter()
                .all(|pos| state.board().get(*pos) == Square::Occupied(marker))
        })
    }
}

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        !(Self::owns_line(state, Marker::X) && Self::owns_line(state, Marker::O))
    }

    fn description() -> &'static str {
        "At most one marker may own a completed line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_holds_for_single_line() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.set(pos, Square::Occupied(Marker::O));
        }
        assert!(SingleWinnerInvariant::holds(&GameState::from_parts(board, Marker::X)));
    }

    #[test]
    fn test_detects_two_winners() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Marker::X));
        }
        for pos in [Position::BottomLeft, Position::BottomCenter, Position::BottomRight] {
            board.set(pos, Square::Occupied(Marker::O));
        }
        assert!(!SingleWinnerInvariant::holds(&GameState::from_parts(board, Marker::X)));
    }
}
