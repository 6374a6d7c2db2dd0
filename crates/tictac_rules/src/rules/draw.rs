//! Draw detection logic for tic-tac-toe.

use super::win::find_winning_line;
use crate::{Board, Square};

/// Checks if every square is occupied.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board where no line is complete.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && find_winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Marker, Position};

    fn board_from(rows: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(rows.chars().filter(|c| *c != '/')) {
            match c {
                'X' => board.set(*pos, Square::Occupied(Marker::X)),
                'O' => board.set(*pos, Square::Occupied(Marker::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&board_from(".../.X./...")));
    }

    #[test]
    fn test_draw_detection() {
        assert!(is_draw(&board_from("XOX/OXX/OXO")));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // full board, X holds the top row
        let board = board_from("XXX/OOX/XOO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
