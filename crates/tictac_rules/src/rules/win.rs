//! Win detection logic for tic-tac-toe.

use crate::{Board, Marker, Position, Square};
use tracing::instrument;

/// Three positions that win when held by one marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }
}

/// All winning lines: rows, then columns, then diagonals.
pub const LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first completed line in table order.
///
/// Returns the owning marker and the line, or `None` if no line is held
/// entirely by one marker.
#[instrument(level = "trace", skip(board), fields(board = %board.display()))]
pub fn find_winning_line(board: &Board) -> Option<(Marker, WinLine)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let first = board.get(a);
        match first {
            Square::Occupied(marker) if board.get(b) == first && board.get(c) == first => {
                Some((marker, *line))
            }
            _ => None,
        }
    })
}
