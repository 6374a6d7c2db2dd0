//! Core domain types for tic-tac-toe.

use super::Position;
use serde::{Deserialize, Serialize};

/// One of the two player symbols.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Marker {
    /// Marker X (always moves first).
    X,
    /// Marker O.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A square on the board.
///
/// On the wire an empty square is `null` and an occupied one is the
/// marker string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Marker>", into = "Option<Marker>")]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker on this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }
}

impl From<Option<Marker>> for Square {
    fn from(value: Option<Marker>) -> Self {
        value.map_or(Square::Empty, Square::Occupied)
    }
}

impl From<Square> for Option<Marker> {
    fn from(square: Square) -> Self {
        square.marker()
    }
}

/// 3x3 board, squares in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw squares.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts squares holding the given marker.
    pub fn count(&self, marker: Marker) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(marker))
            .count()
    }

    /// Formats the board as a compact grid, `.` for empty squares.
    pub fn display(&self) -> String {
        self.squares
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|s| match s {
                        Square::Empty => ".".to_string(),
                        Square::Occupied(marker) => marker.to_string(),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_wire_shape() {
        let board = Board::from_squares([
            Square::Occupied(Marker::X),
            Square::Empty,
            Square::Empty,
            Square::Empty,
            Square::Occupied(Marker::O),
            Square::Empty,
            Square::Empty,
            Square::Empty,
            Square::Empty,
        ]);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"["X",null,null,null,"O",null,null,null,null]"#);
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Marker::X));
        board.set(Position::BottomRight, Square::Occupied(Marker::O));
        assert_eq!(board.display(), ".../.X./..O");
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
    }
}
