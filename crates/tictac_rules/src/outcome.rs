//! Terminal results of a game.

use super::{Marker, WinLine};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A marker completed a line.
    Winner {
        /// The winning marker.
        marker: Marker,
        /// The completed line.
        line: WinLine,
    },
    /// The board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Winner { marker, .. } => Some(*marker),
            Outcome::Draw => None,
        }
    }

    /// Indices of the winning line, empty for a draw.
    pub fn winning_cells(&self) -> Vec<usize> {
        match self {
            Outcome::Winner { line, .. } => line.indices().to_vec(),
            Outcome::Draw => Vec::new(),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { marker, line } => {
                write!(f, "{} wins on {:?}", marker, line.indices())
            }
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
