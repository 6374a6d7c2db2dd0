//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They know nothing about
//! turns or connections, which keeps them easy to test in isolation.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinLine, find_winning_line};
