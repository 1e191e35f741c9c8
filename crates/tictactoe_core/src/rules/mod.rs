//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a [`Board`](crate::Board). They never mutate
//! the board and depend only on its current cells.

pub mod draw;
pub mod win;

pub use draw::{has_open_cell, is_draw, is_full};
pub use win::{LINES, check_winner, is_winning_for};
