//! Tic-tac-toe engine and match controller.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move legality, win/draw detection, rendering
//! - **Heuristic**: the computer opponent (win, else block, else random)
//! - **Session**: menu, setup, turn alternation, results and replay
//! - **Console traits**: [`Input`] and [`Output`], implemented by front ends
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Symbol};
//!
//! let mut board = Board::new();
//! board.place_symbol(0, 0, Symbol::X)?;
//! board.place_symbol(1, 1, Symbol::X)?;
//! board.place_symbol(2, 2, Symbol::X)?;
//! assert!(board.is_winning_for(Symbol::X));
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod coord;
mod error;
mod heuristic;
mod player;
pub mod rules;
mod session;
mod stats;
mod types;

pub use console::{Input, Output};
pub use coord::{Coord, SIZE};
pub use error::{ConsoleError, MoveError};
pub use heuristic::{completing_cell, pick_computer_move};
pub use player::{Player, PlayerKind, Seat};
pub use session::{DEFAULT_COMPUTER_NAME, GameMode, Session, SessionSettings, SessionState};
pub use stats::{MatchResult, SessionStats};
pub use types::{Board, Cell, Symbol};
