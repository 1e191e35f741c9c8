//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Symbol};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The 8 winning lines as `(row, col)` triples: rows, columns, diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks whether `symbol` holds every cell of at least one line.
#[instrument(skip(board))]
pub fn is_winning_for(board: &Board, symbol: Symbol) -> bool {
    let target = Cell::Occupied(symbol);
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| board.cell(row, col) == target))
}

/// Returns the symbol holding a complete line, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    Symbol::iter().find(|&symbol| is_winning_for(board, symbol))
}
