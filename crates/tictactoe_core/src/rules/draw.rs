//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Cell};
use tracing::instrument;

/// True iff at least one cell is still empty.
#[instrument(skip(board))]
pub fn has_open_cell(board: &Board) -> bool {
    board.cells().any(|cell| cell == Cell::Empty)
}

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    !has_open_cell(board)
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Symbol};

    fn play(board: &mut Board, rows: [&str; 3]) {
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let symbol = match ch {
                    'X' => Symbol::X,
                    'O' => Symbol::O,
                    _ => continue,
                };
                board.place_symbol(row, col, symbol).unwrap();
            }
        }
    }

    #[test]
    fn test_empty_board_has_open_cells() {
        let board = Board::new();
        assert!(has_open_cell(&board));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_one_open_cell_is_enough() {
        for open in Coord::ALL {
            let mut board = Board::new();
            for coord in Coord::ALL.into_iter().filter(|&c| c != open) {
                board.place_symbol(coord.row(), coord.col(), Symbol::X).unwrap();
            }
            assert!(has_open_cell(&board), "open at {open}");
        }
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        play(&mut board, ["XOX", "XOO", "OXX"]);
        assert!(!has_open_cell(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let mut board = Board::new();
        play(&mut board, ["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
