//! Core domain types for tic-tac-toe.

use crate::coord::{Coord, SIZE};
use crate::error::MoveError;
use crate::{heuristic, rules};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Marker a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// The X marker.
    X,
    /// The O marker.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opposite(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A single square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds a player's symbol.
    Occupied(Symbol),
}

impl Cell {
    /// Character used when rendering the cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(Symbol::X) => 'X',
            Cell::Occupied(Symbol::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is the only owner of cell state. It is created once per
/// session and reset in place before every match; the only mutation
/// besides [`Board::reset`] is [`Board::place_symbol`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
        debug!("Board reset");
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[track_caller]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.at(Coord::new(row, col))
    }

    /// Returns the cell at `coord`.
    pub fn at(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// True iff the cell at `(row, col)` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[track_caller]
    pub fn is_cell_open(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Cell::Empty
    }

    /// Puts `symbol` on the cell at `(row, col)`.
    ///
    /// An occupied cell is left untouched and reported as
    /// [`MoveError::CellOccupied`].
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn place_symbol(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<(), MoveError> {
        let coord = Coord::new(row, col);
        if self.at(coord) != Cell::Empty {
            return Err(MoveError::CellOccupied(coord));
        }
        self.cells[row][col] = Cell::Occupied(symbol);
        debug!(%coord, %symbol, "Symbol placed");
        Ok(())
    }

    /// True iff at least one cell is empty.
    pub fn has_open_cell(&self) -> bool {
        rules::has_open_cell(self)
    }

    /// True iff one of the 8 lines is entirely held by `symbol`.
    pub fn is_winning_for(&self, symbol: Symbol) -> bool {
        rules::is_winning_for(self, symbol)
    }

    /// Returns the symbol holding a complete line, if any.
    pub fn winner(&self) -> Option<Symbol> {
        rules::check_winner(self)
    }

    /// Chooses the computer's move against a player using `opponent`.
    ///
    /// See [`heuristic::pick_computer_move`].
    pub fn pick_computer_move<R: Rng + ?Sized>(&self, opponent: Symbol, rng: &mut R) -> Coord {
        heuristic::pick_computer_move(self, opponent, rng)
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Iterates over empty cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::ALL
            .into_iter()
            .filter(|&coord| self.at(coord) == Cell::Empty)
    }

    /// Returns a copy of this board with `symbol` at `coord`, whatever was there.
    pub(crate) fn with_symbol(&self, coord: Coord, symbol: Symbol) -> Board {
        let mut trial = self.clone();
        trial.cells[coord.row()][coord.col()] = Cell::Occupied(symbol);
        trial
    }

    /// Formats the board as the fixed textual grid.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " +-0-+-1-+-2-+ ")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{row}|")?;
            for cell in cells {
                write!(f, " {} |", cell.glyph())?;
            }
            writeln!(f, " ")?;
            writeln!(f, " +---+---+---+ ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_opposite() {
        assert_eq!(Symbol::X.opposite(), Symbol::O);
        assert_eq!(Symbol::O.opposite(), Symbol::X);
    }

    #[test]
    fn test_symbol_parses_case_insensitively() {
        assert_eq!("x".parse::<Symbol>(), Ok(Symbol::X));
        assert_eq!("O".parse::<Symbol>(), Ok(Symbol::O));
        assert!("z".parse::<Symbol>().is_err());
    }

    #[test]
    fn test_new_board_is_open_everywhere() {
        let board = Board::new();
        assert!(Coord::ALL.iter().all(|c| board.is_cell_open(c.row(), c.col())));
        assert_eq!(board.open_cells().count(), 9);
    }

    #[test]
    fn test_place_then_cell_is_closed() {
        let mut board = Board::new();
        board.place_symbol(1, 2, Symbol::O).unwrap();
        assert!(!board.is_cell_open(1, 2));
        assert_eq!(board.cell(1, 2), Cell::Occupied(Symbol::O));
        assert_eq!(board.open_cells().count(), 8);
    }

    #[test]
    fn test_place_on_occupied_cell_is_rejected() {
        let mut board = Board::new();
        board.place_symbol(0, 0, Symbol::X).unwrap();
        let before = board.clone();

        let result = board.place_symbol(0, 0, Symbol::O);

        assert_eq!(result, Err(MoveError::CellOccupied(Coord::new(0, 0))));
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 board")]
    fn test_is_cell_open_out_of_range_panics() {
        Board::new().is_cell_open(0, 3);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 board")]
    fn test_place_out_of_range_panics() {
        let _ = Board::new().place_symbol(5, 1, Symbol::X);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        for (i, coord) in Coord::ALL.iter().enumerate() {
            let symbol = if i % 2 == 0 { Symbol::X } else { Symbol::O };
            board.place_symbol(coord.row(), coord.col(), symbol).unwrap();
        }
        assert!(!board.has_open_cell());

        board.reset();

        assert_eq!(board, Board::new());
        assert!(board.has_open_cell());
        assert!(!board.is_winning_for(Symbol::X));
        assert!(!board.is_winning_for(Symbol::O));
    }

    #[test]
    fn test_render_empty_board() {
        let expected = concat!(
            " +-0-+-1-+-2-+ \n",
            "0|   |   |   | \n",
            " +---+---+---+ \n",
            "1|   |   |   | \n",
            " +---+---+---+ \n",
            "2|   |   |   | \n",
            " +---+---+---+ \n",
        );
        assert_eq!(Board::new().render(), expected);
    }

    #[test]
    fn test_with_symbol_works_on_a_copy() {
        let board = Board::new();
        let trial = board.with_symbol(Coord::new(1, 1), Symbol::X);
        assert!(board.is_cell_open(1, 1));
        assert_eq!(trial.cell(1, 1), Cell::Occupied(Symbol::X));
    }
}
