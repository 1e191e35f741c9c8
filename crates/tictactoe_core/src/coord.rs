//! Row/column addressing for the 3x3 board.

use serde::Serialize;

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// A cell address on the board: row and column, each in `0..3`.
///
/// Coordinates are always in range. Building one from out-of-range
/// numbers is a programming error and panics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; SIZE * SIZE] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Creates a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    #[track_caller]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < SIZE && col < SIZE,
            "coordinate ({row}, {col}) is outside the {SIZE}x{SIZE} board"
        );
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }
}
