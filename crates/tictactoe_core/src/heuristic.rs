//! One-ply heuristic for the computer opponent.
//!
//! The computer takes an immediate win when it has one, otherwise blocks
//! the opponent's immediate win, otherwise plays a random open cell. It
//! never looks further ahead and does not defend forks, so a careful
//! human can still beat it.

use crate::coord::{Coord, SIZE};
use crate::{Board, Symbol};
use rand::Rng;
use tracing::{debug, instrument};

/// Chooses the computer's next cell.
///
/// `opponent` is the human's symbol; the computer plays the other one.
/// Among several winning (or blocking) cells the first in row-major
/// order is chosen.
///
/// # Panics
///
/// Panics if the board has no open cell.
#[instrument(skip(board, rng))]
pub fn pick_computer_move<R: Rng + ?Sized>(board: &Board, opponent: Symbol, rng: &mut R) -> Coord {
    assert!(board.has_open_cell(), "no open cell left for the computer to play");
    let own = opponent.opposite();

    if let Some(coord) = completing_cell(board, own) {
        debug!(%coord, "Computer takes the win");
        return coord;
    }

    if let Some(coord) = completing_cell(board, opponent) {
        debug!(%coord, "Computer blocks the opponent");
        return coord;
    }

    let coord = random_open_cell(board, rng);
    debug!(%coord, "Computer plays a random cell");
    coord
}

/// First open cell (row-major) that would give `symbol` a complete line.
#[instrument(skip(board))]
pub fn completing_cell(board: &Board, symbol: Symbol) -> Option<Coord> {
    board
        .open_cells()
        .find(|&coord| board.with_symbol(coord, symbol).is_winning_for(symbol))
}

/// Draws cells uniformly until an open one comes up.
fn random_open_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Coord {
    loop {
        let coord = Coord::new(rng.gen_range(0..SIZE), rng.gen_range(0..SIZE));
        if board.is_cell_open(coord.row(), coord.col()) {
            return coord;
        }
    }
}
