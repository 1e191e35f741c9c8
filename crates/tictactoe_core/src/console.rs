//! Collaborator traits through which the session talks to the outside.
//!
//! The session never reads or writes a terminal itself. A front end
//! provides an [`Input`] and an [`Output`]; tests provide scripted ones.

use crate::{Coord, ConsoleError, Symbol};

/// Source of player decisions.
///
/// Every method blocks until it has a well-formed answer. Malformed
/// answers are handled inside the implementation by asking again; an
/// `Err` means the source itself failed (closed stream, I/O error).
pub trait Input {
    /// Reads an integer in `min..=max`.
    fn request_integer(&mut self, min: i64, max: i64) -> Result<i64, ConsoleError>;

    /// Reads the symbol chosen by the first player.
    fn request_symbol_choice(&mut self) -> Result<Symbol, ConsoleError>;

    /// Reads a yes/no answer.
    fn request_yes_no(&mut self) -> Result<bool, ConsoleError>;

    /// Reads a player's name. `label` identifies who is asked, e.g. "player 1".
    fn request_name(&mut self, label: &str) -> Result<String, ConsoleError>;

    /// Reads a row and a column, each in `0..=2`.
    ///
    /// Occupancy is not checked here; the session re-asks for taken cells.
    fn request_coordinate(&mut self) -> Result<Coord, ConsoleError> {
        let row = self.request_integer(0, 2)?;
        let col = self.request_integer(0, 2)?;
        Ok(Coord::new(row as usize, col as usize))
    }
}

/// Sink for everything the session shows: board, prompts, results, stats.
pub trait Output {
    /// Shows one block of text.
    fn display(&mut self, text: &str) -> Result<(), ConsoleError>;
}

impl<T: Input + ?Sized> Input for &mut T {
    fn request_integer(&mut self, min: i64, max: i64) -> Result<i64, ConsoleError> {
        (**self).request_integer(min, max)
    }

    fn request_symbol_choice(&mut self) -> Result<Symbol, ConsoleError> {
        (**self).request_symbol_choice()
    }

    fn request_yes_no(&mut self) -> Result<bool, ConsoleError> {
        (**self).request_yes_no()
    }

    fn request_name(&mut self, label: &str) -> Result<String, ConsoleError> {
        (**self).request_name(label)
    }

    fn request_coordinate(&mut self) -> Result<Coord, ConsoleError> {
        (**self).request_coordinate()
    }
}

impl<T: Output + ?Sized> Output for &mut T {
    fn display(&mut self, text: &str) -> Result<(), ConsoleError> {
        (**self).display(text)
    }
}
