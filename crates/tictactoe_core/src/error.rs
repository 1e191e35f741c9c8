//! Error types.

use crate::Coord;
use derive_more::{Display, Error};
use tracing::instrument;

/// Error that can occur when applying a move to the board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The cell already holds a symbol.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),
}

impl std::error::Error for MoveError {}

/// Failure of a console collaborator: the stream broke or ran dry.
///
/// Malformed user input is never reported this way; collaborators
/// re-prompt for it.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
