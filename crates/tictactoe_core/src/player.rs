//! Player records.

use crate::Symbol;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who decides a player's moves.
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
)]
pub enum PlayerKind {
    /// A person typing coordinates.
    Human,
    /// The built-in heuristic opponent.
    Computer,
}

/// Which of the two players a turn belongs to.
///
/// Seats follow the turn counter: odd turns belong to the first player,
/// even turns to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Seat {
    /// Player 1, who moves on turns 1, 3, 5...
    #[display("player 1")]
    First,
    /// Player 2, who moves on turns 2, 4, 6...
    #[display("player 2")]
    Second,
}

impl Seat {
    /// Returns the seat acting on the given 1-based turn number.
    pub fn for_turn(turn: u32) -> Self {
        if turn % 2 == 1 { Seat::First } else { Seat::Second }
    }

    /// Index into a two-player array.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// A participant in the session.
///
/// Players are passive records. The symbol and kind are fixed for the
/// whole session; `wins` grows as matches are won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// Symbol placed by this player.
    symbol: Symbol,
    /// Human or computer.
    kind: PlayerKind,
    /// Matches won so far in this session.
    wins: u32,
}

impl Player {
    /// Creates a player with no wins.
    #[instrument(skip(name))]
    pub fn new(name: impl AsRef<str>, symbol: Symbol, kind: PlayerKind) -> Self {
        Self {
            name: name.as_ref().to_string(),
            symbol,
            kind,
            wins: 0,
        }
    }

    /// Creates a human player.
    pub fn human(name: impl AsRef<str>, symbol: Symbol) -> Self {
        Self::new(name, symbol, PlayerKind::Human)
    }

    /// Creates a computer player.
    pub fn computer(name: impl AsRef<str>, symbol: Symbol) -> Self {
        Self::new(name, symbol, PlayerKind::Computer)
    }

    /// True if the heuristic opponent plays for this record.
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_follows_turn_parity() {
        assert_eq!(Seat::for_turn(1), Seat::First);
        assert_eq!(Seat::for_turn(2), Seat::Second);
        assert_eq!(Seat::for_turn(3), Seat::First);
        assert_eq!(Seat::for_turn(4), Seat::Second);
        assert_eq!(Seat::for_turn(9), Seat::First);
    }

    #[test]
    fn test_seat_index() {
        assert_eq!(Seat::First.index(), 0);
        assert_eq!(Seat::Second.index(), 1);
    }

    #[test]
    fn test_new_player_has_no_wins() {
        let mut player = Player::computer("Colosse", Symbol::O);
        assert_eq!(*player.wins(), 0);
        assert!(player.is_computer());
        player.record_win();
        assert_eq!(*player.wins(), 1);
        assert_eq!(player.name(), "Colosse");
    }
}
