//! Match outcomes and per-session tallies.

use crate::{Player, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, instrument};

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// The player in this seat completed a line.
    WinBy(Seat),
    /// The board filled up with no complete line.
    Draw,
}

impl MatchResult {
    /// Returns the winning seat if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            MatchResult::WinBy(seat) => Some(*seat),
            MatchResult::Draw => None,
        }
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, MatchResult::Draw)
    }
}

/// Tallies accumulated across the matches of one session.
///
/// Each player record carries its own win count; draws are counted
/// here. Nothing is persisted: the stats vanish with the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SessionStats {
    /// Both players, indexed by [`Seat::index`].
    players: [Player; 2],
    /// Matches that ended in a draw.
    draws: u32,
}

impl SessionStats {
    /// Starts a tally for two players.
    #[instrument]
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            players: [first, second],
            draws: 0,
        }
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Counts a finished match.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: MatchResult) {
        match result {
            MatchResult::WinBy(seat) => self.players[seat.index()].record_win(),
            MatchResult::Draw => self.draws += 1,
        }
        info!(
            first_wins = self.players[0].wins(),
            second_wins = self.players[1].wins(),
            draws = self.draws,
            "Match recorded"
        );
    }

    /// Total matches counted so far.
    pub fn matches_played(&self) -> u32 {
        self.players.iter().map(|p| *p.wins()).sum::<u32>() + self.draws
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for player in &self.players {
            writeln!(f, "Matches won by {}: {}", player.name(), player.wins())?;
        }
        write!(f, "Drawn matches: {}", self.draws)
    }
}
