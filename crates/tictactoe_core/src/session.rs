//! Match controller: menu, setup, turns, results and replay.
//!
//! A [`Session`] is a small state machine. Each call to [`Session::step`]
//! performs one transition; [`Session::run`] steps until the player quits.
//!
//! ```text
//! AwaitingMenuChoice -> SettingUp(mode) -> InProgress -> Finished(result)
//!         |                  ^                                  |
//!         v                  '---- yes ---- AwaitingReplay <----'
//!       Exited <------------------ no -----------'
//! ```

use crate::console::{Input, Output};
use crate::{Board, ConsoleError, Coord, MatchResult, Player, PlayerKind, Seat, SessionStats};
use derive_getters::Getters;
use derive_setters::Setters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

const MENU: &str = "Welcome to Tic-Tac-Toe.
---------------Menu---------------
1- Play against the computer.
2- Play against another person.
0- Quit.
----------------------------------";
const OCCUPIED_CELL: &str = "That cell is already taken. Please choose another cell.";
const DRAW: &str = "***Draw***";
const FAREWELL: &str = "***Thank you and goodbye!***";

/// Default name of the computer opponent.
pub const DEFAULT_COMPUTER_NAME: &str = "Colosse";

/// Opponent chosen from the main menu.
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
pub enum GameMode {
    /// A human against the computer.
    #[display("against the computer")]
    VsComputer,
    /// Two humans sharing the console.
    #[display("against another person")]
    VsHuman,
}

impl GameMode {
    /// Maps a menu number to a mode; `0` (quit) and unknown numbers map to `None`.
    pub fn from_menu_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(GameMode::VsComputer),
            2 => Some(GameMode::VsHuman),
            _ => None,
        }
    }
}

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Showing the menu and waiting for a mode.
    AwaitingMenuChoice,
    /// Creating players (first match only) and clearing the board.
    SettingUp(GameMode),
    /// Turns are being played.
    InProgress,
    /// A match just ended; the tallies are not updated yet.
    Finished(MatchResult),
    /// Asking whether to play another match.
    AwaitingReplay,
    /// The session is over.
    Exited,
}

/// User-tunable session behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(prefix = "with_", into)]
pub struct SessionSettings {
    /// Name given to the computer opponent.
    computer_name: String,
    /// Whether human players are asked for their names.
    ask_names: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            computer_name: DEFAULT_COMPUTER_NAME.to_string(),
            ask_names: true,
        }
    }
}

/// Drives matches between two players over a single board.
pub struct Session<I, O, R> {
    input: I,
    output: O,
    rng: R,
    settings: SessionSettings,
    board: Board,
    state: SessionState,
    stats: Option<SessionStats>,
}

impl<I: Input, O: Output, R: Rng> Session<I, O, R> {
    /// Creates a session waiting at the main menu.
    pub fn new(input: I, output: O, rng: R) -> Self {
        Self {
            input,
            output,
            rng,
            settings: SessionSettings::default(),
            board: Board::new(),
            state: SessionState::AwaitingMenuChoice,
            stats: None,
        }
    }

    /// Replaces the default settings.
    pub fn with_settings(mut self, settings: SessionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The board of the current (or last) match.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tallies so far, once players exist.
    pub fn stats(&self) -> Option<&SessionStats> {
        self.stats.as_ref()
    }

    /// Steps until the session exits and returns the final tallies.
    ///
    /// Returns `None` if the player quit before any match was set up.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<Option<SessionStats>, ConsoleError> {
        info!("Session started");
        while self.state != SessionState::Exited {
            self.step()?;
        }
        info!(
            matches = ?self.stats.as_ref().map(SessionStats::matches_played),
            "Session ended"
        );
        Ok(self.stats)
    }

    /// Performs one state transition and returns the new state.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn step(&mut self) -> Result<SessionState, ConsoleError> {
        let next = match self.state {
            SessionState::AwaitingMenuChoice => self.choose_mode()?,
            SessionState::SettingUp(mode) => {
                self.set_up(mode)?;
                SessionState::InProgress
            }
            SessionState::InProgress => SessionState::Finished(self.play_match()?),
            SessionState::Finished(result) => {
                self.finish(result)?;
                SessionState::AwaitingReplay
            }
            SessionState::AwaitingReplay => self.ask_replay()?,
            SessionState::Exited => SessionState::Exited,
        };
        debug!(from = ?self.state, to = ?next, "Session transition");
        self.state = next;
        Ok(next)
    }

    /// Clears the board and plays turns until a win or a draw.
    ///
    /// Turn 1 belongs to the first player and seats alternate by parity.
    ///
    /// # Panics
    ///
    /// Panics if called before players were set up.
    #[instrument(skip(self))]
    pub fn play_match(&mut self) -> Result<MatchResult, ConsoleError> {
        assert!(self.stats.is_some(), "play_match called before players were set up");
        self.board.reset();
        let mut turn = 1;
        loop {
            if let Some(result) = self.play_turn(turn)? {
                info!(?result, turns = turn, "Match finished");
                return Ok(result);
            }
            turn += 1;
        }
    }

    fn choose_mode(&mut self) -> Result<SessionState, ConsoleError> {
        self.output.display(MENU)?;
        let choice = self.input.request_integer(0, 2)?;
        match GameMode::from_menu_number(choice) {
            Some(mode) => {
                info!(%mode, "Mode selected");
                Ok(SessionState::SettingUp(mode))
            }
            None => {
                info!("Quit from the menu");
                self.output.display(FAREWELL)?;
                Ok(SessionState::Exited)
            }
        }
    }

    #[instrument(skip(self))]
    fn set_up(&mut self, mode: GameMode) -> Result<(), ConsoleError> {
        if self.stats.is_none() {
            let stats = self.create_players(mode)?;
            self.stats = Some(stats);
        }
        self.board.reset();
        Ok(())
    }

    fn create_players(&mut self, mode: GameMode) -> Result<SessionStats, ConsoleError> {
        let symbol = self.input.request_symbol_choice()?;
        let first = Player::human(self.player_name(Seat::First)?, symbol);
        let second = match mode {
            GameMode::VsComputer => Player::computer(self.settings.computer_name(), symbol.opposite()),
            GameMode::VsHuman => Player::human(self.player_name(Seat::Second)?, symbol.opposite()),
        };
        info!(
            first = %first.name(),
            first_symbol = %first.symbol(),
            second = %second.name(),
            second_symbol = %second.symbol(),
            "Players created"
        );
        Ok(SessionStats::new(first, second))
    }

    fn player_name(&mut self, seat: Seat) -> Result<String, ConsoleError> {
        let fallback = match seat {
            Seat::First => "Player 1",
            Seat::Second => "Player 2",
        };
        if !self.settings.ask_names() {
            return Ok(fallback.to_string());
        }
        let name = self.input.request_name(&seat.to_string())?;
        let name = name.trim();
        let name = if name.is_empty() { fallback } else { name };
        Ok(name.to_string())
    }

    fn player(&self, seat: Seat) -> &Player {
        match &self.stats {
            Some(stats) => stats.player(seat),
            None => panic!("no players set up"),
        }
    }

    fn play_turn(&mut self, turn: u32) -> Result<Option<MatchResult>, ConsoleError> {
        let seat = Seat::for_turn(turn);
        let player = self.player(seat).clone();
        let symbol = *player.symbol();

        self.output.display(&self.board.render())?;
        self.output
            .display(&format!("It is now {}'s turn ({}).", player.name(), symbol))?;

        let coord = self.play_move(&player)?;
        debug!(turn, %seat, %coord, %symbol, "Move applied");

        if self.board.is_winning_for(symbol) {
            return Ok(Some(MatchResult::WinBy(seat)));
        }
        if !self.board.has_open_cell() {
            return Ok(Some(MatchResult::Draw));
        }
        Ok(None)
    }

    /// Obtains a move from `player` and applies it, re-asking humans for taken cells.
    fn play_move(&mut self, player: &Player) -> Result<Coord, ConsoleError> {
        let symbol = *player.symbol();
        loop {
            let coord = match player.kind() {
                PlayerKind::Human => {
                    self.output.display(&format!(
                        "{}: enter the coordinates of the cell to play.",
                        player.name()
                    ))?;
                    self.input.request_coordinate()?
                }
                PlayerKind::Computer => self.board.pick_computer_move(symbol.opposite(), &mut self.rng),
            };
            match self.board.place_symbol(coord.row(), coord.col(), symbol) {
                Ok(()) => return Ok(coord),
                Err(err) => {
                    warn!(%err, player = %player.name(), "Move rejected");
                    self.output.display(OCCUPIED_CELL)?;
                }
            }
        }
    }

    fn finish(&mut self, result: MatchResult) -> Result<(), ConsoleError> {
        self.output.display(&self.board.render())?;
        let announcement = match result.winner() {
            Some(seat) => format!("Match over! The winner is: {}", self.player(seat).name()),
            None => DRAW.to_string(),
        };
        self.output.display(&announcement)?;

        if let Some(stats) = self.stats.as_mut() {
            stats.record(result);
            let summary = stats.to_string();
            self.output.display(&summary)?;
        }
        Ok(())
    }

    fn ask_replay(&mut self) -> Result<SessionState, ConsoleError> {
        if self.input.request_yes_no()? {
            let mode = self.mode();
            info!(%mode, "Replaying");
            Ok(SessionState::SettingUp(mode))
        } else {
            self.output.display(FAREWELL)?;
            Ok(SessionState::Exited)
        }
    }

    /// Mode of the existing players.
    fn mode(&self) -> GameMode {
        if self.player(Seat::Second).is_computer() {
            GameMode::VsComputer
        } else {
            GameMode::VsHuman
        }
    }
}
