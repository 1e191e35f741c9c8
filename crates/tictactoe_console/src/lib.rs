//! Console front end for tic-tac-toe.
//!
//! Wires the [`tictactoe_core`] session to standard input and output:
//! command-line flags, an optional TOML config file, and line-based
//! collaborators that re-ask until an answer is well-formed.
//!
//! # Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe_console::{ConsoleInput, ConsoleOutput, GameConfig};
//! use tictactoe_core::Session;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load(None)?;
//! let rng = StdRng::seed_from_u64(config.seed().unwrap_or(0));
//! Session::new(ConsoleInput::stdio(), ConsoleOutput::stdio(), rng)
//!     .with_settings(config.session().clone())
//!     .run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use console::{ConsoleInput, ConsoleOutput};
