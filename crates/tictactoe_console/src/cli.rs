//! Command-line interface for the tic-tac-toe console.

use clap::Parser;
use std::path::PathBuf;

/// Tic-Tac-Toe - play against a friend or the computer in the terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the computer opponent's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Name of the computer opponent
    #[arg(long)]
    pub computer_name: Option<String>,

    /// Do not ask human players for their names
    #[arg(long)]
    pub no_names: bool,
}
