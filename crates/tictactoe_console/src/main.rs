//! Tic-Tac-Toe - console game against a friend or the computer.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_console::{Cli, ConsoleInput, ConsoleOutput, GameConfig};
use tictactoe_core::Session;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?.with_overrides(&cli);

    initialize_tracing(config.log_filter().as_deref());

    let rng = match config.seed() {
        Some(seed) => {
            info!(seed, "Using seeded computer moves");
            StdRng::seed_from_u64(*seed)
        }
        None => StdRng::from_entropy(),
    };

    let stats = Session::new(ConsoleInput::stdio(), ConsoleOutput::stdio(), rng)
        .with_settings(config.session().clone())
        .run()?;

    info!(played = stats.is_some(), "Goodbye");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
#[instrument]
fn initialize_tracing(fallback: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or("warn"))),
        )
        .with_writer(std::io::stderr)
        .try_init();

    info!("Tracing initialized");
}
