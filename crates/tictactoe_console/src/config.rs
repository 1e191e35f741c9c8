//! Game configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tictactoe_core::SessionSettings;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Configuration for a console session.
///
/// ```toml
/// computer_name = "Colosse"
/// ask_names = true
/// seed = 42
/// log_filter = "warn"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Session behavior (computer name, name prompts).
    #[serde(flatten)]
    session: SessionSettings,

    /// Seed for the computer's random moves; entropy when absent.
    seed: Option<u64>,

    /// Tracing filter used when `RUST_LOG` is not set.
    log_filter: Option<String>,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(computer_name = %config.session.computer_name(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path`, or [`DEFAULT_CONFIG_PATH`] if it exists, or the defaults.
    ///
    /// An explicitly given path must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line flags on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(name) = &cli.computer_name {
            self.session = self.session.with_computer_name(name.as_str());
        }
        if cli.no_names {
            self.session = self.session.with_ask_names(false);
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tictactoe_core::DEFAULT_COMPUTER_NAME;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.session().computer_name(), DEFAULT_COMPUTER_NAME);
        assert!(*config.session().ask_names());
        assert_eq!(*config.seed(), None);
        assert_eq!(*config.log_filter(), None);
    }

    #[test]
    fn test_parse_full_file() {
        let file = write_config(
            "computer_name = \"HAL\"\nask_names = false\nseed = 7\nlog_filter = \"debug\"\n",
        );
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.session().computer_name(), "HAL");
        assert!(!*config.session().ask_names());
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(config.log_filter().as_deref(), Some("debug"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("seed = 3\n");
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.session().computer_name(), DEFAULT_COMPUTER_NAME);
        assert!(*config.session().ask_names());
        assert_eq!(*config.seed(), Some(3));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let file = write_config("seed = \"soon\"\n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = write_config("computer_name = \"HAL\"\nseed = 7\n");
        let cli = Cli::try_parse_from(["tictactoe", "--seed", "9", "--no-names"]).unwrap();

        let config = GameConfig::from_file(file.path()).unwrap().with_overrides(&cli);

        assert_eq!(*config.seed(), Some(9));
        assert_eq!(config.session().computer_name(), "HAL");
        assert!(!*config.session().ask_names());
    }

    #[test]
    fn test_cli_renames_computer() {
        let cli = Cli::try_parse_from(["tictactoe", "--computer-name", "Deep Blue"]).unwrap();
        let config = GameConfig::default().with_overrides(&cli);
        assert_eq!(config.session().computer_name(), "Deep Blue");
        assert_eq!(*config.seed(), None);
    }
}
