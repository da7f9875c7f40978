//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name of the automated player.
    #[serde(default = "default_ai_name")]
    ai_name: String,

    /// Display name of the human player.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Simulated thinking time of automated players, in milliseconds.
    #[serde(default = "default_think_time_ms")]
    think_time_ms: u64,

    /// Seed for the automated players' random number generator.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_ai_name() -> String {
    "AI Player".to_string()
}

fn default_human_name() -> String {
    "Human Player".to_string()
}

fn default_think_time_ms() -> u64 {
    1000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_name: default_ai_name(),
            human_name: default_human_name(),
            think_time_ms: default_think_time_ms(),
            seed: None,
        }
    }
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

        info!(think_time_ms = config.think_time_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the thinking time.
    pub fn with_think_time_ms(mut self, think_time_ms: u64) -> Self {
        self.think_time_ms = think_time_ms;
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Thinking time as a [`Duration`].
    pub fn think_time(&self) -> Duration {
        Duration::from_millis(self.think_time_ms)
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
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.ai_name(), "AI Player");
        assert_eq!(config.human_name(), "Human Player");
        assert_eq!(config.think_time(), Duration::from_millis(1000));
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human_name = \"Ada\"\nseed = 7").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.human_name(), "Ada");
        assert_eq!(config.ai_name(), "AI Player");
        assert_eq!(*config.think_time_ms(), 1000);
        assert_eq!(*config.seed(), Some(7));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "think_time_ms = \"soon\"").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default().with_think_time_ms(0).with_seed(42);
        assert_eq!(config.think_time(), Duration::ZERO);
        assert_eq!(*config.seed(), Some(42));
    }
}
