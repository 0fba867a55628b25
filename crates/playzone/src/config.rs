//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use playzone_tictactoe::Pruning;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration error with location tracking.
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct PlayzoneConfig {
    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Search pruning used by the computer opponent.
    #[serde(default)]
    pruning: Pruning,

    /// Dice rolled per turn in the color dice game.
    #[serde(default = "default_dice_count")]
    dice_count: usize,

    /// File receiving log output. The terminal UI discards logs when unset.
    #[serde(default)]
    log_file: Option<PathBuf>,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_thinking_delay_ms() -> u64 {
    500
}

fn default_dice_count() -> usize {
    playzone_dice::DEFAULT_DICE_COUNT
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for PlayzoneConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay_ms(),
            pruning: Pruning::default(),
            dice_count: default_dice_count(),
            log_file: None,
            log_filter: default_log_filter(),
        }
    }
}

impl PlayzoneConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(pruning = %config.pruning, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses and validates TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.dice_count == 0 {
            return Err(ConfigError::new("dice_count must be at least 1"));
        }
        Ok(())
    }

    /// The thinking delay as a duration.
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    /// Returns a copy with a different pruning mode.
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = PlayzoneConfig::from_toml("").unwrap();
        assert_eq!(config, PlayzoneConfig::default());
        assert_eq!(config.thinking_delay(), Duration::from_millis(500));
        assert_eq!(*config.dice_count(), 3);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
thinking_delay_ms = 0
pruning = "alpha-beta"
dice_count = 4
log_file = "playzone.log"
log_filter = "debug"
"#
        )
        .unwrap();

        let config = PlayzoneConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.thinking_delay_ms(), 0);
        assert_eq!(*config.pruning(), Pruning::AlphaBeta);
        assert_eq!(*config.dice_count(), 4);
        assert_eq!(config.log_file().as_deref(), Some(Path::new("playzone.log")));
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlayzoneConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, PlayzoneConfig::default());
    }

    #[test]
    fn test_zero_dice_rejected() {
        let err = PlayzoneConfig::from_toml("dice_count = 0").unwrap_err();
        assert!(err.message.contains("dice_count"));
    }

    #[test]
    fn test_bad_pruning_rejected() {
        let err = PlayzoneConfig::from_toml(r#"pruning = "greedy""#).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
