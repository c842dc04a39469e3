//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use minimax_tictactoe::{FirstPlayer, Settings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for the terminal front end.
///
/// Every field is optional in the file; missing fields take their defaults.
///
/// ```toml
/// first_player = "computer"
/// log_file = "tictactoe.log"
/// log_level = "minimax_tictactoe=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TuiConfig {
    /// Who opens the first game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// File that receives the tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_player = config.first_player.label(), "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        log_file: Option<PathBuf>,
        log_level: Option<String>,
        computer_first: bool,
    ) -> Self {
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        if computer_first {
            self.first_player = FirstPlayer::Computer;
        }
        self
    }

    /// Engine settings derived from this configuration.
    pub fn settings(&self) -> Settings {
        Settings {
            first_player: self.first_player,
        }
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
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r#"
first_player = "computer"
log_file = "/tmp/ttt.log"
log_level = "debug"
"#,
        );
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.first_player(), &FirstPlayer::Computer);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.settings().first_player, FirstPlayer::Computer);
    }

    #[test]
    fn test_bad_value_is_reported() {
        let file = write_config(r#"first_player = "nobody""#);
        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_overrides_win() {
        let config = TuiConfig::default().with_overrides(
            Some(PathBuf::from("other.log")),
            Some("trace".to_string()),
            true,
        );
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
        assert_eq!(config.log_level(), "trace");
        assert_eq!(config.first_player(), &FirstPlayer::Computer);

        let untouched = TuiConfig::default().with_overrides(None, None, false);
        assert_eq!(untouched, TuiConfig::default());
        assert!(TuiConfig::load(None).is_ok());
    }
}
