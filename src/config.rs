use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the cumulative score tally is persisted.
    pub score_file: PathBuf,
    /// Cosmetic pause before the computer moves, in milliseconds.
    pub ai_delay_ms: u64,
    /// The mark the computer plays in vs-computer mode.
    pub ai_mark: Player,
    /// Start in vs-computer mode.
    pub vs_computer: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            score_file: PathBuf::from("scores.json"),
            ai_delay_ms: 260,
            ai_mark: Player::O,
            vs_computer: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "ai_delay_ms must be <= 10000".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
