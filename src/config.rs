//! Application configuration
//!
//! Loaded from an optional TOML file; command-line flags override it.
//!
//! ```toml
//! [game]
//! scoring = true
//! failure_threshold = 7             # or false for no threshold
//! wrong_try_policy = "invalid-only"   # or "every-guess"
//!
//! [words]
//! path = "nouns.json"
//!
//! [logging]
//! level = "info"
//! file = "hangman.log"
//! ```

use crate::game::GameConfig;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub words: WordsConfig,
    pub logging: LoggingConfig,
}

/// Word source settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    /// Word list file; the embedded noun list is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of off, error, warn, info, debug, trace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Append log lines to this file instead of stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Write a default configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn create_default(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(&Self::default())
            .context("Failed to serialize default config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Reject settings the game cannot run with
    ///
    /// # Errors
    ///
    /// Returns an error for a zero failure threshold or an unknown log level.
    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;

        if let Some(level) = &self.logging.level
            && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
        {
            bail!(
                "unknown log level '{level}', expected one of {}",
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }

    /// Configured log level, if any
    #[must_use]
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        self.logging
            .level
            .as_deref()
            .and_then(|level| level.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WrongTryPolicy;

    #[test]
    fn empty_config_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn full_config() {
        let config = AppConfig::from_toml(
            r#"
            [game]
            scoring = false
            failure_threshold = 10
            wrong_try_policy = "every-guess"

            [words]
            path = "words/nouns.json"

            [logging]
            level = "debug"
            file = "hangman.log"
            "#,
        )
        .unwrap();

        assert!(!config.game.scoring);
        assert_eq!(config.game.failure_threshold, Some(10));
        assert_eq!(config.game.wrong_try_policy, WrongTryPolicy::EveryGuess);
        assert_eq!(config.words.path, Some(PathBuf::from("words/nouns.json")));
        assert_eq!(config.log_level(), Some(log::LevelFilter::Debug));
        assert_eq!(config.logging.file, Some(PathBuf::from("hangman.log")));
    }

    #[test]
    fn zero_threshold_rejected() {
        assert!(AppConfig::from_toml("[game]\nfailure_threshold = 0").is_err());
    }

    #[test]
    fn unknown_log_level_rejected() {
        assert!(AppConfig::from_toml("[logging]\nlevel = \"loud\"").is_err());
        assert!(AppConfig::from_toml("[logging]\nlevel = \"WARN\"").is_ok());
    }

    #[test]
    fn unknown_policy_rejected() {
        assert!(AppConfig::from_toml("[game]\nwrong_try_policy = \"sometimes\"").is_err());
    }

    #[test]
    fn default_round_trips_through_file() {
        let path =
            std::env::temp_dir().join(format!("hangman-config-{}.toml", std::process::id()));
        AppConfig::create_default(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn unlimited_rules_round_trip() {
        for game in [GameConfig::scored(), GameConfig::basic()] {
            let config = AppConfig {
                game,
                ..AppConfig::default()
            };
            let text = toml::to_string_pretty(&config).unwrap();
            assert_eq!(AppConfig::from_toml(&text).unwrap(), config, "{text}");
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(AppConfig::load("/definitely/not/here/hangman.toml").is_err());
    }
}
