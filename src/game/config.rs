//! Game rule configuration
//!
//! One state machine covers every rule set; this selects which features are active.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure threshold used by the default rule set
pub const DEFAULT_FAILURE_THRESHOLD: u32 = 7;

/// Which guesses count toward the wrong-try counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WrongTryPolicy {
    /// Only rejected guesses (already opened, not in word) are wrong tries
    #[default]
    InvalidOnly,
    /// Every submitted guess is a wrong try, correct ones included
    EveryGuess,
}

/// Rules for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Track score (+1 per accepted guess, -1 per rejected guess)
    pub scoring: bool,
    /// End the session once wrong tries reach this value
    ///
    /// Written as a number, or `false` / `"none"` for no threshold.
    #[serde(with = "threshold")]
    pub failure_threshold: Option<u32>,
    pub wrong_try_policy: WrongTryPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failure threshold must be at least 1")]
    ZeroThreshold,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scoring: true,
            failure_threshold: Some(DEFAULT_FAILURE_THRESHOLD),
            wrong_try_policy: WrongTryPolicy::InvalidOnly,
        }
    }
}

impl GameConfig {
    /// Rounds only: no score, no failure threshold
    #[must_use]
    pub const fn basic() -> Self {
        Self {
            scoring: false,
            failure_threshold: None,
            wrong_try_policy: WrongTryPolicy::InvalidOnly,
        }
    }

    /// Rounds and score, no failure threshold
    #[must_use]
    pub const fn scored() -> Self {
        Self {
            scoring: true,
            failure_threshold: None,
            wrong_try_policy: WrongTryPolicy::InvalidOnly,
        }
    }

    #[must_use]
    pub const fn with_threshold(mut self, threshold: Option<u32>) -> Self {
        self.failure_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: WrongTryPolicy) -> Self {
        self.wrong_try_policy = policy;
        self
    }

    /// Check the rule set is playable
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroThreshold` if the threshold is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(0) = self.failure_threshold {
            return Err(ConfigError::ZeroThreshold);
        }
        Ok(())
    }
}

/// TOML has no null, so an absent threshold is written as `false`
mod threshold {
    use super::DEFAULT_FAILURE_THRESHOLD;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Limit(u32),
        Enabled(bool),
        Keyword(String),
    }

    #[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(limit) => serializer.serialize_u32(*limit),
            None => serializer.serialize_bool(false),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Limit(limit) => Ok(Some(limit)),
            Repr::Enabled(true) => Ok(Some(DEFAULT_FAILURE_THRESHOLD)),
            Repr::Enabled(false) => Ok(None),
            Repr::Keyword(word) if matches!(word.to_ascii_lowercase().as_str(), "none" | "off") => {
                Ok(None)
            }
            Repr::Keyword(word) => Err(D::Error::custom(format!(
                "invalid failure threshold '{word}', expected a number, false or \"none\""
            ))),
        }
    }
}
