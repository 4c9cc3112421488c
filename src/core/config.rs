//! Launch configuration.
//!
//! `GameConfig` is a plain value with `with_*` builders. The console driver
//! fills it from the environment via [`GameConfig::from_env`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Environment variable naming the question CSV file.
pub const ENV_QUESTIONS: &str = "PARTY_QUESTIONS";
/// Environment variable holding a fixed RNG seed.
pub const ENV_SEED: &str = "PARTY_SEED";
/// Environment variable toggling the used-flag reset at launch.
pub const ENV_RESET_ON_LAUNCH: &str = "PARTY_RESET_ON_LAUNCH";

/// Settings needed to open a question store and start an engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Path of the persisted question file.
    pub questions_path: PathBuf,

    /// Seed for question draws and random player selection.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Clear every `used` flag right after loading.
    pub reset_on_launch: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from("questions.csv"),
            seed: None,
            reset_on_launch: true,
        }
    }
}

impl GameConfig {
    /// Use a different question file.
    #[must_use]
    pub fn with_questions_path(mut self, path: impl AsRef<Path>) -> Self {
        self.questions_path = path.as_ref().to_path_buf();
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable the launch-time reset.
    #[must_use]
    pub fn with_reset_on_launch(mut self, reset: bool) -> Self {
        self.reset_on_launch = reset;
        self
    }

    /// Build a config from `PARTY_*` environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if a variable is set but unparsable.
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but with an injectable lookup.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if a value is present but unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameError> {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_QUESTIONS) {
            config.questions_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| GameError::Config(format!("{ENV_SEED} must be a u64: {e}")))?;
            config.seed = Some(seed);
        }

        if let Some(raw) = lookup(ENV_RESET_ON_LAUNCH) {
            config.reset_on_launch = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(GameError::Config(format!(
                        "{ENV_RESET_ON_LAUNCH} must be a boolean, got '{other}'"
                    )))
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.questions_path, PathBuf::from("questions.csv"));
        assert_eq!(config.seed, None);
        assert!(config.reset_on_launch);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_questions_path("data/party.csv")
            .with_seed(7)
            .with_reset_on_launch(false);

        assert_eq!(config.questions_path, PathBuf::from("data/party.csv"));
        assert_eq!(config.seed, Some(7));
        assert!(!config.reset_on_launch);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = GameConfig::from_lookup(lookup_from(&[
            (ENV_QUESTIONS, "/tmp/q.csv"),
            (ENV_SEED, " 42 "),
            (ENV_RESET_ON_LAUNCH, "No"),
        ]))
        .unwrap();

        assert_eq!(config.questions_path, PathBuf::from("/tmp/q.csv"));
        assert_eq!(config.seed, Some(42));
        assert!(!config.reset_on_launch);
    }

    #[test]
    fn test_lookup_empty_uses_defaults() {
        let config = GameConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_bad_seed_is_config_error() {
        let err = GameConfig::from_lookup(lookup_from(&[(ENV_SEED, "lots")])).unwrap_err();
        assert!(matches!(err, GameError::Config(msg) if msg.contains(ENV_SEED)));
    }

    #[test]
    fn test_bad_reset_flag_is_config_error() {
        let err =
            GameConfig::from_lookup(lookup_from(&[(ENV_RESET_ON_LAUNCH, "maybe")])).unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }
}
