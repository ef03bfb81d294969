//! Judge configuration.
//!
//! The defaults reproduce the standard guess-the-number problem: seven
//! attempts, answers between 1 and 100, test data on stdin ahead of the
//! contestant's guesses. A TOML file can override them for variants of the
//! problem without recompiling the interactor.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::number::Integer;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV: &str = "GUESSJUDGE_CONFIG";

/// Environment variable naming a test data file; overrides `test_data`.
pub const TEST_DATA_ENV: &str = "GUESSJUDGE_TEST_DATA";

/// Top-level judge configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeConfig {
    /// Attempt budget. Blank lines do not count against it.
    #[serde(default = "default_max_guesses")]
    pub max_guesses: u32,
    /// Smallest answer the test data is expected to contain.
    #[serde(default = "default_answer_min")]
    pub answer_min: i64,
    /// Largest answer the test data is expected to contain.
    #[serde(default = "default_answer_max")]
    pub answer_max: i64,
    /// Read the answer from this file instead of the first line of stdin.
    #[serde(default)]
    pub test_data: Option<PathBuf>,
}

fn default_max_guesses() -> u32 {
    7
}
fn default_answer_min() -> i64 {
    1
}
fn default_answer_max() -> i64 {
    100
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            max_guesses: default_max_guesses(),
            answer_min: default_answer_min(),
            answer_max: default_answer_max(),
            test_data: None,
        }
    }
}

impl JudgeConfig {
    /// Parse a TOML document into a validated config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: JudgeConfig = toml::from_str(content).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the interaction loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_guesses == 0 {
            anyhow::bail!("max_guesses must be at least 1");
        }
        if self.answer_min > self.answer_max {
            anyhow::bail!(
                "answer_min ({}) is greater than answer_max ({})",
                self.answer_min,
                self.answer_max
            );
        }
        Ok(())
    }

    /// Whether an answer lies in the configured range.
    pub fn answer_in_range(&self, answer: &Integer) -> bool {
        answer
            .to_i64()
            .is_some_and(|a| (self.answer_min..=self.answer_max).contains(&a))
    }
}

/// Load configuration from the environment.
///
/// Reads the file named by `GUESSJUDGE_CONFIG` if set, otherwise starts from
/// the defaults. `GUESSJUDGE_TEST_DATA` then overrides `test_data`.
pub fn load_config() -> Result<JudgeConfig> {
    let path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let mut config = load_config_from(path.as_deref())?;

    if let Some(test_data) = std::env::var_os(TEST_DATA_ENV) {
        if !test_data.is_empty() {
            config.test_data = Some(PathBuf::from(test_data));
        }
    }

    Ok(config)
}

/// Load config from an explicit path, or return the defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<JudgeConfig> {
    let Some(path) = path else {
        return Ok(JudgeConfig::default());
    };

    if !path.exists() {
        anyhow::bail!("config file not found: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    JudgeConfig::from_toml_str(&content)
        .with_context(|| format!("invalid config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = JudgeConfig::default();
        assert_eq!(config.max_guesses, 7);
        assert_eq!(config.answer_min, 1);
        assert_eq!(config.answer_max, 100);
        assert!(config.test_data.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let config = JudgeConfig::from_toml_str("max_guesses = 10\n").unwrap();
        assert_eq!(config.max_guesses, 10);
        assert_eq!(config.answer_max, 100);
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
max_guesses = 11
answer_min = 1
answer_max = 1000
test_data = "cases/1.in"
"#;
        let config = JudgeConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.max_guesses, 11);
        assert_eq!(config.answer_max, 1000);
        assert_eq!(config.test_data, Some(PathBuf::from("cases/1.in")));
    }

    #[test]
    fn reject_zero_budget() {
        let err = JudgeConfig::from_toml_str("max_guesses = 0\n").unwrap_err();
        assert!(format!("{err:#}").contains("max_guesses"));
    }

    #[test]
    fn reject_inverted_range() {
        let err = JudgeConfig::from_toml_str("answer_min = 50\nanswer_max = 10\n").unwrap_err();
        assert!(format!("{err:#}").contains("answer_min"));
    }

    #[test]
    fn reject_malformed_toml() {
        assert!(JudgeConfig::from_toml_str("max_guesses = [").is_err());
    }

    #[test]
    fn answer_range_is_inclusive() {
        let config = JudgeConfig::default();
        assert!(config.answer_in_range(&Integer::from(1)));
        assert!(config.answer_in_range(&Integer::from(100)));
        assert!(!config.answer_in_range(&Integer::from(0)));
        assert!(!config.answer_in_range(&Integer::from(101)));
        let huge: Integer = "99999999999999999999".parse().unwrap();
        assert!(!config.answer_in_range(&huge));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guessjudge.toml");
        std::fs::write(&path, "max_guesses = 5\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.max_guesses, 5);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn load_without_path_uses_defaults() {
        assert_eq!(load_config_from(None).unwrap(), JudgeConfig::default());
    }
}
