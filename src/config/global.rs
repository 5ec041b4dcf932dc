// ~/.config/selectbox/config.toml
// ref: toml crate — https://docs.rs/toml/

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::model::selection::{default_options, SelectOption};
use crate::select::{HighlightBound, PendingCommits, SelectConfig};

const DEFAULT_COMMIT_DELAY_MS: u64 = 400;
const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("option list is empty")]
    NoOptions,
    #[error("options {first:?} and {second:?} share value {value}")]
    DuplicateValue { value: i64, first: String, second: String },
    #[error("commit_delay_ms ({commit_ms}) must not exceed settle_delay_ms ({settle_ms})")]
    DelayOrder { commit_ms: u64, settle_ms: u64 },
    #[error("unknown log_level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub commit_delay_ms: u64,
    pub settle_delay_ms: u64,
    pub highlight_bound: HighlightBound,
    pub pending_commits: PendingCommits,
    pub log_level: String,
    pub options: Vec<SelectOption>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            commit_delay_ms: DEFAULT_COMMIT_DELAY_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            highlight_bound: HighlightBound::default(),
            pending_commits: PendingCommits::default(),
            log_level: "info".to_string(),
            options: default_options(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("selectbox").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path().context("no config dir")?;
        Self::load_from(&path)
    }

    /// Missing file means defaults; a present file must parse and validate.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.options.is_empty() {
            return Err(ConfigError::NoOptions);
        }
        for (i, op) in self.options.iter().enumerate() {
            if let Some(prev) = self.options[..i].iter().find(|p| p.value == op.value) {
                return Err(ConfigError::DuplicateValue {
                    value: op.value,
                    first: prev.label.clone(),
                    second: op.label.clone(),
                });
            }
        }
        if self.commit_delay_ms > self.settle_delay_ms {
            return Err(ConfigError::DelayOrder {
                commit_ms: self.commit_delay_ms,
                settle_ms: self.settle_delay_ms,
            });
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn widget(&self) -> SelectConfig {
        SelectConfig {
            commit_delay: Duration::from_millis(self.commit_delay_ms),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            highlight_bound: self.highlight_bound,
            pending_commits: self.pending_commits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        let config = GlobalConfig::parse("").unwrap();
        assert_eq!(config.commit_delay_ms, 400);
        assert_eq!(config.settle_delay_ms, 500);
        assert_eq!(config.highlight_bound, HighlightBound::Last);
        assert_eq!(config.pending_commits, PendingCommits::Independent);
        assert_eq!(config.options.len(), 10);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn parses_options_and_policies() {
        let text = r#"
            highlight_bound = "past_end"
            pending_commits = "supersede"
            log_level = "debug"

            [[options]]
            label = "Red"
            value = 1

            [[options]]
            label = "Blue"
            value = 2
        "#;
        let config = GlobalConfig::parse(text).unwrap();
        assert_eq!(config.highlight_bound, HighlightBound::PastEnd);
        assert_eq!(config.pending_commits, PendingCommits::Supersede);
        assert_eq!(config.options, vec![SelectOption::new("Red", 1), SelectOption::new("Blue", 2)]);

        let widget = config.widget();
        assert_eq!(widget.commit_delay, Duration::from_millis(400));
        assert_eq!(widget.settle_delay, Duration::from_millis(500));
    }

    #[test]
    fn rejects_duplicate_values() {
        let config = GlobalConfig {
            options: vec![SelectOption::new("a", 1), SelectOption::new("b", 1)],
            ..GlobalConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateValue { value: 1, first: "a".into(), second: "b".into() })
        );
    }

    #[test]
    fn rejects_empty_options() {
        assert!(GlobalConfig::parse("options = []").is_err());
    }

    #[test]
    fn rejects_commit_after_settle() {
        let config = GlobalConfig { commit_delay_ms: 600, ..GlobalConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DelayOrder { commit_ms: 600, settle_ms: 500 })
        );
    }

    #[test]
    fn rejects_unknown_log_level() {
        let config = GlobalConfig { log_level: "loud".into(), ..GlobalConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::LogLevel("loud".into())));
    }

    #[test]
    fn missing_file_is_defaults() {
        let path = std::env::temp_dir().join("selectbox-missing-config-test.toml");
        let _ = std::fs::remove_file(&path);
        let config = GlobalConfig::load_from(&path).unwrap();
        assert_eq!(config.options.len(), 10);
    }
}
