//! # Configuration Management
//!
//! Type-safe TOML configuration for the mazekit CLI, with defaults, validation,
//! and a generator for starter config files.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [maze]
//! default_theme = "classic"
//! # Optional layout seed; falls back to the built-in demo layout when absent.
//! # layout_file = "layouts/keep.toml"
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub maze: MazeConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Theme tag used when the CLI is not given one explicitly.
    pub default_theme: String,
    /// Optional TOML layout file; the built-in demo layout is used when unset.
    #[serde(default)]
    pub layout_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Check values the type system cannot: a usable theme tag and log level.
    pub fn validate(&self) -> Result<()> {
        if self.maze.default_theme.trim().is_empty() {
            return Err(anyhow!("maze.default_theme must not be empty"));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(anyhow!(
                "logging.level must be one of {:?}, got '{}'",
                LOG_LEVELS,
                self.logging.level
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maze: MazeConfig {
                default_theme: "classic".to_string(),
                layout_file: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        config.validate().expect("default config validates");
        assert_eq!(config.maze.default_theme, "classic");
    }

    #[test]
    fn validate_rejects_empty_theme_and_bad_level() {
        let mut config = Config::default();
        config.maze.default_theme = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn create_default_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let path = path.to_str().expect("utf-8 path");

        Config::create_default(path).await.expect("create default");
        let loaded = Config::load(path).await.expect("load");
        loaded.validate().expect("validates");
        assert_eq!(loaded.maze.default_theme, "classic");
        assert_eq!(loaded.logging.level, "info");
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let err = Config::load("does/not/exist.toml").await.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
