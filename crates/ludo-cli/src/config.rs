//! Configuration file loading for the terminal front-end.
//!
//! Settings come from a TOML file (`ludo.toml` by default). A missing file
//! yields the defaults; command-line flags override individual values.

use ludo_core::Color;
use ludo_engine::RuleOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Session configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LudoConfig {
    /// Dice seed. Absent means the dice are seeded from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Turn order. Defaults to Red, Green, Yellow, Blue.
    #[serde(default = "default_colors")]
    pub colors: [Color; 4],
    /// Log level for stderr output. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Rule switches.
    #[serde(default)]
    pub rules: RuleOptions,
}

fn default_colors() -> [Color; 4] {
    Color::ALL
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LudoConfig {
    fn default() -> Self {
        LudoConfig {
            seed: None,
            colors: default_colors(),
            log_level: default_log_level(),
            rules: RuleOptions::default(),
        }
    }
}

impl LudoConfig {
    /// Default location of the configuration file.
    pub const DEFAULT_PATH: &'static str = "ludo.toml";

    /// Loads the configuration at `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = LudoConfig::parse("").unwrap();
        assert_eq!(config, LudoConfig::default());
        assert_eq!(config.colors, Color::ALL);
        assert_eq!(config.log_level, "warn");
        assert!(config.rules.safe_zones_protect);
    }

    #[test]
    fn parses_full_file() {
        let config = LudoConfig::parse(
            r#"
            seed = 42
            colors = ["Blue", "Yellow", "Green", "Red"]
            log_level = "debug"

            [rules]
            safe_zones_protect = false
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(
            config.colors,
            [Color::Blue, Color::Yellow, Color::Green, Color::Red]
        );
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.rules, RuleOptions::unprotected());
    }

    #[test]
    fn wrong_color_count_is_a_parse_error() {
        let err = LudoConfig::parse(r#"colors = ["Red", "Green"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = LudoConfig::load(Path::new("does-not-exist/ludo.toml")).unwrap();
        assert_eq!(config, LudoConfig::default());
    }
}
