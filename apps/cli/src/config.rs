//! CLI configuration
//!
//! Layered lowest to highest: built-in defaults, `nurture.toml` in the
//! working directory (optional), the file given with `--config`, then
//! `NURTURE__SECTION__KEY` environment variables. A `.env` file is loaded
//! into the environment first.

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for nurture crates unless `RUST_LOG` is set
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// daily | hourly | minutely | never
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "nurture".to_string(),
            file_rotation: "daily".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Wrap observation lists in a collection Bundle
    pub bundle: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            bundle: false,
        }
    }
}

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const ROTATIONS: [&str; 4] = ["daily", "hourly", "minutely", "never"];

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder =
            config::Config::builder().add_source(File::with_name("nurture").required(false));
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(Environment::with_prefix("NURTURE").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "logging.level must be one of {}, got '{}'",
                LEVELS.join(", "),
                self.logging.level
            ));
        }
        if self.logging.file_enabled {
            if !ROTATIONS.contains(&self.logging.file_rotation.as_str()) {
                return Err(format!(
                    "logging.file_rotation must be one of {}, got '{}'",
                    ROTATIONS.join(", "),
                    self.logging.file_rotation
                ));
            }
            if self.logging.file_directory.trim().is_empty() {
                return Err("logging.file_directory must not be empty".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.output.pretty);
        assert!(!config.output.bundle);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: Config = config::Config::builder()
            .add_source(File::from_str(
                "[output]\npretty = false\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(!config.output.pretty);
        assert!(!config.output.bundle);
        assert_eq!(config.logging.file_prefix, "nurture");
    }

    #[test]
    fn test_rejects_unknown_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().unwrap_err().contains("logging.level"));
    }

    #[test]
    fn test_rotation_checked_only_for_file_logging() {
        let mut config = Config::default();
        config.logging.file_rotation = "weekly".to_string();
        assert!(config.validate().is_ok());

        config.logging.file_enabled = true;
        assert!(config.validate().is_err());
    }
}
