//! Configuration management for dtfmt
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, XDG_CONFIG_FILE_NAME};
use crate::{logger, registry, stamp};
use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub stamp: StampConfig,
    pub logging: LoggingConfig,
}

/// Stamp configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StampConfig {
    /// Template used when none is given on the command line.
    /// Either a catalog name ("dmy.slashed") or a raw strftime template ("%d/%m/%Y")
    pub template: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to stderr
    pub enabled: bool,
    /// Level filter: off, error, warn, info, debug, trace
    pub level: String,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            template: "locale.datetime".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Effective level filter; `Off` when logging is disabled
    pub fn level_filter(&self) -> Result<LevelFilter> {
        if !self.enabled {
            return Ok(LevelFilter::Off);
        }
        self.level
            .parse::<LevelFilter>()
            .map_err(|e| anyhow::anyhow!("Invalid logging level '{}': {}", self.level, e))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join(XDG_CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.stamp.template.is_empty() {
            anyhow::bail!("stamp.template cannot be empty");
        }

        let moment = validation_moment()?;
        if let Err(e) = stamp::render(&moment, self.stamp_template()) {
            anyhow::bail!("Invalid stamp.template '{}': {}", self.stamp.template, e);
        }

        if let Err(e) = self.logging.level.parse::<LevelFilter>() {
            anyhow::bail!("Invalid logging.level '{}': {}", self.logging.level, e);
        }

        Ok(())
    }

    /// Template text for stamping, with catalog names resolved
    pub fn stamp_template(&self) -> &str {
        registry::resolve(&self.stamp.template)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let generated_on = stamp::now_text_with(logger::timestamp_template())?;
        let header = format!("# dtfmt Configuration File\n# Generated on {}\n\n", generated_on);

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(XDG_CONFIG_FILE_NAME))
    }
}

/// Fixed moment configured templates are checked against
fn validation_moment() -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2021, 7, 15, 13, 35, 46)
        .single()
        .context("Failed to build validation moment")
}
