use anyhow::{Context, Result, anyhow};
use log::{LevelFilter, debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::build_config::BuildConfig;
use crate::language_utils;
use crate::pos_tags::PosTags;

/// Application configuration module
/// This module handles loading, validating and saving the vardnica
/// configuration file.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Optional JSON file with extra POS tables merged over the built-in ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_tags_file: Option<PathBuf>,

    /// Front-end build configuration
    #[serde(default)]
    pub build: BuildConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Load the configuration from `path`, or write and return the
    /// default configuration when the file does not exist yet
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let file = File::open(path)
                .context(format!("Failed to open config file: {:?}", path))?;

            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .context(format!("Failed to parse config file: {:?}", path))?;

            debug!("Loaded config from {:?}", path);
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);

        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {:?}", path))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        self.build
            .validate()
            .context("Invalid build configuration")?;

        if let Some(path) = &self.pos_tags_file {
            if !path.is_file() {
                return Err(anyhow!("POS tags file does not exist: {:?}", path));
            }

            let extra = PosTags::from_json_file(path)
                .context(format!("Failed to load POS tags file: {:?}", path))?;
            for language in extra.languages() {
                language_utils::validate_language_code(language).context(format!(
                    "Unknown language '{}' in POS tags file: {:?}",
                    language, path
                ))?;
            }
        }

        Ok(())
    }

    /// Built-in POS tables, extended with `pos_tags_file` when configured
    pub fn pos_tags(&self) -> Result<PosTags> {
        let mut tags = PosTags::builtin().clone();

        if let Some(path) = &self.pos_tags_file {
            let extra = PosTags::from_json_file(path)
                .context(format!("Failed to load POS tags file: {:?}", path))?;
            tags.merge(extra);
        }

        Ok(tags)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            pos_tags_file: None,
            build: BuildConfig::default(),
        }
    }
}
