//! Configuration module for country-names
//!
//! Handles loading configuration from a YAML file and environment variables.
//! The configuration file is optional and never written.

use crate::codes::TableLayout;
use crate::error::{CountryNamesError, Result};
use crate::utils::path;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub resources: ResourceConfig,
    #[serde(default)]
    pub tables: TableConfig,
    /// Extra language aliases (legacy code -> canonical code)
    #[serde(default)]
    pub aliases: HashMap<String, String>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Start-up resource locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Country code table
    #[serde(default = "default_country_codes")]
    pub country_codes: String,

    /// Language code table
    #[serde(default = "default_language_codes")]
    pub language_codes: String,

    /// Translation dataset (JSON or YAML)
    #[serde(default = "default_dataset")]
    pub dataset: String,
}

/// Column layouts of the two code tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default)]
    pub country: TableLayout,
    #[serde(default)]
    pub language: TableLayout,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub enable_colors: bool,

    /// Output in JSON format
    #[serde(default)]
    pub json: bool,
}

/// Global configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Verbose logging
    #[serde(default)]
    pub verbose: bool,

    /// Config file this configuration came from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

// Default value functions
fn default_country_codes() -> String {
    "country-codes.txt".to_string()
}

fn default_language_codes() -> String {
    "language-codes.txt".to_string()
}

fn default_dataset() -> String {
    "sample.json".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            country_codes: default_country_codes(),
            language_codes: default_language_codes(),
            dataset: default_dataset(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            enable_colors: true,
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default config file and environment variables
    pub fn load() -> Result<Self> {
        let config_file = path::config_file()?;
        let mut config = if config_file.exists() {
            Self::from_file(&config_file)?
        } else {
            log::debug!("No config file at {:?}, using defaults", config_file);
            Self::default()
        };

        config.apply_env();

        Ok(config)
    }

    /// Load configuration from a specific YAML file
    pub fn from_file(config_file: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_file)
            .map_err(|e| CountryNamesError::config(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_yaml_str(&content)?;
        config.global.config_path = Some(config_file.to_path_buf());
        log::info!("Loaded configuration from {:?}", config_file);

        Ok(config)
    }

    /// Parse configuration from YAML text; an empty document yields defaults
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| CountryNamesError::YamlError(format!("Failed to parse config file: {}", e)))
    }

    /// Apply environment variable overrides
    fn apply_env(&mut self) {
        if let Ok(val) = env::var("COUNTRY_NAMES_COUNTRIES") {
            self.resources.country_codes = val;
        }
        if let Ok(val) = env::var("COUNTRY_NAMES_LANGUAGES") {
            self.resources.language_codes = val;
        }
        if let Ok(val) = env::var("COUNTRY_NAMES_DATASET") {
            self.resources.dataset = val;
        }
    }

    /// Resolved path of the country code table
    pub fn country_codes_path(&self) -> Result<PathBuf> {
        path::resolve_resource(&self.resources.country_codes)
    }

    /// Resolved path of the language code table
    pub fn language_codes_path(&self) -> Result<PathBuf> {
        path::resolve_resource(&self.resources.language_codes)
    }

    /// Resolved path of the translation dataset
    pub fn dataset_path(&self) -> Result<PathBuf> {
        path::resolve_resource(&self.resources.dataset)
    }
}
