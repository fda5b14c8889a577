//! Configuration management for the site.
//!
//! This module handles loading, validating, and saving the site configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

/// Fixture content configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory with JSON fixture files that replace the embedded content.
    ///
    /// Files missing from the directory fall back to the embedded copies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Contact form configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Artificial latency of the simulated submission, in milliseconds.
    pub simulated_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 1500,
        }
    }
}

/// Animated counter defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Animation duration in milliseconds
    pub duration_ms: u64,
    /// Fraction of the element that must be visible before counting starts
    pub visibility_threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2500,
            visibility_threshold: 0.3,
        }
    }
}

/// Site configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ZAHEFO/config.toml`
/// - macOS: `~/Library/Application Support/ZAHEFO/config.toml`
/// - Windows: `%APPDATA%\ZAHEFO\config.toml`
///
/// The directory can be overridden with the `ZAHEFO_CONFIG_DIR` environment
/// variable.
///
/// # Validation
///
/// - `server.port` must be non-zero
/// - `counter.visibility_threshold` must be in `(0, 1]`
/// - `content.dir` must exist when set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Fixture content location
    pub content: ContentConfig,
    /// Contact form settings
    pub contact: ContactConfig,
    /// Counter animation defaults
    pub counter: CounterConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Honours `ZAHEFO_CONFIG_DIR`, otherwise uses the platform config dir.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Writes configuration to `path` (temp file + rename).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be non-zero");
        }

        let threshold = self.counter.visibility_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            anyhow::bail!(
                "Counter visibility threshold must be in (0, 1], got {}",
                threshold
            );
        }

        if let Some(dir) = &self.content.dir {
            if !dir.is_dir() {
                anyhow::bail!("Content directory does not exist: {}", dir.display());
            }
        }

        Ok(())
    }
}
