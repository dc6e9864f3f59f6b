//! Configuration management for the application.
//!
//! This module handles loading and saving application configuration in TOML
//! format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_API_BASE, DEFAULT_OUTPUT_PATH};

/// Remote API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Figma API host (e.g., "https://api.figma.com")
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Payload file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the debug copy of the payload is written
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Remote API settings
    pub api: ApiConfig,
    /// Payload file settings
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the configuration directory path.
    ///
    /// `FIGMA_TOKEN_SYNC_CONFIG_DIR` takes precedence over the platform directory:
    /// - Linux: `~/.config/figma-token-sync/`
    /// - macOS: `~/Library/Application Support/figma-token-sync/`
    /// - Windows: `%APPDATA%\figma-token-sync\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

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

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        let config_path = Self::config_file_path()?;
        fs::write(&config_path, content).context(format!(
            "Failed to write config file: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let base_url = &self.api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!("API base URL must start with http:// or https://, got '{base_url}'");
        }

        if self.output.path.as_os_str().is_empty() {
            anyhow::bail!("Output path must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests below change process-wide environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.api.base_url, "https://api.figma.com");
        assert_eq!(config.output.path, PathBuf::from("build/figma.output.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.output.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[api]\nbase_url = \"http://localhost:9000\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());

        assert!(!Config::config_file_path().unwrap().exists());
        assert_eq!(Config::load().unwrap(), Config::new());

        let mut config = Config::new();
        config.output.path = PathBuf::from("dist/payload.json");
        config.save().unwrap();

        assert!(Config::config_file_path().unwrap().exists());
        let loaded = Config::load().unwrap();
        assert_eq!(loaded, config);

        std::env::remove_var(CONFIG_DIR_ENV);
    }

    #[test]
    fn test_config_load_invalid_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());

        fs::write(temp_dir.path().join("config.toml"), "api = [").unwrap();
        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        std::env::remove_var(CONFIG_DIR_ENV);
    }
}
