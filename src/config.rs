//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::color::ResolverStrategy;
use crate::constants::{CONFIG_DIR_NAME, DEFAULT_TEXT_COLOR};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Color resolution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResolverConfig {
    /// Which resolver validates and resolves colors
    pub strategy: ResolverStrategy,
}

/// Contrast audit settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    /// Foreground color audited against the card background
    pub text_color: String,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

/// Style memoization settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum cached styles; 0 disables the cache
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber` filter directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Color resolution
    pub resolver: ResolverConfig,
    /// Contrast audit
    pub contrast: ContrastConfig,
    /// Style memoization
    pub cache: CacheConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/GradientCard/`
    /// - macOS: `~/Library/Application Support/GradientCard/`
    /// - Windows: `%APPDATA%\GradientCard\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads and validates configuration from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::read_from(path)?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Parses configuration from `path` without validating it.
    ///
    /// Callers that override settings after loading validate the result themselves.
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).context(format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path)
            .context(format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `text_color` resolves to RGB with the configured resolver
    /// - `filter` is not empty
    pub fn validate(&self) -> Result<()> {
        let resolver = self.resolver.strategy.build();
        if resolver.to_rgb(&self.contrast.text_color).is_none() {
            anyhow::bail!(
                "Contrast text color '{}' cannot be resolved by the {} resolver",
                self.contrast.text_color,
                resolver.name()
            );
        }

        if self.logging.filter.trim().is_empty() {
            anyhow::bail!("Logging filter must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.resolver.strategy, ResolverStrategy::Computed);
        assert_eq!(config.contrast.text_color, "#000000");
        assert_eq!(config.cache.capacity, 64);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_config_validate() {
        assert!(Config::new().validate().is_ok());

        let mut config = Config::new();
        config.contrast.text_color = "not-a-color".to_string();
        assert!(config.validate().is_err());

        // Named colors only resolve with the computed resolver
        let mut config = Config::new();
        config.contrast.text_color = "black".to_string();
        assert!(config.validate().is_ok());
        config.resolver.strategy = ResolverStrategy::Pattern;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.logging.filter = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.resolver.strategy = ResolverStrategy::Pattern;
        config.cache.capacity = 0;
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[resolver]\nstrategy = \"pattern\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.resolver.strategy, ResolverStrategy::Pattern);
        assert_eq!(loaded.cache.capacity, 64);
    }

    #[test]
    fn test_read_from_skips_validation() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(
            &config_file,
            "[resolver]\nstrategy = \"pattern\"\n\n[contrast]\ntext_color = \"black\"\n",
        )
        .unwrap();

        let mut config = Config::read_from(&config_file).unwrap();
        assert!(config.validate().is_err());
        assert!(Config::load_from(&config_file).is_err());

        config.resolver.strategy = ResolverStrategy::Computed;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[resolver]\nstrategy = \"canvas\"\n").unwrap();

        let err = Config::load_from(&config_file).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_dir_name() {
        if let Ok(dir) = Config::config_dir() {
            assert!(dir.ends_with("GradientCard"));
        }
    }
}
