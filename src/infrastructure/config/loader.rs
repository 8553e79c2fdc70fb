use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Directory holding project configuration, relative to the working directory.
pub const CONFIG_DIR: &str = ".catalog";

/// Prefix for environment overrides, e.g. `CATALOG_BACKEND__BASE_URL`.
pub const ENV_PREFIX: &str = "CATALOG_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base_url: {0:?}. Must start with http:// or https://")]
    InvalidBaseUrl(String),

    #[error("Invalid categories_path: {0:?}. Must start with '/'")]
    InvalidCategoriesPath(String),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid initial_backoff_ms: {0}. Must be positive")]
    InvalidInitialBackoff(u64),

    #[error(
        "Invalid backoff configuration: initial_backoff_ms ({0}) must not exceed max_backoff_ms ({1})"
    )]
    InvalidBackoff(u64, u64),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration relative to the current working directory
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .catalog/config.yaml (project config)
    /// 3. .catalog/local.yaml (local overrides, optional)
    /// 4. Environment variables (CATALOG_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        Self::load_from_dir(Path::new("."))
    }

    /// Load configuration with `root` standing in for the working directory
    pub fn load_from_dir(root: impl AsRef<Path>) -> Result<Config> {
        let dir = root.as_ref().join(CONFIG_DIR);
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(dir.join("config.yaml")))
            .merge(Yaml::file(dir.join("local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let backend = &config.backend;
        if !(backend.base_url.starts_with("http://") || backend.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(backend.base_url.clone()));
        }

        if !backend.categories_path.starts_with('/') {
            return Err(ConfigError::InvalidCategoriesPath(
                backend.categories_path.clone(),
            ));
        }

        if backend.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(backend.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        // Checked regardless of failure policy
        let retry = &config.cache.retry;
        if retry.initial_backoff_ms == 0 {
            return Err(ConfigError::InvalidInitialBackoff(retry.initial_backoff_ms));
        }

        if retry.initial_backoff_ms > retry.max_backoff_ms {
            return Err(ConfigError::InvalidBackoff(
                retry.initial_backoff_ms,
                retry.max_backoff_ms,
            ));
        }

        Ok(())
    }
}
