use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Settings;
use crate::infrastructure::logging::logger::parse_log_level;

/// Settings file read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = ".cloudverify.yaml";

/// Prefix for environment overrides, e.g. `CLOUDVERIFY_TIMEOUT_SECS`
pub const ENV_PREFIX: &str = "CLOUDVERIFY_";

/// Longest accepted ping timeout
const MAX_TIMEOUT_SECS: u64 = 300;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Timeout outside the accepted range
    #[error("Invalid timeout_secs: {0}. Must be between 1 and {MAX_TIMEOUT_SECS}")]
    InvalidTimeout(u64),

    /// Base URL that is empty or not absolute http(s)
    #[error("Invalid api_base_url: {0}. Must be an absolute http(s) URL")]
    InvalidBaseUrl(String),

    /// Storage folder set to an empty string
    #[error("Storage folder `{0}` cannot be empty")]
    EmptyStorageFolder(&'static str),

    /// Log level not understood by the filter
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Settings loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `path`, or `.cloudverify.yaml` in the working directory (optional)
    /// 3. Environment variables (`CLOUDVERIFY_*` prefix, `__` for nesting)
    ///
    /// An explicitly given `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Settings> {
        let figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        let figment = match path {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                figment.merge(Yaml::file(path))
            }
            None => figment.merge(Yaml::file(DEFAULT_CONFIG_FILE)),
        };

        let settings: Settings = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract settings from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading or after CLI overrides
    pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
        if settings.timeout_secs == 0 || settings.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout(settings.timeout_secs));
        }

        let url_ok = reqwest::Url::parse(&settings.api_base_url)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false);
        if !url_ok {
            return Err(ConfigError::InvalidBaseUrl(settings.api_base_url.clone()));
        }

        if settings.storage.cv_folder.trim().is_empty() {
            return Err(ConfigError::EmptyStorageFolder("cv_folder"));
        }
        if settings.storage.profile_picture_folder.trim().is_empty() {
            return Err(ConfigError::EmptyStorageFolder("profile_picture_folder"));
        }

        if parse_log_level(&settings.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(settings.logging.level.clone()));
        }

        Ok(())
    }
}
