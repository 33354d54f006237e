//! # Storefront Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     UP_WHATSAPP_NUMBER=5511999999999                                   │
//! │     UP_STORE_NAME="UP Universo das Pelúcias"                           │
//! │     UP_LOG_FILTER=info,up=debug                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $UP_CONFIG_PATH, or                                                │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/br.up.storefront/storefront.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! whatsapp_number = "5511999999999"
//! store_name = "UP Universo das Pelúcias"
//! log_filter = "info,up=debug"
//! ```
//!
//! A missing file at the platform default path is fine (defaults apply). A
//! missing file at an explicit `UP_CONFIG_PATH` is an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use up_core::validation::{validate_recipient, validate_store_name};
use up_core::{ValidationError, DEFAULT_STORE_NAME};

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "UP_CONFIG_PATH";
pub const WHATSAPP_NUMBER_ENV: &str = "UP_WHATSAPP_NUMBER";
pub const STORE_NAME_ENV: &str = "UP_STORE_NAME";
pub const LOG_FILTER_ENV: &str = "UP_LOG_FILTER";

const CONFIG_FILE_NAME: &str = "storefront.toml";

/// Recipient used until a real number is configured.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5511999999999";

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

// =============================================================================
// Storefront Configuration
// =============================================================================

/// Settings the cart needs from the outside world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Recipient of the checkout deep link (digits, with country code).
    pub whatsapp_number: String,

    /// Store name printed in the order message header.
    pub store_name: String,

    /// `tracing` filter directives; `RUST_LOG` still wins when set.
    pub log_filter: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            store_name: DEFAULT_STORE_NAME.to_string(),
            log_filter: None,
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from the process environment and config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `env` to look up variables.
    ///
    /// Split out from [`StorefrontConfig::load`] so tests don't have to
    /// touch the process environment.
    pub fn load_with<F>(env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match non_empty(env(CONFIG_PATH_ENV)) {
            Some(path) => {
                let path = PathBuf::from(path);
                Self::from_file(&path)?.ok_or(ConfigError::FileNotFound(path))?
            }
            None => match default_config_path() {
                Some(path) => Self::from_file(&path)?.unwrap_or_default(),
                None => Self::default(),
            },
        };

        config.apply_env(&env);
        config.validate()?;

        info!(
            store_name = %config.store_name,
            whatsapp_number = %config.whatsapp_number,
            "Storefront configuration loaded"
        );
        Ok(config)
    }

    /// Reads a TOML config file. `Ok(None)` when the file does not exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "No config file, using defaults");
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(?path, "Config file loaded");
        Ok(Some(config))
    }

    /// Checks every value. Called by the loaders after merging sources.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_recipient(&self.whatsapp_number)?;
        validate_store_name(&self.store_name)?;
        Ok(())
    }

    fn apply_env<F>(&mut self, env: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(number) = non_empty(env(WHATSAPP_NUMBER_ENV)) {
            self.whatsapp_number = number;
        }
        if let Some(name) = non_empty(env(STORE_NAME_ENV)) {
            self.store_name = name;
        }
        if let Some(filter) = non_empty(env(LOG_FILTER_ENV)) {
            self.log_filter = Some(filter);
        }
    }
}

/// Platform config location of `storefront.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("br", "up", "storefront")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
