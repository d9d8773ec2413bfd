// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[api]` - Deletion endpoint base URL and request timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_REEL_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const CONFIG_DIR_ENV: &str = "ICED_REEL_CONFIG_DIR";

/// Default base URL for the deletion API; points at a local stub so a demo
/// feed never reaches a real backend.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";

/// Default request timeout for API calls, in seconds.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_API_TIMEOUT_SECS
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Deletion API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ApiConfig {
    /// Base URL of the photo API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Resolves the directory holding `settings.toml`.
///
/// `ICED_REEL_CONFIG_DIR` takes precedence so tests and portable installs
/// can redirect the whole config tree.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut p| {
        p.push("iced_reel");
        p
    })
}

fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|mut p| {
        p.push(CONFIG_FILE);
        p
    })
}

/// Loads the configuration from the resolved location.
///
/// A missing file yields defaults silently; an unreadable or malformed file
/// also yields defaults but reports a warning message the caller can surface
/// to the user.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_file_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("ignoring invalid config {}: {}", path.display(), err)),
        ),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)?;
    let config = toml::from_str(&raw)?;
    Ok(config)
}

/// Saves the configuration to the resolved location, creating the directory
/// if needed.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = config_file_path() else {
        return Ok(());
    };
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = toml::to_string_pretty(config)?;
    fs::write(path, raw)?;
    Ok(())
}
