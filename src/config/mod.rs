// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use sunwise::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("ms".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SunWise";

/// Backend used when the config does not name one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Hold duration (milliseconds) before a sustained press opens the detail
/// modal, when the config does not override it.
pub const DEFAULT_HOLD_MS: u64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default)]
    pub hold_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            backend_url: None,
            hold_ms: Some(DEFAULT_HOLD_MS),
        }
    }
}

impl Config {
    /// The backend base URL, falling back to [`DEFAULT_BACKEND_URL`].
    #[must_use]
    pub fn backend_url(&self) -> String {
        self.backend_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
    }

    /// The press-hold duration, falling back to [`DEFAULT_HOLD_MS`].
    #[must_use]
    pub fn hold(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.hold_ms.unwrap_or(DEFAULT_HOLD_MS))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
