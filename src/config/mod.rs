// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! The API credential deliberately does not live here. It is supplied via
//! the process environment and read once at startup.

use crate::error::Result;
use crate::generation;
use crate::media::remove_background::DEFAULT_THRESHOLD;
use crate::styles::IconStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IconForge";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Model identifier sent to the generation endpoint.
    pub model: Option<String>,
    /// Base URL override for the generation endpoint (e.g. a proxy).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Id of the style preselected on startup.
    #[serde(default)]
    pub default_style: Option<String>,
    /// Channel-wise distance from white used by background removal.
    #[serde(default)]
    pub background_threshold: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: Some(generation::DEFAULT_MODEL.to_string()),
            base_url: None,
            default_style: None,
            background_threshold: Some(DEFAULT_THRESHOLD),
        }
    }
}

impl Config {
    /// Model id, falling back to the built-in default.
    #[must_use]
    pub fn model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| generation::DEFAULT_MODEL.to_string())
    }

    /// Endpoint base URL, falling back to the public API.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| generation::DEFAULT_BASE_URL.to_string())
    }

    /// The style preselected on startup; unknown ids fall back to default.
    #[must_use]
    pub fn default_style(&self) -> IconStyle {
        self.default_style
            .as_deref()
            .and_then(IconStyle::from_id)
            .unwrap_or_default()
    }

    /// Background-removal threshold, clamped implicitly by the u8 type.
    #[must_use]
    pub fn background_threshold(&self) -> u8 {
        self.background_threshold.unwrap_or(DEFAULT_THRESHOLD)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    crate::app::paths::get_app_config_dir().map(|mut path| {
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            model: Some("gemini-2.5-flash-image".to_string()),
            base_url: Some("http://localhost:9090".to_string()),
            default_style: Some("clay".to_string()),
            background_threshold: Some(12),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.model, config.model);
        assert_eq!(loaded.base_url, config.base_url);
        assert_eq!(loaded.default_style, config.default_style);
        assert_eq!(loaded.background_threshold, config.background_threshold);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.base_url.is_none());
    }

    #[test]
    fn default_style_falls_back_on_unknown_id() {
        let config = Config {
            default_style: Some("vaporwave".to_string()),
            ..Config::default()
        };
        assert_eq!(config.default_style(), IconStyle::default());
    }

    #[test]
    fn accessors_fall_back_to_builtins() {
        let config = Config {
            model: None,
            base_url: None,
            default_style: None,
            background_threshold: None,
        };
        assert_eq!(config.model(), generation::DEFAULT_MODEL);
        assert_eq!(config.base_url(), generation::DEFAULT_BASE_URL);
        assert_eq!(config.background_threshold(), DEFAULT_THRESHOLD);
    }
}
