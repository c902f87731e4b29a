// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Besides the usual display preferences (language, theme), the config carries
//! the two remote endpoints the client talks to: the image metadata API and
//! the external image host used as the upload side-channel.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

/// Base URL of the image metadata API when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Endpoint of the external image host when none is configured.
pub const DEFAULT_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

/// Number of columns in the gallery grid when none is configured.
pub const DEFAULT_GRID_COLUMNS: u16 = 3;

/// Number of decoded thumbnails kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_ENTRIES: usize = 128;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub upload_url: Option<String>,
    /// API key for the image host, sent as the `key` query parameter.
    #[serde(default)]
    pub upload_key: Option<String>,
    #[serde(default)]
    pub grid_columns: Option<u16>,
    #[serde(default)]
    pub thumbnail_cache_entries: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::default(),
            api_base_url: None,
            upload_url: None,
            upload_key: None,
            grid_columns: Some(DEFAULT_GRID_COLUMNS),
            thumbnail_cache_entries: Some(DEFAULT_THUMBNAIL_CACHE_ENTRIES),
        }
    }
}

impl Config {
    /// The configured API base URL, or the default when unset.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// The configured image host endpoint, or the default when unset.
    pub fn upload_url(&self) -> &str {
        self.upload_url.as_deref().unwrap_or(DEFAULT_UPLOAD_URL)
    }

    /// Gallery grid columns, clamped to at least one column.
    pub fn grid_columns(&self) -> u16 {
        self.grid_columns.unwrap_or(DEFAULT_GRID_COLUMNS).max(1)
    }

    /// Thumbnail cache capacity, clamped to at least one entry.
    pub fn thumbnail_cache_entries(&self) -> usize {
        self.thumbnail_cache_entries
            .unwrap_or(DEFAULT_THUMBNAIL_CACHE_ENTRIES)
            .max(1)
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_endpoints() {
        let config = Config {
            language: Some("pt-BR".to_string()),
            api_base_url: Some("https://gallery.example.org".to_string()),
            upload_url: Some("https://host.example.org/upload".to_string()),
            upload_key: Some("secret".to_string()),
            grid_columns: Some(4),
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert_eq!(loaded.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn unset_endpoints_fall_back_to_defaults() {
        let config = Config {
            api_base_url: None,
            upload_url: None,
            ..Config::default()
        };
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.upload_url(), DEFAULT_UPLOAD_URL);
    }

    #[test]
    fn grid_columns_never_drop_below_one() {
        let config = Config {
            grid_columns: Some(0),
            ..Config::default()
        };
        assert_eq!(config.grid_columns(), 1);
    }
}
