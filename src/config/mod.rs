// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: loading and saving
//! `settings.toml`, and resolving it into the immutable values the stream
//! pipeline is built from.
//!
//! # Configuration Sections
//!
//! - `[api]` - API key, user id, endpoint and size-lookup memo capacity
//! - `[gallery]` - Row height, tile margin, scroll trigger and sort order
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PHOTO_STREAM_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use photo_stream::config::{self, ApiOverrides};
//!
//! let (config, _warning) = config::load();
//! let api = config.api_config(&ApiOverrides::from_env()).expect("api key configured");
//! let gallery = config.gallery_settings();
//! assert!(gallery.row_height > 0);
//! # let _ = api;
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::stream::SortOrder;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiSection {
    /// API key issued by the photo host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Owner of the public stream to display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// REST endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Number of memoized size lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_cache_entries: Option<usize>,
}

/// Grid presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GallerySection {
    /// Target row height in pixels.
    #[serde(default = "default_row_height", skip_serializing_if = "Option::is_none")]
    pub row_height: Option<u32>,

    /// Horizontal gutter per tile in pixels.
    #[serde(default = "default_tile_margin", skip_serializing_if = "Option::is_none")]
    pub tile_margin: Option<u32>,

    /// Fraction of the document height that triggers loading more photos.
    #[serde(
        default = "default_scroll_trigger_ratio",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_trigger_ratio: Option<f32>,

    /// Initial sort order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            row_height: default_row_height(),
            tile_margin: default_tile_margin(),
            scroll_trigger_ratio: default_scroll_trigger_ratio(),
            sort_order: Some(SortOrder::default()),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,

    #[serde(default)]
    pub gallery: GallerySection,
}

// =============================================================================
// Resolved Values
// =============================================================================

/// Values supplied outside the config file (CLI flags, environment).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiOverrides {
    pub api_key: Option<String>,
    pub user_id: Option<String>,
}

impl ApiOverrides {
    /// Reads the API key from `PHOTO_STREAM_API_KEY`, ignoring empty values.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(ENV_API_KEY).ok().filter(|key| !key.is_empty()),
            user_id: None,
        }
    }
}

/// Immutable API configuration injected into the HTTP client and fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_key: String,
    pub user_id: String,
    pub endpoint: String,
    pub extras: Vec<String>,
    pub size_cache_entries: usize,
}

/// Resolved, clamped gallery settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GallerySettings {
    pub row_height: u32,
    pub tile_margin: u32,
    pub scroll_trigger_ratio: f32,
    pub sort_order: SortOrder,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Config::default().gallery_settings()
    }
}

impl Config {
    /// Builds the API configuration, letting overrides win over the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no non-empty API key is available.
    pub fn api_config(&self, overrides: &ApiOverrides) -> Result<ApiConfig> {
        let api_key = overrides
            .api_key
            .clone()
            .or_else(|| self.api.api_key.clone())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(format!(
                    "missing API key: set [api].api_key, {ENV_API_KEY} or --api-key"
                ))
            })?;

        let user_id = overrides
            .user_id
            .clone()
            .or_else(|| self.api.user_id.clone())
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

        let endpoint = self
            .api
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let size_cache_entries = self
            .api
            .size_cache_entries
            .unwrap_or(DEFAULT_SIZE_CACHE_ENTRIES)
            .clamp(MIN_SIZE_CACHE_ENTRIES, MAX_SIZE_CACHE_ENTRIES);

        Ok(ApiConfig {
            api_key,
            user_id,
            endpoint,
            extras: DEFAULT_EXTRAS.iter().map(ToString::to_string).collect(),
            size_cache_entries,
        })
    }

    /// Resolves gallery settings, clamping out-of-range values.
    #[must_use]
    pub fn gallery_settings(&self) -> GallerySettings {
        GallerySettings {
            row_height: self
                .gallery
                .row_height
                .unwrap_or(DEFAULT_ROW_HEIGHT)
                .clamp(MIN_ROW_HEIGHT, MAX_ROW_HEIGHT),
            tile_margin: self
                .gallery
                .tile_margin
                .unwrap_or(DEFAULT_TILE_MARGIN)
                .min(MAX_TILE_MARGIN),
            scroll_trigger_ratio: self
                .gallery
                .scroll_trigger_ratio
                .unwrap_or(DEFAULT_SCROLL_TRIGGER_RATIO)
                .clamp(MIN_SCROLL_TRIGGER_RATIO, MAX_SCROLL_TRIGGER_RATIO),
            sort_order: self.gallery.sort_order.unwrap_or_default(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_row_height() -> Option<u32> {
    Some(DEFAULT_ROW_HEIGHT)
}

fn default_tile_margin() -> Option<u32> {
    Some(DEFAULT_TILE_MARGIN)
}

fn default_scroll_trigger_ratio() -> Option<f32> {
    Some(DEFAULT_SCROLL_TRIGGER_RATIO)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
