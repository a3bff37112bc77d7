//! Editor settings.
//!
//! `AppSettings` is the document the editor keeps its whole state in: layout
//! geometry plus the truth table. It is stored as JSON, either at the default
//! path under the platform config directory or in localStorage on the web.

use serde::{Deserialize, Serialize};

use crate::error::PresetError;
use crate::truth_table::TruthTable;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Default segment count for a fresh layout (a classic seven-segment digit).
pub const DEFAULT_NUM_SEGMENTS: i64 = 7;

/// Default segment box size in pixels.
pub const DEFAULT_SEGMENT_WIDTH: f64 = 40.0;
pub const DEFAULT_SEGMENT_HEIGHT: f64 = 10.0;

/// Editor state persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Base URL the editor loads segment images and presets from
    #[serde(default)]
    pub base_url: String,

    /// Number of segments in the layout
    #[serde(default = "default_num_segments")]
    pub num_segments: i64,

    /// Width of a segment in pixels
    #[serde(default = "default_segment_width")]
    pub segment_width: f64,

    /// Height of a segment in pixels
    #[serde(default = "default_segment_height")]
    pub segment_height: f64,

    /// Glyph label to lit segments
    #[serde(default)]
    pub truth_table: TruthTable,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_num_segments() -> i64 {
    DEFAULT_NUM_SEGMENTS
}

fn default_segment_width() -> f64 {
    DEFAULT_SEGMENT_WIDTH
}

fn default_segment_height() -> f64 {
    DEFAULT_SEGMENT_HEIGHT
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            num_segments: default_num_segments(),
            segment_width: default_segment_width(),
            segment_height: default_segment_height(),
            truth_table: TruthTable::new(),
            log_level: LogLevel::default(),
        }
    }
}

impl AppSettings {
    /// Serialize the settings to JSON with compact arrays.
    pub fn to_json(&self) -> Result<String, PresetError> {
        crate::preset::to_compact_json(self)
    }

    /// Deserialize settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, PresetError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.warn_on_inconsistencies();
        Ok(settings)
    }

    /// Truth table rows whose length is not `num_segments`, as `(label, len)`.
    pub fn row_length_mismatches(&self) -> Vec<(&str, usize)> {
        let expected = usize::try_from(self.num_segments).unwrap_or(0);
        self.truth_table.length_mismatches(expected)
    }

    fn warn_on_inconsistencies(&self) {
        if self.num_segments <= 0 {
            log::warn!(
                "Settings declare {} segments; colors will fall back to black",
                self.num_segments
            );
        }
        for (label, len) in self.row_length_mismatches() {
            log::warn!(
                "Truth table row '{}' has {} entries, expected {}",
                label,
                len,
                self.num_segments
            );
        }
    }

    /// Get the default filename for settings export.
    pub fn default_filename() -> &'static str {
        "segment-designer-settings.json"
    }

    /// Get the default settings path for auto-load/save.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(
                config_dir
                    .join("segment-designer")
                    .join(Self::default_filename()),
            )
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("segment-designer")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load settings from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No settings file found at {:?}", path);
            return None;
        }

        match crate::preset::load_settings(&path) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Failed to load settings file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save settings to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<(), PresetError> {
        let path = Self::default_path().ok_or_else(|| {
            PresetError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        crate::preset::save_settings(self, &path)
    }

    /// LocalStorage key for WASM settings persistence.
    #[cfg(target_arch = "wasm32")]
    const LOCALSTORAGE_KEY: &'static str = "segment-designer-settings";

    /// Try to load settings from localStorage (WASM only).
    /// Returns None if not found or can't be parsed.
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_local_storage() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;

        match storage.get_item(Self::LOCALSTORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from localStorage");
                    Some(settings)
                }
                Err(e) => {
                    log::warn!("Failed to parse settings from localStorage: {}", e);
                    None
                }
            },
            Ok(None) => {
                log::debug!("No settings found in localStorage");
                None
            }
            Err(e) => {
                log::warn!("Failed to read from localStorage: {:?}", e);
                None
            }
        }
    }

    /// Save settings to localStorage (WASM only).
    #[cfg(target_arch = "wasm32")]
    pub fn save_to_local_storage(&self) -> Result<(), PresetError> {
        let window = web_sys::window()
            .ok_or_else(|| PresetError::Storage("No window object available".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| PresetError::Storage(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| PresetError::Storage("localStorage not available".to_string()))?;

        let json = self.to_json()?;

        storage
            .set_item(Self::LOCALSTORAGE_KEY, &json)
            .map_err(|e| PresetError::Storage(format!("Failed to save to localStorage: {:?}", e)))?;

        log::info!("Saved settings to localStorage");
        Ok(())
    }
}
