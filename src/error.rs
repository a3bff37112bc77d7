//! Error types for preset and settings operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing presets and settings.
#[derive(Error, Debug)]
pub enum PresetError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document parsed as JSON but is not a valid preset
    #[error("Invalid preset: {message}")]
    InvalidPreset {
        /// Description of what is wrong with the document
        message: String,
    },

    /// File did not exist where it was expected
    #[error("File not found: {path:?}")]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Storage error (localStorage in WASM)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PresetError {
    /// Create an invalid preset error with a message.
    pub fn invalid_preset(message: impl Into<String>) -> Self {
        Self::InvalidPreset {
            message: message.into(),
        }
    }
}
