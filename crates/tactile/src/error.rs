//! Error types for configuration and preset loading.
//!
//! Button transitions never fail; only reading configuration does.

use std::path::PathBuf;

use crate::preset::PresetError;

/// Result type alias for tactile operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension names no known format.
    #[error("Unsupported configuration format for '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// A preset setting failed validation.
    #[error("Invalid setting {index} in preset '{preset}': {source}")]
    InvalidPreset {
        preset: String,
        index: usize,
        #[source]
        source: PresetError,
    },

    /// Two presets of the same kind share a name.
    #[error("Duplicate {kind} preset '{name}'")]
    DuplicatePreset { kind: &'static str, name: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
