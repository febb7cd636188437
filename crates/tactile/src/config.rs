//! Configuration loading.
//!
//! Buttons and presets are plain serde types, so hosts can embed them in any
//! format they like. For convenience this module reads them from TOML and
//! JSON, validating presets before returning them.
//!
//! # Preset files
//!
//! ```toml
//! [[transform]]
//! name = "pop"
//!
//! [[transform.settings]]
//! execution_state = "hovered"
//! is_scale_enabled = true
//! target_scale = 1.1
//! scale_duration = 0.15
//! scale_curve = "ease_out"
//!
//! [[color]]
//! name = "primary"
//!
//! [[color.settings]]
//! execution_state = "default"
//! color = { r = 0.2, g = 0.2, b = 0.25 }
//!
//! [[audio]]
//! name = "ui"
//!
//! [[audio.settings]]
//! execution_state = "pressed"
//! clip = "click"
//! volume = 0.8
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tactile_core::logging::targets;

use crate::button::ButtonType;
use crate::error::{Error, Result};
use crate::preset::{AudioPreset, ColorPreset, Preset, Setting, TransformPreset};

/// Construction-time settings of a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Selection policy.
    pub kind: ButtonType,
    /// Whether the button starts interactable.
    pub interactable: bool,
    /// Optional name for logs and lookups.
    pub name: Option<String>,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            kind: ButtonType::Button,
            interactable: true,
            name: None,
        }
    }
}

impl ButtonConfig {
    /// Parse from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parse from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// All presets known to a host, grouped by kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetLibrary {
    /// Scale presets.
    pub transform: Vec<TransformPreset>,
    /// Color presets.
    pub color: Vec<ColorPreset>,
    /// Sound presets.
    pub audio: Vec<AudioPreset>,
}

impl PresetLibrary {
    /// Parse and validate a library from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let library: Self = toml::from_str(text)?;
        library.validate()?;
        Ok(library)
    }

    /// Parse and validate a library from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let library: Self = serde_json::from_str(text)?;
        library.validate()?;
        Ok(library)
    }

    /// Read, parse and validate a library file.
    ///
    /// The extension picks the format: `.toml` or `.json`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(Error::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let library = parse(&text)?;
        tracing::debug!(
            target: targets::PRESET,
            path = %path.display(),
            transform = library.transform.len(),
            color = library.color.len(),
            audio = library.audio.len(),
            "preset library loaded"
        );
        Ok(library)
    }

    /// Validate every preset and check that names are unique per kind.
    pub fn validate(&self) -> Result<()> {
        validate_group("transform", &self.transform)?;
        validate_group("color", &self.color)?;
        validate_group("audio", &self.audio)
    }

    /// Look up a scale preset by name.
    pub fn transform(&self, name: &str) -> Option<&TransformPreset> {
        self.transform.iter().find(|p| p.name == name)
    }

    /// Look up a color preset by name.
    pub fn color(&self, name: &str) -> Option<&ColorPreset> {
        self.color.iter().find(|p| p.name == name)
    }

    /// Look up a sound preset by name.
    pub fn audio(&self, name: &str) -> Option<&AudioPreset> {
        self.audio.iter().find(|p| p.name == name)
    }
}

fn validate_group<S: Setting>(kind: &'static str, presets: &[Preset<S>]) -> Result<()> {
    let mut seen = HashSet::new();
    for preset in presets {
        if !seen.insert(preset.name.as_str()) {
            return Err(Error::DuplicatePreset {
                kind,
                name: preset.name.clone(),
            });
        }
        preset.validate()?;
    }
    Ok(())
}
