//! Preset data consumed by tween runners and feedback features.
//!
//! A preset is a named, ordered list of settings. Each setting is switched
//! on or off on its own and names the [`ButtonState`] it applies to. Presets
//! only describe changes ("blend to this color over 0.2 s along this
//! curve"); running them over time is the host's tween engine's job.
//!
//! - [`TransformPreset`] - scale changes
//! - [`ColorPreset`] - color changes
//! - [`AudioPreset`] - sounds
//!
//! Settings are immutable once loaded. Call [`Preset::validate`] (the loaders
//! in [`crate::config`] do this for you) before handing a preset to a runner.

mod audio;
mod color;
mod curve;
mod transform;

use serde::{Deserialize, Serialize};

use crate::button::ButtonState;
use crate::error::{Error, Result};

pub use audio::AudioSetting;
pub use color::{Color, ColorSetting, ColorTween};
pub use curve::{Curve, Keyframe};
pub use transform::{ScaleTween, TransformSetting};

/// Scale changes, one setting per state.
pub type TransformPreset = Preset<TransformSetting>;

/// Color changes, one setting per state.
pub type ColorPreset = Preset<ColorSetting>;

/// Sounds, one setting per state.
pub type AudioPreset = Preset<AudioSetting>;

/// Reasons a setting is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PresetError {
    /// Durations are seconds and must be finite and non-negative.
    #[error("duration must be finite and non-negative, got {0}")]
    InvalidDuration(f32),

    /// A sampled curve needs at least one keyframe.
    #[error("curve has no keyframes")]
    EmptyCurve,

    /// Keyframes live in the unit square.
    #[error("keyframe {index} ({time}, {value}) is outside [0, 1]")]
    KeyframeOutOfRange { index: usize, time: f32, value: f32 },

    /// Keyframe times must not decrease.
    #[error("keyframe {index} is earlier than the keyframe before it")]
    KeyframeOutOfOrder { index: usize },

    /// Scale targets must be finite.
    #[error("target scale must be finite, got {0}")]
    InvalidScale(f32),

    /// Color channels are in `[0, 1]`.
    #[error("color channel '{channel}' must be within [0, 1], got {value}")]
    InvalidColor { channel: &'static str, value: f32 },

    /// Volume is in `[0, 1]`.
    #[error("volume must be within [0, 1], got {0}")]
    InvalidVolume(f32),
}

/// Common shape of every preset setting.
pub trait Setting {
    /// Whether the setting takes part at all.
    fn is_enabled(&self) -> bool;

    /// The button state this setting applies to.
    fn execution_state(&self) -> ButtonState;

    /// Check the setting's values.
    fn validate(&self) -> std::result::Result<(), PresetError>;
}

/// A named, ordered list of settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset<S> {
    /// Preset name, unique within a [`PresetLibrary`](crate::config::PresetLibrary).
    pub name: String,
    /// Settings in declaration order.
    #[serde(default = "Vec::new")]
    pub settings: Vec<S>,
}

impl<S: Setting> Preset<S> {
    /// Create an empty preset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: Vec::new(),
        }
    }

    /// Append a setting using builder pattern.
    pub fn with_setting(mut self, setting: S) -> Self {
        self.settings.push(setting);
        self
    }

    /// Enabled settings for `state`, in order.
    pub fn settings_for(&self, state: ButtonState) -> impl Iterator<Item = &S> {
        self.settings
            .iter()
            .filter(move |s| s.is_enabled() && s.execution_state() == state)
    }

    /// The first enabled setting for `state`.
    pub fn setting_for(&self, state: ButtonState) -> Option<&S> {
        self.settings_for(state).next()
    }

    /// Validate every setting, enabled or not.
    pub fn validate(&self) -> Result<()> {
        for (index, setting) in self.settings.iter().enumerate() {
            setting.validate().map_err(|source| Error::InvalidPreset {
                preset: self.name.clone(),
                index,
                source,
            })?;
        }
        Ok(())
    }
}

/// Seconds must be finite and non-negative.
pub(crate) fn check_duration(seconds: f32) -> std::result::Result<(), PresetError> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(())
    } else {
        Err(PresetError::InvalidDuration(seconds))
    }
}

fn enabled_by_default() -> bool {
    true
}
