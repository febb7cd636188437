//! Preset-driven color feature.
//!
//! [`PresetColorFeature`] resolves the [`ColorSetting`](crate::preset::ColorSetting)
//! for a state and forwards it to the host's [`ColorTweenRunner`], which owns
//! the actual rendering and timing.
//!
//! ```ignore
//! let feature = PresetColorFeature::new(library.color("primary").unwrap().clone(), runner);
//! let button = ButtonBuilder::new().color_feature(Arc::new(feature)).build();
//! ```

use tactile_core::logging::targets;

use crate::button::ButtonState;
use crate::preset::{Color, ColorPreset, ColorTween};

use super::ColorFeature;

/// Host service that shows colors on a widget.
pub trait ColorTweenRunner: Send + Sync {
    /// Show `color` now, cancelling any running blend.
    fn set_color(&self, color: Color);

    /// Blend from the current color towards `tween.target`, replacing any
    /// running blend.
    fn start_tween(&self, tween: ColorTween);
}

/// A [`ColorFeature`] reading its colors from a [`ColorPreset`].
///
/// The first enabled setting for a state wins. States without a setting
/// leave the color unchanged.
pub struct PresetColorFeature<R> {
    preset: ColorPreset,
    runner: R,
}

impl<R: ColorTweenRunner> PresetColorFeature<R> {
    /// Create a feature for `preset` driving `runner`.
    pub fn new(preset: ColorPreset, runner: R) -> Self {
        Self { preset, runner }
    }

    /// The preset in use.
    pub fn preset(&self) -> &ColorPreset {
        &self.preset
    }

    /// The runner in use.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}

impl<R: ColorTweenRunner> ColorFeature for PresetColorFeature<R> {
    fn change_instantly(&self, state: ButtonState) {
        match self.preset.setting_for(state) {
            Some(setting) => self.runner.set_color(setting.color),
            None => tracing::trace!(
                target: targets::FEATURE,
                preset = %self.preset.name,
                %state,
                "no color setting"
            ),
        }
    }

    fn change_gradually(&self, state: ButtonState) {
        match self.preset.setting_for(state) {
            Some(setting) => self.runner.start_tween(setting.color_tween()),
            None => tracing::trace!(
                target: targets::FEATURE,
                preset = %self.preset.name,
                %state,
                "no color setting"
            ),
        }
    }
}
