//! Feedback features attached to a button.
//!
//! A [`Button`](crate::button::Button) delegates its visual and audible
//! feedback to two optional collaborators:
//!
//! - [`ColorFeature`] - shows the color for a state, instantly or gradually
//! - [`AudioFeature`] - plays the sound for a state
//!
//! Both are fire-and-forget: the button never waits for a color blend to
//! finish or a sound to end. A button without a feature simply skips that
//! channel.
//!
//! The [`color`] and [`audio`] submodules provide stock implementations that
//! read their settings from presets and hand the work to host services.

pub mod audio;
pub mod color;

use serde::{Deserialize, Serialize};

use crate::button::ButtonState;

pub use audio::{AudioSink, PresetAudioFeature};
pub use color::{ColorTweenRunner, PresetColorFeature};

/// How a color change is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeMode {
    /// Set the final color with no interpolation.
    Instant,
    /// Blend towards the color using the feature's own duration and curve.
    #[default]
    Gradual,
}

/// Color feedback collaborator.
pub trait ColorFeature: Send + Sync {
    /// Show the color for `state` immediately.
    fn change_instantly(&self, state: ButtonState);

    /// Start (or retarget) a blend towards the color for `state`.
    fn change_gradually(&self, state: ButtonState);

    /// Apply the color for `state` using `mode`.
    fn change(&self, state: ButtonState, mode: ChangeMode) {
        match mode {
            ChangeMode::Instant => self.change_instantly(state),
            ChangeMode::Gradual => self.change_gradually(state),
        }
    }
}

/// Audio feedback collaborator.
pub trait AudioFeature: Send + Sync {
    /// Play the sound for `state`.
    fn play(&self, state: ButtonState);
}
