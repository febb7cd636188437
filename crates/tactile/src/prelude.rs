//! Commonly used types.
//!
//! ```ignore
//! use tactile::prelude::*;
//! ```

// ============================================================================
// Buttons
// ============================================================================

pub use crate::button::{
    Button, ButtonBuilder, ButtonEvent, ButtonId, ButtonState, ButtonType, PointerEvent,
};

// ============================================================================
// Feedback Features
// ============================================================================

pub use crate::feature::{
    AudioFeature, AudioSink, ChangeMode, ColorFeature, ColorTweenRunner, PresetAudioFeature,
    PresetColorFeature,
};

// ============================================================================
// Presets and Configuration
// ============================================================================

pub use crate::animation::Easing;
pub use crate::config::{ButtonConfig, PresetLibrary};
pub use crate::preset::{
    AudioPreset, AudioSetting, Color, ColorPreset, ColorSetting, Curve, TransformPreset,
    TransformSetting,
};

// ============================================================================
// Signals and Errors
// ============================================================================

pub use crate::error::Error;
pub use tactile_core::{ConnectionId, Signal};
