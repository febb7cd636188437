//! Color settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::button::ButtonState;

use super::{Curve, PresetError, Setting, check_duration, enabled_by_default};

/// A straight (non-premultiplied) RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Per-channel linear interpolation; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Check that every channel is within `[0, 1]`.
    pub fn validate(&self) -> Result<(), PresetError> {
        for (channel, value) in [("r", self.r), ("g", self.g), ("b", self.b), ("a", self.a)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PresetError::InvalidColor { channel, value });
            }
        }
        Ok(())
    }
}

/// The color shown for one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSetting {
    /// Whether this setting takes part at all.
    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
    /// The button state this setting applies to.
    #[serde(default)]
    pub execution_state: ButtonState,
    /// Color to show.
    pub color: Color,
    /// Seconds a gradual change takes.
    #[serde(default)]
    pub duration: f32,
    /// Progress curve for gradual changes.
    #[serde(default)]
    pub curve: Curve,
}

impl ColorSetting {
    /// An enabled setting showing `color` for `state`, changing instantly.
    pub fn new(execution_state: ButtonState, color: Color) -> Self {
        Self {
            is_enabled: true,
            execution_state,
            color,
            duration: 0.0,
            curve: Curve::default(),
        }
    }

    /// Set the blend duration and curve, using builder pattern.
    pub fn with_blend(mut self, duration: f32, curve: Curve) -> Self {
        self.duration = duration;
        self.curve = curve;
        self
    }

    /// Set whether the setting is enabled, using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    /// The blend request for this setting.
    pub fn color_tween(&self) -> ColorTween {
        ColorTween {
            target: self.color,
            duration: Duration::try_from_secs_f32(self.duration).unwrap_or(Duration::ZERO),
            curve: self.curve.clone(),
        }
    }
}

impl Setting for ColorSetting {
    fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    fn execution_state(&self) -> ButtonState {
        self.execution_state
    }

    fn validate(&self) -> Result<(), PresetError> {
        self.color.validate()?;
        check_duration(self.duration)?;
        self.curve.validate()
    }
}

/// A color blend request.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTween {
    /// Color to reach.
    pub target: Color,
    /// Time to reach it.
    pub duration: Duration,
    /// Progress curve.
    pub curve: Curve,
}

impl ColorTween {
    /// Color at `progress` (0 to 1) when starting from `from`.
    pub fn sample(&self, from: Color, progress: f32) -> Color {
        from.lerp(self.target, self.curve.evaluate(progress))
    }

    /// Color after `elapsed`, starting from `from`.
    pub fn value_at(&self, from: Color, elapsed: Duration) -> Color {
        if self.duration.is_zero() {
            return self.target;
        }
        self.sample(from, elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }
}
