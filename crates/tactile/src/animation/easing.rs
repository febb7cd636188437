//! Named progress curves.
//!
//! Presets refer to these by name in configuration (`curve = "ease_out"`);
//! tween runners sample them through [`Curve`](crate::preset::Curve).

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// A named mapping from linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Identity.
    #[default]
    Linear,
    /// `t^2`.
    EaseIn,
    /// Mirrored `t^2`.
    EaseOut,
    /// Quadratic in, then quadratic out.
    EaseInOut,
    /// `t^3`.
    EaseInCubic,
    /// Mirrored `t^3`.
    EaseOutCubic,
    /// Cubic in, then cubic out.
    EaseInOutCubic,
    /// Quarter cosine wave.
    EaseInSine,
    /// Quarter sine wave.
    EaseOutSine,
    /// Half cosine wave.
    EaseInOutSine,
}

impl Easing {
    /// Every easing function.
    pub const ALL: [Easing; 10] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
    ];

    /// Apply the easing to a progress value.
    ///
    /// Progress is clamped to `[0, 1]`; every function maps 0 to 0 and 1 to 1.
    ///
    /// ```
    /// use tactile::animation::Easing;
    ///
    /// assert_eq!(Easing::Linear.apply(0.5), 0.5);
    /// assert!(Easing::EaseIn.apply(0.5) < 0.5);
    /// assert!(Easing::EaseOut.apply(0.5) > 0.5);
    /// ```
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInSine => 1.0 - ((t * PI) / 2.0).cos(),
            Easing::EaseOutSine => ((t * PI) / 2.0).sin(),
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
        }
    }

    /// Interpolate between two values with this easing.
    #[inline]
    pub fn lerp(self, start: f32, end: f32, t: f32) -> f32 {
        start + (end - start) * self.apply(t)
    }
}
