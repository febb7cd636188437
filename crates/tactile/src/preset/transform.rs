//! Scale settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::button::ButtonState;

use super::{Curve, PresetError, Setting, check_duration, enabled_by_default};

/// One scale change: "if enabled, animate the scale from its current value
/// to `target_scale` over `scale_duration` seconds, sampling `scale_curve`".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformSetting {
    /// Whether this setting takes part at all.
    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
    /// The button state this setting applies to.
    #[serde(default)]
    pub execution_state: ButtonState,
    /// Whether the scale channel is animated.
    #[serde(default)]
    pub is_scale_enabled: bool,
    /// Uniform scale to reach.
    #[serde(default = "unit_scale")]
    pub target_scale: f32,
    /// Seconds to reach `target_scale`.
    #[serde(default)]
    pub scale_duration: f32,
    /// Progress curve.
    #[serde(default)]
    pub scale_curve: Curve,
}

fn unit_scale() -> f32 {
    1.0
}

impl TransformSetting {
    /// An enabled setting for `state` that leaves the scale alone.
    pub fn new(execution_state: ButtonState) -> Self {
        Self {
            is_enabled: true,
            execution_state,
            is_scale_enabled: false,
            target_scale: 1.0,
            scale_duration: 0.0,
            scale_curve: Curve::default(),
        }
    }

    /// Animate the scale, using builder pattern.
    pub fn with_scale(mut self, target_scale: f32, duration: f32, curve: Curve) -> Self {
        self.is_scale_enabled = true;
        self.target_scale = target_scale;
        self.scale_duration = duration;
        self.scale_curve = curve;
        self
    }

    /// Set whether the setting is enabled, using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    /// The request to hand to a tween runner, if this setting animates scale.
    pub fn scale_tween(&self) -> Option<ScaleTween> {
        (self.is_enabled && self.is_scale_enabled).then(|| ScaleTween {
            target: self.target_scale,
            duration: Duration::try_from_secs_f32(self.scale_duration).unwrap_or(Duration::ZERO),
            curve: self.scale_curve.clone(),
        })
    }
}

impl Setting for TransformSetting {
    fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    fn execution_state(&self) -> ButtonState {
        self.execution_state
    }

    fn validate(&self) -> Result<(), PresetError> {
        if !self.target_scale.is_finite() {
            return Err(PresetError::InvalidScale(self.target_scale));
        }
        check_duration(self.scale_duration)?;
        self.scale_curve.validate()
    }
}

/// A scale animation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTween {
    /// Uniform scale to reach.
    pub target: f32,
    /// Time to reach it.
    pub duration: Duration,
    /// Progress curve.
    pub curve: Curve,
}

impl ScaleTween {
    /// Scale at `progress` (0 to 1) when starting from `from`.
    pub fn sample(&self, from: f32, progress: f32) -> f32 {
        from + (self.target - from) * self.curve.evaluate(progress)
    }

    /// Scale after `elapsed`, starting from `from`. Zero-length tweens are
    /// already at their target.
    pub fn value_at(&self, from: f32, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.target;
        }
        self.sample(from, elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Whether the tween is over after `elapsed`.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use crate::animation::Easing;

    use super::*;

    #[test]
    fn test_scale_tween_requires_both_switches() {
        let setting = TransformSetting::new(ButtonState::Hovered);
        assert!(setting.scale_tween().is_none());

        let setting = setting.with_scale(1.2, 0.25, Curve::linear());
        let tween = setting.scale_tween().unwrap();
        assert_eq!(tween.target, 1.2);
        assert_eq!(tween.duration, Duration::from_millis(250));

        assert!(setting.with_enabled(false).scale_tween().is_none());
    }

    #[test]
    fn test_tween_sampling() {
        let tween = TransformSetting::new(ButtonState::Pressed)
            .with_scale(2.0, 1.0, Curve::Eased(Easing::Linear))
            .scale_tween()
            .unwrap();

        assert_eq!(tween.sample(1.0, 0.0), 1.0);
        assert_eq!(tween.sample(1.0, 0.5), 1.5);
        assert_eq!(tween.value_at(1.0, Duration::from_secs(5)), 2.0);
        assert!(tween.is_finished(Duration::from_secs(1)));
        assert!(!tween.is_finished(Duration::from_millis(999)));
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let tween = TransformSetting::new(ButtonState::Pressed)
            .with_scale(0.8, 0.0, Curve::linear())
            .scale_tween()
            .unwrap();
        assert_eq!(tween.value_at(1.0, Duration::ZERO), 0.8);
        assert!(tween.is_finished(Duration::ZERO));
    }

    #[test]
    fn test_validate() {
        let good = TransformSetting::new(ButtonState::Default).with_scale(1.1, 0.2, Curve::linear());
        assert!(good.validate().is_ok());

        let bad_scale = TransformSetting::new(ButtonState::Default).with_scale(
            f32::NAN,
            0.2,
            Curve::linear(),
        );
        assert!(matches!(bad_scale.validate(), Err(PresetError::InvalidScale(_))));

        let bad_curve = TransformSetting::new(ButtonState::Default).with_scale(
            1.0,
            0.2,
            Curve::Sampled(vec![]),
        );
        assert_eq!(bad_curve.validate(), Err(PresetError::EmptyCurve));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let setting: TransformSetting =
            serde_json::from_str(r#"{"execution_state": "hovered", "is_scale_enabled": true}"#)
                .unwrap();
        assert!(setting.is_enabled);
        assert_eq!(setting.target_scale, 1.0);
        assert_eq!(setting.scale_duration, 0.0);
        assert_eq!(setting.scale_curve, Curve::linear());
    }
}
