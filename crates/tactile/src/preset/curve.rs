//! Progress curves over the unit square.

use serde::{Deserialize, Serialize};

use crate::animation::Easing;

use super::PresetError;

/// A point on a sampled curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Progress, in `[0, 1]`.
    pub time: f32,
    /// Curve value at `time`, in `[0, 1]`.
    pub value: f32,
}

impl Keyframe {
    /// Create a keyframe.
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// A mapping from progress `[0, 1]` to blend factor `[0, 1]`.
///
/// In configuration a curve is either the name of an easing function or a
/// list of keyframes:
///
/// ```toml
/// scale_curve = "ease_out"
/// # or
/// scale_curve = [{ time = 0.0, value = 0.0 }, { time = 1.0, value = 1.0 }]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Curve {
    /// A named easing function.
    Eased(Easing),
    /// Piecewise-linear keyframes with non-decreasing times.
    Sampled(Vec<Keyframe>),
}

impl Default for Curve {
    fn default() -> Self {
        Curve::Eased(Easing::Linear)
    }
}

impl Curve {
    /// The identity curve.
    pub fn linear() -> Self {
        Self::default()
    }

    /// Sample an easing function into `samples` evenly spaced keyframes.
    ///
    /// At least two keyframes are always produced.
    pub fn sampled_from(easing: Easing, samples: usize) -> Self {
        let samples = samples.max(2);
        let last = (samples - 1) as f32;
        let keys = (0..samples)
            .map(|i| {
                let time = i as f32 / last;
                Keyframe::new(time, easing.apply(time).clamp(0.0, 1.0))
            })
            .collect();
        Curve::Sampled(keys)
    }

    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    ///
    /// Sampled curves hold their first value before the first keyframe and
    /// their last value after the last one.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Eased(easing) => easing.apply(t),
            Curve::Sampled(keys) => sample(keys, t),
        }
    }

    /// Check that the curve stays within the unit square.
    pub fn validate(&self) -> Result<(), PresetError> {
        let Curve::Sampled(keys) = self else {
            return Ok(());
        };
        if keys.is_empty() {
            return Err(PresetError::EmptyCurve);
        }

        let mut previous = 0.0_f32;
        for (index, key) in keys.iter().enumerate() {
            let in_range = |v: f32| v.is_finite() && (0.0..=1.0).contains(&v);
            if !in_range(key.time) || !in_range(key.value) {
                return Err(PresetError::KeyframeOutOfRange {
                    index,
                    time: key.time,
                    value: key.value,
                });
            }
            if key.time < previous {
                return Err(PresetError::KeyframeOutOfOrder { index });
            }
            previous = key.time;
        }
        Ok(())
    }
}

fn sample(keys: &[Keyframe], t: f32) -> f32 {
    let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
        return t;
    };
    // A single keyframe is constant. NaN times slip past both comparisons
    // below, so this also covers unvalidated one-key curves.
    if keys.len() < 2 || t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }

    // First keyframe strictly after t. The clamp keeps unvalidated (unsorted
    // or NaN) keyframes in bounds.
    let upper = keys
        .partition_point(|key| key.time <= t)
        .clamp(1, keys.len() - 1);
    let (a, b) = (keys[upper - 1], keys[upper]);
    let span = b.time - a.time;
    if span <= f32::EPSILON {
        return b.value;
    }
    a.value + (b.value - a.value) * ((t - a.time) / span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_linear() {
        let curve = Curve::default();
        assert_eq!(curve.evaluate(0.25), 0.25);
        assert_eq!(curve.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_sampled_interpolates_between_keys() {
        let curve = Curve::Sampled(vec![
            Keyframe::new(0.0, 0.0),
            Keyframe::new(0.5, 1.0),
            Keyframe::new(1.0, 0.5),
        ]);
        assert_eq!(curve.evaluate(0.25), 0.5);
        assert_eq!(curve.evaluate(0.5), 1.0);
        assert_eq!(curve.evaluate(0.75), 0.75);
        assert_eq!(curve.evaluate(1.0), 0.5);
    }

    #[test]
    fn test_sampled_holds_outside_keys() {
        let curve = Curve::Sampled(vec![Keyframe::new(0.2, 0.1), Keyframe::new(0.8, 0.9)]);
        assert_eq!(curve.evaluate(0.0), 0.1);
        assert_eq!(curve.evaluate(1.0), 0.9);
    }

    #[test]
    fn test_step_keys() {
        let curve = Curve::Sampled(vec![
            Keyframe::new(0.0, 0.0),
            Keyframe::new(0.5, 0.0),
            Keyframe::new(0.5, 1.0),
            Keyframe::new(1.0, 1.0),
        ]);
        assert_eq!(curve.evaluate(0.25), 0.0);
        assert_eq!(curve.evaluate(0.75), 1.0);
        assert!(curve.validate().is_ok());
    }

    #[test]
    fn test_sampled_from_easing() {
        let curve = Curve::sampled_from(Easing::EaseOut, 11);
        let Curve::Sampled(keys) = &curve else {
            panic!("expected keyframes");
        };
        assert_eq!(keys.len(), 11);
        assert!((curve.evaluate(0.5) - Easing::EaseOut.apply(0.5)).abs() < 0.001);
        assert!(curve.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_keys() {
        assert_eq!(Curve::Sampled(vec![]).validate(), Err(PresetError::EmptyCurve));

        let out_of_range = Curve::Sampled(vec![Keyframe::new(0.0, 1.5)]);
        assert!(matches!(
            out_of_range.validate(),
            Err(PresetError::KeyframeOutOfRange { index: 0, .. })
        ));

        let backwards = Curve::Sampled(vec![Keyframe::new(0.6, 0.0), Keyframe::new(0.3, 1.0)]);
        assert_eq!(
            backwards.validate(),
            Err(PresetError::KeyframeOutOfOrder { index: 1 })
        );
    }

    #[test]
    fn test_unvalidated_keys_do_not_panic() {
        let single = Curve::Sampled(vec![Keyframe::new(f32::NAN, 0.5)]);
        assert_eq!(single.evaluate(0.5), 0.5);

        let one = Curve::Sampled(vec![Keyframe::new(0.5, 0.25)]);
        for t in [0.0, 0.5, 1.0] {
            assert_eq!(one.evaluate(t), 0.25);
        }

        let nan_pair = Curve::Sampled(vec![
            Keyframe::new(f32::NAN, 0.0),
            Keyframe::new(f32::NAN, 1.0),
        ]);
        let _ = nan_pair.evaluate(0.5);
    }

    #[test]
    fn test_config_forms() {
        let named: Curve = serde_json::from_str("\"ease_in\"").unwrap();
        assert_eq!(named, Curve::Eased(Easing::EaseIn));

        let keys: Curve =
            serde_json::from_str(r#"[{"time": 0.0, "value": 0.0}, {"time": 1.0, "value": 1.0}]"#)
                .unwrap();
        assert_eq!(
            keys,
            Curve::Sampled(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)])
        );
    }
}
