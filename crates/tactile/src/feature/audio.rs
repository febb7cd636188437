//! Preset-driven audio feature.

use tactile_core::logging::targets;

use crate::button::ButtonState;
use crate::preset::AudioPreset;

use super::AudioFeature;

/// Host service that plays sound clips.
pub trait AudioSink: Send + Sync {
    /// Start playing `clip` at `volume` (0 to 1). Must not block.
    fn play(&self, clip: &str, volume: f32);
}

/// An [`AudioFeature`] reading its clips from an [`AudioPreset`].
///
/// Every enabled setting for a state is played, so several clips can be
/// layered on one state.
pub struct PresetAudioFeature<S> {
    preset: AudioPreset,
    sink: S,
}

impl<S: AudioSink> PresetAudioFeature<S> {
    /// Create a feature for `preset` playing through `sink`.
    pub fn new(preset: AudioPreset, sink: S) -> Self {
        Self { preset, sink }
    }

    /// The preset in use.
    pub fn preset(&self) -> &AudioPreset {
        &self.preset
    }

    /// The sink in use.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: AudioSink> AudioFeature for PresetAudioFeature<S> {
    fn play(&self, state: ButtonState) {
        let mut played = 0usize;
        for setting in self.preset.settings_for(state) {
            self.sink.play(&setting.clip, setting.volume);
            played += 1;
        }
        tracing::trace!(
            target: targets::FEATURE,
            preset = %self.preset.name,
            %state,
            played,
            "audio feedback"
        );
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use crate::preset::AudioSetting;

    use super::*;

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<(String, f32)>>);

    impl AudioSink for RecordingSink {
        fn play(&self, clip: &str, volume: f32) {
            self.0.lock().push((clip.to_string(), volume));
        }
    }

    #[test]
    fn test_plays_enabled_clips_in_order() {
        let preset = AudioPreset::new("ui")
            .with_setting(AudioSetting::new(ButtonState::Pressed, "click").with_volume(0.5))
            .with_setting(AudioSetting::new(ButtonState::Pressed, "muted").with_enabled(false))
            .with_setting(AudioSetting::new(ButtonState::Hovered, "hover"))
            .with_setting(AudioSetting::new(ButtonState::Pressed, "thump"));
        let feature = PresetAudioFeature::new(preset, RecordingSink::default());

        feature.play(ButtonState::Pressed);
        feature.play(ButtonState::Disabled);

        assert_eq!(
            *feature.sink().0.lock(),
            vec![("click".to_string(), 0.5), ("thump".to_string(), 1.0)]
        );
    }
}
