//! Sound settings.

use serde::{Deserialize, Serialize};

use crate::button::ButtonState;

use super::{PresetError, Setting, enabled_by_default};

/// The sound played for one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSetting {
    /// Whether this setting takes part at all.
    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
    /// The button state this setting applies to.
    #[serde(default)]
    pub execution_state: ButtonState,
    /// Host identifier of the clip to play.
    pub clip: String,
    /// Playback volume, in `[0, 1]`.
    #[serde(default = "full_volume")]
    pub volume: f32,
}

fn full_volume() -> f32 {
    1.0
}

impl AudioSetting {
    /// An enabled setting playing `clip` at full volume for `state`.
    pub fn new(execution_state: ButtonState, clip: impl Into<String>) -> Self {
        Self {
            is_enabled: true,
            execution_state,
            clip: clip.into(),
            volume: 1.0,
        }
    }

    /// Set the volume, using builder pattern.
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    /// Set whether the setting is enabled, using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }
}

impl Setting for AudioSetting {
    fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    fn execution_state(&self) -> ButtonState {
        self.execution_state
    }

    fn validate(&self) -> Result<(), PresetError> {
        if (0.0..=1.0).contains(&self.volume) {
            Ok(())
        } else {
            Err(PresetError::InvalidVolume(self.volume))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_range() {
        let setting = AudioSetting::new(ButtonState::Pressed, "click");
        assert!(setting.validate().is_ok());
        assert!(setting.clone().with_volume(0.0).validate().is_ok());
        assert_eq!(
            setting.with_volume(1.5).validate(),
            Err(PresetError::InvalidVolume(1.5))
        );
    }
}
