//! Loading preset libraries and driving buttons from them.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tactile::Error;
use tactile::animation::Easing;
use tactile::button::{ButtonBuilder, ButtonState, ButtonType};
use tactile::config::PresetLibrary;
use tactile::feature::{AudioSink, ColorTweenRunner, PresetAudioFeature, PresetColorFeature};
use tactile::preset::{Color, ColorTween, Curve, PresetError};

const LIBRARY_TOML: &str = r#"
[[transform]]
name = "pop"

[[transform.settings]]
execution_state = "hovered"
is_scale_enabled = true
target_scale = 1.1
scale_duration = 0.5
scale_curve = "ease_out"

[[transform.settings]]
execution_state = "pressed"
is_scale_enabled = true
target_scale = 0.9
scale_duration = 0.25
scale_curve = [{ time = 0.0, value = 0.0 }, { time = 0.5, value = 0.8 }, { time = 1.0, value = 1.0 }]

[[color]]
name = "primary"

[[color.settings]]
execution_state = "default"
color = { r = 0.0, g = 0.0, b = 0.0 }

[[color.settings]]
execution_state = "hovered"
color = { r = 1.0, g = 1.0, b = 1.0 }
duration = 0.25

[[color.settings]]
execution_state = "selected"
color = { r = 0.0, g = 0.5, b = 1.0, a = 0.5 }
duration = 0.5
curve = "ease_in_out"

[[audio]]
name = "ui"

[[audio.settings]]
execution_state = "hovered"
clip = "tick"
volume = 0.5

[[audio.settings]]
execution_state = "selected"
clip = "confirm"

[[audio.settings]]
execution_state = "selected"
clip = "sparkle"
is_enabled = false
"#;

#[derive(Default, Clone)]
struct Runner(Arc<Mutex<Vec<String>>>);

impl ColorTweenRunner for Runner {
    fn set_color(&self, color: Color) {
        self.0.lock().push(format!("set {:.1} {:.1} {:.1}", color.r, color.g, color.b));
    }

    fn start_tween(&self, tween: ColorTween) {
        self.0.lock().push(format!(
            "tween {:.1} {:.1} {:.1} {}ms",
            tween.target.r,
            tween.target.g,
            tween.target.b,
            tween.duration.as_millis()
        ));
    }
}

#[derive(Default, Clone)]
struct Sink(Arc<Mutex<Vec<(String, f32)>>>);

impl AudioSink for Sink {
    fn play(&self, clip: &str, volume: f32) {
        self.0.lock().push((clip.to_string(), volume));
    }
}

#[test]
fn test_toml_library_parses() {
    let library = PresetLibrary::from_toml_str(LIBRARY_TOML).unwrap();
    assert_eq!(library.transform.len(), 1);
    assert_eq!(library.color.len(), 1);
    assert_eq!(library.audio.len(), 1);

    let pop = library.transform("pop").unwrap();
    let hover = pop.setting_for(ButtonState::Hovered).unwrap();
    assert_eq!(hover.scale_curve, Curve::Eased(Easing::EaseOut));
    let tween = hover.scale_tween().unwrap();
    assert_eq!(tween.duration, Duration::from_millis(500));
    assert!((tween.value_at(1.0, Duration::from_secs(1)) - 1.1).abs() < 1e-6);

    let press = pop.setting_for(ButtonState::Pressed).unwrap();
    assert!(matches!(&press.scale_curve, Curve::Sampled(keys) if keys.len() == 3));
    assert!((press.scale_curve.evaluate(0.5) - 0.8).abs() < 1e-6);

    let selected = library
        .color("primary")
        .and_then(|p| p.setting_for(ButtonState::Selected))
        .unwrap();
    assert_eq!(selected.color, Color::new(0.0, 0.5, 1.0, 0.5));

    assert!(library.color("secondary").is_none());
}

#[test]
fn test_json_and_toml_agree() {
    let from_toml = PresetLibrary::from_toml_str(LIBRARY_TOML).unwrap();
    let json = serde_json::to_string(&from_toml).unwrap();
    let from_json = PresetLibrary::from_json_str(&json).unwrap();
    assert_eq!(from_toml, from_json);
}

#[test]
fn test_invalid_setting_is_located() {
    let text = r#"
        [[color]]
        name = "neon"

        [[color.settings]]
        execution_state = "hovered"
        color = { r = 2.0, g = 0.0, b = 0.0 }
    "#;

    match PresetLibrary::from_toml_str(text) {
        Err(Error::InvalidPreset {
            preset,
            index,
            source,
        }) => {
            assert_eq!(preset, "neon");
            assert_eq!(index, 0);
            assert_eq!(
                source,
                PresetError::InvalidColor {
                    channel: "r",
                    value: 2.0
                }
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(LIBRARY_TOML.as_bytes()).unwrap();

    let library = PresetLibrary::load(file.path()).unwrap();
    assert!(library.audio("ui").is_some());
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    match PresetLibrary::load(&path) {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_presets_drive_button_feedback() {
    let library = PresetLibrary::from_toml_str(LIBRARY_TOML).unwrap();
    let runner = Runner::default();
    let sink = Sink::default();

    let color = PresetColorFeature::new(library.color("primary").unwrap().clone(), runner.clone());
    let audio = PresetAudioFeature::new(library.audio("ui").unwrap().clone(), sink.clone());
    let button = ButtonBuilder::new()
        .kind(ButtonType::Checkbox)
        .color_feature(Arc::new(color))
        .audio_feature(Arc::new(audio))
        .build();

    button.pointer_enter();
    button.click();
    // Pressed has no color or sound configured.
    button.pointer_down();

    assert_eq!(
        *runner.0.lock(),
        vec![
            "set 0.0 0.0 0.0".to_string(),
            "tween 1.0 1.0 1.0 250ms".to_string(),
            "tween 0.0 0.5 1.0 500ms".to_string(),
        ]
    );
    assert_eq!(
        *sink.0.lock(),
        vec![("tick".to_string(), 0.5), ("confirm".to_string(), 1.0)]
    );
}
