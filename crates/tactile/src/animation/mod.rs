//! Animation helpers shared by presets and tween requests.

mod easing;

pub use easing::Easing;
