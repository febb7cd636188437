//! Tactile - interactive button behavior for game UI.
//!
//! A [`Button`](button::Button) tracks pointer interaction, picks one of five
//! visual states, drives optional color and audio feedback and notifies
//! listeners through per-state signals. Rendering, audio playback and tween
//! engines stay in the host; this crate only decides *what* should happen.
//!
//! # Example
//!
//! ```
//! use tactile::prelude::*;
//!
//! let button = Button::builder().kind(ButtonType::Radio).build();
//! button.on_selected.connect(|event| println!("{} picked", event.source));
//!
//! button.pointer_enter();
//! button.pointer_down();
//! button.click();
//! assert!(button.is_selected());
//! ```

pub mod animation;
pub mod button;
pub mod config;
pub mod error;
pub mod feature;
pub mod prelude;
pub mod preset;

pub use error::{Error, Result};

/// Signal/slot primitives from the core crate.
pub mod signal {
    pub use tactile_core::signal::*;
}
