//! Interactive button widget.
//!
//! This module provides [`Button`], a button whose visual state follows
//! pointer interaction:
//!
//! - Five visual states: Default, Hovered, Pressed, Selected, Disabled
//! - Three selection policies: momentary button, radio, checkbox
//! - Optional color and audio feedback features
//! - One notification signal per visual state
//!
//! # Event Handling
//!
//! The host forwards pointer gestures (enter, exit, down, up, click) from its
//! own event dispatch, either through [`Button::handle_pointer`] or the
//! per-gesture methods. State can also be requested directly, loudly with
//! [`Button::change_state`] or silently with [`Button::change_state_quietly`].
//!
//! # Example
//!
//! ```
//! use tactile::button::{ButtonBuilder, ButtonState, ButtonType, PointerEvent};
//!
//! let button = ButtonBuilder::new().kind(ButtonType::Checkbox).build();
//! button.on_selected.connect(|event| {
//!     println!("{} selected", event.source);
//! });
//!
//! button.handle_pointer(PointerEvent::Enter);
//! button.handle_pointer(PointerEvent::Click);
//! assert!(button.is_selected());
//! assert_eq!(button.visual_state(), ButtonState::Selected);
//! ```

mod event;
mod machine;
mod types;

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tactile_core::logging::targets;
use tactile_core::{ReentrancyLimit, Signal, TransitionSpan};

use crate::config::ButtonConfig;
use crate::feature::{AudioFeature, ColorFeature};

pub use event::{ButtonEvent, ButtonId};
pub use machine::{ColorChange, Reaction, StateMachine};
pub use types::{ButtonState, ButtonType, PointerEvent};

/// How deeply listeners may nest transitions on the same button.
///
/// A transition requested from inside a notification handler counts as one
/// level; requests beyond this depth are dropped with a warning.
pub const MAX_TRANSITION_DEPTH: usize = 8;

/// An interactive button.
///
/// Buttons are created through [`ButtonBuilder`] and shared as `Arc<Button>`.
/// All methods take `&self`; notification handlers receive a weak handle to
/// the button in [`ButtonEvent`] and may call back into it.
///
/// No internal lock is held while features run or signals are emitted.
pub struct Button {
    id: ButtonId,
    name: Option<String>,
    machine: Mutex<StateMachine>,
    color_feature: Option<Arc<dyn ColorFeature>>,
    audio_feature: Option<Arc<dyn AudioFeature>>,
    reentrancy: ReentrancyLimit,
    this: Weak<Button>,

    /// Emitted when the button returns to its default look.
    pub on_default: Signal<ButtonEvent>,

    /// Emitted when the pointer starts hovering an unselected button, or a
    /// click leaves a hovered button unselected.
    pub on_hovered: Signal<ButtonEvent>,

    /// Emitted when the button is pressed down.
    pub on_pressed: Signal<ButtonEvent>,

    /// Emitted when a click leaves the button selected.
    pub on_selected: Signal<ButtonEvent>,

    /// Emitted when the button is disabled.
    pub on_disabled: Signal<ButtonEvent>,
}

impl Button {
    /// Start building a button.
    pub fn builder() -> ButtonBuilder {
        ButtonBuilder::new()
    }

    // =========================================================================
    // Identity and observable state
    // =========================================================================

    /// Process-unique identifier.
    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// Optional name given at construction.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Selection policy.
    pub fn button_type(&self) -> ButtonType {
        self.machine.lock().kind()
    }

    /// Whether pointer gestures are accepted.
    pub fn is_interactable(&self) -> bool {
        self.machine.lock().is_interactable()
    }

    /// Whether the pointer is over the button.
    pub fn is_hovering(&self) -> bool {
        self.machine.lock().is_hovering()
    }

    /// Whether the button is held down.
    pub fn is_pressed(&self) -> bool {
        self.machine.lock().is_pressed()
    }

    /// Whether the button is selected.
    pub fn is_selected(&self) -> bool {
        self.machine.lock().is_selected()
    }

    /// Whether the button is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.machine.lock().is_dragging()
    }

    /// The state most recently rendered.
    pub fn visual_state(&self) -> ButtonState {
        self.machine.lock().visual_state()
    }

    /// A copy of the current interaction flags.
    pub fn snapshot(&self) -> StateMachine {
        self.machine.lock().clone()
    }

    /// The notification signal for `state`.
    pub fn signal(&self, state: ButtonState) -> &Signal<ButtonEvent> {
        match state {
            ButtonState::Default => &self.on_default,
            ButtonState::Hovered => &self.on_hovered,
            ButtonState::Pressed => &self.on_pressed,
            ButtonState::Selected => &self.on_selected,
            ButtonState::Disabled => &self.on_disabled,
        }
    }

    /// Whether a color feature is attached.
    pub fn has_color_feature(&self) -> bool {
        self.color_feature.is_some()
    }

    /// Whether an audio feature is attached.
    pub fn has_audio_feature(&self) -> bool {
        self.audio_feature.is_some()
    }

    // =========================================================================
    // State requests
    // =========================================================================

    /// Change state and notify listeners.
    ///
    /// Each state runs the handler that leads to it: Default runs the exit
    /// handler, Hovered the enter handler, Pressed the down handler,
    /// Selected the click handler and Disabled disables the button. At most
    /// one notification is emitted.
    pub fn change_state(&self, state: ButtonState) {
        self.transition("change_state", |machine| machine.request(state));
    }

    /// Change state visually without notifying listeners.
    ///
    /// Applies the color and sound for `state` directly, ignoring the
    /// interactable flag. Use this to synchronize a button with external
    /// state, such as deselecting the other members of a radio group.
    pub fn change_state_quietly(&self, state: ButtonState) {
        self.transition("change_state_quietly", |machine| {
            machine.request_quietly(state)
        });
    }

    /// Set the interactable flag without rendering or notifying.
    ///
    /// To re-enable a disabled button, call this with `true` and then
    /// `change_state(ButtonState::Default)`.
    pub fn set_interactable(&self, interactable: bool) {
        self.machine.lock().set_interactable(interactable);
    }

    // =========================================================================
    // Pointer gestures
    // =========================================================================

    /// Handle a pointer gesture from the host's event dispatch.
    pub fn handle_pointer(&self, event: PointerEvent) {
        self.transition(event.name(), |machine| machine.pointer(event));
    }

    /// The pointer entered the button.
    pub fn pointer_enter(&self) {
        self.handle_pointer(PointerEvent::Enter);
    }

    /// The pointer left the button.
    pub fn pointer_exit(&self) {
        self.handle_pointer(PointerEvent::Exit);
    }

    /// The pointer was pressed on the button.
    pub fn pointer_down(&self) {
        self.handle_pointer(PointerEvent::Down);
    }

    /// The pointer was released.
    pub fn pointer_up(&self) {
        self.handle_pointer(PointerEvent::Up);
    }

    /// A press and release completed over the button.
    pub fn click(&self) {
        self.handle_pointer(PointerEvent::Click);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn activate(&self) {
        self.transition("activate", StateMachine::activate);
    }

    fn transition(&self, input: &'static str, step: impl FnOnce(&mut StateMachine) -> Reaction) {
        let Some(_level) = self.reentrancy.enter() else {
            tracing::warn!(
                target: targets::BUTTON,
                button = %self.id,
                input,
                max_depth = self.reentrancy.max_depth(),
                "nested transition dropped"
            );
            return;
        };
        let _span = TransitionSpan::new(self.id.as_raw(), input);

        let reaction = {
            let mut machine = self.machine.lock();
            step(&mut *machine)
        };
        if reaction.is_none() {
            tracing::trace!(target: targets::BUTTON, button = %self.id, input, "no effect");
            return;
        }
        tracing::trace!(target: targets::BUTTON, button = %self.id, input, ?reaction, "transition");

        self.perform(reaction);
    }

    fn perform(&self, reaction: Reaction) {
        if let (Some(change), Some(feature)) = (reaction.color, &self.color_feature) {
            feature.change(change.state, change.mode);
        }
        if let (Some(state), Some(feature)) = (reaction.audio, &self.audio_feature) {
            feature.play(state);
        }
        if let Some(state) = reaction.notify {
            let event = ButtonEvent::new(self.id, state, self.this.clone());
            self.signal(state).emit(event);
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("machine", &*self.machine.lock())
            .field("color_feature", &self.color_feature.is_some())
            .field("audio_feature", &self.audio_feature.is_some())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Button: Send, Sync);

/// Builder for [`Button`].
///
/// # Example
///
/// ```
/// use tactile::button::{ButtonBuilder, ButtonState, ButtonType};
///
/// let button = ButtonBuilder::new()
///     .kind(ButtonType::Radio)
///     .name("difficulty-hard")
///     .interactable(false)
///     .build();
///
/// assert_eq!(button.visual_state(), ButtonState::Disabled);
/// ```
#[derive(Default)]
pub struct ButtonBuilder {
    config: ButtonConfig,
    color_feature: Option<Arc<dyn ColorFeature>>,
    audio_feature: Option<Arc<dyn AudioFeature>>,
}

impl ButtonBuilder {
    /// Create a builder for an interactable momentary button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from loaded configuration.
    pub fn from_config(config: ButtonConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the selection policy.
    pub fn kind(mut self, kind: ButtonType) -> Self {
        self.config.kind = kind;
        self
    }

    /// Set whether the button starts interactable.
    pub fn interactable(mut self, interactable: bool) -> Self {
        self.config.interactable = interactable;
        self
    }

    /// Set the button's name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Attach a color feature.
    pub fn color_feature(mut self, feature: Arc<dyn ColorFeature>) -> Self {
        self.color_feature = Some(feature);
        self
    }

    /// Attach an audio feature.
    pub fn audio_feature(mut self, feature: Arc<dyn AudioFeature>) -> Self {
        self.audio_feature = Some(feature);
        self
    }

    /// Build and activate the button.
    ///
    /// Activation snaps the button to Default (or Disabled when not
    /// interactable) without a blend and without notifying anyone.
    pub fn build(self) -> Arc<Button> {
        let ButtonConfig {
            kind,
            interactable,
            name,
        } = self.config;

        let button = Arc::new_cyclic(|this| Button {
            id: ButtonId::next(),
            name,
            machine: Mutex::new(StateMachine::new(kind, interactable)),
            color_feature: self.color_feature,
            audio_feature: self.audio_feature,
            reentrancy: ReentrancyLimit::new(MAX_TRANSITION_DEPTH),
            this: this.clone(),
            on_default: Signal::new(),
            on_hovered: Signal::new(),
            on_pressed: Signal::new(),
            on_selected: Signal::new(),
            on_disabled: Signal::new(),
        });

        tracing::debug!(
            target: targets::BUTTON,
            button = %button.id,
            name = ?button.name,
            ?kind,
            interactable,
            "button created"
        );
        button.activate();
        button
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn record(button: &Button) -> Arc<Mutex<Vec<ButtonState>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        for state in ButtonState::ALL {
            let log = log.clone();
            button.signal(state).connect(move |event| log.lock().push(event.state));
        }
        log
    }

    #[test]
    fn test_build_defaults() {
        let button = ButtonBuilder::new().build();
        assert_eq!(button.button_type(), ButtonType::Button);
        assert!(button.is_interactable());
        assert!(!button.is_hovering());
        assert!(!button.is_pressed());
        assert!(!button.is_selected());
        assert!(!button.is_dragging());
        assert_eq!(button.visual_state(), ButtonState::Default);
        assert!(button.name().is_none());
        assert!(!button.has_color_feature());
        assert!(!button.has_audio_feature());
    }

    #[test]
    fn test_signal_lookup_matches_fields() {
        let button = ButtonBuilder::new().build();
        assert!(std::ptr::eq(button.signal(ButtonState::Default), &button.on_default));
        assert!(std::ptr::eq(button.signal(ButtonState::Hovered), &button.on_hovered));
        assert!(std::ptr::eq(button.signal(ButtonState::Pressed), &button.on_pressed));
        assert!(std::ptr::eq(button.signal(ButtonState::Selected), &button.on_selected));
        assert!(std::ptr::eq(button.signal(ButtonState::Disabled), &button.on_disabled));
    }

    #[test]
    fn test_event_carries_source() {
        let button = ButtonBuilder::new().name("ok").build();
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = seen.clone();
        button.on_hovered.connect(move |event| {
            let name = event.button().and_then(|b| b.name().map(str::to_owned));
            *seen_clone.lock() = Some((event.source, name));
        });

        button.pointer_enter();
        assert_eq!(*seen.lock(), Some((button.id(), Some("ok".to_string()))));
    }

    #[test]
    fn test_listener_can_call_back_into_button() {
        let button = ButtonBuilder::new().kind(ButtonType::Checkbox).build();
        button.on_selected.connect(|event| {
            if let Some(button) = event.button() {
                button.change_state_quietly(ButtonState::Default);
            }
        });

        button.click();
        assert!(!button.is_selected());
        assert_eq!(button.visual_state(), ButtonState::Default);
    }

    #[test]
    fn test_runaway_reentrancy_is_bounded() {
        let button = ButtonBuilder::new().build();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let id = button.on_pressed.connect(move |event| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            if let Some(button) = event.button() {
                button.pointer_down();
            }
        });

        button.pointer_down();
        assert_eq!(calls.load(Ordering::SeqCst), MAX_TRANSITION_DEPTH);
        assert!(button.is_pressed());

        // The button keeps responding once the listeners unwind.
        button.on_pressed.disconnect(id);
        button.pointer_enter();
        assert!(button.is_hovering());
        assert_eq!(button.visual_state(), ButtonState::Hovered);
    }

    #[test]
    fn test_reenable() {
        let button = ButtonBuilder::new().build();
        let log = record(&button);

        button.change_state(ButtonState::Disabled);
        button.pointer_enter();
        assert!(!button.is_hovering());

        button.set_interactable(true);
        button.change_state(ButtonState::Default);
        button.pointer_enter();

        assert!(button.is_hovering());
        assert_eq!(
            *log.lock(),
            vec![ButtonState::Disabled, ButtonState::Default, ButtonState::Hovered]
        );
    }

    #[test]
    fn test_debug_output() {
        let button = ButtonBuilder::new().name("debug").build();
        let output = format!("{button:?}");
        assert!(output.contains("Button"));
        assert!(output.contains("debug"));
    }
}
