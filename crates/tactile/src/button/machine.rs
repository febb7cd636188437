//! The button state machine.
//!
//! [`StateMachine`] holds a button's interaction flags and turns every input
//! (pointer gesture, loud or quiet state request, activation) into a
//! [`Reaction`]: the color change, sound and notification the input calls
//! for. It performs none of them itself, which keeps it a plain value that
//! can be driven and inspected without any collaborators.
//!
//! # Rendered state
//!
//! The state handed to the color channel follows the priority
//! Selected > Hovered (while not selected) > Default. Pressed is transient:
//! it is rendered on pointer down regardless of selection and reconciled on
//! pointer up.

use crate::feature::ChangeMode;

use super::types::{ButtonState, ButtonType, PointerEvent};

/// A color change requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorChange {
    /// State whose color should be shown.
    pub state: ButtonState,
    /// Whether to jump to the color or blend towards it.
    pub mode: ChangeMode,
}

/// Side effects produced by a single transition.
///
/// Each channel carries at most one request per transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reaction {
    /// Color to apply, if any.
    pub color: Option<ColorChange>,
    /// Sound to play, if any.
    pub audio: Option<ButtonState>,
    /// Public notification to emit, if any.
    pub notify: Option<ButtonState>,
}

impl Reaction {
    /// A reaction with no effects.
    pub const NONE: Reaction = Reaction {
        color: None,
        audio: None,
        notify: None,
    };

    /// Check whether this reaction does nothing.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    fn notifying(mut self, state: ButtonState) -> Self {
        self.notify = Some(state);
        self
    }
}

/// Interaction flags of one button and the transitions between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMachine {
    kind: ButtonType,
    interactable: bool,
    hovering: bool,
    pressed: bool,
    selected: bool,
    dragging: bool,
    visual_state: ButtonState,
}

impl StateMachine {
    /// Create a machine with all interaction flags cleared.
    ///
    /// The machine has not rendered anything yet; call
    /// [`activate`](Self::activate) to get the startup reaction.
    pub fn new(kind: ButtonType, interactable: bool) -> Self {
        Self {
            kind,
            interactable,
            hovering: false,
            pressed: false,
            selected: false,
            dragging: false,
            visual_state: if interactable {
                ButtonState::Default
            } else {
                ButtonState::Disabled
            },
        }
    }

    // =========================================================================
    // Observable state
    // =========================================================================

    /// Selection policy.
    pub fn kind(&self) -> ButtonType {
        self.kind
    }

    /// Whether pointer gestures are accepted.
    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    /// Whether the pointer is over the button.
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether the button is held down.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the button is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the button is being dragged. No transition sets this yet.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The state most recently handed to the color channel.
    pub fn visual_state(&self) -> ButtonState {
        self.visual_state
    }

    /// Set the interactable flag without rendering anything.
    ///
    /// Re-enabling a disabled button is done with this followed by a
    /// `Default` state request.
    pub fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Startup: clear the interaction flags and snap to Default, or to
    /// Disabled if the button is not interactable. Never notifies.
    pub fn activate(&mut self) -> Reaction {
        self.hovering = false;
        self.pressed = false;
        self.selected = false;
        if self.interactable {
            self.default_behavior(ChangeMode::Instant)
        } else {
            self.disabled_behavior(ChangeMode::Instant)
        }
    }

    /// Route a pointer gesture to its handler.
    pub fn pointer(&mut self, event: PointerEvent) -> Reaction {
        match event {
            PointerEvent::Enter => self.enter(),
            PointerEvent::Exit => self.exit(),
            PointerEvent::Down => self.down(),
            PointerEvent::Up => self.up(),
            PointerEvent::Click => self.click(),
        }
    }

    /// Loud state request: run the handler that leads to `state`.
    pub fn request(&mut self, state: ButtonState) -> Reaction {
        match state {
            ButtonState::Default => self.exit(),
            ButtonState::Hovered => self.enter(),
            ButtonState::Pressed => self.down(),
            ButtonState::Selected => self.click(),
            ButtonState::Disabled => self.disable(),
        }
    }

    /// Quiet state request: apply the feedback behavior for `state` directly.
    ///
    /// The reaction never carries a notification, and the interactable flag
    /// does not gate it.
    pub fn request_quietly(&mut self, state: ButtonState) -> Reaction {
        let mode = ChangeMode::Gradual;
        match state {
            ButtonState::Default => self.default_behavior(mode),
            ButtonState::Hovered => self.hovered_behavior(mode),
            ButtonState::Pressed => self.pressed_behavior(mode),
            ButtonState::Selected => self.selected_behavior(mode),
            ButtonState::Disabled => self.disabled_behavior(mode),
        }
    }

    /// Disable the button. Always allowed.
    pub fn disable(&mut self) -> Reaction {
        self.disabled_behavior(ChangeMode::Gradual)
            .notifying(ButtonState::Disabled)
    }

    // =========================================================================
    // Gesture handlers
    // =========================================================================

    fn enter(&mut self) -> Reaction {
        if !self.interactable {
            return Reaction::NONE;
        }

        self.hovering = true;
        if self.selected {
            return Reaction::NONE;
        }

        self.hovered_behavior(ChangeMode::Gradual)
            .notifying(ButtonState::Hovered)
    }

    fn exit(&mut self) -> Reaction {
        if !self.interactable {
            return Reaction::NONE;
        }

        self.hovering = false;
        if self.selected {
            return Reaction::NONE;
        }

        self.default_behavior(ChangeMode::Gradual)
            .notifying(ButtonState::Default)
    }

    fn down(&mut self) -> Reaction {
        if !self.interactable {
            return Reaction::NONE;
        }

        self.pressed_behavior(ChangeMode::Gradual)
            .notifying(ButtonState::Pressed)
    }

    /// Release only reconciles the color; while hovering the current color
    /// stays as it is.
    fn up(&mut self) -> Reaction {
        if !self.interactable {
            return Reaction::NONE;
        }

        self.pressed = false;
        let target = match (self.selected, self.hovering) {
            (false, false) => ButtonState::Default,
            (true, false) => ButtonState::Selected,
            (_, true) => return Reaction::NONE,
        };
        Reaction {
            color: Some(self.render(target, ChangeMode::Gradual)),
            ..Reaction::NONE
        }
    }

    fn click(&mut self) -> Reaction {
        if !self.interactable {
            return Reaction::NONE;
        }

        self.pressed = false;
        let reaction = self.selected_behavior(ChangeMode::Gradual);
        let notify = if self.selected {
            ButtonState::Selected
        } else if self.hovering {
            ButtonState::Hovered
        } else {
            ButtonState::Default
        };
        reaction.notifying(notify)
    }

    // =========================================================================
    // Feedback behaviors
    // =========================================================================

    fn default_behavior(&mut self, mode: ChangeMode) -> Reaction {
        self.selected = false;
        self.pressed = false;
        self.hovering = false;
        self.feedback(ButtonState::Default, mode)
    }

    fn hovered_behavior(&mut self, mode: ChangeMode) -> Reaction {
        self.hovering = true;
        self.feedback(ButtonState::Hovered, mode)
    }

    fn pressed_behavior(&mut self, mode: ChangeMode) -> Reaction {
        self.pressed = true;
        self.feedback(ButtonState::Pressed, mode)
    }

    fn selected_behavior(&mut self, mode: ChangeMode) -> Reaction {
        self.selected = self.kind.selection_after_click(self.selected);

        let shown = if self.selected {
            ButtonState::Selected
        } else if self.hovering {
            ButtonState::Hovered
        } else {
            ButtonState::Default
        };
        self.feedback(shown, mode)
    }

    fn disabled_behavior(&mut self, mode: ChangeMode) -> Reaction {
        self.interactable = false;
        self.feedback(ButtonState::Disabled, mode)
    }

    fn feedback(&mut self, state: ButtonState, mode: ChangeMode) -> Reaction {
        Reaction {
            color: Some(self.render(state, mode)),
            audio: Some(state),
            notify: None,
        }
    }

    fn render(&mut self, state: ButtonState, mode: ChangeMode) -> ColorChange {
        self.visual_state = state;
        ColorChange { state, mode }
    }
}
