//! Closed vocabularies shared by the button, its features and presets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Selection policy of a button, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonType {
    /// Momentary: a click never leaves the button selected.
    #[default]
    Button,
    /// A click always selects; clicking again keeps it selected.
    Radio,
    /// A click toggles the selection.
    Checkbox,
}

impl ButtonType {
    /// The selection that results from clicking a button of this type.
    pub fn selection_after_click(self, selected: bool) -> bool {
        match self {
            ButtonType::Button => false,
            ButtonType::Radio => true,
            ButtonType::Checkbox => !selected,
        }
    }
}

/// Visual state of a button.
///
/// Each state has its own color, its own sound and its own notification
/// channel on [`Button`](super::Button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonState {
    /// Idle, not interacted with.
    #[default]
    Default,
    /// Pointer is over the button.
    Hovered,
    /// Pointer is held down on the button.
    Pressed,
    /// The button is selected (radio/checkbox).
    Selected,
    /// The button does not accept interaction.
    Disabled,
}

impl ButtonState {
    /// All states, in declaration order.
    pub const ALL: [ButtonState; 5] = [
        ButtonState::Default,
        ButtonState::Hovered,
        ButtonState::Pressed,
        ButtonState::Selected,
        ButtonState::Disabled,
    ];

    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonState::Default => "default",
            ButtonState::Hovered => "hovered",
            ButtonState::Pressed => "pressed",
            ButtonState::Selected => "selected",
            ButtonState::Disabled => "disabled",
        }
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw pointer gestures delivered by the host's event dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// Pointer entered the widget bounds.
    Enter,
    /// Pointer left the widget bounds.
    Exit,
    /// Primary pointer button pressed over the widget.
    Down,
    /// Primary pointer button released.
    Up,
    /// A press and release completed over the widget.
    Click,
}

impl PointerEvent {
    pub(crate) fn name(self) -> &'static str {
        match self {
            PointerEvent::Enter => "pointer_enter",
            PointerEvent::Exit => "pointer_exit",
            PointerEvent::Down => "pointer_down",
            PointerEvent::Up => "pointer_up",
            PointerEvent::Click => "click",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_policy() {
        for selected in [false, true] {
            assert!(!ButtonType::Button.selection_after_click(selected));
            assert!(ButtonType::Radio.selection_after_click(selected));
            assert_eq!(ButtonType::Checkbox.selection_after_click(selected), !selected);
        }
    }

    #[test]
    fn test_state_names_round_trip_through_serde() {
        for state in ButtonState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
        }
        let kind: ButtonType = serde_json::from_str("\"checkbox\"").unwrap();
        assert_eq!(kind, ButtonType::Checkbox);
    }
}
