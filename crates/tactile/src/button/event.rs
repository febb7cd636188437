//! Button identity and notification payloads.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use super::Button;
use super::types::ButtonState;

static NEXT_BUTTON_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(u64);

impl ButtonId {
    pub(crate) fn next() -> Self {
        Self(NEXT_BUTTON_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "button#{}", self.0)
    }
}

/// Payload delivered with every button notification.
///
/// Carries a weak handle to the originating button, so listeners can call
/// back into it without keeping it alive.
#[derive(Debug, Clone)]
pub struct ButtonEvent {
    /// The button that emitted the notification.
    pub source: ButtonId,
    /// The state the notification announces.
    pub state: ButtonState,
    button: Weak<Button>,
}

impl ButtonEvent {
    pub(crate) fn new(source: ButtonId, state: ButtonState, button: Weak<Button>) -> Self {
        Self {
            source,
            state,
            button,
        }
    }

    /// The originating button, if it is still alive.
    pub fn button(&self) -> Option<Arc<Button>> {
        self.button.upgrade()
    }
}
