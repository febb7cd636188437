//! Core systems for tactile.
//!
//! This crate provides the foundation the widget layer is built on:
//!
//! - **Signal/Slot System**: ordered, synchronous observer lists
//! - **Re-entrancy Limits**: bounded nesting for callbacks that call back
//!   into their emitter
//! - **Logging**: `tracing` targets and span helpers
//!
//! # Example
//!
//! ```
//! use tactile_core::{ReentrancyLimit, Signal};
//!
//! let pressed = Signal::<()>::new();
//! let limit = ReentrancyLimit::new(2);
//!
//! pressed.connect(move |_| {
//!     let _level = limit.enter();
//! });
//! pressed.emit(());
//! ```

pub mod logging;
pub mod reentrancy;
pub mod signal;

pub use logging::TransitionSpan;
pub use reentrancy::{ReentrancyLimit, ReentrancyToken};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
