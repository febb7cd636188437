//! Logging facilities for tactile.
//!
//! tactile uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in the host application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("tactile::button=trace")
//!         .init();
//! }
//! ```
//!
//! Every log statement in the workspace uses one of the [`targets`], so a
//! host can filter per subsystem.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tactile_core::signal";
    /// Button state machine target.
    pub const BUTTON: &str = "tactile::button";
    /// Color and audio feature target.
    pub const FEATURE: &str = "tactile::feature";
    /// Preset and configuration target.
    pub const PRESET: &str = "tactile::preset";
}

/// A guard that keeps a transition span entered until dropped.
///
/// ```
/// use tactile_core::logging::TransitionSpan;
///
/// let _span = TransitionSpan::new(7, "pointer_enter");
/// // ... transition work is recorded inside the span ...
/// ```
pub struct TransitionSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl TransitionSpan {
    /// Enter a span for `input` on the widget with raw id `widget`.
    pub fn new(widget: u64, input: &'static str) -> Self {
        let span = tracing::trace_span!(target: "tactile::button", "transition", widget, input);
        Self {
            span: span.entered(),
        }
    }
}
