//! Bounded re-entrancy for synchronous callbacks.
//!
//! Widgets notify their listeners synchronously, and a listener is free to
//! call back into the widget that notified it. [`ReentrancyLimit`] counts how
//! deeply such calls are nested and refuses entry past a fixed depth, so a
//! pair of listeners that keep triggering each other cannot recurse without
//! bound.
//!
//! ```
//! use tactile_core::ReentrancyLimit;
//!
//! let limit = ReentrancyLimit::new(2);
//! let outer = limit.enter().expect("depth 1");
//! let inner = limit.enter().expect("depth 2");
//! assert!(limit.enter().is_none());
//! drop(inner);
//! assert_eq!(limit.depth(), 1);
//! drop(outer);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts nested entries and rejects those beyond `max_depth`.
#[derive(Debug)]
pub struct ReentrancyLimit {
    depth: AtomicUsize,
    max_depth: usize,
}

impl ReentrancyLimit {
    /// Create a limit allowing at most `max_depth` nested entries.
    pub const fn new(max_depth: usize) -> Self {
        Self {
            depth: AtomicUsize::new(0),
            max_depth,
        }
    }

    /// Try to enter one level deeper.
    ///
    /// Returns `None` when the limit is already reached. The returned token
    /// leaves the level when dropped.
    pub fn enter(&self) -> Option<ReentrancyToken<'_>> {
        let entered = self
            .depth
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |depth| {
                if depth < self.max_depth {
                    Some(depth + 1)
                } else {
                    None
                }
            })
            .is_ok();
        // A token must only exist for an entered level: its drop leaves one.
        if entered {
            Some(ReentrancyToken { limit: self })
        } else {
            None
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Acquire)
    }

    /// Maximum nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// Proof of one entered level; leaving happens on drop.
#[must_use = "the level is left as soon as the token is dropped"]
#[derive(Debug)]
pub struct ReentrancyToken<'a> {
    limit: &'a ReentrancyLimit,
}

impl Drop for ReentrancyToken<'_> {
    fn drop(&mut self) {
        self.limit.depth.fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_until_limit() {
        let limit = ReentrancyLimit::new(3);
        let a = limit.enter();
        let b = limit.enter();
        let c = limit.enter();
        assert!(a.is_some() && b.is_some() && c.is_some());
        assert_eq!(limit.depth(), 3);
        assert!(limit.enter().is_none());
        assert_eq!(limit.depth(), 3);
    }

    #[test]
    fn test_drop_leaves_level() {
        let limit = ReentrancyLimit::new(1);
        {
            let _token = limit.enter().unwrap();
            assert!(limit.enter().is_none());
        }
        assert_eq!(limit.depth(), 0);
        assert!(limit.enter().is_some());
    }

    #[test]
    fn test_refused_entry_keeps_depth() {
        let limit = ReentrancyLimit::new(2);
        {
            let _outer = limit.enter().unwrap();
            let _inner = limit.enter().unwrap();
            for _ in 0..5 {
                assert!(limit.enter().is_none());
            }
            assert_eq!(limit.depth(), 2);
        }
        assert_eq!(limit.depth(), 0);
        assert!(limit.enter().is_some());
    }

    #[test]
    fn test_zero_depth_rejects_everything() {
        let limit = ReentrancyLimit::new(0);
        assert!(limit.enter().is_none());
        assert_eq!(limit.max_depth(), 0);
    }
}
