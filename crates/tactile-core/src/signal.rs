//! Ordered, synchronous observer lists.
//!
//! A [`Signal`] owns a list of slots. [`Signal::emit`] calls each of them in
//! the order they were connected, on the calling thread, before returning.
//!
//! # Dispatch
//!
//! The slot list is copied out of its lock before the first slot runs, so a
//! slot is free to connect, disconnect or emit (on any signal, including the
//! one dispatching it). Such changes apply from the next emission on: a slot
//! connected mid-dispatch is skipped by the running one, and a slot removed
//! mid-dispatch still runs if its turn had not come yet.
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use tactile_core::Signal;
//!
//! let clicked = Signal::<u32>::new();
//! let total = Arc::new(AtomicUsize::new(0));
//!
//! let sink = total.clone();
//! let id = clicked.connect(move |n| {
//!     sink.fetch_add(*n as usize, Ordering::Relaxed);
//! });
//!
//! clicked.emit(3);
//! clicked.disconnect(id);
//! clicked.emit(4);
//! assert_eq!(total.load(Ordering::Relaxed), 3);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle to one connected slot, returned by [`Signal::connect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

struct Entry<Args> {
    slot: Slot<Args>,
    // Slotmap keys are recycled, so dispatch order comes from this counter.
    order: u64,
}

/// A list of callbacks receiving `&Args` on every emission.
///
/// Use `()` for notifications without a payload.
pub struct Signal<Args> {
    entries: Mutex<SlotMap<ConnectionId, Entry<Args>>>,
    blocked: AtomicBool,
    next_order: AtomicU64,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// An empty, unblocked signal.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
            next_order: AtomicU64::new(0),
        }
    }

    /// Append `slot` to the dispatch list.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let order = self.next_order.fetch_add(1, Ordering::Relaxed);
        let id = self.entries.lock().insert(Entry {
            slot: Arc::new(slot),
            order,
        });
        tracing::trace!(target: targets::SIGNAL, ?id, "slot connected");
        id
    }

    /// Like [`connect`](Self::connect), but the slot is removed when the
    /// returned guard goes out of scope.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            id: self.connect(slot),
            signal: self,
        }
    }

    /// Remove one slot. Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.entries.lock().remove(id).is_some()
    }

    /// Remove every slot.
    pub fn disconnect_all(&self) {
        self.entries.lock().clear();
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether `id` is still connected.
    pub fn is_connected(&self, id: ConnectionId) -> bool {
        self.entries.lock().contains_key(id)
    }

    /// Mute or unmute the signal. A muted signal drops emissions.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Whether emissions are currently dropped.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Call every connected slot with `args`, oldest connection first.
    #[tracing::instrument(skip_all, target = "tactile_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "blocked, emission dropped");
            return;
        }

        let slots = self.ordered_slots();
        tracing::trace!(target: targets::SIGNAL, slots = slots.len(), "dispatch");
        for slot in slots {
            slot(&args);
        }
    }

    fn ordered_slots(&self) -> Vec<Slot<Args>> {
        let mut slots: Vec<(u64, Slot<Args>)> = self
            .entries
            .lock()
            .values()
            .map(|entry| (entry.order, Arc::clone(&entry.slot)))
            .collect();
        slots.sort_unstable_by_key(|(order, _)| *order);
        slots.into_iter().map(|(_, slot)| slot).collect()
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);

/// Disconnects its slot when dropped. Created by [`Signal::connect_scoped`].
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
///
/// use tactile_core::Signal;
///
/// let signal = Signal::<()>::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// {
///     let fired = fired.clone();
///     let _guard = signal.connect_scoped(move |_| fired.store(true, Ordering::Relaxed));
/// }
/// signal.emit(());
/// assert!(!fired.load(Ordering::Relaxed));
/// ```
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// The guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Give up the guard, leaving the slot connected.
    pub fn release(self) -> ConnectionId {
        let id = self.id;
        std::mem::forget(self);
        id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}
