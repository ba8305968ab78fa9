//! Signals and slots.
//!
//! A [`Signal`] notifies connected slots when something changes, such as a
//! cell's value or a calendar's displayed month. Slots run directly on the
//! emitting thread; nothing is queued.
//!
//! [`Signal::emit`] snapshots the connected slots before invoking them, so a
//! slot may connect, disconnect or emit again without deadlocking.
//!
//! # Example
//!
//! ```
//! use horizon_datepicker_core::Signal;
//!
//! let page_changed = Signal::<(i32, u32)>::new();
//! let id = page_changed.connect(|(year, month)| {
//!     println!("showing {year}-{month:02}");
//! });
//!
//! page_changed.emit((2024, 3));
//! assert!(page_changed.disconnect(id));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Identifies one connected slot; pass it to [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A change notification with any number of connected slots.
///
/// `Args` is what a slot receives by reference, for example the new value of
/// a cell or a `(year, month)` page.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot, returning the id that disconnects it.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Remove a slot. Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Emit the signal, invoking all connected slots in connection order.
    #[tracing::instrument(skip_all, target = "horizon_datepicker_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        // Release the lock before invoking slots so they can reconnect.
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);
