//! Shared reactive cells.
//!
//! A [`Reactive<T>`] is a single mutable value with subscriber notification.
//! Cloning a `Reactive` does not copy the value: every clone refers to the
//! same cell, so a caller can hand one to several controls and observe every
//! write they make.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use horizon_datepicker_core::Reactive;
//!
//! let count = Reactive::new(0);
//! let seen = Arc::new(AtomicUsize::new(0));
//!
//! let seen_clone = seen.clone();
//! let _sub = count.subscribe_scoped(move |&value| {
//!     seen_clone.store(value, Ordering::SeqCst);
//! });
//!
//! let shared = count.clone();
//! shared.set(7);
//! assert_eq!(count.get(), 7);
//! assert_eq!(seen.load(Ordering::SeqCst), 7);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::SignalError;
use crate::logging::targets;
use crate::property::Property;
use crate::signal::{ConnectionId, Signal};

struct Cell<T> {
    value: Property<T>,
    changed: Signal<T>,
}

/// A shared, observable value.
///
/// Writes through [`set`](Self::set) notify subscribers only when the value
/// actually changes.
pub struct Reactive<T> {
    cell: Arc<Cell<T>>,
}

impl<T> Clone for Reactive<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Reactive<T> {
    /// Create a new cell holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            cell: Arc::new(Cell {
                value: Property::new(value),
                changed: Signal::new(),
            }),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.cell.value.get()
    }

    /// Access the current value without cloning it.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.cell.value.with(f)
    }

    /// Replace the value, notifying subscribers if it changed.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        if self.cell.value.set(value.clone()) {
            tracing::trace!(
                target: targets::REACTIVE,
                subscribers = self.cell.changed.connection_count(),
                "reactive value changed"
            );
            self.cell.changed.emit(value);
            true
        } else {
            false
        }
    }

    /// Call `slot` with the new value after every change.
    pub fn subscribe<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.cell.changed.connect(slot)
    }

    /// Remove a subscription created by [`subscribe`](Self::subscribe).
    pub fn unsubscribe(&self, id: ConnectionId) -> Result<(), SignalError> {
        if self.cell.changed.disconnect(id) {
            Ok(())
        } else {
            Err(SignalError::InvalidConnection)
        }
    }

    /// Subscribe for as long as the returned guard lives.
    pub fn subscribe_scoped<F>(&self, slot: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.subscribe(slot);
        Subscription {
            source: self.clone(),
            id,
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.cell.changed.connection_count()
    }

    /// Whether both handles refer to the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for Reactive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reactive")
            .field("value", &self.cell.value.get())
            .field("subscribers", &self.cell.changed.connection_count())
            .finish()
    }
}

/// RAII guard that unsubscribes from a [`Reactive`] when dropped.
///
/// The guard keeps the cell alive, so it may outlive every other handle.
pub struct Subscription<T: Clone + PartialEq + Send + Sync + 'static> {
    source: Reactive<T>,
    id: ConnectionId,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Drop for Subscription<T> {
    fn drop(&mut self) {
        if self.source.unsubscribe(self.id).is_err() {
            tracing::debug!(target: targets::REACTIVE, "subscription already removed");
        }
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

static_assertions::assert_impl_all!(Reactive<Option<i32>>: Send, Sync);
static_assertions::assert_impl_all!(Subscription<bool>: Send, Sync);
