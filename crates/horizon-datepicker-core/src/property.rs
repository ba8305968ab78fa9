//! Property system for Horizon Datepicker.
//!
//! This module provides change-detecting properties and cached computed
//! bindings. Properties are the storage half of a [`crate::Reactive`] cell;
//! bindings hold derived values (such as a formatted date string) that are
//! recomputed lazily after their sources change.
//!
//! # Property Types
//!
//! - **Property<T>**: A value with change detection on `set`
//! - **Binding<T>**: A computed value that is cached until invalidated
//!
//! # Example
//!
//! ```
//! use horizon_datepicker_core::Property;
//!
//! let prop = Property::new(42);
//! assert!(!prop.set(42));
//! assert!(prop.set(100));
//! assert_eq!(prop.get(), 100);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

/// Storage half of a [`crate::Reactive`] cell.
///
/// `set` compares against the stored value and reports whether anything
/// changed; notifying subscribers is left to the owner.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Clone the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value`, returning `true` if it differs from the old one.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

/// A computed property that derives its value from a computation.
///
/// `Binding<T>` caches its computed value and only recalculates after
/// [`invalidate`](Self::invalidate). Connect `invalidate` to the change
/// notification of every source the computation reads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_datepicker_core::{Binding, Property};
///
/// let day = Arc::new(Property::new(5u32));
/// let source = day.clone();
/// let label = Binding::new(move || format!("day {:02}", source.get()));
///
/// assert_eq!(label.get(), "day 05");
/// day.set(12);
/// label.invalidate();
/// assert_eq!(label.get(), "day 12");
/// ```
pub struct Binding<T> {
    /// The computation function.
    compute: Box<dyn Fn() -> T + Send + Sync>,
    /// Cached value.
    cached: RwLock<Option<T>>,
    /// Whether the cache needs refreshing.
    dirty: AtomicBool,
}

impl<T: Clone + Send + Sync + 'static> Binding<T> {
    /// Create a new binding with a computation function.
    ///
    /// The function is called lazily when `get()` is first called, and again
    /// after each `invalidate()` call.
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            compute: Box::new(compute),
            cached: RwLock::new(None),
            dirty: AtomicBool::new(true),
        }
    }

    /// Get the current value, computing it if necessary.
    pub fn get(&self) -> T {
        if !self.dirty.swap(false, Ordering::AcqRel) {
            if let Some(value) = self.cached.read().as_ref() {
                return value.clone();
            }
        }
        let value = (self.compute)();
        *self.cached.write() = Some(value.clone());
        value
    }

    /// Mark the binding as dirty, causing recalculation on next `get()`.
    pub fn invalidate(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Force immediate recalculation and return the new value.
    pub fn refresh(&self) -> T {
        self.invalidate();
        self.get()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("dirty", &self.dirty.load(Ordering::Acquire))
            .field("cached", &*self.cached.read())
            .finish()
    }
}

static_assertions::assert_impl_all!(Property<String>: Send, Sync);
static_assertions::assert_impl_all!(Binding<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_property_set_detects_change() {
        let label = Property::new("2024-01-15".to_string());

        assert!(!label.set("2024-01-15".to_string()));
        assert!(label.set("2024-02-20".to_string()));
        assert_eq!(label.get(), "2024-02-20");
        assert_eq!(label.with(|s| s.len()), 10);
    }

    #[test]
    fn test_binding_computes_lazily_once_per_invalidation() {
        let computed = Arc::new(AtomicUsize::new(0));
        let computed_clone = computed.clone();
        let source = Arc::new(Property::new(vec![3, 10]));
        let source_clone = source.clone();

        let joined = Binding::new(move || {
            computed_clone.fetch_add(1, Ordering::SeqCst);
            source_clone.with(|days| {
                days.iter().map(ToString::to_string).collect::<Vec<_>>().join(" - ")
            })
        });
        assert_eq!(computed.load(Ordering::SeqCst), 0);

        assert_eq!(joined.get(), "3 - 10");
        assert_eq!(joined.get(), "3 - 10");
        assert_eq!(computed.load(Ordering::SeqCst), 1);

        source.set(vec![4]);
        assert_eq!(joined.get(), "3 - 10");
        joined.invalidate();
        assert_eq!(joined.get(), "4");
        assert_eq!(computed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_binding_refresh() {
        let source = Arc::new(Property::new(1));
        let source_clone = source.clone();

        let binding = Binding::new(move || source_clone.get() + 10);
        assert_eq!(binding.get(), 11);

        source.set(5);
        assert_eq!(binding.refresh(), 15);
        assert_eq!(binding.get(), 15);
    }
}
