//! Core systems for Horizon Datepicker.
//!
//! This crate provides the reactive foundation the date controls are built on:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Property System**: Change-detecting values and cached bindings
//! - **Reactive Cells**: Shared values with get/set/subscribe
//!
//! # Example
//!
//! ```
//! use horizon_datepicker_core::{Binding, Reactive};
//!
//! let name = Reactive::new("lattice".to_string());
//!
//! let source = name.clone();
//! let shout = std::sync::Arc::new(Binding::new(move || source.get().to_uppercase()));
//!
//! let binding = shout.clone();
//! let _sub = name.subscribe_scoped(move |_| binding.invalidate());
//!
//! assert_eq!(shout.get(), "LATTICE");
//! name.set("datepicker".to_string());
//! assert_eq!(shout.get(), "DATEPICKER");
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod reactive;
pub mod signal;

pub use error::SignalError;
pub use property::{Binding, Property};
pub use reactive::{Reactive, Subscription};
pub use signal::{ConnectionId, Signal};
