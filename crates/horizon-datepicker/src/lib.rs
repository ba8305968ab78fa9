//! Horizon Datepicker - date and date-range picker controls.
//!
//! A picker couples a shared date cell to two editors: a text field showing
//! the date in a configurable pattern, and a calendar shown in an overlay.
//! Edits from either side go through the same path. The text is parsed, the
//! cell is replaced, and the text is recomputed from the stored value.
//!
//! This is the main crate. It re-exports the reactive primitives of
//! `horizon-datepicker-core`.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use horizon_datepicker::{InputDate, Reactive};
//!
//! let day = Reactive::new(NaiveDate::from_ymd_opt(2024, 1, 15));
//! let input = InputDate::new(day.clone())
//!     .with_date_format("%Y-%m-%d")
//!     .mount()
//!     .unwrap();
//!
//! input.activate();
//! input.submit_text("2024-02-20").unwrap();
//! assert_eq!(day.get(), NaiveDate::from_ymd_opt(2024, 2, 20));
//!
//! assert!(input.submit_text("not-a-date").is_err());
//! assert_eq!(input.display(), "2024-02-20");
//!
//! input.close();
//! assert!(!input.is_open());
//! ```

pub use horizon_datepicker_core::*;

pub mod calendar;
pub mod config;
pub mod error;
pub mod format;
pub mod overlay;
pub mod selection;
pub mod style;
pub mod sync;
pub mod view;
pub mod widgets;

pub use calendar::{CalendarModel, SelectionMode};
pub use config::PickerOptions;
pub use error::{ConfigError, DatePickError, FormatError, RangeArityError, Result};
pub use format::{
    DateFormat, RANGE_SEPARATOR, WireFormat, format_date, format_dates, parse_date, parse_range,
};
pub use overlay::{CloseHandle, OpenFlag, OverlayPhase, OverlayState};
pub use selection::Selection;
pub use style::{StyleInput, flatten_style, merge_style};
pub use sync::{Interaction, SyncController};
pub use view::{Button, Element, Justify, MenuView, Row};
pub use widgets::{
    Binder, DatePicker, DateRangePicker, InputDate, InputDateRange, RangeDateBinder,
    SingleDateBinder,
};
