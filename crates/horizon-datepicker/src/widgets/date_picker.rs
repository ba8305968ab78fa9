//! Calendar-driven pickers with a read-only text field.
//!
//! The week starts on Sunday and the field carries no label.

use chrono::NaiveDate;
use horizon_datepicker_core::Reactive;

use super::binder::{Binder, BinderSpec};
use crate::config::PickerOptions;
use crate::error::Result;
use crate::format::CANONICAL_PATTERN;

/// Picks one date from a calendar.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use horizon_datepicker::{DatePicker, Reactive};
///
/// let day = Reactive::new(NaiveDate::from_ymd_opt(2024, 1, 15));
/// let picker = DatePicker::new(day.clone())
///     .with_date_format("%d.%m.%Y")
///     .mount()
///     .unwrap();
///
/// assert_eq!(picker.display(), "15.01.2024");
/// ```
#[derive(Debug, Clone)]
pub struct DatePicker {
    spec: BinderSpec<Option<NaiveDate>>,
}

impl DatePicker {
    pub fn new(value: Reactive<Option<NaiveDate>>) -> Self {
        Self {
            spec: BinderSpec::new(value, CANONICAL_PATTERN),
        }
    }

    common_builders!();

    /// Apply the pattern and wire convention of `options`.
    pub fn with_options(mut self, options: &PickerOptions) -> Self {
        self.spec.apply_common(options);
        self
    }

    /// Validate the props and mount the picker.
    pub fn mount(self) -> Result<Binder<Option<NaiveDate>>> {
        self.spec.mount()
    }
}

/// Picks a start and an end date from a calendar.
#[derive(Debug, Clone)]
pub struct DateRangePicker {
    spec: BinderSpec<Vec<NaiveDate>>,
}

impl DateRangePicker {
    pub fn new(dates: Reactive<Vec<NaiveDate>>) -> Self {
        let mut spec = BinderSpec::new(dates, CANONICAL_PATTERN);
        spec.text_base_style = "min-width: 280px;";
        Self { spec }
    }

    common_builders!();

    /// Apply the pattern and wire convention of `options`.
    pub fn with_options(mut self, options: &PickerOptions) -> Self {
        self.spec.apply_common(options);
        self
    }

    pub fn mount(self) -> Result<Binder<Vec<NaiveDate>>> {
        self.spec.mount()
    }
}
