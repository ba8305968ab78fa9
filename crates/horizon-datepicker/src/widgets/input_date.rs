//! Labelled text inputs with a calendar overlay.

use chrono::NaiveDate;
use horizon_datepicker_core::Reactive;

use super::binder::{Binder, BinderSpec};
use crate::config::DEFAULT_FIRST_DAY_OF_THE_WEEK;
use crate::error::Result;
use crate::format::SLASHED_PATTERN;

const CALENDAR_STYLE: &str = "width: 100%;";

/// An editable date field.
///
/// Typed text is parsed with the field's pattern; a mismatch is returned to
/// the caller and nothing changes.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use horizon_datepicker::{InputDate, Reactive};
///
/// let day = Reactive::new(None);
/// let input = InputDate::new(day.clone()).mount().unwrap();
///
/// input.submit_text("2024/2/5").unwrap();
/// assert_eq!(day.get(), NaiveDate::from_ymd_opt(2024, 2, 5));
/// assert_eq!(input.display(), "2024/02/05");
/// ```
#[derive(Debug, Clone)]
pub struct InputDate {
    spec: BinderSpec<Option<NaiveDate>>,
}

impl InputDate {
    pub fn new(value: Reactive<Option<NaiveDate>>) -> Self {
        let mut spec = BinderSpec::new(value, SLASHED_PATTERN);
        spec.label = "Pick a date".to_string();
        spec.text_read_only = false;
        spec.calendar_style = Some(CALENDAR_STYLE);
        spec.first_day_of_the_week = DEFAULT_FIRST_DAY_OF_THE_WEEK;
        Self { spec }
    }

    common_builders!();
    input_builders!();

    pub fn mount(self) -> Result<Binder<Option<NaiveDate>>> {
        self.spec.mount()
    }
}

/// A date-range field filled from the calendar.
#[derive(Debug, Clone)]
pub struct InputDateRange {
    spec: BinderSpec<Vec<NaiveDate>>,
}

impl InputDateRange {
    pub fn new(dates: Reactive<Vec<NaiveDate>>) -> Self {
        let mut spec = BinderSpec::new(dates, SLASHED_PATTERN);
        spec.label = "Select dates".to_string();
        spec.text_base_style = "min-width: 300px;";
        spec.calendar_style = Some(CALENDAR_STYLE);
        spec.first_day_of_the_week = DEFAULT_FIRST_DAY_OF_THE_WEEK;
        Self { spec }
    }

    common_builders!();
    input_builders!();

    pub fn mount(self) -> Result<Binder<Vec<NaiveDate>>> {
        self.spec.mount()
    }
}
