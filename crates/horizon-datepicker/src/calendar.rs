//! Calendar selection model.
//!
//! The `CalendarModel` holds the state of the calendar shown inside a
//! picker's overlay: which month is on screen, which weekday starts a row,
//! and how a click turns into the date sequence the calendar reports.
//!
//! - Month grid of 42 cells (6 rows x 7 columns)
//! - Navigation (previous/next month, jump to a date)
//! - Single or range selection
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use horizon_datepicker::calendar::{CalendarModel, SelectionMode};
//!
//! let mut calendar = CalendarModel::new(SelectionMode::Range)
//!     .with_first_day_of_week(Weekday::Mon);
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//!
//! let first = calendar.pick(&[], start);
//! assert_eq!(first, vec![start]);
//! assert_eq!(calendar.pick(&first, end), vec![end, start]);
//! ```

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use horizon_datepicker_core::Signal;
use serde::{Deserialize, Serialize};

/// Number of cells in the month grid.
pub const GRID_CELLS: usize = 42;

/// How clicks on the calendar select dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Each click replaces the selection with one date.
    #[default]
    Single,
    /// The first click starts a range, the second completes it.
    Range,
}

/// Map a weekday index counted from Sunday (`0`) to a `Weekday`.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// State of the calendar inside a picker overlay.
///
/// # Signals
///
/// - `page_changed((i32, u32))`: Emitted when the displayed month changes (year, month)
pub struct CalendarModel {
    /// Selection behaviour.
    mode: SelectionMode,

    /// First day of the displayed month.
    displayed_month: NaiveDate,

    /// Weekday shown in the first column.
    first_day_of_week: Weekday,

    /// Signal emitted when the displayed month changes.
    pub page_changed: Signal<(i32, u32)>,
}

impl CalendarModel {
    /// Create a calendar showing the current month.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            displayed_month: first_of_month(Local::now().date_naive()),
            first_day_of_week: Weekday::Sun,
            page_changed: Signal::new(),
        }
    }

    /// Set first day of week using builder pattern.
    pub fn with_first_day_of_week(mut self, day: Weekday) -> Self {
        self.first_day_of_week = day;
        self
    }

    /// Show the month containing `date` using builder pattern.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.displayed_month = first_of_month(date);
        self
    }

    /// The selection behaviour.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Get the first day of the week.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Set the first day of the week.
    pub fn set_first_day_of_week(&mut self, day: Weekday) {
        self.first_day_of_week = day;
    }

    /// Get the displayed year and month.
    pub fn displayed_year_month(&self) -> (i32, u32) {
        (self.displayed_month.year(), self.displayed_month.month())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Show the previous month.
    pub fn show_previous_month(&mut self) {
        if let Some(month) = self.displayed_month.checked_sub_months(Months::new(1)) {
            self.set_displayed_month(month);
        }
    }

    /// Show the next month.
    pub fn show_next_month(&mut self) {
        if let Some(month) = self.displayed_month.checked_add_months(Months::new(1)) {
            self.set_displayed_month(month);
        }
    }

    /// Navigate to show a specific date's month.
    pub fn show_date(&mut self, date: NaiveDate) {
        self.set_displayed_month(first_of_month(date));
    }

    fn set_displayed_month(&mut self, month: NaiveDate) {
        if self.displayed_month != month {
            self.displayed_month = month;
            self.page_changed.emit((month.year(), month.month()));
        }
    }

    // =========================================================================
    // Grid Calculation
    // =========================================================================

    /// Column (0-6) of a weekday given the first day of the week.
    pub fn weekday_index(&self, day: Weekday) -> u32 {
        let first = self.first_day_of_week.num_days_from_sunday();
        (day.num_days_from_sunday() + 7 - first) % 7
    }

    /// Days to display in the grid, each with whether it is in the displayed month.
    pub fn days_in_grid(&self) -> Vec<(NaiveDate, bool)> {
        let year = self.displayed_month.year();
        let month = self.displayed_month.month();
        let offset = self.weekday_index(self.displayed_month.weekday());
        let start = self
            .displayed_month
            .checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(self.displayed_month);

        (0..GRID_CELLS as u64)
            .filter_map(|i| start.checked_add_days(Days::new(i)))
            .map(|date| (date, date.year() == year && date.month() == month))
            .collect()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Compute the dates the calendar reports after a click on `date`.
    ///
    /// `current` is the selection the calendar is showing. In range mode a
    /// click starts a new range unless exactly one date is selected, in which
    /// case the pair is completed and ordered.
    pub fn pick(&mut self, current: &[NaiveDate], date: NaiveDate) -> Vec<NaiveDate> {
        self.show_date(date);
        match (self.mode, current) {
            (SelectionMode::Range, [start]) if *start <= date => vec![*start, date],
            (SelectionMode::Range, [end]) => vec![date, *end],
            _ => vec![date],
        }
    }
}

impl Default for CalendarModel {
    fn default() -> Self {
        Self::new(SelectionMode::Single)
    }
}

impl std::fmt::Debug for CalendarModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarModel")
            .field("mode", &self.mode)
            .field("displayed_month", &self.displayed_month)
            .field("first_day_of_week", &self.first_day_of_week)
            .finish()
    }
}

static_assertions::assert_impl_all!(CalendarModel: Send, Sync);
