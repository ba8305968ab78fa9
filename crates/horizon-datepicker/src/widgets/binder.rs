//! The mounted picker shared by all four components.

use chrono::NaiveDate;
use horizon_datepicker_core::Reactive;
use horizon_datepicker_core::logging::targets;
use parking_lot::{Mutex, MutexGuard};

use crate::calendar::{CalendarModel, weekday_from_index};
use crate::config::PickerOptions;
use crate::error::{DatePickError, Result};
use crate::format::{DateFormat, WireFormat};
use crate::overlay::{CloseHandle, OpenFlag, OverlayPhase};
use crate::selection::Selection;
use crate::style::{StyleInput, merge_style};
use crate::sync::{Interaction, SyncController};
use crate::view::{
    Button, CALENDAR_ICON, CalendarView, Element, MenuView, TextFieldView, default_close_control,
};

/// Props collected by a component builder before mount.
#[derive(Debug, Clone)]
pub(crate) struct BinderSpec<S: Selection> {
    pub(crate) value: Reactive<S>,
    pub(crate) children: Vec<Element>,
    pub(crate) open: OpenFlag,
    pub(crate) date_format: String,
    pub(crate) wire_format: WireFormat,
    pub(crate) label: String,
    pub(crate) text_read_only: bool,
    pub(crate) text_base_style: &'static str,
    pub(crate) style: Option<StyleInput>,
    pub(crate) calendar_style: Option<&'static str>,
    pub(crate) first_day_of_the_week: u8,
}

impl<S: Selection> BinderSpec<S> {
    pub(crate) fn new(value: Reactive<S>, date_format: &str) -> Self {
        Self {
            value,
            children: Vec::new(),
            open: OpenFlag::default(),
            date_format: date_format.to_string(),
            wire_format: WireFormat::default(),
            label: String::new(),
            text_read_only: true,
            text_base_style: "",
            style: None,
            calendar_style: None,
            first_day_of_the_week: 0,
        }
    }

    /// Apply the options every component understands.
    pub(crate) fn apply_common(&mut self, options: &PickerOptions) {
        if let Some(pattern) = &options.date_format {
            self.date_format = pattern.clone();
        }
        if let Some(wire_format) = options.wire_format {
            self.wire_format = wire_format;
        }
    }

    /// Apply the options of the text-input family.
    pub(crate) fn apply_input(&mut self, options: &PickerOptions) {
        self.apply_common(options);
        if let Some(label) = &options.label {
            self.label = label.clone();
        }
        if options.style.is_some() {
            self.style = options.style.clone();
        }
        if let Some(day) = options.first_day_of_the_week {
            self.first_day_of_the_week = day;
        }
    }

    pub(crate) fn mount(self) -> Result<Binder<S>> {
        let display_format = DateFormat::new(self.date_format.as_str())?;
        let first_day = weekday_from_index(self.first_day_of_the_week)
            .ok_or(DatePickError::FirstDayOfWeek(self.first_day_of_the_week))?;

        let mut calendar = CalendarModel::new(S::MODE).with_first_day_of_week(first_day);
        if let Some(first) = self.value.with(|v| v.dates().first().copied()) {
            calendar = calendar.with_date(first);
        }

        let controller =
            SyncController::new(self.value, display_format, self.wire_format, self.open);
        let text_style = merge_style(self.text_base_style, self.style.as_ref());

        tracing::debug!(
            target: targets::WIDGETS,
            mode = ?S::MODE,
            pattern = controller.display_format().pattern(),
            wire = controller.wire_format().pattern(),
            open = controller.overlay().is_open(),
            "picker mounted"
        );

        Ok(Binder {
            controller,
            calendar: Mutex::new(calendar),
            label: self.label,
            text_read_only: self.text_read_only,
            text_style,
            calendar_style: self.calendar_style.map(str::to_string),
            children: self.children,
        })
    }
}

/// A mounted picker: a text field and a calendar overlay bound to one
/// external cell.
///
/// All interactions take `&self`; the calendar's displayed month is kept
/// behind a lock so a binder can be shared with the host's event handlers.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use horizon_datepicker::{DateRangePicker, Reactive};
///
/// let dates = Reactive::new(Vec::<NaiveDate>::new());
/// let picker = DateRangePicker::new(dates.clone()).mount().unwrap();
///
/// picker.activate();
/// picker.pick(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).unwrap();
/// picker.pick(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()).unwrap();
///
/// assert_eq!(picker.display(), "2024-03-01 - 2024-03-10");
/// assert!(picker.is_open());
/// ```
pub struct Binder<S: Selection> {
    controller: SyncController<S>,
    calendar: Mutex<CalendarModel>,
    label: String,
    text_read_only: bool,
    text_style: String,
    calendar_style: Option<String>,
    children: Vec<Element>,
}

/// A mounted [`DatePicker`](crate::DatePicker) or [`InputDate`](crate::InputDate).
pub type SingleDateBinder = Binder<Option<NaiveDate>>;

/// A mounted [`DateRangePicker`](crate::DateRangePicker) or
/// [`InputDateRange`](crate::InputDateRange).
pub type RangeDateBinder = Binder<Vec<NaiveDate>>;

impl<S: Selection> Binder<S> {
    // =========================================================================
    // Interactions
    // =========================================================================

    /// The text field was clicked or focused.
    pub fn activate(&self) -> OverlayPhase {
        self.controller.activate()
    }

    /// Close the overlay.
    pub fn close(&self) -> OverlayPhase {
        self.controller.close()
    }

    /// Submit text typed into the text field.
    ///
    /// Returns `Ok(false)` without touching anything when the text field is
    /// read-only. A `FormatError` leaves the value and display unchanged.
    pub fn submit_text(&self, text: &str) -> Result<bool> {
        if self.text_read_only {
            tracing::trace!(target: targets::WIDGETS, input = text, "read-only text field, edit ignored");
            return Ok(false);
        }
        self.controller
            .handle(Interaction::TextSubmitted(text.to_string()))?;
        Ok(true)
    }

    /// Click `date` on the calendar.
    ///
    /// The calendar computes the sequence it reports from the current value
    /// and hands it over in the wire pattern. The overlay stays open.
    pub fn pick(&self, date: NaiveDate) -> Result<OverlayPhase> {
        let current = self.controller.value().dates();
        let reported = self.calendar.lock().pick(&current, date);
        let wire = self.controller.wire_format();
        let values = reported.into_iter().map(|d| wire.format(d)).collect();
        self.controller.handle(Interaction::CalendarReported(values))
    }

    /// The calendar reported textual values in the wire pattern.
    pub fn report_calendar(&self, values: &[String]) -> Result<OverlayPhase> {
        self.controller
            .handle(Interaction::CalendarReported(values.to_vec()))
    }

    /// The calendar reported typed dates.
    pub fn report_dates(&self, dates: Vec<NaiveDate>) -> Result<OverlayPhase> {
        self.controller.handle(Interaction::DatesReported(dates))
    }

    /// Click a button rendered in this picker's overlay.
    pub fn click(&self, button: &Button) -> bool {
        button.click(&self.close_handle())
    }

    pub fn show_next_month(&self) {
        self.calendar.lock().show_next_month();
    }

    pub fn show_previous_month(&self) {
        self.calendar.lock().show_previous_month();
    }

    /// Apply the `open` argument of a later render.
    pub fn rebind_open(&mut self, open: impl Into<OpenFlag>) {
        self.controller.rebind_open(open.into());
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Text shown in the text field.
    pub fn display(&self) -> String {
        self.controller.display()
    }

    /// Current value of the external cell.
    pub fn value(&self) -> S {
        self.controller.value()
    }

    pub fn is_open(&self) -> bool {
        self.controller.overlay().is_open()
    }

    pub fn phase(&self) -> OverlayPhase {
        self.controller.phase()
    }

    /// A handle that can only close this picker's overlay.
    pub fn close_handle(&self) -> CloseHandle {
        self.controller.close_handle()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_text_read_only(&self) -> bool {
        self.text_read_only
    }

    pub fn controller(&self) -> &SyncController<S> {
        &self.controller
    }

    /// Lock the calendar model.
    pub fn calendar(&self) -> MutexGuard<'_, CalendarModel> {
        self.calendar.lock()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Describe the picker for the host toolkit.
    ///
    /// Caller children are rendered verbatim, in order. Without children a
    /// single right-aligned "close" control is rendered.
    pub fn render(&self) -> MenuView {
        let children = if self.children.is_empty() {
            vec![default_close_control()]
        } else {
            self.children.clone()
        };

        let calendar = self.calendar.lock();
        let content = CalendarView {
            mode: calendar.mode(),
            value: self.controller.wire_values(),
            first_day_of_week: calendar.first_day_of_week(),
            displayed_month: calendar.displayed_year_month(),
            style: self.calendar_style.clone(),
            children,
        };

        MenuView {
            activator: TextFieldView {
                label: self.label.clone(),
                value: self.display(),
                read_only: self.text_read_only,
                append_icon: CALENDAR_ICON,
                style: self.text_style.clone(),
            },
            content,
            open: self.is_open(),
            close_on_content_click: false,
        }
    }
}

impl<S: Selection> std::fmt::Debug for Binder<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binder")
            .field("controller", &self.controller)
            .field("label", &self.label)
            .field("text_read_only", &self.text_read_only)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SingleDateBinder: Send, Sync);
static_assertions::assert_impl_all!(RangeDateBinder: Send, Sync);
