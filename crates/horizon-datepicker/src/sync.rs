//! Synchronization between the external date cell, the text field, and the
//! calendar.
//!
//! A [`SyncController`] receives edits from two directions:
//!
//! - **Text field**: a string typed by the user, parsed with the display
//!   pattern.
//! - **Calendar**: either textual values in the wire pattern, or dates that
//!   are already typed.
//!
//! Every accepted edit replaces the external cell wholesale and recomputes
//! the display string from the stored value, so typed input such as
//! `2024-2-5` comes back normalized. A rejected edit changes nothing.
//!
//! The display string is also recomputed whenever anything else writes the
//! external cell, so several pickers can share one cell.
//!
//! # State Machine
//!
//! | from | interaction | to |
//! |---|---|---|
//! | Closed | `Activate` | Open |
//! | Open | `Close` | Closed |
//! | Open | `CalendarReported` / `DatesReported` | Open |

use std::sync::Arc;

use chrono::NaiveDate;
use horizon_datepicker_core::logging::targets;
use horizon_datepicker_core::{Binding, Reactive, Subscription};

use crate::error::{DatePickError, Result};
use crate::format::{DateFormat, WireFormat};
use crate::overlay::{CloseHandle, OpenFlag, OverlayPhase, OverlayState};
use crate::selection::Selection;

/// A user interaction routed through a [`SyncController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// The text field was clicked or focused.
    Activate,
    /// A close control was invoked.
    Close,
    /// The text field submitted new text.
    TextSubmitted(String),
    /// The calendar reported textual values in the wire pattern.
    CalendarReported(Vec<String>),
    /// The calendar reported typed dates.
    DatesReported(Vec<NaiveDate>),
}

/// Coordinates one picker's value, display string and overlay flag.
pub struct SyncController<S: Selection> {
    value: Reactive<S>,
    display: Arc<Binding<String>>,
    display_format: DateFormat,
    wire_format: DateFormat,
    overlay: OverlayState,
    _subscription: Subscription<S>,
}

impl<S: Selection> SyncController<S> {
    /// Bind to `value`, rendering it with `display_format`.
    pub fn new(
        value: Reactive<S>,
        display_format: DateFormat,
        wire_format: WireFormat,
        open: OpenFlag,
    ) -> Self {
        let source = value.clone();
        let format = display_format.clone();
        let display = Arc::new(Binding::new(move || source.with(|v| v.format(&format))));

        let binding = Arc::clone(&display);
        let subscription = value.subscribe_scoped(move |_| binding.invalidate());

        Self {
            wire_format: wire_format.resolve(&display_format),
            value,
            display,
            display_format,
            overlay: OverlayState::adopt(open),
            _subscription: subscription,
        }
    }

    /// The current selection.
    pub fn value(&self) -> S {
        self.value.get()
    }

    /// The external cell this controller writes.
    pub fn value_cell(&self) -> &Reactive<S> {
        &self.value
    }

    /// The text shown in the text field.
    pub fn display(&self) -> String {
        self.display.get()
    }

    /// Pattern used for the text field.
    pub fn display_format(&self) -> &DateFormat {
        &self.display_format
    }

    /// Pattern used for textual values exchanged with the calendar.
    pub fn wire_format(&self) -> &DateFormat {
        &self.wire_format
    }

    /// The current selection rendered in the wire pattern.
    pub fn wire_values(&self) -> Vec<String> {
        self.value.with(|v| {
            v.dates()
                .into_iter()
                .map(|date| self.wire_format.format(date))
                .collect()
        })
    }

    /// The overlay flag holder.
    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    /// Apply the `open` argument of a later render.
    pub fn rebind_open(&mut self, open: OpenFlag) {
        self.overlay.rebind(open);
    }

    /// A handle that can only close this controller's overlay.
    pub fn close_handle(&self) -> CloseHandle {
        self.overlay.close_handle()
    }

    /// Current overlay phase.
    pub fn phase(&self) -> OverlayPhase {
        self.overlay.phase()
    }

    /// Process one interaction and return the resulting phase.
    #[tracing::instrument(skip(self), target = "horizon_datepicker::sync", level = "trace")]
    pub fn handle(&self, interaction: Interaction) -> Result<OverlayPhase> {
        match interaction {
            Interaction::Activate => {
                self.overlay.open();
            }
            Interaction::Close => {
                self.overlay.close();
            }
            Interaction::TextSubmitted(text) => self.receive_text(&text)?,
            Interaction::CalendarReported(values) => self.receive_wire(&values)?,
            Interaction::DatesReported(dates) => self.receive_dates(dates)?,
        }
        Ok(self.phase())
    }

    /// Open the overlay.
    pub fn activate(&self) -> OverlayPhase {
        self.overlay.open();
        self.phase()
    }

    /// Close the overlay. Values already written stay written.
    pub fn close(&self) -> OverlayPhase {
        self.overlay.close();
        self.phase()
    }

    /// Accept text from the text field.
    pub fn receive_text(&self, text: &str) -> Result<()> {
        let selection = S::parse(text, &self.display_format).inspect_err(|err| {
            tracing::warn!(
                target: targets::SYNC,
                input = text,
                pattern = self.display_format.pattern(),
                %err,
                "rejected text edit"
            );
        })?;
        self.write(selection);
        Ok(())
    }

    /// Accept textual values reported by the calendar.
    pub fn receive_wire(&self, values: &[String]) -> Result<()> {
        let dates = values
            .iter()
            .map(|value| self.wire_format.parse(value))
            .collect::<std::result::Result<Vec<_>, _>>()
            .inspect_err(|err| {
                tracing::warn!(target: targets::SYNC, %err, "rejected calendar report");
            })?;
        self.receive_dates(dates)
    }

    /// Accept typed dates reported by the calendar.
    pub fn receive_dates(&self, dates: Vec<NaiveDate>) -> Result<()> {
        let selection = S::from_dates(dates).map_err(DatePickError::from)?;
        self.write(selection);
        Ok(())
    }

    fn write(&self, selection: S) {
        let changed = self.value.set(selection);
        let text = self.display.refresh();
        tracing::debug!(target: targets::SYNC, changed, display = %text, "selection written");
    }
}

impl<S: Selection> std::fmt::Debug for SyncController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncController")
            .field("value", &self.value.get())
            .field("display_format", &self.display_format)
            .field("wire_format", &self.wire_format)
            .field("overlay", &self.overlay)
            .finish()
    }
}

static_assertions::assert_impl_all!(SyncController<Option<NaiveDate>>: Send, Sync);
static_assertions::assert_impl_all!(SyncController<Vec<NaiveDate>>: Send, Sync);
