//! The picker components.
//!
//! Each component is a builder collecting props. [`mount`](DatePicker::mount)
//! validates them and returns a [`Binder`] holding the live state.
//!
//! | component | value | default pattern | text field |
//! |---|---|---|---|
//! | [`DatePicker`] | `Option<NaiveDate>` | `%Y-%m-%d` | read-only |
//! | [`DateRangePicker`] | `Vec<NaiveDate>` | `%Y-%m-%d` | read-only |
//! | [`InputDate`] | `Option<NaiveDate>` | `%Y/%m/%d` | editable |
//! | [`InputDateRange`] | `Vec<NaiveDate>` | `%Y/%m/%d` | read-only |

/// Builder methods shared by every component.
macro_rules! common_builders {
    () => {
        /// Replace the elements rendered under the calendar.
        ///
        /// Without children the picker renders its own "close" control.
        pub fn with_children<I, E>(mut self, children: I) -> Self
        where
            I: IntoIterator<Item = E>,
            E: Into<$crate::view::Element>,
        {
            self.spec.children = children.into_iter().map(Into::into).collect();
            self
        }

        /// Append one element rendered under the calendar.
        pub fn with_child(mut self, child: impl Into<$crate::view::Element>) -> Self {
            self.spec.children.push(child.into());
            self
        }

        /// Set the open flag using builder pattern.
        ///
        /// A `bool` seeds a flag owned by the picker; a `Reactive<bool>`
        /// hands ownership of the flag to the caller.
        pub fn with_open(mut self, open: impl Into<$crate::overlay::OpenFlag>) -> Self {
            self.spec.open = open.into();
            self
        }

        /// Set the text field pattern using builder pattern.
        pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
            self.spec.date_format = pattern.into();
            self
        }

        /// Set the calendar wire convention using builder pattern.
        pub fn with_wire_format(mut self, wire_format: $crate::format::WireFormat) -> Self {
            self.spec.wire_format = wire_format;
            self
        }
    };
}

/// Builder methods of the text-input family.
macro_rules! input_builders {
    () => {
        /// Set the text field label using builder pattern.
        pub fn with_label(mut self, label: impl Into<String>) -> Self {
            self.spec.label = label.into();
            self
        }

        /// Append extra style to the text field.
        pub fn with_style(mut self, style: impl Into<$crate::style::StyleInput>) -> Self {
            self.spec.style = Some(style.into());
            self
        }

        /// First weekday column, `0` = Sunday through `6` = Saturday.
        ///
        /// Checked at mount.
        pub fn with_first_day_of_the_week(mut self, day: u8) -> Self {
            self.spec.first_day_of_the_week = day;
            self
        }

        /// Apply picker options, including label, style and first weekday.
        pub fn with_options(mut self, options: &$crate::config::PickerOptions) -> Self {
            self.spec.apply_input(options);
            self
        }
    };
}

mod binder;
mod date_picker;
mod input_date;

pub use binder::{Binder, RangeDateBinder, SingleDateBinder};
pub use date_picker::{DatePicker, DateRangePicker};
pub use input_date::{InputDate, InputDateRange};
