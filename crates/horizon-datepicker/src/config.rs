//! Picker options.
//!
//! [`PickerOptions`] gathers the configurable props of the four pickers so
//! they can be kept in an application's settings file:
//!
//! ```toml
//! date_format = "%d.%m.%Y"
//! wire_format = "canonical"
//! first_day_of_the_week = 0
//! label = "Check-in"
//! style = { width = "350px" }
//! ```
//!
//! Fields left out keep the component's default, or whatever the builder set
//! before the options were applied. `label`, `style` and
//! `first_day_of_the_week` only apply to [`InputDate`](crate::InputDate) and
//! [`InputDateRange`](crate::InputDateRange).

use horizon_datepicker_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::calendar::weekday_from_index;
use crate::error::{ConfigError, DatePickError};
use crate::format::{DateFormat, WireFormat};
use crate::style::StyleInput;

/// Default first day of the week (Monday), counted from Sunday.
pub const DEFAULT_FIRST_DAY_OF_THE_WEEK: u8 = 1;

/// Configurable picker props.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    /// Pattern for the text field; `None` keeps the component default.
    pub date_format: Option<String>,
    /// Convention for values exchanged with the calendar; `None` keeps the
    /// component default.
    pub wire_format: Option<WireFormat>,
    /// First weekday column, `0` = Sunday through `6` = Saturday; `None`
    /// keeps the component default.
    pub first_day_of_the_week: Option<u8>,
    /// Text field label; `None` keeps the component default.
    pub label: Option<String>,
    /// Extra text field style.
    pub style: Option<StyleInput>,
}

impl PickerOptions {
    /// Parse options from a TOML document and validate them.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let options: Self = toml::from_str(source)?;
        options.validate()?;
        tracing::debug!(target: targets::CONFIG, ?options, "loaded picker options");
        Ok(options)
    }

    /// Check the pattern and weekday without building a picker.
    pub fn validate(&self) -> Result<(), DatePickError> {
        if let Some(pattern) = &self.date_format {
            DateFormat::new(pattern.as_str())?;
        }
        if let Some(day) = self.first_day_of_the_week {
            weekday_from_index(day).ok_or(DatePickError::FirstDayOfWeek(day))?;
        }
        Ok(())
    }
}
