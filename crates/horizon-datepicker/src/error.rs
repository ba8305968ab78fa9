//! Error types for the date controls.

/// Result type alias for picker operations.
pub type Result<T> = std::result::Result<T, DatePickError>;

/// Errors raised while converting between dates and text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The input does not match the pattern or names an impossible date.
    #[error("'{input}' does not match date format '{pattern}': {reason}")]
    Mismatch {
        input: String,
        pattern: String,
        reason: String,
    },

    /// The pattern contains an unknown or malformed specifier.
    #[error("Invalid date format pattern '{pattern}'")]
    InvalidPattern { pattern: String },

    /// The pattern needs fields a calendar date does not have (hours, zones),
    /// or its output does not parse back to the same date.
    #[error("Date format '{pattern}' cannot round-trip a calendar date")]
    Unrepresentable { pattern: String },
}

impl FormatError {
    /// Create a mismatch error.
    pub fn mismatch(
        input: impl Into<String>,
        pattern: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Mismatch {
            input: input.into(),
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// A selection received a sequence with more dates than it can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Selection holds at most {max} dates, got {len}")]
pub struct RangeArityError {
    /// Number of dates received.
    pub len: usize,
    /// Largest accepted number of dates.
    pub max: usize,
}

/// Errors surfaced by the picker controls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatePickError {
    /// Text could not be converted to or from a date.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A calendar report carried too many dates.
    #[error(transparent)]
    RangeArity(#[from] RangeArityError),

    /// `first_day_of_the_week` outside 0 (Sunday) ..= 6 (Saturday).
    #[error("First day of the week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    FirstDayOfWeek(u8),
}

/// Errors raised while loading [`crate::PickerOptions`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document is malformed or has fields of the wrong type.
    #[error("Invalid picker options: {0}")]
    Toml(#[from] toml::de::Error),

    /// The options parsed but name an unusable format or weekday.
    #[error(transparent)]
    Picker(#[from] DatePickError),
}
