//! Conversion between calendar dates and text.
//!
//! A [`DateFormat`] is a validated strftime-style pattern (`%Y-%m-%d`,
//! `%A, %d. %B, %Y`, ...). Formatting and parsing are pure and delegate all
//! calendar rules to `chrono`.
//!
//! Ranges are rendered by formatting each date independently and joining the
//! results with [`RANGE_SEPARATOR`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use horizon_datepicker::format::{DateFormat, format_dates, parse_range};
//!
//! let format = DateFormat::iso();
//! let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//!
//! let text = format_dates(&[start, end], &format);
//! assert_eq!(text, "2024-03-01 - 2024-03-10");
//! assert_eq!(parse_range(&text, &format).unwrap(), vec![start, end]);
//! ```

use std::fmt::{self, Write as _};

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use horizon_datepicker_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Separator placed between the two dates of a range.
pub const RANGE_SEPARATOR: &str = " - ";

/// Pattern of the canonical `YYYY-MM-DD` form.
pub const CANONICAL_PATTERN: &str = "%Y-%m-%d";

/// Pattern of the `YYYY/MM/DD` form used by the input controls.
pub const SLASHED_PATTERN: &str = "%Y/%m/%d";

/// Dates every pattern must format and parse back unchanged. 1950 catches
/// two-digit years, which parse into the 2000s.
fn round_trip_dates() -> impl Iterator<Item = NaiveDate> {
    [(1950, 1, 1), (2024, 2, 29), (2099, 12, 31)]
        .into_iter()
        .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
}

/// A validated date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// Validate `pattern` and wrap it.
    ///
    /// Fails with [`FormatError::InvalidPattern`] for empty patterns or unknown
    /// specifiers. Fails with [`FormatError::Unrepresentable`] for patterns
    /// that reference hours, minutes or time zones, and for patterns whose
    /// output does not parse back to the same date (`%Y-%m`, `%y-%m-%d`).
    pub fn new(pattern: impl Into<String>) -> Result<Self, FormatError> {
        let pattern = pattern.into();
        if pattern.is_empty()
            || StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error))
        {
            return Err(FormatError::InvalidPattern { pattern });
        }
        let format = Self { pattern };
        for date in round_trip_dates() {
            let text = format.render(date)?;
            if format.parse(&text).ok() != Some(date) {
                tracing::debug!(target: targets::FORMAT, pattern = %format, %text, "pattern does not round-trip");
                return Err(FormatError::Unrepresentable {
                    pattern: format.pattern,
                });
            }
        }
        Ok(format)
    }

    /// The canonical `%Y-%m-%d` pattern.
    pub fn iso() -> Self {
        Self {
            pattern: CANONICAL_PATTERN.to_string(),
        }
    }

    /// The `%Y/%m/%d` pattern.
    pub fn slashed() -> Self {
        Self {
            pattern: SLASHED_PATTERN.to_string(),
        }
    }

    /// The raw pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render a date.
    pub fn format(&self, date: NaiveDate) -> String {
        // Validation rendered the pattern, so this cannot fail.
        self.render(date).unwrap_or_else(|err| {
            tracing::error!(target: targets::FORMAT, %err, "validated pattern failed to render");
            String::new()
        })
    }

    /// Parse a date, ignoring surrounding whitespace.
    pub fn parse(&self, input: &str) -> Result<NaiveDate, FormatError> {
        NaiveDate::parse_from_str(input.trim(), &self.pattern)
            .map_err(|err| FormatError::mismatch(input, &self.pattern, err.to_string()))
    }

    fn render(&self, date: NaiveDate) -> Result<String, FormatError> {
        let mut out = String::new();
        write!(
            out,
            "{}",
            date.format_with_items(StrftimeItems::new(&self.pattern))
        )
        .map_err(|_| FormatError::Unrepresentable {
            pattern: self.pattern.clone(),
        })?;
        Ok(out)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::iso()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl std::str::FromStr for DateFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Convention for textual values exchanged with the calendar display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireFormat {
    /// Always `YYYY-MM-DD`, whatever the display pattern.
    #[default]
    Canonical,
    /// The same pattern the text field displays.
    DisplayPattern,
}

impl WireFormat {
    /// The pattern used on the wire for a given display pattern.
    pub fn resolve(self, display: &DateFormat) -> DateFormat {
        match self {
            Self::Canonical => DateFormat::iso(),
            Self::DisplayPattern => display.clone(),
        }
    }
}

/// Render an optional date; `None` renders as the empty string.
pub fn format_date(date: Option<NaiveDate>, format: &DateFormat) -> String {
    date.map(|d| format.format(d)).unwrap_or_default()
}

/// Render a sequence of dates joined by [`RANGE_SEPARATOR`].
pub fn format_dates(dates: &[NaiveDate], format: &DateFormat) -> String {
    dates
        .iter()
        .map(|d| format.format(*d))
        .collect::<Vec<_>>()
        .join(RANGE_SEPARATOR)
}

/// Parse a single date.
pub fn parse_date(input: &str, format: &DateFormat) -> Result<NaiveDate, FormatError> {
    format.parse(input)
}

/// Parse a complete `start - end` range.
///
/// Both sides are required; in-progress selections with a single date only
/// come from the calendar, never from text.
pub fn parse_range(input: &str, format: &DateFormat) -> Result<Vec<NaiveDate>, FormatError> {
    let parts: Vec<&str> = input.split(RANGE_SEPARATOR).collect();
    if parts.len() != 2 {
        return Err(FormatError::mismatch(
            input,
            format.pattern(),
            format!(
                "expected two dates separated by '{RANGE_SEPARATOR}', found {} part(s)",
                parts.len()
            ),
        ));
    }
    parts.into_iter().map(|part| format.parse(part)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_absent_is_empty() {
        assert_eq!(format_date(None, &DateFormat::iso()), "");
        assert_eq!(format_dates(&[], &DateFormat::iso()), "");
    }

    #[test]
    fn test_format_with_patterns() {
        let d = date(2024, 1, 15);
        assert_eq!(format_date(Some(d), &DateFormat::iso()), "2024-01-15");
        assert_eq!(format_date(Some(d), &DateFormat::slashed()), "2024/01/15");

        let long = DateFormat::new("%A, %d. %B, %Y").unwrap();
        assert_eq!(long.format(d), "Monday, 15. January, 2024");
        assert_eq!(long.parse("Monday, 15. January, 2024").unwrap(), d);
    }

    #[test]
    fn test_single_element_sequence_has_no_separator() {
        assert_eq!(format_dates(&[date(2024, 3, 1)], &DateFormat::iso()), "2024-03-01");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        let iso = DateFormat::iso();
        for input in ["not-a-date", "", "2024-13-01", "2024-02-30", "2024-01", "2024-01-15x"] {
            let err = parse_date(input, &iso).unwrap_err();
            assert!(
                matches!(err, FormatError::Mismatch { ref pattern, .. } if pattern == "%Y-%m-%d"),
                "{input}: {err}"
            );
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_date("  2024-01-15 ", &DateFormat::iso()).unwrap(), date(2024, 1, 15));
    }

    #[test]
    fn test_parse_accepts_unpadded_fields() {
        let d = parse_date("2024-2-5", &DateFormat::iso()).unwrap();
        assert_eq!(DateFormat::iso().format(d), "2024-02-05");
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(matches!(DateFormat::new(""), Err(FormatError::InvalidPattern { .. })));
        assert!(matches!(DateFormat::new("%Y-%Q"), Err(FormatError::InvalidPattern { .. })));
        assert!(matches!(
            DateFormat::new("%Y-%m-%d %H:%M"),
            Err(FormatError::Unrepresentable { .. })
        ));
        assert_eq!("%d.%m.%Y".parse::<DateFormat>().unwrap().pattern(), "%d.%m.%Y");
    }

    #[test]
    fn test_patterns_must_round_trip() {
        // Month only: the day is lost.
        assert_eq!(
            DateFormat::new("%Y-%m"),
            Err(FormatError::Unrepresentable {
                pattern: "%Y-%m".into()
            })
        );
        // Two-digit years move 1950 into 2050.
        assert!(matches!(
            DateFormat::new("%y-%m-%d"),
            Err(FormatError::Unrepresentable { .. })
        ));
        assert!(matches!(DateFormat::new("%A"), Err(FormatError::Unrepresentable { .. })));
        assert!(DateFormat::new("%Y-%j").is_ok());
    }

    #[test]
    fn test_range_requires_both_sides() {
        let iso = DateFormat::iso();
        assert!(parse_range("2024-03-01", &iso).is_err());
        assert!(parse_range("2024-03-01 - ", &iso).is_err());
        assert!(parse_range("2024-03-01 - 2024-03-02 - 2024-03-03", &iso).is_err());
        assert_eq!(
            parse_range("2024-03-01 - 2024-03-10", &iso).unwrap(),
            vec![date(2024, 3, 1), date(2024, 3, 10)]
        );
    }

    #[test]
    fn test_wire_format_resolution() {
        let display = DateFormat::slashed();
        assert_eq!(WireFormat::Canonical.resolve(&display), DateFormat::iso());
        assert_eq!(WireFormat::DisplayPattern.resolve(&display), display);
    }
}
