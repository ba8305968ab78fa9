//! Selection shapes held by the external date cells.
//!
//! A single-date control stores `Option<NaiveDate>`; a range control stores
//! `Vec<NaiveDate>` with 0, 1 or 2 elements. The sync layer never reorders a
//! range: it stores the sequence the calendar reported.

use std::fmt;

use chrono::NaiveDate;

use crate::calendar::SelectionMode;
use crate::error::{FormatError, RangeArityError};
use crate::format::{DateFormat, format_dates, parse_range};

/// A value a picker can synchronize with its text field and calendar.
pub trait Selection: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Calendar mode used to edit this selection.
    const MODE: SelectionMode;

    /// Largest number of dates the selection holds.
    const MAX_DATES: usize;

    /// The selected dates, in stored order.
    fn dates(&self) -> Vec<NaiveDate>;

    /// Build a selection from dates reported by the calendar.
    fn from_dates(dates: Vec<NaiveDate>) -> Result<Self, RangeArityError>;

    /// Parse text typed into the text field.
    fn parse(text: &str, format: &DateFormat) -> Result<Self, FormatError>;

    /// Text shown in the text field.
    fn format(&self, format: &DateFormat) -> String {
        format_dates(&self.dates(), format)
    }
}

impl Selection for Option<NaiveDate> {
    const MODE: SelectionMode = SelectionMode::Single;
    const MAX_DATES: usize = 1;

    fn dates(&self) -> Vec<NaiveDate> {
        self.iter().copied().collect()
    }

    fn from_dates(dates: Vec<NaiveDate>) -> Result<Self, RangeArityError> {
        match dates.as_slice() {
            [] => Ok(None),
            [date] => Ok(Some(*date)),
            _ => Err(RangeArityError {
                len: dates.len(),
                max: Self::MAX_DATES,
            }),
        }
    }

    fn parse(text: &str, format: &DateFormat) -> Result<Self, FormatError> {
        format.parse(text).map(Some)
    }
}

impl Selection for Vec<NaiveDate> {
    const MODE: SelectionMode = SelectionMode::Range;
    const MAX_DATES: usize = 2;

    fn dates(&self) -> Vec<NaiveDate> {
        self.clone()
    }

    fn from_dates(dates: Vec<NaiveDate>) -> Result<Self, RangeArityError> {
        if dates.len() > Self::MAX_DATES {
            return Err(RangeArityError {
                len: dates.len(),
                max: Self::MAX_DATES,
            });
        }
        Ok(dates)
    }

    fn parse(text: &str, format: &DateFormat) -> Result<Self, FormatError> {
        parse_range(text, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_arity() {
        assert_eq!(<Option<NaiveDate>>::from_dates(vec![]), Ok(None));
        assert_eq!(
            <Option<NaiveDate>>::from_dates(vec![date(2024, 1, 1)]),
            Ok(Some(date(2024, 1, 1)))
        );
        assert_eq!(
            <Option<NaiveDate>>::from_dates(vec![date(2024, 1, 1), date(2024, 1, 2)]),
            Err(RangeArityError { len: 2, max: 1 })
        );
    }

    #[test]
    fn test_range_arity() {
        let three = vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)];
        assert_eq!(
            <Vec<NaiveDate>>::from_dates(three),
            Err(RangeArityError { len: 3, max: 2 })
        );
        // Unordered pairs are passed through untouched.
        let reversed = vec![date(2024, 1, 9), date(2024, 1, 2)];
        assert_eq!(<Vec<NaiveDate>>::from_dates(reversed.clone()), Ok(reversed));
    }

    #[test]
    fn test_format_selection() {
        let iso = DateFormat::iso();
        assert_eq!(None::<NaiveDate>.format(&iso), "");
        assert_eq!(Some(date(2024, 1, 15)).format(&iso), "2024-01-15");
        assert_eq!(
            vec![date(2024, 3, 1), date(2024, 3, 10)].format(&iso),
            "2024-03-01 - 2024-03-10"
        );
        assert_eq!(vec![date(2024, 3, 1)].format(&iso), "2024-03-01");
    }
}
