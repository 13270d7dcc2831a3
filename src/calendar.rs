//! Strict ISO calendar-date utilities.
//!
//! The todo.txt format recognises exactly one date shape, `YYYY-MM-DD`.
//! Anything looser (unpadded months, extra digits, calendrically invalid
//! days such as `2013-11-31`) must *not* be recognised as a date: callers
//! treat an unparseable date field as absent, never as an error, so
//! rejection here is what keeps malformed fragments in the free text.
//!
//! The current date is never read from a process-wide clock directly; it
//! is derived from an injected [`Clock`] so date-relative behaviour stays
//! deterministic under test.

use chrono::{Days, Months, NaiveDate};
use mockable::Clock;
use thiserror::Error;

/// Format string for the one supported date shape.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar interval unit used by recurrence patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateUnit {
    /// One calendar day.
    Day,
    /// Seven calendar days.
    Week,
    /// One calendar month, clamping the day-of-month when needed.
    Month,
    /// Twelve calendar months.
    Year,
}

impl DateUnit {
    /// Returns the single-letter form used in recurrence patterns.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Day => 'd',
            Self::Week => 'w',
            Self::Month => 'm',
            Self::Year => 'y',
        }
    }
}

impl TryFrom<char> for DateUnit {
    type Error = ParseDateUnitError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'd' => Ok(Self::Day),
            'w' => Ok(Self::Week),
            'm' => Ok(Self::Month),
            'y' => Ok(Self::Year),
            _ => Err(ParseDateUnitError(value)),
        }
    }
}

/// Error returned while parsing a recurrence unit letter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown date unit '{0}', expected one of d, w, m, y")]
pub struct ParseDateUnitError(pub char);

/// Parses a strict `YYYY-MM-DD` date.
///
/// Returns `None` for anything that is not exactly ten characters of
/// zero-padded digits and dashes, and for shapes that pass the character
/// check but name a day that does not exist on the calendar.
///
/// # Examples
///
///     use todotxt::calendar::parse_date;
///
///     assert!(parse_date("2013-12-31").is_some());
///     assert!(parse_date("2013-11-31").is_none());
///     assert!(parse_date("2013-1-31").is_none());
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !has_iso_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
}

/// Formats a date in the one supported shape, `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Adds `amount` units to `date` with standard calendar normalisation.
///
/// Month and year addition clamp the day-of-month when the target month is
/// shorter (`2020-01-31` plus one month is `2020-02-29`). Returns `None`
/// only when the result would fall outside chrono's representable range.
#[must_use]
pub fn add_interval(date: NaiveDate, amount: u32, unit: DateUnit) -> Option<NaiveDate> {
    match unit {
        DateUnit::Day => date.checked_add_days(Days::new(u64::from(amount))),
        DateUnit::Week => date.checked_add_days(Days::new(u64::from(amount) * 7)),
        DateUnit::Month => date.checked_add_months(Months::new(amount)),
        DateUnit::Year => date.checked_add_months(Months::new(amount.checked_mul(12)?)),
    }
}

/// Returns the current calendar date from the injected clock.
#[must_use]
pub fn today(clock: &impl Clock) -> NaiveDate {
    clock.utc().date_naive()
}

/// Checks the `YYYY-MM-DD` character shape without calendar validation.
///
/// chrono's own parser accepts unpadded fields, so the shape check has to
/// happen before handing the value over.
fn has_iso_date_shape(value: &str) -> bool {
    let mut length = 0usize;
    for (position, character) in value.chars().enumerate() {
        let expected = match position {
            4 | 7 => character == '-',
            0..=9 => character.is_ascii_digit(),
            _ => return false,
        };
        if !expected {
            return false;
        }
        length = position + 1;
    }
    length == 10
}
