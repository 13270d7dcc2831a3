//! Recurrence pattern value object and next-occurrence arithmetic.

use super::TaskDomainError;
use crate::calendar::{self, DateUnit};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parsed `rec:` pattern, e.g. `2d` or `+1m`.
///
/// The leading `+` selects strict mode: the next occurrence is computed
/// from the record's existing schedule date rather than from the
/// completion date.
///
/// # Examples
///
///     use todotxt::task::domain::RecurrencePattern;
///
///     let pattern: RecurrencePattern = "+2d".parse().expect("valid");
///     assert!(pattern.is_strict());
///     assert_eq!(pattern.to_string(), "+2d");
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecurrencePattern {
    strict: bool,
    amount: u32,
    unit: DateUnit,
}

impl RecurrencePattern {
    /// Returns whether the pattern advances from the schedule date.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns the interval amount, always positive.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    /// Returns the interval unit.
    #[must_use]
    pub const fn unit(&self) -> DateUnit {
        self.unit
    }

    /// Computes the next schedule date after completing an occurrence.
    ///
    /// Relative mode ignores `reference` and adds the interval to the
    /// completion date. Strict mode adds the interval to `reference`,
    /// re-adding it until the result lies strictly after the completion
    /// date; a strict pattern without a reference schedule date degrades
    /// to relative mode.
    ///
    /// Returns `None` only when the date arithmetic leaves chrono's
    /// representable range.
    #[must_use]
    pub fn next_date(
        &self,
        reference: Option<NaiveDate>,
        completion_date: NaiveDate,
    ) -> Option<NaiveDate> {
        match reference {
            Some(anchor) if self.strict => {
                let mut next = calendar::add_interval(anchor, self.amount, self.unit)?;
                while next <= completion_date {
                    next = calendar::add_interval(next, self.amount, self.unit)?;
                }
                Some(next)
            }
            _ => calendar::add_interval(completion_date, self.amount, self.unit),
        }
    }
}

impl FromStr for RecurrencePattern {
    type Err = TaskDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TaskDomainError::InvalidRecurrence(s.to_owned());
        let (strict, body) = s
            .strip_prefix('+')
            .map_or((false, s), |stripped| (true, stripped));

        let mut unit_char = None;
        let mut digits = String::new();
        for character in body.chars() {
            if unit_char.is_some() {
                // Trailing characters after the unit letter.
                return Err(invalid());
            }
            if character.is_ascii_digit() {
                digits.push(character);
            } else {
                unit_char = Some(character);
            }
        }

        let amount: u32 = digits.parse().map_err(|_| invalid())?;
        if amount == 0 {
            return Err(invalid());
        }
        let unit = unit_char
            .and_then(|letter| DateUnit::try_from(letter).ok())
            .ok_or_else(invalid)?;

        Ok(Self {
            strict,
            amount,
            unit,
        })
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.strict {
            write!(f, "+")?;
        }
        write!(f, "{}{}", self.amount, self.unit.as_char())
    }
}
