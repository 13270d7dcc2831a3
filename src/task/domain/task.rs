//! Task aggregate root: one todo.txt line and its derived fields.

use super::{Priority, RecurrencePattern, Token, tokenize};
use crate::calendar;
use chrono::NaiveDate;
use log::debug;
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One task record, owning the ordered token sequence of its line.
///
/// Every semantic field — priority, completion state, dates, recurrence,
/// visibility — is derived by scanning the tokens on demand; nothing is
/// cached beside them. Mutations rewrite, insert or delete individual
/// tokens together with exactly the whitespace they introduce, so an
/// untouched record always serialises back to its original bytes and a
/// mutated record never accumulates or orphans whitespace.
///
/// Equality is byte-equality of the serialised line, not semantic
/// equality: two records with identical derived fields but different
/// incidental whitespace are unequal.
///
/// # Examples
///
///     use todotxt::task::domain::Task;
///
///     let task = Task::new("(A) 2014-07-05 Call mom @phone due:2014-07-12");
///     assert_eq!(task.priority().map(|p| p.letter()), Some('A'));
///     assert_eq!(task.to_line(), "(A) 2014-07-05 Call mom @phone due:2014-07-12");
#[derive(Debug, Clone)]
pub struct Task {
    tokens: Vec<Token>,
}

/// Schedule field targeted by a due/threshold mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduleField {
    Due,
    Threshold,
}

impl Task {
    /// Creates a record by tokenizing a line. Never fails; malformed
    /// fragments degrade to plain text.
    #[must_use]
    pub fn new(line: &str) -> Self {
        Self {
            tokens: tokenize(line),
        }
    }

    /// Creates a record from a line, inserting `creation_date` at its
    /// canonical position when the line does not already carry one.
    #[must_use]
    pub fn with_creation_date(line: &str, creation_date: NaiveDate) -> Self {
        let mut task = Self::new(line);
        if task.creation_date().is_none() {
            task.set_creation_date(creation_date);
        }
        task
    }

    /// Re-tokenizes this record from a fresh line, discarding the old
    /// token sequence entirely.
    pub fn update(&mut self, line: &str) {
        self.tokens = tokenize(line);
    }

    /// Returns the ordered token sequence.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Serialises the record back to its line representation.
    ///
    /// For an untouched record this is byte-identical to the line it was
    /// constructed from.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.tokens.iter().map(Token::raw).collect()
    }

    /// Returns the priority, if any.
    #[must_use]
    pub fn priority(&self) -> Option<Priority> {
        self.tokens.iter().find_map(|token| match token {
            Token::Priority { priority, .. } => Some(*priority),
            _ => None,
        })
    }

    /// Returns whether the record carries the completion marker.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.tokens
            .iter()
            .any(|token| matches!(token, Token::Completed { .. }))
    }

    /// Returns the completion date, if any.
    #[must_use]
    pub fn completion_date(&self) -> Option<NaiveDate> {
        self.tokens.iter().find_map(|token| match token {
            Token::CompletedDate { date, .. } => Some(*date),
            _ => None,
        })
    }

    /// Returns the creation date, if any.
    #[must_use]
    pub fn creation_date(&self) -> Option<NaiveDate> {
        self.tokens.iter().find_map(|token| match token {
            Token::CreationDate { date, .. } => Some(*date),
            _ => None,
        })
    }

    /// Returns the due date, if any.
    #[must_use]
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.tokens.iter().find_map(|token| match token {
            Token::DueDate { date, .. } => Some(*date),
            _ => None,
        })
    }

    /// Returns the threshold date, if any.
    #[must_use]
    pub fn threshold_date(&self) -> Option<NaiveDate> {
        self.tokens.iter().find_map(|token| match token {
            Token::ThresholdDate { date, .. } => Some(*date),
            _ => None,
        })
    }

    /// Returns the recurrence pattern, if any.
    #[must_use]
    pub fn recurrence_pattern(&self) -> Option<RecurrencePattern> {
        self.tokens.iter().find_map(|token| match token {
            Token::Recurrence { pattern, .. } => Some(*pattern),
            _ => None,
        })
    }

    /// Returns whether the record is visible.
    ///
    /// A record is hidden exactly when it carries the `h:1` tag.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.tokens.iter().any(|token| {
            matches!(token, Token::Tag { key, value, .. } if key == "h" && value == "1")
        })
    }

    /// Returns whether the threshold date lies strictly after today.
    ///
    /// A record without a valid threshold date is never in the future.
    #[must_use]
    pub fn is_in_future(&self, clock: &impl Clock) -> bool {
        self.threshold_date()
            .is_some_and(|threshold| threshold > calendar::today(clock))
    }

    /// Returns the `+project` words in the body, markers stripped.
    ///
    /// A doubled marker (`++supermarket`) is not a project tag.
    #[must_use]
    pub fn projects(&self) -> Vec<&str> {
        self.marked_words('+')
    }

    /// Returns the `@context` words in the body, markers stripped.
    ///
    /// A doubled marker (`@@errands`) is not a context tag.
    #[must_use]
    pub fn contexts(&self) -> Vec<&str> {
        self.marked_words('@')
    }

    /// Serialises the record without its completion marker and date.
    ///
    /// Everything else is preserved byte-exact, except the single
    /// whitespace token directly after the removed completion date, if
    /// the sequence ever holds one.
    #[must_use]
    pub fn text_without_completion_info(&self) -> String {
        let mut line = String::new();
        let mut skip_whitespace = false;
        for token in &self.tokens {
            if token.is_completion_info() {
                skip_whitespace = matches!(token, Token::CompletedDate { .. });
                continue;
            }
            if skip_whitespace && token.is_whitespace() {
                skip_whitespace = false;
                continue;
            }
            skip_whitespace = false;
            line.push_str(token.raw());
        }
        line
    }

    /// Sets or removes the priority.
    ///
    /// `None` removes any existing priority token and nothing else.
    /// Inserting places the token at its canonical position, after the
    /// completion marker and date but before everything else; replacing
    /// rewrites only the letter and keeps the existing whitespace.
    pub fn set_priority(&mut self, priority: Option<Priority>) {
        let Some(new_priority) = priority else {
            self.tokens
                .retain(|token| !matches!(token, Token::Priority { .. }));
            return;
        };

        for token in &mut self.tokens {
            if let Token::Priority { raw, priority: stored } = token {
                let whitespace = trailing_whitespace_of(raw);
                *raw = format!("({}){whitespace}", new_priority.letter());
                *stored = new_priority;
                return;
            }
        }

        let position = self.leading_position(true);
        self.tokens.insert(
            position,
            Token::Priority {
                raw: new_priority.file_format(),
                priority: new_priority,
            },
        );
    }

    /// Sets or removes the due date.
    ///
    /// `None` removes the `due:` word together with the whitespace it
    /// introduced; `Some` replaces the existing word in place or appends
    /// a new one with canonical single-space separation. Setting the
    /// same value twice is idempotent.
    pub fn set_due_date(&mut self, date: Option<NaiveDate>) {
        self.set_schedule_date(date, ScheduleField::Due);
    }

    /// Sets or removes the threshold date; symmetric with
    /// [`Self::set_due_date`], for the `t:` word.
    pub fn set_threshold_date(&mut self, date: Option<NaiveDate>) {
        self.set_schedule_date(date, ScheduleField::Threshold);
    }

    /// Removes the body word whose raw text equals `literal` exactly,
    /// together with one adjacent whitespace token.
    ///
    /// Only tag and text tokens are candidates, and only on an exact
    /// byte match: `remove_tag("@errands")` leaves `@@errands` alone.
    /// Returns whether anything was removed.
    pub fn remove_tag(&mut self, literal: &str) -> bool {
        let position = self.tokens.iter().position(|token| {
            matches!(token, Token::Tag { .. } | Token::Text { .. }) && token.raw() == literal
        });
        match position {
            Some(index) => {
                self.remove_with_adjacent_whitespace(index);
                true
            }
            None => false,
        }
    }

    /// Marks the record complete, or advances it when it recurs.
    ///
    /// A non-recurring record gains the leading `x` marker and completion
    /// date and becomes completed. A recurring record is never archived
    /// as done: instead its schedule date is advanced per the recurrence
    /// pattern, its creation date is replaced with `completion_date`, and
    /// it stays incomplete, now representing the next occurrence.
    ///
    /// A record that is already completed is left unchanged.
    pub fn mark_complete(&mut self, completion_date: NaiveDate) {
        if self.is_completed() {
            return;
        }
        if let Some(pattern) = self.recurrence_pattern() {
            if self.advance_recurrence(pattern, completion_date) {
                return;
            }
        }

        let formatted = calendar::format_date(completion_date);
        self.tokens.insert(
            0,
            Token::CompletedDate {
                raw: format!("{formatted} "),
                date: completion_date,
            },
        );
        self.tokens.insert(
            0,
            Token::Completed {
                raw: "x ".to_owned(),
            },
        );
        debug!("marked task complete on {formatted}");
    }

    /// Removes the completion marker and date, restoring the exact
    /// pre-completion serialisation. A no-op on an incomplete record.
    ///
    /// Fields mutated between creation and completion survive: only the
    /// completion tokens and the whitespace they introduced are removed.
    pub fn mark_incomplete(&mut self) {
        self.tokens.retain(|token| !token.is_completion_info());
    }

    /// Advances a recurring record to its next occurrence.
    ///
    /// The reference schedule date is the due date when present, else
    /// the threshold date. The computed next date is written back into
    /// the field that held the reference; when neither field exists the
    /// due date, as the primary schedule field, receives it. Returns
    /// `false` when the date arithmetic is unrepresentable, in which
    /// case the caller falls back to plain completion.
    fn advance_recurrence(
        &mut self,
        pattern: RecurrencePattern,
        completion_date: NaiveDate,
    ) -> bool {
        let reference = self.due_date().or_else(|| self.threshold_date());
        let Some(next) = pattern.next_date(reference, completion_date) else {
            return false;
        };

        if self.due_date().is_some() || self.threshold_date().is_none() {
            self.set_due_date(Some(next));
        } else {
            self.set_threshold_date(Some(next));
        }
        self.set_creation_date(completion_date);
        debug!("advanced recurring task to next occurrence on {next}");
        true
    }

    /// Replaces the creation date in place, or inserts one at its
    /// canonical position after the completion tokens and priority.
    fn set_creation_date(&mut self, date: NaiveDate) {
        let formatted = calendar::format_date(date);
        for token in &mut self.tokens {
            if let Token::CreationDate { raw, date: stored } = token {
                let whitespace = trailing_whitespace_of(raw);
                *raw = format!("{formatted}{whitespace}");
                *stored = date;
                return;
            }
        }

        let position = self.leading_position(false);
        self.tokens.insert(
            position,
            Token::CreationDate {
                raw: format!("{formatted} "),
                date,
            },
        );
    }

    /// Shared implementation for due/threshold date mutation.
    fn set_schedule_date(&mut self, date: Option<NaiveDate>, field: ScheduleField) {
        let position = self.tokens.iter().position(|token| match field {
            ScheduleField::Due => matches!(token, Token::DueDate { .. }),
            ScheduleField::Threshold => matches!(token, Token::ThresholdDate { .. }),
        });

        let Some(new_date) = date else {
            if let Some(index) = position {
                self.remove_with_adjacent_whitespace(index);
            }
            return;
        };

        let replacement = match field {
            ScheduleField::Due => Token::due_date(new_date),
            ScheduleField::Threshold => Token::threshold_date(new_date),
        };
        match position.and_then(|index| self.tokens.get_mut(index)) {
            Some(slot) => *slot = replacement,
            None => {
                // Always introduce a fresh separator so a later removal,
                // which takes one adjacent whitespace token with it, gives
                // back exactly the pre-mutation serialisation.
                if !self.tokens.is_empty() {
                    self.tokens.push(Token::single_space());
                }
                self.tokens.push(replacement);
            }
        }
    }

    /// Removes the token at `index` plus one adjacent whitespace token,
    /// preferring the one before it.
    fn remove_with_adjacent_whitespace(&mut self, index: usize) {
        self.tokens.remove(index);
        if index > 0
            && self
                .tokens
                .get(index - 1)
                .is_some_and(Token::is_whitespace)
        {
            self.tokens.remove(index - 1);
        } else if self.tokens.get(index).is_some_and(Token::is_whitespace) {
            self.tokens.remove(index);
        }
    }

    /// Returns the insertion index directly after the leading completion
    /// tokens, optionally also after an existing priority token.
    fn leading_position(&self, before_priority: bool) -> usize {
        self.tokens
            .iter()
            .take_while(|token| {
                token.is_completion_info()
                    || (!before_priority && matches!(token, Token::Priority { .. }))
            })
            .count()
    }

    /// Returns body words carrying `marker` exactly once at their start.
    fn marked_words(&self, marker: char) -> Vec<&str> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Text { raw } => raw
                    .strip_prefix(marker)
                    .filter(|rest| !rest.is_empty() && !rest.starts_with(marker)),
                _ => None,
            })
            .collect()
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.to_line() == other.to_line()
    }
}

impl Eq for Task {}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_line())
    }
}

impl From<&str> for Task {
    fn from(line: &str) -> Self {
        Self::new(line)
    }
}

impl Serialize for Task {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_line())
    }
}

impl<'de> Deserialize<'de> for Task {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(|line| Self::new(&line))
    }
}

/// Returns the trailing whitespace run of a leading-metadata raw string.
fn trailing_whitespace_of(raw: &str) -> String {
    raw.chars().skip_while(|c| !c.is_whitespace()).collect()
}
