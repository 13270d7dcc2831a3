//! Token model: classified, byte-exact substrings of a task line.

use super::{Priority, RecurrencePattern};
use crate::calendar;
use chrono::NaiveDate;

/// One classified substring of a task line.
///
/// Every variant carries the exact raw text it was lexed from; the
/// ordered concatenation of all raw text in a record reproduces the
/// source line byte-for-byte. Leading-metadata variants (completion
/// marker, completion date, creation date, priority) include their
/// trailing whitespace run in the raw text; body variants do not, body
/// whitespace is lexed into explicit [`Token::WhiteSpace`] tokens so
/// mutations have a first-class unit to insert or remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Leading `x` completion marker, with trailing whitespace.
    Completed {
        /// Exact source text, `x` plus the whitespace run after it.
        raw: String,
    },
    /// Completion date directly after the completion marker.
    CompletedDate {
        /// Exact source text, the date plus any whitespace run after it.
        raw: String,
        /// Parsed calendar date.
        date: NaiveDate,
    },
    /// Creation date in the leading metadata.
    CreationDate {
        /// Exact source text, the date plus any whitespace run after it.
        raw: String,
        /// Parsed calendar date.
        date: NaiveDate,
    },
    /// Priority in the leading metadata.
    Priority {
        /// Exact source text, `(X)` plus the whitespace run after it.
        raw: String,
        /// Parsed priority letter.
        priority: Priority,
    },
    /// `t:YYYY-MM-DD` threshold-date word.
    ThresholdDate {
        /// Exact source text including the `t:` prefix.
        raw: String,
        /// Parsed calendar date.
        date: NaiveDate,
    },
    /// `due:YYYY-MM-DD` due-date word.
    DueDate {
        /// Exact source text including the `due:` prefix.
        raw: String,
        /// Parsed calendar date.
        date: NaiveDate,
    },
    /// `rec:<pattern>` recurrence word.
    Recurrence {
        /// Exact source text including the `rec:` prefix.
        raw: String,
        /// Parsed recurrence pattern.
        pattern: RecurrencePattern,
    },
    /// Generic `key:value` word, e.g. the hidden marker `h:1`.
    Tag {
        /// Exact source text.
        raw: String,
        /// Text before the first colon, never empty.
        key: String,
        /// Text after the first colon, never empty.
        value: String,
    },
    /// Run of whitespace between body words, preserved verbatim.
    WhiteSpace {
        /// Exact source text.
        raw: String,
    },
    /// Free-text word, including `+project`/`@context` words and any
    /// fragment that failed stricter classification.
    Text {
        /// Exact source text.
        raw: String,
    },
}

impl Token {
    /// Returns the exact source text of this token.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Completed { raw }
            | Self::CompletedDate { raw, .. }
            | Self::CreationDate { raw, .. }
            | Self::Priority { raw, .. }
            | Self::ThresholdDate { raw, .. }
            | Self::DueDate { raw, .. }
            | Self::Recurrence { raw, .. }
            | Self::Tag { raw, .. }
            | Self::WhiteSpace { raw }
            | Self::Text { raw } => raw,
        }
    }

    /// Returns whether this token is an inter-word whitespace run.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::WhiteSpace { .. })
    }

    /// Returns whether this token is part of the leading metadata that
    /// [`mark_complete`](super::Task::mark_complete) introduces.
    #[must_use]
    pub const fn is_completion_info(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::CompletedDate { .. })
    }

    /// Builds a canonical threshold-date token, `t:YYYY-MM-DD`.
    pub(crate) fn threshold_date(date: NaiveDate) -> Self {
        Self::ThresholdDate {
            raw: format!("t:{}", calendar::format_date(date)),
            date,
        }
    }

    /// Builds a canonical due-date token, `due:YYYY-MM-DD`.
    pub(crate) fn due_date(date: NaiveDate) -> Self {
        Self::DueDate {
            raw: format!("due:{}", calendar::format_date(date)),
            date,
        }
    }

    /// Builds a single-space whitespace token.
    pub(crate) fn single_space() -> Self {
        Self::WhiteSpace {
            raw: " ".to_owned(),
        }
    }
}
