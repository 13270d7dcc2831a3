//! Priority value object.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated task priority, a single uppercase letter `A`-`Z`.
///
/// Priorities order the way they read in a task list: `A` sorts before
/// `B`, so the derived ordering puts the most urgent priority first.
///
/// # Examples
///
///     use todotxt::task::domain::Priority;
///
///     let priority = Priority::new('A').expect("valid");
///     assert_eq!(priority.letter(), 'A');
///     assert_eq!(priority.to_string(), "A");
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(char);

impl Priority {
    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriority`] when the letter is not
    /// an uppercase ASCII letter.
    pub const fn new(letter: char) -> Result<Self, TaskDomainError> {
        if letter.is_ascii_uppercase() {
            Ok(Self(letter))
        } else {
            Err(TaskDomainError::InvalidPriority(letter))
        }
    }

    /// Returns the priority letter.
    #[must_use]
    pub const fn letter(self) -> char {
        self.0
    }

    /// Returns the leading-metadata form, `(X)` followed by one space.
    #[must_use]
    pub(crate) fn file_format(self) -> String {
        format!("({}) ", self.0)
    }
}

impl TryFrom<char> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
