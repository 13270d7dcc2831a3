//! Domain model for todo.txt task records.
//!
//! The token model, tokenizer, priority and recurrence value objects, and
//! the [`Task`] aggregate live here. All types are pure in-memory values
//! with no infrastructure dependencies; the only external input is the
//! injectable clock used for date-relative reads.

mod error;
mod priority;
mod recurrence;
mod task;
mod token;
mod tokenizer;

pub use error::TaskDomainError;
pub use priority::Priority;
pub use recurrence::RecurrencePattern;
pub use task::Task;
pub use token::Token;
pub use tokenizer::tokenize;
