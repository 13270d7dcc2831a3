//! Todotxt: a tokenizing parser and mutator for todo.txt task lines.
//!
//! A task record is a single line of plain text encoding completion state,
//! priority, creation/completion dates, threshold/due dates, a recurrence
//! pattern, free text, and inline tags. This crate parses such a line into
//! an ordered token sequence, exposes the semantic fields derived from it,
//! and supports targeted in-place mutation of individual fields.
//!
//! # Round-trip fidelity
//!
//! The central invariant: concatenating the raw text of every token in a
//! record reproduces the source line byte-for-byte, including incidental
//! whitespace. Parsing never fails — fragments that do not match a
//! recognised token shape degrade to plain text rather than being
//! rejected, so any line survives a parse/serialize round trip unchanged.
//!
//! # Modules
//!
//! - [`calendar`]: strict ISO date parsing/formatting and calendar-correct
//!   interval arithmetic
//! - [`task`]: the token model, tokenizer, task record, recurrence engine
//!   and completion workflow

pub mod calendar;
pub mod task;
