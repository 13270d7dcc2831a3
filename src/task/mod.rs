//! Task-record parsing, mutation and completion workflow.
//!
//! A record is one line of todo.txt text tokenized into an ordered token
//! sequence. Everything semantic — priority, dates, recurrence, visibility
//! — is derived by scanning that sequence, never cached beside it, so the
//! byte-exact round-trip invariant cannot drift out of sync after a
//! mutation.
//!
//! - Domain types in [`domain`]

pub mod domain;

#[cfg(test)]
mod tests;
