//! Left-to-right positional tokenizer for task lines.
//!
//! Recognition is positional: the completion marker and completion date
//! are only recognised at the very front of the line, priority and
//! creation date only in the leading metadata directly after them, and
//! everything else is classified word by word. Whitespace runs are lexed
//! verbatim so the concatenation of all token raw text always reproduces
//! the input exactly.

use super::{Priority, RecurrencePattern, Token};
use crate::calendar;
use std::collections::VecDeque;

/// One body word and the whitespace run that follows it.
struct Chunk {
    word: String,
    trailing_ws: String,
}

impl Chunk {
    /// Consumes the chunk into a single raw string, word plus whitespace.
    fn into_raw(self) -> String {
        let mut raw = self.word;
        raw.push_str(&self.trailing_ws);
        raw
    }
}

/// Tokenizes one line of todo.txt text (without a trailing newline).
///
/// Never fails: fragments that do not match a recognised token shape
/// degrade to [`Token::Text`]. The ordered concatenation of the returned
/// tokens' raw text equals `line` byte-for-byte.
///
/// # Examples
///
///     use todotxt::task::domain::{Token, tokenize};
///
///     let tokens = tokenize("(A) Call mom @phone");
///     let rebuilt: String = tokens.iter().map(Token::raw).collect();
///     assert_eq!(rebuilt, "(A) Call mom @phone");
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    let (leading_ws, mut chunks) = split_chunks(line);
    let mut tokens = Vec::new();

    if leading_ws.is_empty() {
        lex_completion(&mut chunks, &mut tokens);
        lex_leading_metadata(&mut chunks, &mut tokens);
    } else {
        // A line that does not start at column zero carries no leading
        // metadata; everything is body text.
        tokens.push(Token::WhiteSpace { raw: leading_ws });
    }

    while let Some(chunk) = chunks.pop_front() {
        let Chunk { word, trailing_ws } = chunk;
        tokens.push(classify_word(word));
        if !trailing_ws.is_empty() {
            tokens.push(Token::WhiteSpace { raw: trailing_ws });
        }
    }

    tokens
}

/// Lexes the completion marker and completion date at the line front.
///
/// The marker is the literal `x` followed by whitespace. The word after
/// it becomes the completion date only when it is a strictly valid date;
/// otherwise it is left for the leading-metadata scan.
fn lex_completion(chunks: &mut VecDeque<Chunk>, tokens: &mut Vec<Token>) {
    let is_marker = chunks
        .front()
        .is_some_and(|chunk| chunk.word == "x" && !chunk.trailing_ws.is_empty());
    if !is_marker {
        return;
    }
    if let Some(marker) = chunks.pop_front() {
        tokens.push(Token::Completed {
            raw: marker.into_raw(),
        });
    }

    let completion_date = chunks
        .front()
        .and_then(|chunk| calendar::parse_date(&chunk.word));
    if let Some(date) = completion_date {
        if let Some(chunk) = chunks.pop_front() {
            tokens.push(Token::CompletedDate {
                raw: chunk.into_raw(),
                date,
            });
        }
    }
}

/// Lexes the optional priority and creation date, in either order.
///
/// At most one of each is recognised, and only before the first word
/// that is neither; a date later in the line is never retroactively
/// treated as a creation date.
fn lex_leading_metadata(chunks: &mut VecDeque<Chunk>, tokens: &mut Vec<Token>) {
    let mut seen_priority = false;
    let mut seen_date = false;
    loop {
        let Some(front) = chunks.front() else { return };

        if !seen_priority {
            if let Some(priority) = priority_of(front) {
                if let Some(chunk) = chunks.pop_front() {
                    tokens.push(Token::Priority {
                        raw: chunk.into_raw(),
                        priority,
                    });
                }
                seen_priority = true;
                continue;
            }
        }

        if !seen_date {
            if let Some(date) = calendar::parse_date(&front.word) {
                if let Some(chunk) = chunks.pop_front() {
                    tokens.push(Token::CreationDate {
                        raw: chunk.into_raw(),
                        date,
                    });
                }
                seen_date = true;
                continue;
            }
        }

        return;
    }
}

/// Recognises the literal priority pattern `(X) `.
///
/// The trailing whitespace is required: a bare `(A)` at the end of the
/// line is body text, not a priority.
fn priority_of(chunk: &Chunk) -> Option<Priority> {
    if chunk.trailing_ws.is_empty() {
        return None;
    }
    let mut characters = chunk.word.chars();
    match (
        characters.next(),
        characters.next(),
        characters.next(),
        characters.next(),
    ) {
        (Some('('), Some(letter), Some(')'), None) => Priority::new(letter).ok(),
        _ => None,
    }
}

/// Classifies one body word.
///
/// `t:`/`due:` words with an invalid date and `rec:` words with an
/// unrecognised pattern degrade to text rather than to a generic tag,
/// so a malformed schedule field reads as absent, not as metadata.
fn classify_word(word: String) -> Token {
    if let Some(rest) = word.strip_prefix("t:") {
        return match calendar::parse_date(rest) {
            Some(date) => Token::ThresholdDate { raw: word, date },
            None => Token::Text { raw: word },
        };
    }
    if let Some(rest) = word.strip_prefix("due:") {
        return match calendar::parse_date(rest) {
            Some(date) => Token::DueDate { raw: word, date },
            None => Token::Text { raw: word },
        };
    }
    if let Some(rest) = word.strip_prefix("rec:") {
        return match rest.parse::<RecurrencePattern>() {
            Ok(pattern) => Token::Recurrence { raw: word, pattern },
            Err(_) => Token::Text { raw: word },
        };
    }
    if let Some((key, value)) = word.split_once(':') {
        if !key.is_empty() && !value.is_empty() {
            return Token::Tag {
                key: key.to_owned(),
                value: value.to_owned(),
                raw: word,
            };
        }
    }
    Token::Text { raw: word }
}

/// Splits a line into its leading whitespace run and word/whitespace
/// chunks, preserving every byte.
fn split_chunks(line: &str) -> (String, VecDeque<Chunk>) {
    let mut leading_ws = String::new();
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut word = String::new();

    for character in line.chars() {
        if character.is_whitespace() {
            if word.is_empty() {
                match chunks.last_mut() {
                    Some(last) => last.trailing_ws.push(character),
                    None => leading_ws.push(character),
                }
            } else {
                chunks.push(Chunk {
                    word: std::mem::take(&mut word),
                    trailing_ws: String::from(character),
                });
            }
        } else {
            word.push(character);
        }
    }
    if !word.is_empty() {
        chunks.push(Chunk {
            word,
            trailing_ws: String::new(),
        });
    }

    (leading_ws, chunks.into())
}
