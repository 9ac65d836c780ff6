//! Line codec for the persisted task file.
//!
//! # Responsibility
//! - Decode one persisted line back into a `Task`.
//!
//! # Invariants
//! - `decode_line` is the exact inverse of `Task::encode()`.
//! - A structurally broken line fails with a `DecodeError` describing the
//!   first mismatch; it never produces a partially-filled task.

use crate::model::task::{Task, TaskValidationError, DISPLAY_FORMAT};
use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DecodeResult<T> = Result<T, DecodeError>;

/// A persisted line that cannot be decoded back into a task.
///
/// Surfaced only to the storage loader, which skips the record with a
/// warning; corrupt records never reach the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    MissingKindTag(String),
    MissingStatus(String),
    EmptyDescription,
    MissingSeparator { separator: &'static str },
    BadDateTime { field: &'static str, input: String },
    InvalidEventWindow(TaskValidationError),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingKindTag(line) => write!(f, "missing kind tag in `{line}`"),
            Self::MissingStatus(rest) => write!(f, "missing status field in `{rest}`"),
            Self::EmptyDescription => write!(f, "empty task description"),
            Self::MissingSeparator { separator } => {
                write!(f, "missing `{separator}` separator")
            }
            Self::BadDateTime { field, input } => {
                write!(f, "unparsable {field} date-time `{input}`")
            }
            Self::InvalidEventWindow(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEventWindow(err) => Some(err),
            _ => None,
        }
    }
}

/// Decodes one persisted line into a task.
///
/// Expected shapes, matching `Task::encode()`:
/// - `[T][X]<description>`
/// - `[D][ ]<description> /by <MMM-dd-yyyy HH:mm>`
/// - `[E][ ]<description> /from <MMM-dd-yyyy HH:mm> /to <MMM-dd-yyyy HH:mm>`
pub fn decode_line(line: &str) -> DecodeResult<Task> {
    let (tag, rest) = match line.get(..3) {
        Some("[T]") | Some("[D]") | Some("[E]") => (line.as_bytes()[1] as char, &line[3..]),
        _ => return Err(DecodeError::MissingKindTag(line.to_string())),
    };
    let (done, body) = if let Some(body) = rest.strip_prefix("[X]") {
        (true, body)
    } else if let Some(body) = rest.strip_prefix("[ ]") {
        (false, body)
    } else {
        return Err(DecodeError::MissingStatus(rest.to_string()));
    };

    let mut task = match tag {
        'T' => {
            require_description(body)?;
            Task::todo(body)
        }
        'D' => {
            let (description, due_raw) = body.split_once(" /by ").ok_or(
                DecodeError::MissingSeparator { separator: " /by " },
            )?;
            require_description(description)?;
            let due = decode_date_time(due_raw, "due")?;
            Task::deadline(description, due)
        }
        _ => {
            let (description, times) = body.split_once(" /from ").ok_or(
                DecodeError::MissingSeparator {
                    separator: " /from ",
                },
            )?;
            let (start_raw, end_raw) = times.split_once(" /to ").ok_or(
                DecodeError::MissingSeparator { separator: " /to " },
            )?;
            require_description(description)?;
            let start = decode_date_time(start_raw, "start")?;
            let end = decode_date_time(end_raw, "end")?;
            Task::event(description, start, end).map_err(DecodeError::InvalidEventWindow)?
        }
    };
    if done {
        task.mark_done();
    }
    Ok(task)
}

fn require_description(description: &str) -> DecodeResult<()> {
    if description.trim().is_empty() {
        return Err(DecodeError::EmptyDescription);
    }
    Ok(())
}

fn decode_date_time(raw: &str, field: &'static str) -> DecodeResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), DISPLAY_FORMAT).map_err(|_| {
        DecodeError::BadDateTime {
            field,
            input: raw.trim().to_string(),
        }
    })
}
