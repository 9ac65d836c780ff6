//! Instruction and argument parsing.
//!
//! # Responsibility
//! - Split raw instructions into keyword and argument blob.
//! - Decompose task-creation argument blobs and date-time tokens.
//!
//! # Invariants
//! - Splitting happens on literal separators (` /by `, ` /from `, ` /to `)
//!   and the first space only; parsing never guesses at intent.
//! - Date-time tokens must match their layout exactly; trailing garbage is
//!   rejected, not ignored.

use crate::model::task::DISPLAY_FORMAT;
use chrono::{NaiveDate, NaiveDateTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Layout accepted for user-supplied deadline/event date-times,
/// e.g. `2025-12-12 1200`.
pub const INPUT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H%M";

/// Layout accepted for the date-only `listbydate` argument.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

pub type ParseResult<T> = Result<T, ParseError>;

/// User-input parsing failure, rendered verbatim as the command response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Required parts or separators are missing from the argument blob.
    MalformedArguments(String),
    /// A date-time token does not match the expected layout.
    InvalidDateFormat {
        input: String,
        pattern: &'static str,
    },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedArguments(message) => write!(f, "{message}"),
            Self::InvalidDateFormat { input, pattern } => write!(
                f,
                "`{input}` is not a valid date; expected format `{}`.",
                human_pattern(pattern)
            ),
        }
    }
}

impl Error for ParseError {}

/// Maps a chrono layout to the form shown in user-facing messages.
fn human_pattern(pattern: &str) -> &str {
    match pattern {
        INPUT_DATE_TIME_FORMAT => "yyyy-MM-dd HHmm",
        INPUT_DATE_FORMAT => "yyyy-MM-dd",
        DISPLAY_FORMAT => "MMM-dd-yyyy HH:mm",
        other => other,
    }
}

/// Splits a raw instruction into its command keyword and argument blob.
///
/// Splitting happens on the first space only; the blob is empty when the
/// instruction is a bare keyword. Keyword case is the dispatcher's concern.
pub fn split_instruction(raw: &str) -> (&str, &str) {
    match raw.trim().split_once(' ') {
        Some((keyword, blob)) => (keyword, blob.trim()),
        None => (raw.trim(), ""),
    }
}

/// Decomposes a `deadline` argument blob into description and due time.
///
/// # Errors
/// - `MalformedArguments` when ` /by ` is absent or either side trims empty.
/// - `InvalidDateFormat` when the due token is not `yyyy-MM-dd HHmm`.
pub fn parse_deadline_args(blob: &str) -> ParseResult<(String, NaiveDateTime)> {
    let (description, due_raw) = blob.split_once(" /by ").ok_or_else(|| {
        ParseError::MalformedArguments(
            "A deadline needs `<description> /by <yyyy-MM-dd HHmm>`.".to_string(),
        )
    })?;
    let description = description.trim();
    let due_raw = due_raw.trim();
    if description.is_empty() || due_raw.is_empty() {
        return Err(ParseError::MalformedArguments(
            "Both the description and the deadline time must be given.".to_string(),
        ));
    }
    let due = parse_date_time(due_raw, INPUT_DATE_TIME_FORMAT)?;
    Ok((description.to_string(), due))
}

/// Decomposes an `event` argument blob into description, start, and end.
///
/// # Errors
/// - `MalformedArguments` when ` /from ` or ` /to ` is absent, any part
///   trims empty, or the start is not strictly before the end.
/// - `InvalidDateFormat` when either token is not `yyyy-MM-dd HHmm`.
pub fn parse_event_args(blob: &str) -> ParseResult<(String, NaiveDateTime, NaiveDateTime)> {
    let (description, times) = blob.split_once(" /from ").ok_or_else(|| {
        ParseError::MalformedArguments(
            "An event needs `<description> /from <yyyy-MM-dd HHmm> /to <yyyy-MM-dd HHmm>`."
                .to_string(),
        )
    })?;
    let (start_raw, end_raw) = times.split_once(" /to ").ok_or_else(|| {
        ParseError::MalformedArguments(
            "An event needs both a `/from` and a `/to` time.".to_string(),
        )
    })?;
    let description = description.trim();
    let start_raw = start_raw.trim();
    let end_raw = end_raw.trim();
    if description.is_empty() || start_raw.is_empty() || end_raw.is_empty() {
        return Err(ParseError::MalformedArguments(
            "The description and both event times must be given.".to_string(),
        ));
    }
    let start = parse_date_time(start_raw, INPUT_DATE_TIME_FORMAT)?;
    let end = parse_date_time(end_raw, INPUT_DATE_TIME_FORMAT)?;
    if start >= end {
        return Err(ParseError::MalformedArguments(
            "An event must start before it ends.".to_string(),
        ));
    }
    Ok((description.to_string(), start, end))
}

/// Parses a date-time token against a layout, exact match only.
pub fn parse_date_time(raw: &str, pattern: &'static str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, pattern).map_err(|_| ParseError::InvalidDateFormat {
        input: raw.to_string(),
        pattern,
    })
}

/// Parses a `yyyy-MM-dd` calendar date token, exact match only.
pub fn parse_date(raw: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_DATE_FORMAT).map_err(|_| {
        ParseError::InvalidDateFormat {
            input: raw.trim().to_string(),
            pattern: INPUT_DATE_FORMAT,
        }
    })
}

/// Parses a 1-based task number into a 0-based list index.
///
/// Range checking against the list length stays with the task list; this
/// only rejects tokens that are not positive integers.
pub fn parse_index(raw: &str) -> ParseResult<usize> {
    let number: usize = raw.trim().parse().map_err(|_| {
        ParseError::MalformedArguments(format!(
            "`{}` does not look like a task number; please give me an integer.",
            raw.trim()
        ))
    })?;
    number.checked_sub(1).ok_or_else(|| {
        ParseError::MalformedArguments(
            "That task number is out of range; task numbers start at 1.".to_string(),
        )
    })
}
