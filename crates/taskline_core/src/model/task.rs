//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shared by all command and storage paths.
//! - Provide the display rendering and the storage encoding of a task.
//!
//! # Invariants
//! - `description` is non-empty after trimming; callers validate before
//!   constructing (command dispatcher for user input, codec for file input).
//! - `TaskKind::Event` always satisfies `start < end`.
//! - `encode()` output is the exact inverse of `storage::codec::decode_line`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Date-time layout used for both the display rendering and the storage
/// encoding, e.g. `Dec-12-2025 12:00`.
///
/// User input uses the compact `%Y-%m-%d %H%M` layout instead (see
/// `parse`); the asymmetry is deliberate: input is compact, stored and
/// displayed values are canonical.
pub const DISPLAY_FORMAT: &str = "%b-%d-%Y %H:%M";

/// Scheduling variant of a task.
///
/// The variant set is closed, so the model is a single sum type rather
/// than a trait hierarchy; each variant carries only its own date fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Unscheduled todo.
    Todo,
    /// Task with a single due date-time.
    Deadline { due: NaiveDateTime },
    /// Time-bounded event; `start < end` holds by construction.
    Event {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl TaskKind {
    /// Single-letter tag used in both text projections.
    pub fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// Validation failure raised at task construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    InvalidEventWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEventWindow { start, end } => write!(
                f,
                "event start {} must be strictly before its end {}",
                start.format(DISPLAY_FORMAT),
                end.format(DISPLAY_FORMAT)
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// A unit of tracked work: description, completion flag, and variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    /// Creates an unscheduled todo, initially not done.
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    /// Creates a deadline task due at `due`, initially not done.
    pub fn deadline(description: impl Into<String>, due: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { due },
        }
    }

    /// Creates an event task, initially not done.
    ///
    /// # Errors
    /// Returns `InvalidEventWindow` unless `start < end`; a reversed or
    /// zero-length window is a caller error, never silently corrected.
    pub fn event(
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, TaskValidationError> {
        if start >= end {
            return Err(TaskValidationError::InvalidEventWindow { start, end });
        }
        Ok(Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { start, end },
        })
    }

    /// Marks the task as completed. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Clears the completion flag. Idempotent.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }

    /// Human-readable line shown in command responses, e.g.
    /// `[D][ ] pay rent by: Dec-01-2025 09:00`.
    pub fn render(&self) -> String {
        let head = format!(
            "[{}][{}] {}",
            self.kind.tag(),
            self.status_icon(),
            self.description
        );
        match &self.kind {
            TaskKind::Todo => head,
            TaskKind::Deadline { due } => {
                format!("{head} by: {}", due.format(DISPLAY_FORMAT))
            }
            TaskKind::Event { start, end } => format!(
                "{head} from: {} to: {}",
                start.format(DISPLAY_FORMAT),
                end.format(DISPLAY_FORMAT)
            ),
        }
    }

    /// Storage line written to the task file, e.g.
    /// `[D][ ]pay rent /by Dec-01-2025 09:00`.
    ///
    /// Decoded back by `storage::codec::decode_line`; the two must stay
    /// exact inverses. Known limitation: a deadline or event description
    /// containing a separator literal (` /by `, ` /from `, ` /to `) is not
    /// representable and will not round-trip. Command input cannot produce
    /// such a description, since the dispatcher splits on the first
    /// separator occurrence before constructing the task.
    pub fn encode(&self) -> String {
        let head = format!(
            "[{}][{}]{}",
            self.kind.tag(),
            self.status_icon(),
            self.description
        );
        match &self.kind {
            TaskKind::Todo => head,
            TaskKind::Deadline { due } => {
                format!("{head} /by {}", due.format(DISPLAY_FORMAT))
            }
            TaskKind::Event { start, end } => format!(
                "{head} /from {} /to {}",
                start.format(DISPLAY_FORMAT),
                end.format(DISPLAY_FORMAT)
            ),
        }
    }

    /// Returns whether this task is scheduled on the given calendar day.
    ///
    /// Deadlines match on the date component of `due`, events on the date
    /// component of `start`; time-of-day is ignored. Todos never match.
    /// An event spanning several days only matches its start day.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match &self.kind {
            TaskKind::Todo => false,
            TaskKind::Deadline { due } => due.date() == date,
            TaskKind::Event { start, .. } => start.date() == date,
        }
    }
}
