//! Core domain logic for Taskline, a single-line-command task tracker.
//! This crate is the single source of truth for the task model, instruction
//! parsing, flat-file persistence, and command dispatch; shells (CLI, GUI)
//! only feed raw instruction strings in and print the returned replies.

pub mod command;
pub mod list;
pub mod logging;
pub mod model;
pub mod parse;
pub mod storage;

pub use command::{handle_instruction, CommandError, Reply};
pub use list::{ListError, ListResult, TaskList};
pub use logging::{default_log_level, init_logging};
pub use model::task::{Task, TaskKind, TaskValidationError, DISPLAY_FORMAT};
pub use parse::{ParseError, ParseResult, INPUT_DATE_FORMAT, INPUT_DATE_TIME_FORMAT};
pub use storage::codec::{decode_line, DecodeError, DecodeResult};
pub use storage::{Storage, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
