//! Command dispatch boundary.
//!
//! # Responsibility
//! - Map a raw instruction line to one task-list or parser operation.
//! - Convert every parse/validation/list error into a user-visible
//!   response string; nothing past this boundary terminates the session.
//!
//! # Invariants
//! - Keyword matching is case-insensitive.
//! - `bye` flushes the list before the farewell so the mirror is current
//!   when the shell exits.

use crate::list::{ListError, TaskList};
use crate::model::task::{Task, TaskValidationError};
use crate::parse::{self, ParseError};
use std::error::Error;
use std::fmt::{Display, Formatter};

const GREETING: &str = "Hello there! What shall we get done today?";
const FAREWELL: &str = "Bye. Hope to see you again soon!";
const UNKNOWN: &str = "Sorry, I do not understand that instruction.";

/// Dispatcher reply; `Exit` tells the shell to stop reading input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Exit(String),
}

impl Reply {
    /// Response text, regardless of whether the session continues.
    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Exit(text) => text,
        }
    }
}

/// Any error a command can surface to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Parse(ParseError),
    Validation(TaskValidationError),
    List(ListError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::List(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::List(err) => Some(err),
        }
    }
}

impl From<ParseError> for CommandError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<TaskValidationError> for CommandError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ListError> for CommandError {
    fn from(value: ListError) -> Self {
        Self::List(value)
    }
}

/// Handles one raw instruction against the task list.
///
/// Always produces a reply: command errors become their display text, and
/// unknown keywords get a fixed fallback line.
pub fn handle_instruction(raw: &str, list: &mut TaskList) -> Reply {
    let (keyword, blob) = parse::split_instruction(raw);
    let keyword = keyword.to_lowercase();

    if keyword == "bye" {
        if let Err(err) = list.flush() {
            return Reply::Exit(format!(
                "{FAREWELL} (Warning: your tasks could not be saved: {err})"
            ));
        }
        return Reply::Exit(FAREWELL.to_string());
    }

    let text = match dispatch(&keyword, blob, list) {
        Ok(text) => text,
        Err(err) => err.to_string(),
    };
    Reply::Continue(text)
}

fn dispatch(keyword: &str, blob: &str, list: &mut TaskList) -> Result<String, CommandError> {
    match keyword {
        "hi" => Ok(GREETING.to_string()),
        "list" => Ok(render_list(list)),
        "todo" => add_todo(blob, list),
        "deadline" => add_deadline(blob, list),
        "event" => add_event(blob, list),
        "mark" => {
            let index = parse::parse_index(blob)?;
            let task = list.mark_done(index)?;
            Ok(format!(
                "Nice! I've marked this task as done: {}",
                task.render()
            ))
        }
        "unmark" => {
            let index = parse::parse_index(blob)?;
            let task = list.mark_undone(index)?;
            Ok(format!(
                "OK, I've marked this task as not done yet: {}",
                task.render()
            ))
        }
        "delete" | "remove" => {
            let index = parse::parse_index(blob)?;
            let removed = list.delete(index)?;
            Ok(format!("Noted. I've removed this task: {}", removed.render()))
        }
        "find" => find_by_keyword(blob, list),
        "listbydate" => list_by_date(blob, list),
        _ => Ok(UNKNOWN.to_string()),
    }
}

fn render_list(list: &TaskList) -> String {
    if list.is_empty() {
        return "No tasks in your list.".to_string();
    }
    let mut response = String::from("Here are the tasks in your list:");
    for (number, task) in list.iter().enumerate() {
        response.push_str(&format!("\n{}. {}", number + 1, task.render()));
    }
    response
}

fn add_todo(blob: &str, list: &mut TaskList) -> Result<String, CommandError> {
    let description = blob.trim();
    if description.is_empty() {
        return Err(ParseError::MalformedArguments(
            "The description of a todo cannot be empty.".to_string(),
        )
        .into());
    }
    add_task(Task::todo(description), list)
}

fn add_deadline(blob: &str, list: &mut TaskList) -> Result<String, CommandError> {
    let (description, due) = parse::parse_deadline_args(blob)?;
    add_task(Task::deadline(description, due), list)
}

fn add_event(blob: &str, list: &mut TaskList) -> Result<String, CommandError> {
    let (description, start, end) = parse::parse_event_args(blob)?;
    add_task(Task::event(description, start, end)?, list)
}

/// Shared add path: duplicate suppression first, then append and confirm.
fn add_task(task: Task, list: &mut TaskList) -> Result<String, CommandError> {
    if list.is_duplicate(&task) {
        return Ok(format!(
            "That task is already in your list: {}",
            task.description
        ));
    }
    let rendering = task.render();
    list.add(task);
    Ok(format!("Got it, I've added this task: {rendering}"))
}

fn find_by_keyword(blob: &str, list: &TaskList) -> Result<String, CommandError> {
    let keyword = blob.trim();
    if keyword.is_empty() {
        return Err(ParseError::MalformedArguments(
            "The search keyword cannot be empty.".to_string(),
        )
        .into());
    }
    let matches = list.find_by_keyword(keyword);
    if matches.is_empty() {
        return Ok("No matching tasks found.".to_string());
    }
    let mut response = String::from("Here are the matching tasks:");
    for task in matches {
        response.push_str(&format!("\n{}", task.render()));
    }
    Ok(response)
}

fn list_by_date(blob: &str, list: &TaskList) -> Result<String, CommandError> {
    let date = parse::parse_date(blob)?;
    let matches = list.filter_by_date(date);
    if matches.is_empty() {
        return Ok(format!("No tasks on {date}."));
    }
    let mut response = format!("Tasks on {date}:");
    for task in matches {
        response.push_str(&format!("\n{}", task.render()));
    }
    Ok(response)
}
