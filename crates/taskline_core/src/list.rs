//! Owned, ordered task collection.
//!
//! # Responsibility
//! - Hold the single authoritative list of tasks for a session.
//! - Flush to storage synchronously after every mutation.
//!
//! # Invariants
//! - Insertion order is preserved; indices stay stable until a deletion
//!   shifts later elements down by one.
//! - Bounds are checked before any mutation, so a failed call leaves the
//!   list unchanged.
//! - A flush failure never rolls back or fails the in-memory mutation; the
//!   in-memory list stays authoritative and the failure is logged.

use crate::model::task::Task;
use crate::storage::{Storage, StorageResult};
use chrono::NaiveDate;
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Index error for positional task-list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    OutOfRange { index: usize, len: usize },
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { len, .. } => write!(
                f,
                "That task number is out of range; your list has {len} task(s)."
            ),
        }
    }
}

impl Error for ListError {}

/// The mutable ordered task collection, backed by a storage mirror.
pub struct TaskList {
    tasks: Vec<Task>,
    storage: Storage,
}

impl TaskList {
    /// Creates an empty list over the given storage.
    pub fn new(storage: Storage) -> Self {
        Self {
            tasks: Vec::new(),
            storage,
        }
    }

    /// Creates a list populated from the storage file.
    ///
    /// An unreadable file is logged and treated as empty; the session still
    /// starts.
    pub fn load(storage: Storage) -> Self {
        let tasks = match storage.load() {
            Ok(tasks) => tasks,
            Err(err) => {
                error!("event=load_failed module=list reason={err}");
                Vec::new()
            }
        };
        Self { tasks, storage }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Read-only lookup by 0-based index.
    pub fn get(&self, index: usize) -> ListResult<&Task> {
        self.check_bounds(index)?;
        Ok(&self.tasks[index])
    }

    /// Appends a task and flushes. No capacity bound, no duplicate check;
    /// callers decide whether to consult `is_duplicate` first.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
        self.flush_logged();
    }

    /// Marks the task at `index` as done and flushes.
    pub fn mark_done(&mut self, index: usize) -> ListResult<&Task> {
        self.check_bounds(index)?;
        self.tasks[index].mark_done();
        self.flush_logged();
        Ok(&self.tasks[index])
    }

    /// Marks the task at `index` as not done and flushes.
    pub fn mark_undone(&mut self, index: usize) -> ListResult<&Task> {
        self.check_bounds(index)?;
        self.tasks[index].mark_undone();
        self.flush_logged();
        Ok(&self.tasks[index])
    }

    /// Removes and returns the task at `index`, then flushes. Later tasks
    /// shift down by one.
    pub fn delete(&mut self, index: usize) -> ListResult<Task> {
        self.check_bounds(index)?;
        let removed = self.tasks.remove(index);
        self.flush_logged();
        Ok(removed)
    }

    /// Case-insensitive substring search over descriptions, in list order.
    pub fn find_by_keyword(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.description.to_lowercase().contains(&needle))
            .collect()
    }

    /// Tasks scheduled on the given calendar day, in list order.
    pub fn filter_by_date(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.occurs_on(date))
            .collect()
    }

    /// Returns whether any existing task has an equal description.
    ///
    /// Deliberately coarse: case-sensitive description equality only,
    /// ignoring kind, dates, and done-state.
    pub fn is_duplicate(&self, task: &Task) -> bool {
        self.tasks
            .iter()
            .any(|existing| existing.description == task.description)
    }

    /// Writes the current list to storage.
    ///
    /// Mutating methods call this internally; it is public for the final
    /// flush on `bye`.
    pub fn flush(&self) -> StorageResult<()> {
        self.storage.save(&self.tasks)
    }

    fn flush_logged(&self) {
        if let Err(err) = self.flush() {
            error!("event=save_failed module=list reason={err}");
        }
    }

    fn check_bounds(&self, index: usize) -> ListResult<()> {
        if index >= self.tasks.len() {
            return Err(ListError::OutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }
}
