//! Flat-file persistence for the task list.
//!
//! # Responsibility
//! - Mirror the in-memory task list to a UTF-8 text file, one encoded line
//!   per task, in list order.
//! - Repopulate the list from that file on startup.
//!
//! # Invariants
//! - `save` rewrites the whole file on every call; there is no append path,
//!   so the mirror always reflects one complete list state.
//! - `load` recovers from corrupt individual lines by skipping them with a
//!   warning; one broken record never blocks the rest of the file.
//! - A missing file is a fresh start, not an error.

use crate::model::task::Task;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub mod codec;

pub type StorageResult<T> = Result<T, StorageError>;

/// Filesystem-level persistence failure.
///
/// Non-fatal to a running session: the in-memory list stays authoritative
/// and only the on-disk mirror goes stale.
#[derive(Debug)]
pub enum StorageError {
    Io { path: PathBuf, source: io::Error },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "task file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Handle on the persisted task file.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a handle for the given file path. Nothing is touched on disk
    /// until the first `save` or `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted task file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the task file with one encoded line per task.
    ///
    /// The parent directory is created on demand, so the first save on a
    /// fresh machine succeeds without setup.
    ///
    /// # Errors
    /// `StorageError::Io` when the directory or file cannot be written. The
    /// caller's in-memory state is unaffected.
    pub fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&task.encode());
            contents.push('\n');
        }
        fs::write(&self.path, contents).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Reads the task file back into memory.
    ///
    /// Each line is decoded independently; a line that fails to decode is
    /// skipped with a warning. A missing file yields an empty list.
    ///
    /// # Errors
    /// `StorageError::Io` only when an existing file cannot be read at the
    /// filesystem level.
    pub fn load(&self) -> StorageResult<Vec<Task>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut tasks = Vec::new();
        for (number, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match codec::decode_line(line) {
                Ok(task) => tasks.push(task),
                Err(err) => warn!(
                    "event=record_skipped module=storage line={} reason={err}",
                    number + 1
                ),
            }
        }
        Ok(tasks)
    }
}
