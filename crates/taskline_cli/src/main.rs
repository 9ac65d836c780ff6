//! Line-oriented REPL shell for Taskline.
//!
//! # Responsibility
//! - Resolve the data directory, wire up logging and storage, and pump raw
//!   instruction lines through the core dispatcher.
//! - Stay thin: all task semantics live in `taskline_core`.

use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use taskline_core::{handle_instruction, Reply, Storage, TaskList};

const DATA_DIR_ENV: &str = "TASKLINE_DATA_DIR";
const TASK_FILE_NAME: &str = "taskline.txt";

fn data_dir() -> PathBuf {
    let dir = env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    if dir.is_absolute() {
        return dir;
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(dir),
        Err(_) => dir,
    }
}

fn main() {
    let data_dir = data_dir();
    let log_dir = data_dir.join("logs");
    if let Err(err) = taskline_core::init_logging(
        taskline_core::default_log_level(),
        &log_dir.to_string_lossy(),
    ) {
        eprintln!("warning: logging disabled: {err}");
    }

    let storage = Storage::new(data_dir.join(TASK_FILE_NAME));
    log::info!(
        "event=session_start module=cli version={} task_file={}",
        taskline_core::core_version(),
        storage.path().display()
    );
    let mut list = TaskList::load(storage);

    println!("Hello! I'm Taskline.");
    println!("What can I do for you?");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        let reply = handle_instruction(&line, &mut list);
        println!("{}", reply.text());
        if let Reply::Exit(_) = reply {
            return;
        }
    }

    // EOF without `bye`: flush so the mirror matches the final state.
    if let Err(err) = list.flush() {
        eprintln!("warning: your tasks could not be saved: {err}");
    }
}
