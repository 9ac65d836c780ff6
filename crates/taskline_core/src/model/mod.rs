//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the canonical task record and its three scheduling variants.
//! - Own the two text projections of a task (display line, storage line).
//!
//! # Invariants
//! - A task's variant never changes after construction.
//! - Event windows always satisfy `start < end`.

pub mod task;
