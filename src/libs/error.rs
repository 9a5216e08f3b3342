//! Error types for validation and CSV persistence.
//!
//! A missing task id is not an error anywhere in this crate: store operations
//! report it as `false`. These enums cover the two remaining failure kinds.

use std::path::PathBuf;
use thiserror::Error;

/// A proposed field value broke one of the field rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task name must not be empty")]
    EmptyName,

    #[error("Task category must not be empty")]
    EmptyCategory,

    #[error("Invalid priority: '{0}' (expected Low, Medium or High)")]
    InvalidPriority(String),

    #[error("Invalid status: '{0}' (expected Pending or Completed)")]
    InvalidStatus(String),
}

/// Reading or writing a task file failed.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Cannot access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Unexpected header in '{path}': found [{found}], expected [id, name, category, priority, status]")]
    Header { path: PathBuf, found: String },

    #[error("Invalid task id {id} on line {line}: ids run from 1 to {max}", max = crate::libs::task::MAX_TASK_ID)]
    InvalidId { id: u32, line: u64 },

    #[error("Duplicate task id {id} on line {line}")]
    DuplicateId { id: u32, line: u64 },
}
