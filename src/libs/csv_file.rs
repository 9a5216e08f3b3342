//! CSV encoding of a task collection.
//!
//! The file is UTF-8, comma separated, with a fixed header followed by one row
//! per task in collection order:
//!
//! ```text
//! id,name,category,priority,status
//! 1,Buy milk,Personal,Low,Pending
//! 2,"Ship release, v2",Work,High,Completed
//! ```
//!
//! Quoting follows the `csv` crate defaults (fields are quoted only when they
//! contain a delimiter, quote or line break).

use super::error::StorageError;
use super::task::{Task, MAX_TASK_ID, TASK_FIELDS};
use std::collections::HashSet;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Writes every task to `path`, replacing any existing file.
///
/// The header is always written, so an empty collection yields a file that
/// reads back as empty. Rows go to a sibling `.tmp` file that is renamed over
/// `path` once complete; on failure the previous file is left as it was.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<(), StorageError> {
    let tmp_path = tmp_path_for(path);
    let result = write_rows(&tmp_path, tasks).and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_rows(path: &Path, tasks: &[Task]) -> Result<(), StorageError> {
    let file = File::create(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source: csv::Error| StorageError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // Header is written by hand: serde only emits one once a row exists.
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    wtr.write_record(TASK_FIELDS).map_err(csv_err)?;
    for task in tasks {
        wtr.serialize(task).map_err(csv_err)?;
    }
    wtr.flush().map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Reads a file written by [`write_tasks`].
///
/// Fails on the first bad row; nothing is returned for a partially valid file.
pub fn read_tasks(path: &Path) -> Result<Vec<Task>, StorageError> {
    let file = File::open(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_err = |source: csv::Error| StorageError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    if headers.iter().ne(TASK_FIELDS) {
        return Err(StorageError::Header {
            path: path.to_path_buf(),
            found: headers.iter().collect::<Vec<_>>().join(", "),
        });
    }

    let mut tasks = Vec::new();
    let mut seen = HashSet::new();
    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        let line = record.position().map_or(0, |pos| pos.line());
        let task: Task = record.deserialize(Some(&headers)).map_err(csv_err)?;
        if task.id == 0 || task.id > MAX_TASK_ID {
            return Err(StorageError::InvalidId { id: task.id, line });
        }
        if !seen.insert(task.id) {
            return Err(StorageError::DuplicateId { id: task.id, line });
        }
        tasks.push(task);
    }

    Ok(tasks)
}
