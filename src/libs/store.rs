//! In-memory task collection with CSV persistence.
//!
//! [`TaskStore`] is the single owner of task state. It keeps tasks in
//! insertion order, hands out ids from a counter that never goes backwards,
//! and only gives callers shared references, so every change goes through
//! one of its methods.
//!
//! ## Outcomes
//!
//! Nothing here returns an error for an unknown id: `delete`, `edit` and
//! `mark_completed` answer `false`. Validation and file failures are also
//! reported as `false`, with the reason sent through the message macros.
//! Callers that want the reason use [`validation::check`], [`csv_file`] or
//! [`TaskStore::load`] directly.
//!
//! ## Usage
//!
//! ```rust
//! use todo_list::libs::store::TaskStore;
//! use todo_list::libs::task::{Priority, TaskUpdate};
//!
//! let mut store = TaskStore::new();
//! let id = store.add("Buy milk", "Personal", Priority::Low).unwrap().id;
//! store.add("Ship release", "Work", Priority::High);
//!
//! assert!(store.mark_completed(id));
//! assert_eq!(store.get_completed().len(), 1);
//! assert_eq!(store.search("WORK").len(), 1);
//!
//! let update = TaskUpdate { priority: Some(Priority::Medium), ..Default::default() };
//! assert!(store.edit(id, &update));
//! assert!(!store.delete(42));
//! ```

use super::csv_file;
use super::error::StorageError;
use super::messages::Message;
use super::task::{FieldUpdates, Priority, Status, Task, TaskUpdate, MAX_TASK_ID};
use super::validation;
use crate::{msg_error, msg_info};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u32,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore { tasks: Vec::new(), next_id: 1 }
    }

    /// Builds a store from the task file at `path`.
    ///
    /// A missing file is an empty store; any other failure is returned.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let mut store = TaskStore::new();
        if path.exists() {
            store.replace(csv_file::read_tasks(path)?);
        }
        Ok(store)
    }

    /// Creates a pending task with the next id and appends it.
    ///
    /// No validation happens here; use [`TaskStore::validate`] first when
    /// the name and category come from user input. `None` once every id up to
    /// [`MAX_TASK_ID`] has been handed out; the store is left unchanged.
    pub fn add(&mut self, name: &str, category: &str, priority: Priority) -> Option<&Task> {
        let id = self.next_id;
        if id > MAX_TASK_ID {
            msg_error!(Message::TaskIdsExhausted(MAX_TASK_ID));
            return None;
        }
        self.next_id = id + 1;
        self.tasks.push(Task::new(id, name, category, priority));
        debug!(id, name, category, %priority, "task added");
        self.tasks.last()
    }

    pub fn delete(&mut self, id: u32) -> bool {
        match self.position(id) {
            Some(index) => {
                self.tasks.remove(index);
                debug!(id, "task deleted");
                true
            }
            None => false,
        }
    }

    /// Marks the task as completed. Repeating the call is a successful no-op.
    pub fn mark_completed(&mut self, id: u32) -> bool {
        self.edit(
            id,
            &TaskUpdate {
                status: Some(Status::Completed),
                ..Default::default()
            },
        )
    }

    /// Applies the fields present in `update`; `true` whenever the task exists,
    /// even for an empty update.
    pub fn edit(&mut self, id: u32, update: &TaskUpdate) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.apply(update);
                debug!(id, ?update, "task edited");
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn get_all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get_completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_completed()).collect()
    }

    /// Tasks whose name, category, priority or status contain `keyword`,
    /// ignoring case. An empty keyword matches everything.
    pub fn search(&self, keyword: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.matches(keyword)).collect()
    }

    /// Checks proposed values without touching the store.
    pub fn validate(&self, fields: &FieldUpdates) -> bool {
        match validation::check(fields) {
            Ok(()) => true,
            Err(reason) => {
                msg_info!(Message::ValidationFailed(reason.to_string()));
                false
            }
        }
    }

    /// Writes the whole collection to `path` as CSV.
    pub fn export_to(&self, path: &Path) -> bool {
        match csv_file::write_tasks(path, &self.tasks) {
            Ok(()) => {
                debug!(path = %path.display(), count = self.tasks.len(), "tasks exported");
                true
            }
            Err(err) => {
                msg_error!(Message::ExportFailed(err.to_string()));
                false
            }
        }
    }

    /// Replaces the collection with the tasks in `path`.
    ///
    /// The file is parsed completely before anything changes; on failure the
    /// current tasks and id counter are kept as they were.
    pub fn import_from(&mut self, path: &Path) -> bool {
        match csv_file::read_tasks(path) {
            Ok(tasks) => {
                self.replace(tasks);
                debug!(path = %path.display(), count = self.tasks.len(), "tasks imported");
                true
            }
            Err(err) => {
                msg_error!(Message::ImportFailed(err.to_string()));
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    // Ids from `csv_file` are at most MAX_TASK_ID, so the counter never wraps.
    fn replace(&mut self, tasks: Vec<Task>) {
        self.next_id = tasks.iter().map(|task| task.id).max().map_or(1, |max| max.saturating_add(1));
        self.tasks = tasks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for name in names {
            store.add(name, "Work", Priority::Medium);
        }
        store
    }

    fn ids(tasks: &[&Task]) -> Vec<u32> {
        tasks.iter().map(|task| task.id).collect()
    }

    #[test]
    fn test_nth_added_task_has_id_n() {
        let store = store_with(&["a", "b", "c", "d"]);
        let all: Vec<u32> = store.get_all().iter().map(|task| task.id).collect();
        assert_eq!(all, vec![1, 2, 3, 4]);
        assert!(store.get_all().iter().all(|task| task.status == Status::Pending));
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = store_with(&["a", "b", "c"]);
        assert!(store.delete(3));
        assert!(store.delete(1));

        let task = store.add("d", "Work", Priority::Low).unwrap();
        assert_eq!(task.id, 4);
    }

    #[test]
    fn test_delete_scans_past_first_task() {
        let mut store = store_with(&["a", "b", "c"]);

        assert!(store.delete(2));
        let remaining: Vec<u32> = store.get_all().iter().map(|task| task.id).collect();
        assert_eq!(remaining, vec![1, 3]);

        assert!(!store.delete(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_mark_completed_targets_only_matching_task() {
        let mut store = store_with(&["a", "b"]);

        assert!(store.mark_completed(2));
        assert!(store.mark_completed(2));
        assert_eq!(store.get(1).unwrap().status, Status::Pending);
        assert_eq!(store.get(2).unwrap().status, Status::Completed);
        assert!(!store.mark_completed(7));
    }

    #[test]
    fn test_edit_changes_only_given_fields() {
        let mut store = TaskStore::new();
        store.add("Buy milk", "Personal", Priority::High);
        let update = TaskUpdate {
            priority: Some(Priority::Low),
            ..Default::default()
        };

        assert!(store.edit(1, &update));

        let task = store.get(1).unwrap();
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.category, "Personal");
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.status, Status::Pending);
    }

    #[test]
    fn test_edit_missing_and_empty_update() {
        let mut store = store_with(&["a"]);
        assert!(store.edit(1, &TaskUpdate::default()));
        assert!(!store.edit(2, &TaskUpdate::default()));
    }

    #[test]
    fn test_search_keeps_order_and_ignores_case() {
        let mut store = TaskStore::new();
        store.add("Write report", "Work", Priority::High);
        store.add("Buy milk", "Personal", Priority::Low);
        store.add("Homework", "School", Priority::Medium);

        assert_eq!(ids(&store.search("WORK")), vec![1, 3]);
        assert_eq!(ids(&store.search("work")), ids(&store.search("WORK")));
        assert_eq!(store.search("").len(), 3);
        assert!(store.search("garden").is_empty());
    }

    #[test]
    fn test_validate_leaves_store_untouched() {
        let store = store_with(&["a"]);
        assert!(!store.validate(&FieldUpdates::from([("priority", "Urgent")])));
        assert!(store.validate(&FieldUpdates::from([("priority", "High")])));
        assert!(!store.validate(&FieldUpdates::from([("name", "")])));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_import_keeps_existing_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        std::fs::write(&path, "id,name,category,priority,status\n1,ok,Work,Low,Pending\nx,bad,Work,Low,Pending\n").unwrap();
        let mut store = store_with(&["a", "b"]);

        assert!(!store.import_from(&path));

        assert_eq!(store.len(), 2);
        assert_eq!(store.add("c", "Work", Priority::Low).unwrap().id, 3);
    }

    #[test]
    fn test_import_continues_ids_after_highest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.csv");
        std::fs::write(&path, "id,name,category,priority,status\n7,a,Work,Low,Pending\n3,b,Work,High,Completed\n").unwrap();
        let mut store = TaskStore::new();

        assert!(store.import_from(&path));

        let order: Vec<u32> = store.get_all().iter().map(|task| task.id).collect();
        assert_eq!(order, vec![7, 3]);
        assert_eq!(store.add("c", "Work", Priority::Low).unwrap().id, 8);
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("tasks.csv");
        let store = store_with(&["a"]);

        assert!(!store.export_to(&path));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_import_of_out_of_range_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.csv");
        std::fs::write(&path, "id,name,category,priority,status\n4294967295,a,Work,Low,Pending\n").unwrap();
        let mut store = store_with(&["a"]);

        assert!(!store.import_from(&path));

        assert_eq!(store.len(), 1);
        assert_eq!(store.add("b", "Work", Priority::Low).unwrap().id, 2);
    }

    #[test]
    fn test_add_stops_at_highest_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.csv");
        std::fs::write(&path, "id,name,category,priority,status\n4294967293,a,Work,Low,Pending\n").unwrap();
        let mut store = TaskStore::new();
        assert!(store.import_from(&path));

        assert_eq!(store.add("b", "Work", Priority::Low).unwrap().id, MAX_TASK_ID);
        assert!(store.add("c", "Work", Priority::Low).is_none());
        assert!(store.add("d", "Work", Priority::Low).is_none());

        let order: Vec<u32> = store.get_all().iter().map(|task| task.id).collect();
        assert_eq!(order, vec![MAX_TASK_ID - 1, MAX_TASK_ID]);
    }
}
