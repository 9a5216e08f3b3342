//! Task records and the field sets used to create and change them.
//!
//! A [`Task`] is owned by the [`TaskStore`](super::store::TaskStore); callers
//! only ever see shared references to it. Changes come in two shapes:
//!
//! - [`FieldUpdates`]: raw text keyed by field name, exactly as a user typed it.
//!   Keys that do not name a task field are kept but ignored.
//! - [`TaskUpdate`]: the typed partial update the store applies. It is built
//!   from a [`FieldUpdates`] through validation, so an out-of-range priority or
//!   status never reaches the store.
//!
//! ## Usage
//!
//! ```rust
//! use todo_list::libs::task::{FieldUpdates, Priority, TaskUpdate};
//!
//! let fields = FieldUpdates::from([("priority", "Low"), ("colour", "blue")]);
//! let update = TaskUpdate::try_from(&fields).unwrap();
//! assert_eq!(update.priority, Some(Priority::Low));
//! assert!(update.name.is_none());
//! ```

use super::error::ValidationError;
use super::validation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Field names in persisted column order.
pub const TASK_FIELDS: [&str; 5] = ["id", "name", "category", "priority", "status"];

/// Highest id a task can carry. `u32::MAX` is never issued, so the counter
/// after any valid id still fits in a `u32`.
pub const MAX_TASK_ID: u32 = u32::MAX - 1;

/// Urgency level of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact textual form; `"high"` or `"HIGH"` are rejected.
impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidPriority(s.to_string()))
    }
}

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    Completed,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Pending, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidStatus(s.to_string()))
    }
}

/// A single to-do item.
///
/// Field order matches the CSV column order, since rows are serialized
/// straight from this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub priority: Priority,
    pub status: Status,
}

impl Task {
    pub fn new(id: u32, name: &str, category: &str, priority: Priority) -> Self {
        Task {
            id,
            name: name.to_string(),
            category: category.to_string(),
            priority,
            status: Status::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Case-insensitive substring match over name, category, priority and status.
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        [self.name.as_str(), self.category.as_str(), self.priority.as_str(), self.status.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(&keyword))
    }

    pub(crate) fn apply(&mut self, update: &TaskUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(category) = &update.category {
            self.category = category.clone();
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

/// Raw, user-entered field values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldUpdates {
    values: BTreeMap<String, String>,
}

impl FieldUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses `key=value` pairs, e.g. from `--set priority=High`.
    pub fn parse_pair(pair: &str) -> Option<(String, String)> {
        let (key, value) = pair.split_once('=')?;
        Some((key.trim().to_string(), value.to_string()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for FieldUpdates {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = FieldUpdates::new();
        for (key, value) in iter {
            fields.insert(key.as_ref(), value.as_ref());
        }
        fields
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FieldUpdates {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Typed partial update; absent fields are left untouched. There is no `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.priority.is_none() && self.status.is_none()
    }
}

impl TryFrom<&FieldUpdates> for TaskUpdate {
    type Error = ValidationError;

    fn try_from(fields: &FieldUpdates) -> Result<Self, Self::Error> {
        validation::check(fields)?;
        Ok(TaskUpdate {
            name: fields.get("name").map(str::to_string),
            category: fields.get("category").map(str::to_string),
            priority: fields.get("priority").map(str::parse::<Priority>).transpose()?,
            status: fields.get("status").map(str::parse::<Status>).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse_is_exact() {
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert!("high".parse::<Priority>().is_err());
        assert!("Urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_matches_every_text_field() {
        let task = Task::new(1, "Ship release", "Work", Priority::High);
        assert!(task.matches("SHIP"));
        assert!(task.matches("work"));
        assert!(task.matches("hig"));
        assert!(task.matches("pend"));
        assert!(task.matches(""));
        assert!(!task.matches("personal"));
    }

    #[test]
    fn test_update_from_fields_ignores_unknown_keys() {
        let fields = FieldUpdates::from([("status", "Completed"), ("id", "99"), ("colour", "red")]);
        let update = TaskUpdate::try_from(&fields).unwrap();
        assert_eq!(
            update,
            TaskUpdate {
                status: Some(Status::Completed),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_update_from_fields_rejects_bad_priority() {
        let fields = FieldUpdates::from([("priority", "Urgent")]);
        assert_eq!(TaskUpdate::try_from(&fields), Err(ValidationError::InvalidPriority("Urgent".to_string())));
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(FieldUpdates::parse_pair("name=Buy milk"), Some(("name".to_string(), "Buy milk".to_string())));
        assert_eq!(FieldUpdates::parse_pair("broken"), None);
    }
}
