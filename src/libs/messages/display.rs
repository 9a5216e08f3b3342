//! Display implementation for application messages.
//!
//! All user-facing text lives here, so commands and the store only ever pick
//! a [`Message`] variant and hand it to one of the output macros.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, name) => format!("Task #{} '{}' created", id, name),
            Message::TaskUpdated(id) => format!("Task #{} updated", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskCompleted(id) => format!("Task #{} marked as completed", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::CompletedTasksHeader => "✔️ Completed tasks".to_string(),
            Message::SearchResultsHeader(keyword) => format!("🔍 Tasks matching '{}'", keyword),
            Message::NoTasksFound => "No tasks yet".to_string(),
            Message::NoCompletedTasks => "No completed tasks".to_string(),
            Message::NoTasksMatching(keyword) => format!("No tasks match '{}'", keyword),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::TaskEditPreview => "Task after edit:".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}'?", name),
            Message::TaskIdsExhausted(max) => format!("Cannot add task: ids up to {} are used up", max),

            // === VALIDATION MESSAGES ===
            Message::ValidationFailed(reason) => format!("Validation failed: {}", reason),

            // === STORAGE MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to {}", path),
            Message::ImportCompleted(count, path) => format!("Imported {} task(s) from {}", count, path),
            Message::ImportedEmptyFile(path) => format!("{} has no tasks, the task list is now empty", path),
            Message::ExportFailed(reason) => format!("Export failed: {}", reason),
            Message::ImportFailed(reason) => format!("Import failed: {}", reason),
            Message::TaskFileLoadFailed(reason) => format!("Failed to load task file: {}", reason),
            Message::TaskFileSaveFailed(reason) => format!("Failed to save task file: {}", reason),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReset => "Configuration removed, defaults will be used".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigFileLocation(path) => format!("Task file: {}", path),

            // === FORM MESSAGES ===
            Message::FormTitle => "📝 To-Do List".to_string(),
            Message::SelectAction => "Select an action".to_string(),
            Message::FormClosed => "Bye!".to_string(),

            // === PROMPTS ===
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptTaskId => "Task ID".to_string(),
            Message::PromptKeyword => "Keyword".to_string(),
            Message::PromptFilePath => "File path".to_string(),
            Message::PromptDataFile => "Task file path".to_string(),
            Message::PromptDefaultCategory => "Default category".to_string(),
            Message::PromptDefaultPriority => "Default priority".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidTaskId(value) => format!("'{}' is not a valid task ID", value),
        };

        write!(f, "{}", text)
    }
}
