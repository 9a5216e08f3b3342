#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(u32, String), // id, name
    TaskUpdated(u32),
    TaskDeleted(u32),
    TaskCompleted(u32),
    TaskNotFoundWithId(u32),
    TasksHeader,
    CompletedTasksHeader,
    SearchResultsHeader(String), // keyword
    NoTasksFound,
    NoCompletedTasks,
    NoTasksMatching(String), // keyword
    NoChangesDetected,
    TaskEditPreview,
    ConfirmDeleteTask(String),
    TaskIdsExhausted(u32), // highest id

    // === VALIDATION MESSAGES ===
    ValidationFailed(String), // reason

    // === STORAGE MESSAGES ===
    ExportCompleted(String),    // path
    ImportCompleted(usize, String), // count, path
    ImportedEmptyFile(String),  // path
    ExportFailed(String),       // reason
    ImportFailed(String),       // reason
    TaskFileLoadFailed(String), // reason
    TaskFileSaveFailed(String), // reason

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigReset,
    ConfigNotFound,
    ConfigParseError,
    ConfigFileLocation(String),

    // === FORM MESSAGES ===
    FormTitle,
    SelectAction,
    FormClosed,

    // === PROMPTS ===
    PromptTaskName,
    PromptTaskCategory,
    PromptTaskPriority,
    PromptTaskStatus,
    PromptTaskId,
    PromptKeyword,
    PromptFilePath,
    PromptDataFile,
    PromptDefaultCategory,
    PromptDefaultPriority,

    // === GENERIC MESSAGES ===
    OperationCancelled,
    InvalidTaskId(String),
}
