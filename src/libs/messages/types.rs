use crate::libs::task::TaskId;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(TaskId, String), // id, title
    TaskNotFoundWithId(TaskId),
    TaskCompleted(String), // title
    TaskReopened(String),  // title
    TaskPriorityChanged(TaskId, i64),
    TaskDeleted(String), // title
    TaskTaken(String),   // title
    TaskValidationFailed(String),
    ConfirmDeleteTask(String), // title
    TasksHeader(usize),        // count
    NoTasksFound,
    NextTaskHeader,
    QueueEmpty,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigWizardHeader,
    PromptDefaultPriority,
    PromptShowCompleted,
    PromptMinTitleLength,
    PromptMaxDescriptionLength,
    PromptAllowPastDueDates,
    PriorityRange,

    // === EXPORT / IMPORT MESSAGES ===
    TasksExported(usize, String), // count, path
    TasksImported(usize),         // count
    ImportFailed(String),         // error
    ImportFileEmpty(String),      // path
    ConfirmImportReplace(usize),  // tasks currently stored

    // === STORAGE MESSAGES ===
    TasksLoaded(usize),
    TasksSaved(usize),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
