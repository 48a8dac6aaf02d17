#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskNotFound(i64),
    TasksHeader,
    NoTasksFound,
    NoChangesDetected,
    ConfirmDeleteTask(String),
    TasksWithTag(String),
    NoTasksWithTag(String),

    // === TAG MESSAGES ===
    TagCreated(String),
    TagDeleted(String),
    TagNotFound(String),
    TagAlreadyExists(String),
    TagsHeader,
    NoTagsFound,
    ConfirmDeleteTag(String),
    ConfirmDeleteTagWithTasks(String, usize), // name, attached task count

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigInitHeader,
    PromptDbPath,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    NothingToRollback,
    RollingBack(u32, u32), // from, to
    RollbackCompleted(u32),

    // === GENERIC MESSAGES ===
    OperationCancelled,
    ValidationFailed(String),
}
