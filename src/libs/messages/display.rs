//! Display implementation for taskdeck application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! on the terminal. All user-facing wording lives here, in one place, so the
//! command handlers never hardcode strings.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created", id),
            Message::TaskUpdated(id) => format!("Task #{} updated", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskNotFound(id) => format!("Task #{} not found", id),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::TasksWithTag(name) => format!("📋 Tasks tagged '{}'", name),
            Message::NoTasksWithTag(name) => format!("No tasks carry the tag '{}'", name),

            // === TAG MESSAGES ===
            Message::TagCreated(name) => format!("Tag '{}' created", name),
            Message::TagDeleted(name) => format!("Tag '{}' deleted", name),
            Message::TagNotFound(tag) => format!("Tag '{}' not found", tag),
            Message::TagAlreadyExists(name) => format!("Tag '{}' already exists", name),
            Message::TagsHeader => "🏷️ Tags".to_string(),
            Message::NoTagsFound => "No tags found".to_string(),
            Message::ConfirmDeleteTag(name) => format!("Delete tag '{}'?", name),
            Message::ConfirmDeleteTagWithTasks(name, count) => {
                format!("Tag '{}' is attached to {} task(s). Delete it anyway?", name, count)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigInitHeader => "🛠️ Taskdeck configuration".to_string(),
            Message::PromptDbPath => "Database file path (empty for default)".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::ValidationFailed(reason) => format!("Invalid input: {}", reason),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_rendering() {
        assert_eq!(Message::TaskCreated(7).to_string(), "Task #7 created");
        assert_eq!(Message::TagNotFound("work".to_string()).to_string(), "Tag 'work' not found");
        assert_eq!(
            Message::ConfirmDeleteTagWithTasks("work".to_string(), 3).to_string(),
            "Tag 'work' is attached to 3 task(s). Delete it anyway?"
        );
        assert_eq!(
            Message::ValidationFailed("title must not be empty".to_string()).to_string(),
            "Invalid input: title must not be empty"
        );
    }
}
