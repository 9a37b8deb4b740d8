//! Display implementation for taskheap messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent between commands.

use super::types::Message;
use crate::libs::formatter::priority_label;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Task #{} '{}' added successfully!", id, title),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskCompleted(title) => format!("Task '{}' completed!", title),
            Message::TaskReopened(title) => format!("Task '{}' marked as pending!", title),
            Message::TaskPriorityChanged(id, priority) => {
                format!("Task #{} priority set to {} ({})", id, priority, priority_label(*priority))
            }
            Message::TaskDeleted(title) => format!("Task '{}' deleted successfully!", title),
            Message::TaskTaken(title) => format!("Task '{}' taken off the queue.", title),
            Message::TaskValidationFailed(error) => format!("Invalid task: {}", error),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::TasksHeader(count) => format!("{} Tasks", count),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NextTaskHeader => "Next up:".to_string(),
            Message::QueueEmpty => "The queue is empty.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults will be used".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigWizardHeader => "taskheap configuration".to_string(),
            Message::PromptDefaultPriority => "Default priority (1 = high, 2 = medium, 3 = low)".to_string(),
            Message::PromptShowCompleted => "Show completed tasks in listings?".to_string(),
            Message::PromptMinTitleLength => "Minimum title length".to_string(),
            Message::PromptMaxDescriptionLength => "Maximum description length".to_string(),
            Message::PromptAllowPastDueDates => "Allow due dates in the past?".to_string(),
            Message::PriorityRange => "Priority must be 1, 2 or 3".to_string(),

            // === EXPORT / IMPORT MESSAGES ===
            Message::TasksExported(count, path) => format!("Exported {} task(s) to {}", count, path),
            Message::TasksImported(count) => format!("Imported {} task(s)", count),
            Message::ImportFailed(error) => format!("Import failed: {}", error),
            Message::ImportFileEmpty(path) => format!("{} contains no tasks; importing it clears the queue", path),
            Message::ConfirmImportReplace(count) => {
                format!("Importing replaces the {} stored task(s). Continue?", count)
            }

            // === STORAGE MESSAGES ===
            Message::TasksLoaded(count) => format!("Loaded {} task(s) from storage", count),
            Message::TasksSaved(count) => format!("Saved {} task(s) to storage", count),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_messages() {
        assert_eq!(
            Message::ImportFileEmpty("tasks.json".into()).to_string(),
            "tasks.json contains no tasks; importing it clears the queue"
        );
        assert_eq!(
            Message::ImportFailed("Duplicate task id 8 in loaded records".into()).to_string(),
            "Import failed: Duplicate task id 8 in loaded records"
        );
    }
}
