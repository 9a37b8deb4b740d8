//! Task records, drafts and list filters.
//!
//! A [`Task`] is what the priority queue stores. Only `id` and `priority`
//! matter for ordering; the rest is payload that the view and the storage
//! layer care about.
//!
//! New tasks start life as a [`TaskDraft`] built from user input. The draft
//! is validated against the configured rules and only then turned into a
//! `Task` with an identifier from the application context.

use super::config::ValidationConfig;
use super::error::ValidationError;
use super::queue::Prioritized;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type TaskId = i64;

pub const PRIORITY_HIGH: i64 = 1;
pub const PRIORITY_MEDIUM: i64 = 2;
pub const PRIORITY_LOW: i64 = 3;

/// Date format accepted on the command line and used in exports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn toggle(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "completed" | "done" => Ok(TaskStatus::Completed),
            _ => Err(ValidationError::InvalidStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: i64,
    pub status: TaskStatus,
    pub created_at: NaiveDateTime,
}

impl Task {
    /// Builds a pending task stamped with the current local time.
    pub fn new(id: TaskId, title: &str, description: &str, due_date: NaiveDate, priority: i64) -> Self {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            priority,
            status: TaskStatus::Pending,
            created_at: chrono::Local::now().naive_local(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// A task is overdue when its due date has passed and it is still open.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && !self.is_completed()
    }
}

impl Prioritized for Task {
    type Id = TaskId;

    fn id(&self) -> TaskId {
        self.id
    }

    fn priority(&self) -> i64 {
        self.priority
    }

    fn set_priority(&mut self, priority: i64) {
        self.priority = priority;
    }
}

/// Unvalidated user input for a new task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: i64,
}

impl TaskDraft {
    pub fn new(title: &str, description: &str, due_date: Option<NaiveDate>, priority: i64) -> Self {
        TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            priority,
        }
    }

    /// Checks the draft against `rules`, using `today` as the cut-off for
    /// past due dates.
    pub fn validate(&self, rules: &ValidationConfig, today: NaiveDate) -> Result<(), ValidationError> {
        if self.title.trim().chars().count() < rules.min_title_length {
            return Err(ValidationError::TitleTooShort {
                min: rules.min_title_length,
            });
        }
        if self.description.trim().chars().count() > rules.max_description_length {
            return Err(ValidationError::DescriptionTooLong {
                max: rules.max_description_length,
            });
        }

        let due_date = self.due_date.ok_or(ValidationError::DueDateRequired)?;
        if due_date < today && !rules.allow_past_due_dates {
            return Err(ValidationError::DueDateInPast(due_date));
        }

        if !(PRIORITY_HIGH..=PRIORITY_LOW).contains(&self.priority) {
            return Err(ValidationError::InvalidPriority(self.priority));
        }

        Ok(())
    }

    /// Turns a validated draft into a pending task.
    ///
    /// Returns `DueDateRequired` if called on a draft without a due date.
    pub fn into_task(self, id: TaskId, created_at: NaiveDateTime) -> Result<Task, ValidationError> {
        let due_date = self.due_date.ok_or(ValidationError::DueDateRequired)?;
        Ok(Task {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            due_date,
            priority: self.priority,
            status: TaskStatus::Pending,
            created_at,
        })
    }
}

pub fn parse_due_date(text: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(text.to_string()))
}

/// Search and filter criteria for task listings. Unset fields match
/// everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub search: Option<String>,
    pub priority: Option<i64>,
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                task.title.to_lowercase().contains(&term) || task.description.to_lowercase().contains(&term)
            }
        };
        let matches_priority = self.priority.map_or(true, |p| task.priority == p);
        let matches_status = self.status.map_or(true, |s| task.status == s);

        matches_search && matches_priority && matches_status
    }
}
