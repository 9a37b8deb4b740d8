//! Error kinds for task validation and bulk queue loads.
//!
//! The queue itself reports expected conditions (empty queue, unknown id)
//! through `Option`/`bool`. These enums cover the two places where a caller
//! has to be told *why* something was rejected.

use chrono::NaiveDate;
use std::fmt::Debug;
use thiserror::Error;

/// Reasons a task draft is rejected before it ever reaches the queue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task title must be at least {min} characters long")]
    TitleTooShort { min: usize },

    #[error("Description cannot exceed {max} characters")]
    DescriptionTooLong { max: usize },

    #[error("Due date is required")]
    DueDateRequired,

    #[error("Due date cannot be in the past: {0}")]
    DueDateInPast(NaiveDate),

    #[error("Invalid priority {0}: expected 1 (high), 2 (medium) or 3 (low)")]
    InvalidPriority(i64),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid status '{0}': expected 'pending' or 'completed'")]
    InvalidStatus(String),
}

/// Failure of a whole-queue replacement or of id assignment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError<Id: Debug> {
    #[error("Duplicate task id {0:?} in loaded records")]
    DuplicateId(Id),

    #[error("No task ids left to assign")]
    IdsExhausted,
}
