//! Text formatting helpers for task listings.
//!
//! ```rust
//! use taskheap::libs::formatter::{format_due_date, priority_label};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
//! assert_eq!(format_due_date(&date), "Jan 5, 2026");
//! assert_eq!(priority_label(1), "High");
//! ```

use super::task::{Task, PRIORITY_HIGH, PRIORITY_LOW};
use chrono::NaiveDate;

/// Formats a due date as "Mon D, YYYY".
pub fn format_due_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Human-readable priority level. Values outside the known levels read as
/// "Medium".
pub fn priority_label(priority: i64) -> &'static str {
    match priority {
        PRIORITY_HIGH => "High",
        PRIORITY_LOW => "Low",
        _ => "Medium",
    }
}

/// Arrow marker for a priority level, matching `priority_label`.
pub fn priority_marker(priority: i64) -> &'static str {
    match priority {
        PRIORITY_HIGH => "↑",
        PRIORITY_LOW => "↓",
        _ => "–",
    }
}

pub fn status_marker(task: &Task) -> &'static str {
    if task.is_completed() {
        "✔"
    } else {
        "○"
    }
}

/// Due date cell text, with an "Overdue" badge for open tasks past due.
pub fn format_due_cell(task: &Task, today: NaiveDate) -> String {
    let date = format_due_date(&task.due_date);
    if task.is_overdue(today) {
        format!("{} [Overdue]", date)
    } else {
        date
    }
}
