use super::formatter::{format_due_cell, priority_label, priority_marker, status_marker};
use super::task::Task;
use chrono::NaiveDate;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Prints tasks as a table, in the order given.
    pub fn tasks(tasks: &[&Task], today: NaiveDate) {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row!["ID", "STATUS", "TITLE", "DESCRIPTION", "DUE", "PRIORITY"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                format!("{} {}", status_marker(task), task.status),
                task.title,
                task.description,
                format_due_cell(task, today),
                format!("{} {}", priority_marker(task.priority), priority_label(task.priority))
            ]);
        }
        table.printstd();
    }

    /// Prints a single task as a two-column detail table.
    pub fn task(task: &Task, today: NaiveDate) {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["Title", task.title]);
        if !task.description.is_empty() {
            table.add_row(row!["Description", task.description]);
        }
        table.add_row(row!["Due", format_due_cell(task, today)]);
        table.add_row(row![
            "Priority",
            format!("{} {} ({})", priority_marker(task.priority), priority_label(task.priority), task.priority)
        ]);
        table.add_row(row!["Status", task.status]);
        table.add_row(row!["Created", task.created_at.format("%Y-%m-%d %H:%M")]);
        table.printstd();
    }
}
