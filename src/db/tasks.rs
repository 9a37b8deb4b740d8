use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskId, TaskStatus};
use crate::msg_debug;
use anyhow::Result;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension};

const DELETE_TASKS: &str = "DELETE FROM tasks";
const INSERT_TASK: &str = "INSERT INTO tasks (id, position, title, description, due_date, priority, status, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_TASKS: &str = "SELECT id, title, description, due_date, priority, status, created_at
    FROM tasks ORDER BY position";
const SELECT_NEXT_ID: &str = "SELECT value FROM meta WHERE key = 'next_id'";
const UPSERT_NEXT_ID: &str = "INSERT INTO meta (key, value) VALUES ('next_id', ?1)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// Snapshot storage for the task queue.
///
/// The whole queue is written at once, row order following the heap's
/// internal array, together with the next identifier to hand out.
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Tasks {
        Tasks { conn: db.conn }
    }

    /// Replaces all stored tasks and the id counter in one transaction.
    pub fn save_snapshot(&mut self, tasks: &[Task], next_id: TaskId) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_TASKS, [])?;
        {
            let mut stmt = tx.prepare(INSERT_TASK)?;
            for (position, task) in tasks.iter().enumerate() {
                stmt.execute(params![
                    task.id,
                    position as i64,
                    task.title,
                    task.description,
                    task.due_date,
                    task.priority,
                    task.status,
                    task.created_at
                ])?;
            }
        }
        tx.execute(UPSERT_NEXT_ID, params![next_id])?;
        tx.commit()?;

        msg_debug!(Message::TasksSaved(tasks.len()));
        Ok(())
    }

    /// Loads the stored tasks in saved array order plus the stored id
    /// counter (1 when nothing was ever saved).
    pub fn load_snapshot(&mut self) -> Result<(Vec<Task>, TaskId)> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], |row| {
            Ok(Task {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                due_date: row.get(3)?,
                priority: row.get(4)?,
                status: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        let next_id: Option<TaskId> = self.conn.query_row(SELECT_NEXT_ID, [], |row| row.get(0)).optional()?;

        msg_debug!(Message::TasksLoaded(tasks.len()));
        Ok((tasks, next_id.unwrap_or(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn memory_store() -> Tasks {
        let conn = Connection::open_in_memory().unwrap();
        Tasks::from_db(Db::with_connection(conn).unwrap())
    }

    #[test]
    fn empty_store_starts_at_one() {
        let mut store = memory_store();
        let (tasks, next_id) = store.load_snapshot().unwrap();
        assert!(tasks.is_empty());
        assert_eq!(next_id, 1);
    }

    #[test]
    fn snapshot_keeps_array_order_and_fields() {
        let mut store = memory_store();
        let due = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let mut done = Task::new(9, "Ship release", "v1.2", due, 1);
        done.status = TaskStatus::Completed;
        let tasks = vec![done, Task::new(3, "Write changelog", "", due, 2), Task::new(5, "Tweet", "", due, 3)];

        store.save_snapshot(&tasks, 10).unwrap();
        let (loaded, next_id) = store.load_snapshot().unwrap();

        assert_eq!(loaded, tasks);
        assert_eq!(next_id, 10);

        store.save_snapshot(&tasks[1..], 11).unwrap();
        let (loaded, next_id) = store.load_snapshot().unwrap();
        assert_eq!(loaded.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 5]);
        assert_eq!(next_id, 11);
    }
}
