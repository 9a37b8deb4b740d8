//! Application context: the task queue plus the identifier counter.
//!
//! One `AppContext` is built per command invocation, usually from the stored
//! snapshot, and passed to whatever needs it. Nothing in the crate keeps a
//! queue or a counter in global state.

use super::error::QueueError;
use super::queue::PriorityQueue;
use super::task::{Task, TaskDraft, TaskFilter, TaskId, TaskStatus};
use crate::db::tasks::Tasks;
use anyhow::Result;
use chrono::NaiveDateTime;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AppContext {
    queue: PriorityQueue<Task>,
    next_id: TaskId,
}

impl Default for AppContext {
    fn default() -> Self {
        AppContext {
            queue: PriorityQueue::new(),
            next_id: 1,
        }
    }
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context from stored records.
    ///
    /// The records are re-heapified. `next_id` is raised past the largest
    /// live identifier so ids are never handed out twice.
    pub fn from_parts(tasks: Vec<Task>, next_id: TaskId) -> Result<Self, QueueError<TaskId>> {
        let mut context = AppContext {
            queue: PriorityQueue::with_capacity(tasks.len()),
            next_id,
        };
        context.replace_all(tasks)?;
        Ok(context)
    }

    pub fn load(store: &mut Tasks) -> Result<Self> {
        let (tasks, next_id) = store.load_snapshot()?;
        Ok(Self::from_parts(tasks, next_id)?)
    }

    pub fn save(&self, store: &mut Tasks) -> Result<()> {
        store.save_snapshot(self.queue.as_slice(), self.next_id)
    }

    pub fn queue(&self) -> &PriorityQueue<Task> {
        &self.queue
    }

    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Assigns the next identifier to an already validated draft and queues
    /// the resulting task.
    pub fn add(&mut self, draft: TaskDraft, created_at: NaiveDateTime) -> Result<TaskId> {
        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or(QueueError::<TaskId>::IdsExhausted)?;
        let task = draft.into_task(id, created_at)?;
        self.next_id = next_id;
        self.queue.insert(task);

        debug!(id, "task added");
        Ok(id)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.queue.get(id)
    }

    /// Flips a task between pending and completed. Returns the new status.
    pub fn toggle_status(&mut self, id: TaskId) -> Option<TaskStatus> {
        let mut status = None;
        self.queue.modify(id, |task| {
            task.status = task.status.toggle();
            status = Some(task.status);
        });
        status
    }

    pub fn set_priority(&mut self, id: TaskId, priority: i64) -> bool {
        self.queue.update_priority(id, priority)
    }

    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        self.queue.remove_by_id(id)
    }

    /// The task at the head of the queue.
    pub fn next(&self) -> Option<&Task> {
        self.queue.peek()
    }

    /// Takes the task at the head of the queue off it.
    pub fn take_next(&mut self) -> Option<Task> {
        self.queue.remove()
    }

    /// Tasks in priority order that match `filter`.
    pub fn list(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.queue.sorted().into_iter().filter(|task| filter.matches(task)).collect()
    }

    /// Swaps in a new set of tasks, as done by import.
    ///
    /// Rejected when an id repeats or when no id would be left to assign
    /// after the largest one. The context is unchanged on error.
    pub fn replace_all(&mut self, tasks: Vec<Task>) -> Result<(), QueueError<TaskId>> {
        let max_id = tasks.iter().map(|task| task.id).max().unwrap_or(0);
        let next_id = max_id.checked_add(1).ok_or(QueueError::IdsExhausted)?;
        self.queue.load_from(tasks)?;
        self.next_id = self.next_id.max(next_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::{PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM};
    use chrono::NaiveDate;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2031, 2, 3).unwrap()
    }

    fn created() -> NaiveDateTime {
        due().and_hms_opt(8, 0, 0).unwrap()
    }

    fn add(context: &mut AppContext, title: &str, priority: i64) -> TaskId {
        context
            .add(TaskDraft::new(title, "", Some(due()), priority), created())
            .unwrap()
    }

    #[test]
    fn ids_are_assigned_in_sequence() {
        let mut context = AppContext::new();
        assert_eq!(add(&mut context, "first", PRIORITY_LOW), 1);
        assert_eq!(add(&mut context, "second", PRIORITY_LOW), 2);
        assert_eq!(context.next_id(), 3);

        context.delete(2);
        assert_eq!(add(&mut context, "third", PRIORITY_LOW), 3);
    }

    #[test]
    fn add_without_due_date_keeps_counter() {
        let mut context = AppContext::new();
        let result = context.add(TaskDraft::new("undated", "", None, PRIORITY_LOW), created());
        assert!(result.is_err());
        assert_eq!(context.next_id(), 1);
        assert!(context.is_empty());
    }

    #[test]
    fn toggle_and_priority_changes() {
        let mut context = AppContext::new();
        let a = add(&mut context, "a", PRIORITY_MEDIUM);
        let b = add(&mut context, "b", PRIORITY_LOW);

        assert_eq!(context.toggle_status(a), Some(TaskStatus::Completed));
        assert_eq!(context.toggle_status(a), Some(TaskStatus::Pending));
        assert_eq!(context.toggle_status(99), None);

        assert!(context.set_priority(b, PRIORITY_HIGH));
        assert_eq!(context.next().map(|t| t.id), Some(b));
        assert!(!context.set_priority(99, PRIORITY_HIGH));
    }

    #[test]
    fn list_filters_sorted_view() {
        let mut context = AppContext::new();
        add(&mut context, "Low chores", PRIORITY_LOW);
        let urgent = add(&mut context, "Urgent bug", PRIORITY_HIGH);
        add(&mut context, "Medium bug", PRIORITY_MEDIUM);
        context.toggle_status(urgent);

        let all: Vec<&str> = context.list(&TaskFilter::default()).iter().map(|t| t.title.as_str()).collect();
        assert_eq!(all, vec!["Urgent bug", "Medium bug", "Low chores"]);

        let open_bugs = TaskFilter {
            search: Some("BUG".into()),
            status: Some(TaskStatus::Pending),
            ..TaskFilter::default()
        };
        let titles: Vec<&str> = context.list(&open_bugs).iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Medium bug"]);
    }

    #[test]
    fn from_parts_bumps_counter_past_live_ids() {
        let tasks = vec![
            Task::new(4, "four", "", due(), PRIORITY_LOW),
            Task::new(12, "twelve", "", due(), PRIORITY_HIGH),
        ];
        let context = AppContext::from_parts(tasks, 5).unwrap();

        assert_eq!(context.next_id(), 13);
        assert_eq!(context.next().map(|t| t.id), Some(12));
        assert!(context.queue().is_valid_heap());
    }

    #[test]
    fn replace_all_rejects_duplicates_and_keeps_state() {
        let mut context = AppContext::new();
        add(&mut context, "kept", PRIORITY_MEDIUM);

        let duplicated = vec![
            Task::new(7, "x", "", due(), PRIORITY_LOW),
            Task::new(7, "y", "", due(), PRIORITY_LOW),
        ];
        assert_eq!(context.replace_all(duplicated), Err(QueueError::DuplicateId(7)));
        assert_eq!(context.len(), 1);
        assert_eq!(context.next_id(), 2);
    }

    #[test]
    fn replace_all_rejects_largest_possible_id() {
        let mut context = AppContext::new();
        add(&mut context, "kept", PRIORITY_MEDIUM);

        let edge = vec![Task::new(TaskId::MAX, "edge", "", due(), PRIORITY_HIGH)];
        assert_eq!(context.replace_all(edge), Err(QueueError::IdsExhausted));
        assert_eq!(context.len(), 1);
        assert_eq!(context.next_id(), 2);
        assert_eq!(context.next().map(|t| t.title.as_str()), Some("kept"));
    }

    #[test]
    fn add_stops_when_ids_run_out() {
        let mut context = AppContext::from_parts(Vec::new(), TaskId::MAX - 1).unwrap();
        assert_eq!(add(&mut context, "last one", PRIORITY_LOW), TaskId::MAX - 1);
        assert_eq!(context.next_id(), TaskId::MAX);

        let result = context.add(TaskDraft::new("too many", "", Some(due()), PRIORITY_LOW), created());
        assert!(result.is_err());
        assert_eq!(context.next_id(), TaskId::MAX);
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn take_next_drains_in_priority_order() {
        let mut context = AppContext::new();
        add(&mut context, "c", PRIORITY_LOW);
        add(&mut context, "a", PRIORITY_HIGH);
        add(&mut context, "b", PRIORITY_MEDIUM);

        let order: Vec<String> = std::iter::from_fn(|| context.take_next()).map(|t| t.title).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert!(context.next().is_none());
    }
}
