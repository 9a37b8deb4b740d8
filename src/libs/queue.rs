//! Binary min-heap priority queue over task records.
//!
//! The queue stores its records in a flat `Vec` laid out as an implicit
//! binary tree: the children of slot `i` live at `2i + 1` and `2i + 2`.
//! Every public call leaves the min-heap invariant in place:
//!
//! ```text
//! priority(parent(i)) <= priority(i)   for every i > 0
//! ```
//!
//! Lower numeric priority means higher precedence, so the root is always
//! the task to work on next.
//!
//! ## Operations
//!
//! - **Insert / remove / peek**: the classic O(log n) heap operations
//! - **Priority updates**: linear lookup by id, then a local sift in one
//!   direction only
//! - **Bulk operations**: `remove_by_id` patches the hole locally,
//!   `load_from` re-heapifies the whole array
//! - **Sorted view**: a stable, read-only projection by ascending priority
//!
//! Expected conditions never error: an empty queue yields `None` and an
//! unknown id yields `false`/`None`.
//!
//! ## Usage
//!
//! ```rust
//! use taskheap::libs::queue::PriorityQueue;
//! use taskheap::libs::task::Task;
//! use chrono::NaiveDate;
//!
//! let due = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
//! let mut queue = PriorityQueue::new();
//! queue.insert(Task::new(1, "Write docs", "", due, 2));
//! queue.insert(Task::new(2, "Fix outage", "", due, 1));
//!
//! assert_eq!(queue.peek().map(|t| t.id), Some(2));
//! assert!(queue.update_priority(1, 0));
//! assert_eq!(queue.remove().map(|t| t.id), Some(1));
//! ```

use super::error::QueueError;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::trace;

/// A record that can be ordered by the priority queue.
///
/// The queue only ever looks at the identifier and the priority; every other
/// field is payload it never inspects.
pub trait Prioritized {
    /// Identifier type used for lookups by `update_priority`, `modify` and
    /// `remove_by_id`.
    type Id: Copy + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;

    /// Ordering key. Lower values are served first.
    fn priority(&self) -> i64;

    fn set_priority(&mut self, priority: i64);
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Array-backed binary min-heap keyed on [`Prioritized::priority`].
///
/// The live count is the length of the backing vector, so the two can never
/// disagree. The backing storage is private: bulk replacement goes through
/// [`PriorityQueue::load_from`], which re-heapifies.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<T>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self { heap: Vec::new() }
    }
}

impl<T: Prioritized> PriorityQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Adds a record and restores the invariant by sifting it up.
    pub fn insert(&mut self, task: T) {
        trace!(id = ?task.id(), priority = task.priority(), "heap insert");
        self.heap.push(task);
        let last = self.heap.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns the record with the lowest priority value.
    ///
    /// Returns `None` on an empty queue. Among equal priorities the removal
    /// order follows the sift-down tie-break, which prefers the left child.
    pub fn remove(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        // swap_remove moves the last element into the root slot
        let task = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        trace!(id = ?task.id(), priority = task.priority(), "heap remove");
        Some(task)
    }

    /// Returns the root record without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Changes the priority of the first record whose id matches.
    ///
    /// Returns `false` without touching the queue when no record matches.
    /// Only the changed record is repaired: it moves up when the new value is
    /// strictly smaller than the old one and down otherwise.
    pub fn update_priority(&mut self, id: T::Id, new_priority: i64) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let old_priority = self.heap[index].priority();
        self.heap[index].set_priority(new_priority);
        self.repair(index, old_priority);

        trace!(?id, old_priority, new_priority, "heap priority update");
        true
    }

    /// Runs `edit` against the record with the given id and repairs the heap
    /// around it afterwards.
    ///
    /// Use this for in-place edits of payload fields. If the closure also
    /// changes the priority, the record is sifted the same way as in
    /// [`PriorityQueue::update_priority`].
    pub fn modify<F>(&mut self, id: T::Id, edit: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let Some(index) = self.position(id) else {
            return false;
        };

        let old_priority = self.heap[index].priority();
        edit(&mut self.heap[index]);
        self.repair(index, old_priority);
        true
    }

    /// Removes the record with the given id from anywhere in the heap.
    pub fn remove_by_id(&mut self, id: T::Id) -> Option<T> {
        let index = self.position(id)?;
        let task = self.heap.swap_remove(index);

        // The former last element now sits at `index` and may be out of
        // place in either direction.
        if index < self.heap.len() {
            let settled = self.sift_up(index);
            if settled == index {
                self.sift_down(index);
            }
        }

        trace!(?id, "heap remove by id");
        Some(task)
    }

    /// Replaces the whole contents and rebuilds the heap bottom-up.
    ///
    /// The records may arrive in any order. Identifiers must be unique; on a
    /// duplicate the queue is left exactly as it was.
    pub fn load_from(&mut self, records: Vec<T>) -> Result<(), QueueError<T::Id>> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(QueueError::DuplicateId(record.id()));
            }
        }

        self.heap = records;
        self.heapify();

        trace!(len = self.heap.len(), "heap reloaded");
        Ok(())
    }

    /// Returns every live record ordered by ascending priority.
    ///
    /// The sort is stable, so equal priorities keep their internal array
    /// order. The heap itself is not touched.
    pub fn sorted(&self) -> Vec<&T> {
        let mut tasks: Vec<&T> = self.heap.iter().collect();
        tasks.sort_by_key(|task| task.priority());
        tasks
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.heap.iter().find(|task| task.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.position(id).is_some()
    }

    /// Iterates in internal (heap) order, not priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Internal array in heap order. This is the persistence layout.
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    /// Checks the min-heap invariant over the whole array.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[parent(i)].priority() <= self.heap[i].priority())
    }

    fn position(&self, id: T::Id) -> Option<usize> {
        self.heap.iter().position(|task| task.id() == id)
    }

    fn repair(&mut self, index: usize, old_priority: i64) {
        if self.heap[index].priority() < old_priority {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
    }

    fn heapify(&mut self) {
        for index in (0..self.heap.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Moves the element at `index` toward the root while it is strictly
    /// smaller than its parent. Returns the slot it settled in.
    fn sift_up(&mut self, index: usize) -> usize {
        let mut current = index;
        while current > 0 {
            let parent = parent(current);
            if self.heap[current].priority() >= self.heap[parent].priority() {
                break;
            }
            self.heap.swap(current, parent);
            current = parent;
        }
        current
    }

    /// Moves the element at `index` toward the leaves, always following the
    /// smaller child. On a tie between the children the left one wins.
    fn sift_down(&mut self, index: usize) {
        let len = self.heap.len();
        let mut current = index;

        loop {
            let left = left_child(current);
            let right = right_child(current);
            let mut smallest = current;

            if left < len && self.heap[left].priority() < self.heap[smallest].priority() {
                smallest = left;
            }
            if right < len && self.heap[right].priority() < self.heap[smallest].priority() {
                smallest = right;
            }
            if smallest == current {
                break;
            }

            self.heap.swap(current, smallest);
            current = smallest;
        }
    }
}

impl<T: Prioritized> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = PriorityQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Prioritized> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for task in iter {
            self.insert(task);
        }
    }
}
