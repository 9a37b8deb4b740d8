//! SQLite persistence for taskheap.
//!
//! The database holds a snapshot of the task queue: every task in the order
//! of the heap's internal array, plus the next identifier to assign. Schema
//! changes go through the versioned migrations in [`migrations`].
//!
//! ```rust,no_run
//! use taskheap::db::tasks::Tasks;
//!
//! let mut store = Tasks::new()?;
//! let (tasks, next_id) = store.load_snapshot()?;
//! store.save_snapshot(&tasks, next_id)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management. Opening a connection also applies pending
/// migrations.
pub mod db;

/// Versioned schema migrations and their tracking table.
pub mod migrations;

/// Snapshot load/save for the task queue.
pub mod tasks;
