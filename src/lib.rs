//! # taskheap
//!
//! A command-line task manager that keeps tasks ordered by priority in a
//! binary min-heap.
//!
//! ## Features
//!
//! - **Priority Queue**: insert, remove-min, peek, priority updates and
//!   removal by id, all keeping the heap valid
//! - **Task Management**: add, complete, reprioritize and delete tasks
//! - **Search & Filter**: by text, priority level and status
//! - **Persistence**: SQLite snapshot of the queue between sessions
//! - **Import / Export**: JSON dumps of the queue contents
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskheap::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
