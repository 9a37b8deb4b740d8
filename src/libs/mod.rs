//! Core library modules for taskheap.
//!
//! - **queue**: the binary min-heap every task lives in
//! - **task**: task records, drafts, validation and filters
//! - **context**: the owning context object (queue + id counter)
//! - **config**, **data_storage**: settings and on-disk locations
//! - **messages**, **formatter**, **view**: user-facing output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskheap::db::tasks::Tasks;
//! use taskheap::libs::context::AppContext;
//! use taskheap::libs::task::TaskFilter;
//!
//! let mut store = Tasks::new()?;
//! let context = AppContext::load(&mut store)?;
//! for task in context.list(&TaskFilter::default()) {
//!     println!("{} {}", task.id, task.title);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod context;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod queue;
pub mod task;
pub mod view;
