//! JSON export of the task queue.
//!
//! Tasks are written in the heap's internal array order, the same layout the
//! database snapshot uses, so an export can be imported back unchanged.

use crate::{
    db::tasks::Tasks,
    libs::{context::AppContext, messages::Message, task::Task},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file
    #[arg(required = true)]
    file: PathBuf,
}

pub fn cmd(export_args: ExportArgs) -> Result<()> {
    let mut store = Tasks::new()?;
    let context = AppContext::load(&mut store)?;

    let tasks = context.queue().as_slice();
    write_tasks(&export_args.file, tasks)?;

    msg_success!(Message::TasksExported(tasks.len(), export_args.file.display().to_string()));
    Ok(())
}

/// Writes tasks as a pretty-printed JSON array.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, tasks)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
