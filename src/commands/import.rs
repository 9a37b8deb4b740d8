use crate::{
    db::tasks::Tasks,
    libs::{context::AppContext, messages::Message, task::Task},
    msg_info, msg_success, msg_warning,
};
use anyhow::{anyhow, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file produced by `taskheap export`
    #[arg(required = true)]
    file: PathBuf,

    /// Replace stored tasks without asking
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(import_args: ImportArgs) -> Result<()> {
    let tasks = read_tasks(&import_args.file)?;
    if tasks.is_empty() {
        msg_warning!(Message::ImportFileEmpty(import_args.file.display().to_string()));
    }

    let mut store = Tasks::new()?;
    let mut context = AppContext::load(&mut store)?;

    if !import_args.yes && !context.is_empty() {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmImportReplace(context.len()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let count = tasks.len();
    replace_stored(&mut context, &mut store, tasks)?;

    msg_success!(Message::TasksImported(count));
    Ok(())
}

/// Reads a JSON array of tasks.
pub fn read_tasks(path: &Path) -> Result<Vec<Task>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Swaps `tasks` into the context and writes the result to `store`.
///
/// Rejected records leave both the context and the stored snapshot as they
/// were.
pub fn replace_stored(context: &mut AppContext, store: &mut Tasks, tasks: Vec<Task>) -> Result<()> {
    context
        .replace_all(tasks)
        .map_err(|e| anyhow!(Message::ImportFailed(e.to_string())))?;
    context.save(store)
}
