use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        context::AppContext,
        messages::Message,
        task::{TaskFilter, TaskStatus},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only tasks whose title or description contains this text
    #[arg(short, long)]
    search: Option<String>,

    /// Only tasks with this priority
    #[arg(short, long, allow_hyphen_values = true)]
    priority: Option<i64>,

    /// Only tasks with this status (pending or completed)
    #[arg(long)]
    status: Option<TaskStatus>,
}

pub fn cmd(list_args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = Tasks::new()?;
    let context = AppContext::load(&mut store)?;

    let status = match list_args.status {
        Some(status) => Some(status),
        None if !config.show_completed => Some(TaskStatus::Pending),
        None => None,
    };
    let filter = TaskFilter {
        search: list_args.search,
        priority: list_args.priority,
        status,
    };

    let tasks = context.list(&filter);
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(tasks.len()), true);
    View::tasks(&tasks, Local::now().date_naive());
    Ok(())
}
