use crate::{
    db::tasks::Tasks,
    libs::{context::AppContext, messages::Message, task::TaskId},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PriorityArgs {
    /// Task ID
    #[arg(required = true)]
    id: TaskId,

    /// New priority; lower values are served first
    #[arg(required = true, allow_hyphen_values = true)]
    priority: i64,
}

pub fn cmd(priority_args: PriorityArgs) -> Result<()> {
    let mut store = Tasks::new()?;
    let mut context = AppContext::load(&mut store)?;

    if !context.set_priority(priority_args.id, priority_args.priority) {
        msg_error!(Message::TaskNotFoundWithId(priority_args.id));
        return Ok(());
    }
    context.save(&mut store)?;

    msg_success!(Message::TaskPriorityChanged(priority_args.id, priority_args.priority));
    Ok(())
}
