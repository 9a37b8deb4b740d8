use crate::{
    db::tasks::Tasks,
    libs::{
        context::AppContext,
        messages::Message,
        task::{TaskId, TaskStatus},
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ID
    #[arg(required = true)]
    id: TaskId,
}

pub fn cmd(done_args: DoneArgs) -> Result<()> {
    let mut store = Tasks::new()?;
    let mut context = AppContext::load(&mut store)?;

    let Some(status) = context.toggle_status(done_args.id) else {
        msg_error!(Message::TaskNotFoundWithId(done_args.id));
        return Ok(());
    };
    context.save(&mut store)?;

    let title = context.get(done_args.id).map(|task| task.title.clone()).unwrap_or_default();
    match status {
        TaskStatus::Completed => msg_success!(Message::TaskCompleted(title)),
        TaskStatus::Pending => msg_success!(Message::TaskReopened(title)),
    }
    Ok(())
}
