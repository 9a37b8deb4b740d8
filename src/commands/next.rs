use crate::{
    db::tasks::Tasks,
    libs::{context::AppContext, messages::Message, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct NextArgs {
    /// Remove the task from the queue instead of only showing it
    #[arg(short, long)]
    take: bool,
}

pub fn cmd(next_args: NextArgs) -> Result<()> {
    let mut store = Tasks::new()?;
    let mut context = AppContext::load(&mut store)?;
    let today = Local::now().date_naive();

    if next_args.take {
        let Some(task) = context.take_next() else {
            msg_info!(Message::QueueEmpty);
            return Ok(());
        };
        context.save(&mut store)?;

        msg_success!(Message::TaskTaken(task.title.clone()));
        View::task(&task, today);
        return Ok(());
    }

    match context.next() {
        Some(task) => {
            msg_print!(Message::NextTaskHeader);
            View::task(task, today);
        }
        None => msg_info!(Message::QueueEmpty),
    }
    Ok(())
}
