use crate::{
    db::tasks::Tasks,
    libs::{context::AppContext, messages::Message, task::TaskId},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    #[arg(required = true)]
    id: TaskId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(delete_args: DeleteArgs) -> Result<()> {
    let mut store = Tasks::new()?;
    let mut context = AppContext::load(&mut store)?;

    let Some(title) = context.get(delete_args.id).map(|task| task.title.clone()) else {
        msg_error!(Message::TaskNotFoundWithId(delete_args.id));
        return Ok(());
    };

    if !delete_args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    context.delete(delete_args.id);
    context.save(&mut store)?;

    msg_success!(Message::TaskDeleted(title));
    Ok(())
}
