use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        context::AppContext,
        messages::Message,
        task::{parse_due_date, TaskDraft},
    },
    msg_success,
};
use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,

    /// Task description
    #[arg(short, long, default_value = "")]
    description: String,

    /// Due date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_due_date)]
    due: Option<NaiveDate>,

    /// Priority: 1 = high, 2 = medium, 3 = low (defaults to the configured value)
    #[arg(short, long)]
    priority: Option<i64>,
}

pub fn cmd(add_args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let now = Local::now();

    let draft = checked_draft(&add_args, &config, now.date_naive())?;

    let mut store = Tasks::new()?;
    let mut context = AppContext::load(&mut store)?;
    let id = context.add(draft, now.naive_local())?;
    context.save(&mut store)?;

    msg_success!(Message::TaskCreated(id, add_args.title.trim().to_string()));
    Ok(())
}

/// Builds the draft for `add_args` and checks it against the configured rules.
fn checked_draft(add_args: &AddArgs, config: &Config, today: NaiveDate) -> Result<TaskDraft> {
    let draft = TaskDraft::new(
        &add_args.title,
        &add_args.description,
        add_args.due,
        add_args.priority.unwrap_or(config.default_priority),
    );
    draft
        .validate(&config.validation, today)
        .map_err(|e| anyhow!(Message::TaskValidationFailed(e.to_string())))?;
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
    }

    fn args(title: &str, priority: Option<i64>) -> AddArgs {
        AddArgs {
            title: title.to_string(),
            description: String::new(),
            due: Some(today()),
            priority,
        }
    }

    #[test]
    fn rejected_draft_reports_reason_once() {
        let err = checked_draft(&args("ab", None), &Config::default(), today()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid task: Task title must be at least 3 characters long");
        assert!(!err.to_string().contains('❌'));
    }

    #[test]
    fn configured_priority_fills_the_gap() {
        let config = Config {
            default_priority: 3,
            ..Config::default()
        };
        assert_eq!(checked_draft(&args("Water plants", None), &config, today()).unwrap().priority, 3);
        assert_eq!(checked_draft(&args("Water plants", Some(1)), &config, today()).unwrap().priority, 1);
    }
}
