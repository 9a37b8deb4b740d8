pub mod add;
pub mod delete;
pub mod done;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod next;
pub mod priority;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "List tasks in priority order")]
    List(list::ListArgs),
    #[command(about = "Show the highest priority task")]
    Next(next::NextArgs),
    #[command(about = "Toggle a task between pending and completed", arg_required_else_help = true)]
    Done(done::DoneArgs),
    #[command(about = "Change the priority of a task", arg_required_else_help = true)]
    Priority(priority::PriorityArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Export tasks to a JSON file", arg_required_else_help = true)]
    Export(export::ExportArgs),
    #[command(about = "Replace all tasks with the contents of a JSON file", arg_required_else_help = true)]
    Import(import::ImportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Next(args) => next::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Priority(args) => priority::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
        }
    }
}
