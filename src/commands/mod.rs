//! Command-line interface.
//!
//! Each subcommand opens the working task file through a [`Session`], calls
//! one [`TaskStore`](crate::libs::store::TaskStore) operation, renders the
//! result and writes the file back when the collection changed.

pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod export;
pub mod form;
pub mod import;
pub mod init;
pub mod list;
pub mod search;
pub mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use session::Session;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Delete a task by ID")]
    Delete(delete::DeleteArgs),
    #[command(about = "Mark a task as completed")]
    Done(done::DoneArgs),
    #[command(about = "Edit fields of a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Show tasks")]
    List(list::ListArgs),
    #[command(about = "Search tasks by keyword")]
    Search(search::SearchArgs),
    #[command(about = "Export tasks to a CSV file")]
    Export(export::ExportArgs),
    #[command(about = "Replace tasks with the contents of a CSV file")]
    Import(import::ImportArgs),
    #[command(about = "Interactive task form")]
    Form,
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
            Commands::Delete(args) => delete::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Search(args) => search::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Form => form::cmd(),
        }
    }
}
