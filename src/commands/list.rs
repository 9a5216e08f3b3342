use super::Session;
use crate::{
    libs::{messages::Message, task::Task, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show completed tasks only
    #[arg(short, long)]
    completed: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let session = Session::open()?;

    if args.completed {
        render(Message::CompletedTasksHeader, Message::NoCompletedTasks, session.store.get_completed());
    } else {
        render(Message::TasksHeader, Message::NoTasksFound, session.store.get_all());
    }

    Ok(())
}

/// Prints `header` and a task table, or `empty` when there is nothing to show.
pub(crate) fn render<'a, I>(header: Message, empty: Message, tasks: I)
where
    I: IntoIterator<Item = &'a Task>,
{
    let tasks: Vec<&Task> = tasks.into_iter().collect();
    if tasks.is_empty() {
        msg_info!(empty);
        return;
    }
    msg_print!(header, true);
    View::tasks(tasks);
}
