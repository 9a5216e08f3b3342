use super::Session;
use crate::{libs::messages::Message, msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// ID of the task to mark as completed
    id: u32,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut session = Session::open()?;

    if session.store.mark_completed(args.id) {
        session.save()?;
        msg_success!(Message::TaskCompleted(args.id));
    } else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
    }

    Ok(())
}
