use super::Session;
use crate::{libs::messages::Message, msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: u32,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut session = Session::open()?;

    if session.store.delete(args.id) {
        session.save()?;
        msg_success!(Message::TaskDeleted(args.id));
    } else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
    }

    Ok(())
}
