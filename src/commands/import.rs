use super::Session;
use crate::{libs::messages::Message, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file with columns id,name,category,priority,status
    path: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let mut session = Session::open()?;

    // A failed import has already been reported and leaves the task file alone.
    if session.store.import_from(&args.path) {
        session.save()?;
        if session.store.is_empty() {
            msg_warning!(Message::ImportedEmptyFile(args.path.display().to_string()));
            return Ok(());
        }
        msg_success!(Message::ImportCompleted(session.store.len(), args.path.display().to_string()));
    }

    Ok(())
}
