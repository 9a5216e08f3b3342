use super::Session;
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file; defaults to todo_export_<timestamp>.csv in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let session = Session::open()?;
    let output = args.output.unwrap_or_else(default_export_path);

    if session.store.export_to(&output) {
        msg_success!(Message::ExportCompleted(output.display().to_string()));
    }

    Ok(())
}

/// `todo_export_YYYYMMDD_HHMMSS.csv`, unique per second.
pub fn default_export_path() -> PathBuf {
    PathBuf::from(format!("todo_export_{}.csv", Local::now().format("%Y%m%d_%H%M%S")))
}
