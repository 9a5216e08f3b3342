use super::{list::render, Session};
use crate::libs::messages::Message;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in name, category, priority or status (case-insensitive)
    #[arg(default_value = "")]
    keyword: String,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    let session = Session::open()?;
    render(
        Message::SearchResultsHeader(args.keyword.clone()),
        Message::NoTasksMatching(args.keyword.clone()),
        session.store.search(&args.keyword),
    );
    Ok(())
}
