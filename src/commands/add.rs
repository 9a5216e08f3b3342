use super::Session;
use crate::{
    libs::{
        messages::Message,
        task::{FieldUpdates, TaskUpdate},
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name
    #[arg(required = true)]
    name: String,
    /// Category, e.g. Work or Personal
    #[arg(short, long)]
    category: Option<String>,
    /// Low, Medium or High
    #[arg(short, long)]
    priority: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut session = Session::open()?;

    let category = args.category.unwrap_or_else(|| session.config.default_category.clone());
    let priority = args.priority.unwrap_or_else(|| session.config.default_priority.to_string());

    if let Some(id) = add_task(&mut session, &args.name, &category, &priority) {
        session.save()?;
        msg_success!(Message::TaskCreated(id, args.name));
    }

    Ok(())
}

/// Validates raw input and adds the task; `None` when validation failed or
/// no id is left.
pub(crate) fn add_task(session: &mut Session, name: &str, category: &str, priority: &str) -> Option<u32> {
    let fields = FieldUpdates::new().set("name", name).set("category", category).set("priority", priority);
    if !session.store.validate(&fields) {
        return None;
    }
    let priority = TaskUpdate::try_from(&fields).ok()?.priority?;
    session.store.add(name, category, priority).map(|task| task.id)
}
