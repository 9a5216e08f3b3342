use super::Session;
use crate::{
    libs::{
        messages::Message,
        task::{FieldUpdates, TaskUpdate},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    id: u32,
    /// New name
    #[arg(long)]
    name: Option<String>,
    /// New category
    #[arg(long)]
    category: Option<String>,
    /// New priority: Low, Medium or High
    #[arg(long)]
    priority: Option<String>,
    /// New status: Pending or Completed
    #[arg(long)]
    status: Option<String>,
    /// Extra `field=value` pairs; unknown fields are ignored
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_field)]
    set: Vec<(String, String)>,
}

fn parse_field(pair: &str) -> Result<(String, String), String> {
    FieldUpdates::parse_pair(pair).ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", pair))
}

impl EditArgs {
    fn fields(&self) -> FieldUpdates {
        let mut fields: FieldUpdates = self.set.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let named = [("name", &self.name), ("category", &self.category), ("priority", &self.priority), ("status", &self.status)];
        for (key, value) in named {
            if let Some(value) = value {
                fields.insert(key, value);
            }
        }
        fields
    }
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut session = Session::open()?;
    edit_task(&mut session, args.id, &args.fields())
}

/// Validates raw input and applies it to task `id`, saving on success.
pub(crate) fn edit_task(session: &mut Session, id: u32, fields: &FieldUpdates) -> Result<()> {
    if !session.store.validate(fields) {
        return Ok(());
    }
    let update = TaskUpdate::try_from(fields)?;

    if !session.store.edit(id, &update) {
        msg_error!(Message::TaskNotFoundWithId(id));
        return Ok(());
    }
    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    session.save()?;
    msg_success!(Message::TaskUpdated(id));
    if let Some(task) = session.store.get(id) {
        msg_print!(Message::TaskEditPreview);
        View::tasks([task]);
    }
    Ok(())
}
