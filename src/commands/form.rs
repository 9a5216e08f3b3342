//! Interactive form: the same buttons as a desktop to-do window, driven by
//! terminal prompts. Every action calls exactly one store operation and
//! mutating actions write the task file back straight away.

use super::{add::add_task, edit::edit_task, export::default_export_path, list::render, Session};
use crate::{
    libs::{
        messages::{self, Message},
        task::{FieldUpdates, Priority, Status},
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Done,
    Delete,
    Edit,
    Search,
    ShowAll,
    AllCompleted,
    Save,
    Load,
    Quit,
}

impl Action {
    const ALL: [Action; 10] = [
        Action::Add,
        Action::Done,
        Action::Delete,
        Action::Edit,
        Action::Search,
        Action::ShowAll,
        Action::AllCompleted,
        Action::Save,
        Action::Load,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Add => "Add",
            Action::Done => "Done",
            Action::Delete => "Delete",
            Action::Edit => "Edit",
            Action::Search => "Search",
            Action::ShowAll => "Show All",
            Action::AllCompleted => "All completed",
            Action::Save => "Save to file",
            Action::Load => "Load from file",
            Action::Quit => "Quit",
        }
    }
}

pub fn cmd() -> Result<()> {
    let mut session = Session::open()?;
    msg_print!(Message::FormTitle, true);
    render(Message::TasksHeader, Message::NoTasksFound, session.store.get_all());

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[selection] {
            Action::Add => handle_add(&mut session)?,
            Action::Done => handle_done(&mut session)?,
            Action::Delete => handle_delete(&mut session)?,
            Action::Edit => handle_edit(&mut session)?,
            Action::Search => {
                let keyword: String = prompt(Message::PromptKeyword, true)?;
                render(
                    Message::SearchResultsHeader(keyword.clone()),
                    Message::NoTasksMatching(keyword.clone()),
                    session.store.search(&keyword),
                );
            }
            Action::ShowAll => render(Message::TasksHeader, Message::NoTasksFound, session.store.get_all()),
            Action::AllCompleted => render(Message::CompletedTasksHeader, Message::NoCompletedTasks, session.store.get_completed()),
            Action::Save => {
                let path: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptFilePath.to_string())
                    .default(default_export_path().display().to_string())
                    .interact_text()?;
                if session.store.export_to(&PathBuf::from(&path)) {
                    msg_success!(Message::ExportCompleted(path));
                }
            }
            Action::Load => {
                let path: String = prompt(Message::PromptFilePath, false)?;
                if session.store.import_from(&PathBuf::from(&path)) {
                    session.save()?;
                    msg_success!(Message::ImportCompleted(session.store.len(), path));
                    render(Message::TasksHeader, Message::NoTasksFound, session.store.get_all());
                }
            }
            Action::Quit => {
                msg_print!(Message::FormClosed);
                return Ok(());
            }
        }
    }
}

fn prompt(message: Message, allow_empty: bool) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(message.to_string())
        .allow_empty(allow_empty)
        .interact_text()?)
}

/// Reads a task id; `None` (already reported) when the text is not a number.
fn prompt_id() -> Result<Option<u32>> {
    let text = prompt(Message::PromptTaskId, false)?;
    match text.trim().parse::<u32>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            msg_error!(Message::InvalidTaskId(text));
            Ok(None)
        }
    }
}

fn select_priority(default: Priority) -> Result<Priority> {
    let labels: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&labels)
        .default(Priority::ALL.iter().position(|p| *p == default).unwrap_or(0))
        .interact()?;
    Ok(Priority::ALL[selection])
}

fn handle_add(session: &mut Session) -> Result<()> {
    let name = prompt(Message::PromptTaskName, true)?;
    let category: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .default(session.config.default_category.clone())
        .allow_empty(true)
        .interact_text()?;
    let priority = select_priority(session.config.default_priority)?;

    if let Some(id) = add_task(session, &name, &category, priority.as_str()) {
        session.save()?;
        msg_success!(Message::TaskCreated(id, name));
    }
    Ok(())
}

fn handle_done(session: &mut Session) -> Result<()> {
    let Some(id) = prompt_id()? else {
        return Ok(());
    };
    if session.store.mark_completed(id) {
        session.save()?;
        msg_success!(Message::TaskCompleted(id));
    } else {
        msg_error!(Message::TaskNotFoundWithId(id));
    }
    Ok(())
}

fn handle_delete(session: &mut Session) -> Result<()> {
    let Some(id) = prompt_id()? else {
        return Ok(());
    };
    let Some(task) = session.store.get(id) else {
        msg_error!(Message::TaskNotFoundWithId(id));
        return Ok(());
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(messages::warning(Message::ConfirmDeleteTask(task.name.clone())))
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if session.store.delete(id) {
        session.save()?;
        msg_success!(Message::TaskDeleted(id));
    }
    Ok(())
}

fn handle_edit(session: &mut Session) -> Result<()> {
    let Some(id) = prompt_id()? else {
        return Ok(());
    };
    let Some(task) = session.store.get(id).cloned() else {
        msg_error!(Message::TaskNotFoundWithId(id));
        return Ok(());
    };

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskName.to_string())
        .default(task.name.clone())
        .allow_empty(true)
        .interact_text()?;
    let category: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .default(task.category.clone())
        .allow_empty(true)
        .interact_text()?;
    let priority = select_priority(task.priority)?;
    let statuses: Vec<&str> = Status::ALL.iter().map(Status::as_str).collect();
    let status = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&statuses)
        .default(Status::ALL.iter().position(|s| *s == task.status).unwrap_or(0))
        .interact()?;

    // Only send fields that actually changed.
    let mut fields = FieldUpdates::new();
    if name != task.name {
        fields.insert("name", &name);
    }
    if category != task.category {
        fields.insert("category", &category);
    }
    if priority != task.priority {
        fields.insert("priority", priority.as_str());
    }
    if Status::ALL[status] != task.status {
        fields.insert("status", Status::ALL[status].as_str());
    }

    edit_task(session, id, &fields)
}
