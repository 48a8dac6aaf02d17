use crate::db::tags::Tag;
use crate::libs::error::Error;
use crate::libs::messages::Message;
use crate::libs::service::{TagService, TaskService};
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TagArgs {
    #[command(subcommand)]
    command: TagCommand,
}

#[derive(Debug, Subcommand)]
enum TagCommand {
    /// Create a new tag
    Create {
        /// Tag name
        name: String,
        /// Hex color code, e.g. #ff0000
        #[arg(short, long)]
        color: Option<String>,
    },
    /// List all tags
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete a tag, detaching it from every task
    Delete {
        /// Tag name or id
        tag: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show tasks carrying a specific tag
    Tasks {
        /// Tag name or id
        tag: String,
    },
}

pub fn cmd(args: TagArgs) -> Result<()> {
    match args.command {
        TagCommand::Create { name, color } => handle_create(name, color),
        TagCommand::List { json } => handle_list(json),
        TagCommand::Delete { tag, yes } => handle_delete(tag, yes),
        TagCommand::Tasks { tag } => handle_show_tasks(tag),
    }
}

fn handle_create(name: String, color: Option<String>) -> Result<()> {
    let mut service = TagService::new()?;

    match service.create(&name, color.as_deref()) {
        Ok(tag) => {
            msg_success!(Message::TagCreated(tag.name));
            Ok(())
        }
        Err(Error::TagExists(name)) => {
            msg_error!(Message::TagAlreadyExists(name));
            Ok(())
        }
        Err(Error::Validation(reason)) => {
            msg_error!(Message::ValidationFailed(reason));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_list(json: bool) -> Result<()> {
    let mut service = TagService::new()?;
    let tags = service.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        msg_info!(Message::NoTagsFound);
        return Ok(());
    }

    msg_print!(Message::TagsHeader, true);
    View::tags(&tags);
    Ok(())
}

fn handle_delete(tag_identifier: String, yes: bool) -> Result<()> {
    let mut service = TagService::new()?;

    let tag = match find_tag(&mut service, &tag_identifier)? {
        Some(tag) => tag,
        None => {
            msg_error!(Message::TagNotFound(tag_identifier));
            return Ok(());
        }
    };

    // A tag in use gets a more explicit confirmation
    let task_count = service.tasks_with_tag(tag.id)?.len();
    let prompt = if task_count > 0 {
        Message::ConfirmDeleteTagWithTasks(tag.name.clone(), task_count)
    } else {
        Message::ConfirmDeleteTag(tag.name.clone())
    };

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .default(false)
            .interact()?;

    if confirmed {
        service.delete(tag.id)?;
        msg_success!(Message::TagDeleted(tag.name));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_show_tasks(tag_identifier: String) -> Result<()> {
    let mut service = TagService::new()?;

    let tag = match find_tag(&mut service, &tag_identifier)? {
        Some(tag) => tag,
        None => {
            msg_error!(Message::TagNotFound(tag_identifier));
            return Ok(());
        }
    };

    let filter = TaskFilter {
        tag_id: Some(tag.id),
        ..Default::default()
    };
    let tasks = TaskService::new()?.list(&filter)?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksWithTag(tag.name));
        return Ok(());
    }

    msg_print!(Message::TasksWithTag(tag.name), true);
    View::tasks(&tasks);
    Ok(())
}

/// Resolves a CLI tag argument as an id when numeric, a name otherwise.
fn find_tag(service: &mut TagService, identifier: &str) -> Result<Option<Tag>> {
    let tag = if let Ok(id) = identifier.parse::<i64>() {
        service.get_by_id(id)?
    } else {
        service.get_by_name(identifier)?
    };
    Ok(tag)
}
