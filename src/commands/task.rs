use crate::libs::error::Error;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::libs::task::{NewTask, Priority, TaskFilter, TaskUpdate};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Longer free-form description
        #[arg(short, long)]
        description: Option<String>,
        /// Due date
        #[arg(long, value_name = "YYYY-MM-DD")]
        due: Option<NaiveDate>,
        /// Task priority
        #[arg(short, long, value_enum, default_value_t)]
        priority: Priority,
        /// Tag ids to attach (repeatable); unknown ids are skipped
        #[arg(long = "tag", value_name = "TAG_ID")]
        tags: Vec<i64>,
    },
    /// List tasks, optionally filtered
    List {
        /// Only completed tasks
        #[arg(long, conflicts_with = "pending")]
        completed: bool,
        /// Only open tasks
        #[arg(long)]
        pending: bool,
        /// Only tasks with this priority
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
        /// Only tasks carrying this tag id
        #[arg(long = "tag", value_name = "TAG_ID")]
        tag: Option<i64>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Edit fields of an existing task
    Edit {
        /// Task id
        id: i64,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,
        /// Remove the description
        #[arg(long)]
        clear_description: bool,
        /// New due date
        #[arg(long, value_name = "YYYY-MM-DD", conflicts_with = "clear_due")]
        due: Option<NaiveDate>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
        /// New priority
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Replace the tag set with these ids (empty list clears all tags)
        #[arg(long = "tags", value_delimiter = ',', num_args = 0.., value_name = "TAG_IDS")]
        tags: Option<Vec<i64>>,
    },
    /// Mark a task as completed
    Done {
        /// Task id
        id: i64,
    },
    /// Reopen a completed task
    Reopen {
        /// Task id
        id: i64,
    },
    /// Delete a task
    Delete {
        /// Task id
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Add {
            title,
            description,
            due,
            priority,
            tags,
        } => handle_add(title, description, due, priority, tags),
        TaskCommand::List {
            completed,
            pending,
            priority,
            tag,
            json,
        } => handle_list(completed, pending, priority, tag, json),
        TaskCommand::Edit {
            id,
            title,
            description,
            clear_description,
            due,
            clear_due,
            priority,
            tags,
        } => {
            let update = TaskUpdate {
                title,
                description: if clear_description { Some(None) } else { description.map(Some) },
                due_date: if clear_due { Some(None) } else { due.map(Some) },
                priority,
                completed: None,
                tag_ids: tags,
            };
            handle_update(id, update)
        }
        TaskCommand::Done { id } => handle_update(
            id,
            TaskUpdate {
                completed: Some(true),
                ..Default::default()
            },
        ),
        TaskCommand::Reopen { id } => handle_update(
            id,
            TaskUpdate {
                completed: Some(false),
                ..Default::default()
            },
        ),
        TaskCommand::Delete { id, yes } => handle_delete(id, yes),
    }
}

fn handle_add(title: String, description: Option<String>, due: Option<NaiveDate>, priority: Priority, tags: Vec<i64>) -> Result<()> {
    let mut service = TaskService::new()?;
    let new = NewTask {
        title,
        description,
        due_date: due,
        priority,
        tag_ids: tags,
    };

    match service.create(&new) {
        Ok(task) => {
            msg_success!(Message::TaskCreated(task.id));
            View::tasks(std::slice::from_ref(&task));
            Ok(())
        }
        Err(Error::Validation(reason)) => {
            msg_error!(Message::ValidationFailed(reason));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_list(completed: bool, pending: bool, priority: Option<Priority>, tag: Option<i64>, json: bool) -> Result<()> {
    let mut service = TaskService::new()?;
    let filter = TaskFilter {
        completed: if completed {
            Some(true)
        } else if pending {
            Some(false)
        } else {
            None
        },
        priority,
        tag_id: tag,
    };

    let tasks = service.list(&filter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks);
    Ok(())
}

fn handle_update(id: i64, update: TaskUpdate) -> Result<()> {
    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let mut service = TaskService::new()?;
    match service.update(id, &update) {
        Ok(task) => {
            msg_success!(Message::TaskUpdated(task.id));
            View::tasks(std::slice::from_ref(&task));
            Ok(())
        }
        Err(Error::TaskNotFound(id)) => {
            msg_error!(Message::TaskNotFound(id));
            Ok(())
        }
        Err(Error::Validation(reason)) => {
            msg_error!(Message::ValidationFailed(reason));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_delete(id: i64, yes: bool) -> Result<()> {
    let mut service = TaskService::new()?;

    let task = match service.get(id) {
        Ok(task) => task,
        Err(Error::TaskNotFound(id)) => {
            msg_error!(Message::TaskNotFound(id));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        service.delete(id)?;
        msg_success!(Message::TaskDeleted(id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}
