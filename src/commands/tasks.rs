use crate::libs::{
    app::{App, Screen},
    config::Config,
    filter::{Ordering, SortOrder},
    forms,
    messages::Message,
    task::{TaskFilter, TaskStatus},
    view::View,
};
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TasksArgs {
    #[command(subcommand)]
    command: Option<TasksCommand>,
}

/// Filter form of the tasks panel. The list shown after any action uses it.
#[derive(Debug, Clone, Default, Args)]
pub struct TaskFilterArgs {
    /// Only tasks whose title contains this text
    #[arg(long)]
    title: Option<String>,
    /// all, true (completed) or false (incomplete)
    #[arg(long, default_value = "all")]
    status: TaskStatus,
    /// Field the server sorts by
    #[arg(long)]
    sort_by: Option<String>,
    /// asc or desc
    #[arg(long)]
    sort_order: Option<SortOrder>,
    /// Number of tasks to skip
    #[arg(long)]
    skip: Option<u32>,
    /// Maximum number of tasks to return
    #[arg(long)]
    limit: Option<u32>,
}

impl From<TaskFilterArgs> for TaskFilter {
    fn from(args: TaskFilterArgs) -> Self {
        TaskFilter {
            title: args.title,
            status: args.status,
            ordering: Ordering {
                sort_by: args.sort_by,
                sort_order: args.sort_order,
            },
            skip: args.skip,
            limit: args.limit,
        }
    }
}

#[derive(Debug, Subcommand)]
enum TasksCommand {
    /// List tasks
    List {
        #[command(flatten)]
        filter: TaskFilterArgs,
    },
    /// Add a task; the title is prompted when omitted
    Add {
        /// Task title
        #[arg(value_name = "TITLE")]
        task_title: Option<String>,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
        #[command(flatten)]
        filter: TaskFilterArgs,
    },
    /// Mark a task completed; without an ID pick from the list
    Complete {
        id: Option<i64>,
        #[command(flatten)]
        filter: TaskFilterArgs,
    },
    /// Delete a task; without an ID pick from the list
    Delete {
        id: Option<i64>,
        #[command(flatten)]
        filter: TaskFilterArgs,
    },
}

/// Loads the filtered list and lets the user pick a task when no ID was given.
async fn resolve_id(app: &mut App, id: Option<i64>, prompt: Message) -> Result<Option<i64>> {
    if id.is_some() {
        return Ok(id);
    }
    app.apply_task_filters().await;
    let picked = forms::pick_task(app.tasks().items(), prompt)?;
    if picked.is_none() {
        msg_info!(Message::NothingToSelect);
    }
    Ok(picked)
}

pub async fn cmd(args: TasksArgs) -> Result<()> {
    let mut app = App::from_config(&Config::read()?)?;
    if app.restore() == Screen::Auth {
        msg_error!(Message::NotLoggedIn);
        return Ok(());
    }

    let command = args.command.unwrap_or(TasksCommand::List {
        filter: TaskFilterArgs::default(),
    });
    match command {
        TasksCommand::List { filter } => {
            app.set_task_filters(filter.into());
            app.apply_task_filters().await;
        }
        TasksCommand::Add {
            task_title,
            description,
            filter,
        } => {
            app.set_task_filters(filter.into());
            let task = forms::new_task(task_title, description)?;
            if app.create_task(&task).await {
                msg_success!(Message::TaskCreated);
            }
        }
        TasksCommand::Complete { id, filter } => {
            app.set_task_filters(filter.into());
            if let Some(id) = resolve_id(&mut app, id, Message::SelectTaskToComplete).await? {
                if app.complete_task(id).await {
                    msg_success!(Message::TaskCompleted(id));
                }
            }
        }
        TasksCommand::Delete { id, filter } => {
            app.set_task_filters(filter.into());
            if let Some(id) = resolve_id(&mut app, id, Message::SelectTaskToDelete).await? {
                if app.delete_task(id).await {
                    msg_success!(Message::TaskDeleted(id));
                }
            }
        }
    }

    View::tasks(app.tasks());
    Ok(())
}
