use super::filter::{push_text, Ordering, QueryFilter};
use crate::libs::messages::Message;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A task as returned by the server.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Description to display; empty strings count as absent.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Label of the completion action for this task.
    pub fn action_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Complete"
        }
    }
}

/// Task payload for `POST /tasks/`. New tasks always start open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
}

impl NewTask {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description.to_string()).filter(|d| !d.is_empty()),
            completed: false,
        }
    }
}

/// Tri-state status selector of the task filter form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskStatus {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::All, TaskStatus::Completed, TaskStatus::Incomplete];

    /// Value of the `completed` query parameter, `None` for [`TaskStatus::All`].
    pub fn completed(&self) -> Option<bool> {
        match self {
            TaskStatus::All => None,
            TaskStatus::Completed => Some(true),
            TaskStatus::Incomplete => Some(false),
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::All => "all",
            TaskStatus::Completed => "completed",
            TaskStatus::Incomplete => "incomplete",
        };
        f.write_str(label)
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" | "any" => Ok(TaskStatus::All),
            "true" | "completed" | "done" => Ok(TaskStatus::Completed),
            "false" | "incomplete" | "open" => Ok(TaskStatus::Incomplete),
            other => Err(Message::InvalidTaskStatus(other.to_string()).to_string()),
        }
    }
}

/// Task panel filter form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub title: Option<String>,
    pub status: TaskStatus,
    pub ordering: Ordering,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl TaskFilter {
    pub fn with_status(status: TaskStatus) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }
}

impl QueryFilter for TaskFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "title", &self.title);
        if let Some(completed) = self.status.completed() {
            pairs.push(("completed", completed.to_string()));
        }
        self.ordering.push_pairs(&mut pairs);
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

