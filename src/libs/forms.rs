//! Interactive prompts standing in for the page's input forms.

use super::book::{Book, BookFilter, NewBook};
use super::messages::Message;
use super::task::{NewTask, Task, TaskFilter, TaskStatus};
use crate::api::auth::Credentials;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

fn text(prompt: Message, initial: &str, allow_empty: bool) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .with_initial_text(initial)
        .allow_empty(allow_empty)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn required(value: Option<String>, prompt: Message) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => text(prompt, "", false),
    }
}

fn optional(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

/// Fills in whichever credential was not given on the command line.
pub fn credentials(username: Option<String>, password: Option<String>) -> Result<Credentials> {
    let username = required(username, Message::PromptUsername)?;
    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPassword.to_string())
            .interact()?,
    };
    Ok(Credentials { username, password })
}

/// Book form. Fields given on the command line are used as-is; the rest are
/// prompted. The optional description is only asked for when some required
/// field had to be prompted.
pub fn new_book(
    book_name: Option<String>,
    author: Option<String>,
    publisher: Option<String>,
    pages: Option<i32>,
    description: Option<String>,
) -> Result<NewBook> {
    let interactive = book_name.is_none() || author.is_none() || publisher.is_none() || pages.is_none();

    let book_name = required(book_name, Message::PromptBookName)?;
    let author = required(author, Message::PromptBookAuthor)?;
    let publisher = required(publisher, Message::PromptBookPublisher)?;
    let pages = match pages {
        Some(pages) => pages,
        None => Input::<i32>::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBookPages.to_string())
            .default(0)
            .interact_text()?,
    };
    let description = match description {
        Some(description) => description,
        None if interactive => text(Message::PromptBookDescription, "", true)?,
        None => String::new(),
    };

    Ok(NewBook::new(&book_name, &author, &publisher, pages, &description))
}

/// Task form, with the same prompting rules as [`new_book`].
pub fn new_task(title: Option<String>, description: Option<String>) -> Result<NewTask> {
    let interactive = title.is_none();

    let title = required(title, Message::PromptTaskTitle)?;
    let description = match description {
        Some(description) => description,
        None if interactive => text(Message::PromptTaskDescription, "", true)?,
        None => String::new(),
    };

    Ok(NewTask::new(&title, &description))
}

/// Edits the book filter form, starting from its current values.
pub fn book_filter(current: &BookFilter) -> Result<BookFilter> {
    Ok(BookFilter {
        name: optional(text(Message::PromptNameFilter, current.name.as_deref().unwrap_or(""), true)?),
        author: optional(text(Message::PromptAuthorFilter, current.author.as_deref().unwrap_or(""), true)?),
        publisher: optional(text(
            Message::PromptPublisherFilter,
            current.publisher.as_deref().unwrap_or(""),
            true,
        )?),
        ordering: current.ordering.clone(),
    })
}

/// Edits the task filter form, starting from its current values.
pub fn task_filter(current: &TaskFilter) -> Result<TaskFilter> {
    let title = optional(text(Message::PromptTitleFilter, current.title.as_deref().unwrap_or(""), true)?);
    let selected = TaskStatus::ALL.iter().position(|s| *s == current.status).unwrap_or(0);
    let status = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptStatusFilter.to_string())
        .items(&TaskStatus::ALL)
        .default(selected)
        .interact()?;

    Ok(TaskFilter {
        title,
        status: TaskStatus::ALL[status],
        ..current.clone()
    })
}

fn pick(prompt: Message, labels: &[String]) -> Result<Option<usize>> {
    if labels.is_empty() {
        return Ok(None);
    }
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(labels)
        .default(0)
        .interact_opt()?)
}

/// Lets the user pick one of the listed books; `None` if cancelled or empty.
pub fn pick_book(books: &[Book], prompt: Message) -> Result<Option<i64>> {
    let labels: Vec<String> = books.iter().map(|b| format!("#{} {} by {}", b.id, b.book_name, b.author)).collect();
    Ok(pick(prompt, &labels)?.map(|i| books[i].id))
}

/// Lets the user pick one of the listed tasks; `None` if cancelled or empty.
pub fn pick_task(tasks: &[Task], prompt: Message) -> Result<Option<i64>> {
    let labels: Vec<String> = tasks.iter().map(|t| format!("#{} {} [{}]", t.id, t.title, t.action_label())).collect();
    Ok(pick(prompt, &labels)?.map(|i| tasks[i].id))
}
