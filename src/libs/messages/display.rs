//! Human-readable text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigApiUrl(url) => format!("API URL: {}", url),
            Message::InvalidApiUrl(url) => format!("Not an http(s) URL: '{}'", url),
            Message::PromptApiUrl => "Enter the books & tasks API URL".to_string(),

            // === AUTH MESSAGES ===
            Message::LoggedIn => "Logged in successfully".to_string(),
            Message::LoggedOut => "Logged out. Run `shelf login` to sign in again.".to_string(),
            Message::RegisteredPleaseLogIn => "Registered! Please log in.".to_string(),
            Message::NotLoggedIn => "You are not logged in. Run `shelf login` first.".to_string(),
            Message::SessionActive => "Session: logged in".to_string(),
            Message::SessionMissing => "Session: not logged in".to_string(),
            Message::PromptUsername => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),

            // === SERVER MESSAGES ===
            Message::ServerHealthy(message) => format!("Server is up: {}", message),
            Message::ServerUnreachable(error) => format!("Server check failed: {}", error),

            // === BOOK MESSAGES ===
            Message::BooksHeader => "Books".to_string(),
            Message::NoBooksFound => "No books found".to_string(),
            Message::BookCreated => "Book added".to_string(),
            Message::BookDeleted(id) => format!("Book {} deleted", id),
            Message::PromptBookName => "Book name".to_string(),
            Message::PromptBookAuthor => "Author".to_string(),
            Message::PromptBookPublisher => "Publisher".to_string(),
            Message::PromptBookPages => "Pages".to_string(),
            Message::PromptBookDescription => "Description (optional)".to_string(),
            Message::PromptNameFilter => "Filter by name".to_string(),
            Message::PromptAuthorFilter => "Filter by author".to_string(),
            Message::PromptPublisherFilter => "Filter by publisher".to_string(),
            Message::SelectBookToDelete => "Select a book to delete".to_string(),

            // === TASK MESSAGES ===
            Message::TasksHeader => "Tasks".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::TaskCreated => "Task added".to_string(),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTitleFilter => "Filter by title".to_string(),
            Message::PromptStatusFilter => "Filter by status".to_string(),
            Message::SelectTaskToDelete => "Select a task to delete".to_string(),
            Message::SelectTaskToComplete => "Select a task to complete".to_string(),

            // === FILTER MESSAGES ===
            Message::ActiveFilters(summary) => format!("Filters: {}", summary),
            Message::InvalidTaskStatus(value) => {
                format!("Unknown task status '{}', expected one of: all, true, false", value)
            }
            Message::InvalidSortOrder(value) => format!("Unknown sort order '{}', expected asc or desc", value),

            // === SHELL MESSAGES ===
            Message::SelectAction => "What would you like to do?".to_string(),
            Message::NothingToSelect => "Nothing to select".to_string(),
            Message::Goodbye => "Bye!".to_string(),
        };

        write!(f, "{}", text)
    }
}
