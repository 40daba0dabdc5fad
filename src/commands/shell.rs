//! Interactive mode.
//!
//! Shows the auth screen until a login succeeds, then a menu over both
//! panels. Every action re-renders the screen so the lists always show the
//! result of the last load.

use crate::libs::{
    app::{App, Screen},
    config::Config,
    forms,
    messages::Message,
    view::View,
};
use crate::{msg_debug, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthAction {
    Submit(&'static str),
    Toggle(&'static str),
    Quit,
}

impl Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthAction::Submit(label) => write!(f, "{}", label),
            AuthAction::Toggle(label) => write!(f, "Switch to {}", label),
            AuthAction::Quit => write!(f, "Quit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppAction {
    FilterBooks,
    ClearBookFilters,
    AddBook,
    DeleteBook,
    FilterTasks,
    ClearTaskFilters,
    AddTask,
    CompleteTask,
    DeleteTask,
    Logout,
    Quit,
}

impl AppAction {
    const ALL: [AppAction; 11] = [
        AppAction::FilterBooks,
        AppAction::ClearBookFilters,
        AppAction::AddBook,
        AppAction::DeleteBook,
        AppAction::FilterTasks,
        AppAction::ClearTaskFilters,
        AppAction::AddTask,
        AppAction::CompleteTask,
        AppAction::DeleteTask,
        AppAction::Logout,
        AppAction::Quit,
    ];
}

impl Display for AppAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AppAction::FilterBooks => "Books: apply filters",
            AppAction::ClearBookFilters => "Books: clear filters",
            AppAction::AddBook => "Books: add",
            AppAction::DeleteBook => "Books: delete",
            AppAction::FilterTasks => "Tasks: apply filters",
            AppAction::ClearTaskFilters => "Tasks: clear filters",
            AppAction::AddTask => "Tasks: add",
            AppAction::CompleteTask => "Tasks: complete",
            AppAction::DeleteTask => "Tasks: delete",
            AppAction::Logout => "Logout",
            AppAction::Quit => "Quit",
        };
        f.write_str(label)
    }
}

fn choose<T: Display + Copy>(actions: &[T]) -> Result<T> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectAction.to_string())
        .items(actions)
        .default(0)
        .interact()?;
    Ok(actions[selection])
}

/// Handles one auth screen action. Returns `false` when the user quits.
async fn auth_screen(app: &mut App) -> Result<bool> {
    let mode = app.auth().mode();
    let actions = [
        AuthAction::Submit(mode.submit_label()),
        AuthAction::Toggle(mode.toggle_label()),
        AuthAction::Quit,
    ];

    match choose(&actions)? {
        AuthAction::Submit(_) => {
            let credentials = forms::credentials(None, None)?;
            app.submit_auth(&credentials).await;
        }
        AuthAction::Toggle(_) => app.toggle_auth_mode(),
        AuthAction::Quit => return Ok(false),
    }
    Ok(true)
}

/// Handles one app screen action. Returns `false` when the user quits.
async fn app_screen(app: &mut App) -> Result<bool> {
    match choose(&AppAction::ALL)? {
        AppAction::FilterBooks => {
            let filters = forms::book_filter(app.books().filters())?;
            app.set_book_filters(filters);
            app.apply_book_filters().await;
        }
        AppAction::ClearBookFilters => app.clear_book_filters().await,
        AppAction::AddBook => {
            let book = forms::new_book(None, None, None, None, None)?;
            if app.create_book(&book).await {
                msg_success!(Message::BookCreated);
            }
        }
        AppAction::DeleteBook => match forms::pick_book(app.books().items(), Message::SelectBookToDelete)? {
            Some(id) => {
                app.delete_book(id).await;
            }
            None => msg_info!(Message::NothingToSelect),
        },
        AppAction::FilterTasks => {
            let filters = forms::task_filter(app.tasks().filters())?;
            app.set_task_filters(filters);
            app.apply_task_filters().await;
        }
        AppAction::ClearTaskFilters => app.clear_task_filters().await,
        AppAction::AddTask => {
            let task = forms::new_task(None, None)?;
            if app.create_task(&task).await {
                msg_success!(Message::TaskCreated);
            }
        }
        AppAction::CompleteTask => match forms::pick_task(app.tasks().items(), Message::SelectTaskToComplete)? {
            Some(id) => {
                app.complete_task(id).await;
            }
            None => msg_info!(Message::NothingToSelect),
        },
        AppAction::DeleteTask => match forms::pick_task(app.tasks().items(), Message::SelectTaskToDelete)? {
            Some(id) => {
                app.delete_task(id).await;
            }
            None => msg_info!(Message::NothingToSelect),
        },
        AppAction::Logout => {
            app.logout()?;
            msg_success!(Message::LoggedOut);
        }
        AppAction::Quit => return Ok(false),
    }
    Ok(true)
}

pub async fn cmd() -> Result<()> {
    let mut app = App::from_config(&Config::read()?)?;
    app.start().await;

    loop {
        View::app(&app);
        msg_debug!(format!("screen: {:?}", app.screen()));
        let keep_going = match app.screen() {
            Screen::Auth => auth_screen(&mut app).await?,
            Screen::App => app_screen(&mut app).await?,
        };
        if !keep_going {
            break;
        }
    }

    msg_print!(Message::Goodbye);
    Ok(())
}
