use super::app::{App, Screen};
use super::auth::{AuthForm, AuthNotice};
use super::book::Book;
use super::filter::QueryFilter;
use super::messages::Message;
use super::panel::{Panel, Resource};
use super::task::Task;
use crate::api::{Books, Tasks};
use crate::{msg_error, msg_info, msg_print};
use prettytable::{row, Cell, Row, Table};

/// Terminal rendering of the view model.
///
/// The `*_table` builders are pure so they can be inspected in tests; the
/// other functions print.
pub struct View {}

impl View {
    pub fn books_table(books: &[Book]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "AUTHOR", "PUBLISHER", "PAGES", "DESCRIPTION"]);
        for book in books {
            table.add_row(row![
                book.id,
                book.book_name,
                book.author,
                book.publisher,
                book.pages,
                book.description().unwrap_or("")
            ]);
        }

        table
    }

    pub fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "STATUS"]);
        for task in tasks {
            let status = Cell::new(task.action_label());
            let status = if task.completed { status.style_spec("Fg") } else { status };
            table.add_row(Row::new(vec![
                Cell::new(&task.id.to_string()),
                Cell::new(&task.title),
                Cell::new(task.description().unwrap_or("")),
                status,
            ]));
        }

        table
    }

    fn panel<R: Resource>(panel: &Panel<R>, header: Message, empty: Message, table: fn(&[R::Item]) -> Table) {
        msg_print!(header, true);
        if let Some(summary) = panel.applied().summary() {
            msg_print!(Message::ActiveFilters(summary));
        }
        if panel.items().is_empty() {
            if panel.error().is_none() {
                msg_info!(empty);
            }
        } else {
            table(panel.items()).printstd();
        }
        if let Some(error) = panel.error() {
            msg_error!(error);
        }
    }

    pub fn books(panel: &Panel<Books>) {
        Self::panel(panel, Message::BooksHeader, Message::NoBooksFound, Self::books_table);
    }

    pub fn tasks(panel: &Panel<Tasks>) {
        Self::panel(panel, Message::TasksHeader, Message::NoTasksFound, Self::tasks_table);
    }

    pub fn auth(form: &AuthForm) {
        msg_print!(form.mode().title(), true);
        match form.notice() {
            Some(AuthNotice::Error(message)) => msg_error!(message),
            Some(AuthNotice::Info(message)) => msg_info!(message),
            None => {}
        }
    }

    pub fn app(app: &App) {
        match app.screen() {
            Screen::Auth => Self::auth(app.auth()),
            Screen::App => {
                Self::books(app.books());
                Self::tasks(app.tasks());
            }
        }
    }
}
