use crate::libs::{
    app::{App, Screen},
    book::BookFilter,
    config::Config,
    filter::{Ordering, SortOrder},
    forms,
    messages::Message,
    view::View,
};
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct BooksArgs {
    #[command(subcommand)]
    command: Option<BooksCommand>,
}

/// Filter form of the books panel. The list shown after any action uses it.
#[derive(Debug, Clone, Default, Args)]
pub struct BookFilterArgs {
    /// Only books whose name matches
    #[arg(long)]
    name: Option<String>,
    /// Only books by this author
    #[arg(long)]
    author: Option<String>,
    /// Only books from this publisher
    #[arg(long)]
    publisher: Option<String>,
    /// Field the server sorts by
    #[arg(long)]
    sort_by: Option<String>,
    /// asc or desc
    #[arg(long)]
    sort_order: Option<SortOrder>,
}

impl From<BookFilterArgs> for BookFilter {
    fn from(args: BookFilterArgs) -> Self {
        BookFilter {
            name: args.name,
            author: args.author,
            publisher: args.publisher,
            ordering: Ordering {
                sort_by: args.sort_by,
                sort_order: args.sort_order,
            },
        }
    }
}

#[derive(Debug, Subcommand)]
enum BooksCommand {
    /// List books
    List {
        #[command(flatten)]
        filter: BookFilterArgs,
    },
    /// Add a book; missing fields are prompted
    Add {
        /// Book name
        #[arg(value_name = "NAME")]
        book_name: Option<String>,
        /// Author
        #[arg(value_name = "AUTHOR")]
        book_author: Option<String>,
        /// Publisher
        #[arg(value_name = "PUBLISHER")]
        book_publisher: Option<String>,
        /// Number of pages
        pages: Option<i32>,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
        #[command(flatten)]
        filter: BookFilterArgs,
    },
    /// Delete a book; without an ID pick from the list
    Delete {
        id: Option<i64>,
        #[command(flatten)]
        filter: BookFilterArgs,
    },
}

pub async fn cmd(args: BooksArgs) -> Result<()> {
    let mut app = App::from_config(&Config::read()?)?;
    if app.restore() == Screen::Auth {
        msg_error!(Message::NotLoggedIn);
        return Ok(());
    }

    let command = args.command.unwrap_or(BooksCommand::List {
        filter: BookFilterArgs::default(),
    });
    match command {
        BooksCommand::List { filter } => {
            app.set_book_filters(filter.into());
            app.apply_book_filters().await;
        }
        BooksCommand::Add {
            book_name,
            book_author,
            book_publisher,
            pages,
            description,
            filter,
        } => {
            app.set_book_filters(filter.into());
            let book = forms::new_book(book_name, book_author, book_publisher, pages, description)?;
            if app.create_book(&book).await {
                msg_success!(Message::BookCreated);
            }
        }
        BooksCommand::Delete { id, filter } => {
            app.set_book_filters(filter.into());
            let id = match id {
                Some(id) => Some(id),
                None => {
                    app.apply_book_filters().await;
                    forms::pick_book(app.books().items(), Message::SelectBookToDelete)?
                }
            };
            match id {
                Some(id) => {
                    if app.delete_book(id).await {
                        msg_success!(Message::BookDeleted(id));
                    }
                }
                None => msg_info!(Message::NothingToSelect),
            }
        }
    }

    View::books(app.books());
    Ok(())
}
