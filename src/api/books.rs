use crate::libs::book::{Book, BookFilter, NewBook};
use crate::libs::panel::Resource;

/// The `/books/` collection.
#[derive(Debug, Clone, Copy)]
pub struct Books;

impl Resource for Books {
    type Item = Book;
    type Draft = NewBook;
    type Filter = BookFilter;

    const COLLECTION: &'static str = "/books/";
}
