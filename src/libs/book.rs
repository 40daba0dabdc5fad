use super::filter::{push_text, Ordering, QueryFilter};
use serde::{Deserialize, Serialize};

/// A book as returned by the server.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Book {
    pub id: i64,
    pub book_name: String,
    pub author: String,
    pub publisher: String,
    pub pages: i32,
    #[serde(default)]
    pub description: Option<String>,
}

impl Book {
    /// Description to display; empty strings count as absent.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Book payload for `POST /books/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBook {
    pub book_name: String,
    pub author: String,
    pub publisher: String,
    pub pages: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewBook {
    pub fn new(book_name: &str, author: &str, publisher: &str, pages: i32, description: &str) -> Self {
        Self {
            book_name: book_name.to_string(),
            author: author.to_string(),
            publisher: publisher.to_string(),
            pages,
            description: Some(description.to_string()).filter(|d| !d.is_empty()),
        }
    }
}

/// Book panel filter form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub name: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub ordering: Ordering,
}

impl BookFilter {
    pub fn by_author(author: &str) -> Self {
        Self {
            author: Some(author.to_string()),
            ..Default::default()
        }
    }
}

impl QueryFilter for BookFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "name", &self.name);
        push_text(&mut pairs, "author", &self.author);
        push_text(&mut pairs, "publisher", &self.publisher);
        self.ordering.push_pairs(&mut pairs);
        pairs
    }
}

