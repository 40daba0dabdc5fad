//! Filter criteria shared by the book and task panels.
//!
//! Filters are ephemeral client state. They are only ever turned into query
//! parameters; empty fields are dropped so the server sees exactly the
//! criteria the user filled in.

use crate::libs::messages::Message;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Filter state that can be encoded as query parameters.
pub trait QueryFilter {
    /// Non-empty criteria as `(name, value)` pairs, in a stable order.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// `name=value` summary of the criteria, or `None` when unfiltered.
    fn summary(&self) -> Option<String> {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return None;
        }
        Some(pairs.iter().map(|(k, v)| format!("{}={}", k, v)).collect::<Vec<_>>().join(", "))
    }

    fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Appends `pairs` to `path` as a percent-encoded query string.
///
/// With no pairs the path is returned unchanged.
pub fn with_query(path: &str, pairs: &[(&'static str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

/// Pushes `value` under `key` when it holds non-blank text.
pub(crate) fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        pairs.push((key, value.to_string()));
    }
}

/// Server-side ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(Message::InvalidSortOrder(other.to_string()).to_string()),
        }
    }
}

/// Optional server-side ordering, accepted by both collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ordering {
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl Ordering {
    pub(crate) fn push_pairs(&self, pairs: &mut Vec<(&'static str, String)>) {
        push_text(pairs, "sort_by", &self.sort_by);
        if let Some(order) = self.sort_order {
            pairs.push(("sort_order", order.to_string()));
        }
    }
}
