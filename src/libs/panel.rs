//! List panels for the server-owned collections.
//!
//! A [`Panel`] holds what one resource section of the app shows: the filter
//! form, the items of the last load, and an inline error. Every operation
//! catches its own failure and records it in the panel. Callers only learn
//! whether the action went through.
//!
//! ## Invariants
//!
//! - `load` always starts from an empty list and no error. A failed load
//!   leaves the list empty; items are never merged across loads.
//! - `create`, `delete` and `complete` reload with the current filter form,
//!   not unfiltered.
//! - A failed `delete`/`complete` keeps the list as it was.
//! - [`Panel::applied`] is the filter set of the last load, which is what the
//!   list reflects. It can differ from the form.

use super::filter::{with_query, QueryFilter};
use crate::api::{ApiClient, ApiError, Tasks};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

/// A server collection that can back a [`Panel`].
pub trait Resource {
    /// Item as returned by the server.
    type Item: DeserializeOwned + Clone;
    /// Payload accepted when creating an item.
    type Draft: Serialize;
    /// Filter form for listing.
    type Filter: QueryFilter + Default + Clone;

    /// Collection path, with trailing slash.
    const COLLECTION: &'static str;

    /// Path of a single item.
    fn item_path(id: i64) -> String {
        format!("{}{}", Self::COLLECTION, id)
    }

    /// Collection path with `filter` encoded as the query string.
    fn list_path(filter: &Self::Filter) -> String {
        with_query(Self::COLLECTION, &filter.query_pairs())
    }
}

pub struct Panel<R: Resource> {
    filters: R::Filter,
    applied: R::Filter,
    items: Vec<R::Item>,
    error: Option<String>,
}

impl<R: Resource> Default for Panel<R> {
    fn default() -> Self {
        Self {
            filters: R::Filter::default(),
            applied: R::Filter::default(),
            items: Vec::new(),
            error: None,
        }
    }
}

impl<R: Resource> Panel<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[R::Item] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current content of the filter form.
    pub fn filters(&self) -> &R::Filter {
        &self.filters
    }

    /// Filters used by the last load.
    pub fn applied(&self) -> &R::Filter {
        &self.applied
    }

    /// Edits the filter form without reloading.
    pub fn set_filters(&mut self, filters: R::Filter) {
        self.filters = filters;
    }

    fn fail(&mut self, e: ApiError) {
        warn!(collection = R::COLLECTION, error = %e, "panel action failed");
        self.error = Some(e.message().to_string());
    }

    /// Replaces the list with the server's result for `filters`.
    pub async fn load(&mut self, api: &ApiClient, filters: &R::Filter) {
        self.error = None;
        self.items.clear();
        self.applied = filters.clone();

        let path = R::list_path(filters);
        match api.get::<Vec<R::Item>>(&path).await {
            Ok(items) => {
                debug!(collection = R::COLLECTION, count = items.len(), "panel loaded");
                self.items = items;
            }
            Err(e) => self.fail(e),
        }
    }

    /// Loads with the current filter form.
    pub async fn reload(&mut self, api: &ApiClient) {
        let filters = self.filters.clone();
        self.load(api, &filters).await;
    }

    /// "Apply": loads with the filter form as currently filled in.
    pub async fn apply_filters(&mut self, api: &ApiClient) {
        self.reload(api).await;
    }

    /// "Clear": empties the filter form and loads unfiltered.
    pub async fn clear_filters(&mut self, api: &ApiClient) {
        self.filters = R::Filter::default();
        self.load(api, &R::Filter::default()).await;
    }

    /// Creates an item, then reloads with the active filters.
    pub async fn create(&mut self, api: &ApiClient, draft: &R::Draft) -> bool {
        self.error = None;
        match api.post::<R::Item, _>(R::COLLECTION, draft).await {
            Ok(_) => {
                self.reload(api).await;
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }

    /// Deletes an item, then reloads with the active filters.
    pub async fn delete(&mut self, api: &ApiClient, id: i64) -> bool {
        match api.delete(&R::item_path(id)).await {
            Ok(()) => {
                self.reload(api).await;
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }
}

impl Panel<Tasks> {
    /// Marks a task completed, then reloads with the active filters.
    pub async fn complete(&mut self, api: &ApiClient, id: i64) -> bool {
        match api.complete_task(id).await {
            Ok(()) => {
                self.reload(api).await;
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }
}
