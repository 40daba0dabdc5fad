//! The application view model.
//!
//! [`App`] is everything the user can see and act on: which screen is shown,
//! the auth form, and the two resource panels. Commands and the interactive
//! shell drive it; [`View`](super::view::View) renders it.

use super::auth::{AuthForm, AuthMode, AuthOutcome};
use super::book::{BookFilter, NewBook};
use super::config::Config;
use super::panel::Panel;
use super::session::SessionStore;
use super::task::{NewTask, TaskFilter};
use crate::api::auth::Credentials;
use crate::api::{ApiClient, Books, Tasks};
use anyhow::Result;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    App,
}

pub struct App {
    api: ApiClient,
    screen: Screen,
    auth: AuthForm,
    books: Panel<Books>,
    tasks: Panel<Tasks>,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            screen: Screen::Auth,
            auth: AuthForm::new(),
            books: Panel::new(),
            tasks: Panel::new(),
        }
    }

    /// App wired to the configured API and the default session file.
    pub fn from_config(config: &Config) -> Result<Self> {
        let session = SessionStore::new()?;
        let api = ApiClient::new(&config.api_url(), session)?;
        Ok(Self::new(api))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn auth(&self) -> &AuthForm {
        &self.auth
    }

    pub fn books(&self) -> &Panel<Books> {
        &self.books
    }

    pub fn tasks(&self) -> &Panel<Tasks> {
        &self.tasks
    }

    /// Initial screen: the app with both panels loaded when a token is
    /// stored, the auth form otherwise.
    pub async fn start(&mut self) {
        if self.restore() == Screen::App {
            self.load_panels().await;
        }
    }

    /// Picks the screen from the stored session without loading anything.
    pub fn restore(&mut self) -> Screen {
        self.screen = if self.api.session().is_authenticated() {
            Screen::App
        } else {
            Screen::Auth
        };
        self.screen
    }

    async fn load_panels(&mut self) {
        self.books.load(&self.api, &BookFilter::default()).await;
        self.tasks.load(&self.api, &TaskFilter::default()).await;
    }

    pub fn toggle_auth_mode(&mut self) {
        self.auth.toggle();
    }

    pub fn set_auth_mode(&mut self, mode: AuthMode) {
        self.auth = AuthForm::with_mode(mode);
    }

    /// Submits the auth form. A successful login opens the app screen and
    /// loads both panels.
    pub async fn submit_auth(&mut self, credentials: &Credentials) -> Option<AuthOutcome> {
        let outcome = self.auth.submit(&self.api, credentials).await;
        if outcome == Some(AuthOutcome::LoggedIn) {
            info!(username = %credentials.username, "logged in");
            self.screen = Screen::App;
            self.load_panels().await;
        }
        outcome
    }

    /// Forgets the token and returns to the auth screen. No server call.
    pub fn logout(&mut self) -> Result<()> {
        self.api.session().clear_token()?;
        self.screen = Screen::Auth;
        info!("logged out");
        Ok(())
    }

    // === BOOKS ===

    pub fn set_book_filters(&mut self, filters: BookFilter) {
        self.books.set_filters(filters);
    }

    pub async fn apply_book_filters(&mut self) {
        self.books.apply_filters(&self.api).await;
    }

    pub async fn clear_book_filters(&mut self) {
        self.books.clear_filters(&self.api).await;
    }

    pub async fn create_book(&mut self, book: &NewBook) -> bool {
        self.books.create(&self.api, book).await
    }

    pub async fn delete_book(&mut self, id: i64) -> bool {
        self.books.delete(&self.api, id).await
    }

    // === TASKS ===

    pub fn set_task_filters(&mut self, filters: TaskFilter) {
        self.tasks.set_filters(filters);
    }

    pub async fn apply_task_filters(&mut self) {
        self.tasks.apply_filters(&self.api).await;
    }

    pub async fn clear_task_filters(&mut self) {
        self.tasks.clear_filters(&self.api).await;
    }

    pub async fn create_task(&mut self, task: &NewTask) -> bool {
        self.tasks.create(&self.api, task).await
    }

    pub async fn complete_task(&mut self, id: i64) -> bool {
        self.tasks.complete(&self.api, id).await
    }

    pub async fn delete_task(&mut self, id: i64) -> bool {
        self.tasks.delete(&self.api, id).await
    }
}
