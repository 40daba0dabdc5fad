//! Login / registration form state.
//!
//! The form is a two-state machine. It starts in [`AuthMode::Login`] and only
//! an explicit toggle or a successful registration changes the mode.

use crate::api::auth::Credentials;
use crate::api::ApiClient;
use crate::libs::messages::Message;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Sign Up",
        }
    }

    /// Label of the control that switches to the other mode.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Register",
            AuthMode::Register => "Login",
        }
    }
}

/// Inline message under the auth form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthNotice {
    Error(String),
    Info(String),
}

/// What a successful submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Token stored; the app view should open.
    LoggedIn,
    /// Account created; the form is back in login mode.
    Registered,
}

#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    mode: AuthMode,
    notice: Option<AuthNotice>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: AuthMode) -> Self {
        Self { mode, notice: None }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn notice(&self) -> Option<&AuthNotice> {
        self.notice.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.notice {
            Some(AuthNotice::Error(message)) => Some(message),
            _ => None,
        }
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Submits the form in its current mode.
    ///
    /// On failure the error is kept as the form's notice, the mode is left
    /// unchanged, and `None` is returned.
    pub async fn submit(&mut self, api: &ApiClient, credentials: &Credentials) -> Option<AuthOutcome> {
        self.notice = None;

        let result = match self.mode {
            AuthMode::Login => Self::login(api, credentials).await,
            AuthMode::Register => api
                .register(credentials)
                .await
                .map(|()| AuthOutcome::Registered)
                .map_err(|e| e.message().to_string()),
        };

        match result {
            Ok(AuthOutcome::Registered) => {
                self.mode = AuthMode::Login;
                self.notice = Some(AuthNotice::Info(Message::RegisteredPleaseLogIn.to_string()));
                Some(AuthOutcome::Registered)
            }
            Ok(outcome) => Some(outcome),
            Err(message) => {
                warn!(mode = self.mode.title(), "auth submit failed");
                self.notice = Some(AuthNotice::Error(message));
                None
            }
        }
    }

    async fn login(api: &ApiClient, credentials: &Credentials) -> Result<AuthOutcome, String> {
        let token = api.login(credentials).await.map_err(|e| e.message().to_string())?;
        api.session().set_token(&token).map_err(|e| e.to_string())?;
        Ok(AuthOutcome::LoggedIn)
    }
}
