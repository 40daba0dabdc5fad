//! Login and registration endpoints.
//!
//! Both are unauthenticated. Login is the one form-encoded call in the API,
//! so it bypasses [`ApiClient::call`] and reads the error body itself.

use super::{ApiClient, ApiError, LOGIN_PATH};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

pub const REGISTER_PATH: &str = "/register";

/// Username and password as entered in the auth form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl ApiClient {
    /// `POST /login` with form-encoded credentials; returns the access token.
    ///
    /// Does not store the token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        debug!(username = %credentials.username, "logging in");
        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .form(&[("username", &credentials.username), ("password", &credentials.password)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, "login rejected");
            return Err(ApiError::from_status(status, &text));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// `POST /register` with JSON credentials. The created account is not returned.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        debug!(username = %credentials.username, "registering");
        let _: Option<Value> = self.post(REGISTER_PATH, credentials).await?;
        Ok(())
    }
}
