//! HTTP gateway to the books & tasks API.
//!
//! [`ApiClient`] is the single place requests are built. It attaches the
//! session's bearer token, encodes JSON bodies and turns every failure into
//! [`ApiError::RequestFailed`] carrying the text the server sent back.
//!
//! ## Endpoints
//!
//! | Method | Path | Module |
//! |---|---|---|
//! | POST | `/login`, `/register` | [`auth`] |
//! | GET/POST/DELETE | `/books/`, `/books/{id}` | [`books`] |
//! | GET/POST/DELETE | `/tasks/`, `/tasks/{id}`, `/tasks/{id}/complete` | [`tasks`] |
//! | GET | `/health` | [`health`] |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shelf::api::ApiClient;
//! use shelf::libs::book::Book;
//! use shelf::libs::session::SessionStore;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let api = ApiClient::new("http://127.0.0.1:8000", SessionStore::new()?)?;
//! let books: Vec<Book> = api.get("/books/?author=Orwell").await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::session::SessionStore;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod auth;
pub mod books;
pub mod health;
pub mod tasks;

pub use books::Books;
pub use tasks::Tasks;

/// Path of the unauthenticated, form-encoded login endpoint.
pub const LOGIN_PATH: &str = "/login";

/// The one error the gateway reports.
///
/// The message is what the user sees: the response body of a failed call,
/// its status reason when the body is empty, or the transport error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    RequestFailed(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::RequestFailed(message) => message,
        }
    }

    /// Error for a non-success response with the given body text.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        if !body.is_empty() {
            return ApiError::RequestFailed(body.to_string());
        }
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());
        ApiError::RequestFailed(reason)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::RequestFailed(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::RequestFailed(format!("Invalid response from server: {}", e))
    }
}

/// Method and optional JSON body of a gateway call.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Option<Value>) -> Self {
        Self {
            method: Method::POST,
            body,
        }
    }

    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            body: None,
        }
    }
}

/// Authenticated JSON client for the API origin.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: &str, session: SessionStore) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues a request to `path` and returns the parsed JSON body.
    ///
    /// Returns `Ok(None)` for `204 No Content` and for empty success bodies.
    pub async fn call(&self, path: &str, options: RequestOptions) -> Result<Option<Value>, ApiError> {
        let is_json = path != LOGIN_PATH;

        let mut headers = HeaderMap::new();
        if is_json {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(token) = self.session.token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("stored token is not a valid header value, sending request without it"),
            }
        }

        debug!(method = %options.method, path = %path, "API request");
        let mut request = self.client.request(options.method.clone(), self.url(path)).headers(headers);
        if let (true, Some(body)) = (is_json, &options.body) {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.map_err(|e| {
            warn!(path = %path, error = %e, "API request failed to send");
            ApiError::from(e)
        })?;
        Self::parse(path, response).await
    }

    async fn parse(path: &str, response: Response) -> Result<Option<Value>, ApiError> {
        let status = response.status();
        debug!(path = %path, status = %status, "API response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(path = %path, status = %status, "API request rejected");
            return Err(ApiError::from_status(status, &text));
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// `GET path`, decoding the body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.call(path, RequestOptions::get()).await?;
        Ok(serde_json::from_value(value.unwrap_or(Value::Null))?)
    }

    /// `POST path` with a JSON body, decoding the response as `T`.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        let value = self.call(path, RequestOptions::post(Some(body))).await?;
        Ok(serde_json::from_value(value.unwrap_or(Value::Null))?)
    }

    /// `POST path` without a body; whatever the server answers is returned as-is.
    pub async fn post_empty(&self, path: &str) -> Result<Option<Value>, ApiError> {
        self.call(path, RequestOptions::post(None)).await
    }

    /// `DELETE path`, ignoring any response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.call(path, RequestOptions::delete()).await?;
        Ok(())
    }
}
