//! Configuration management for shelf.
//!
//! The configuration is a small JSON document stored next to the session
//! token in the application data directory:
//!
//! ```json
//! { "server": { "api_url": "http://127.0.0.1:8000" } }
//! ```
//!
//! ## API URL resolution
//!
//! 1. `SHELF_API_URL` environment variable (a `.env` file is honoured)
//! 2. `server.api_url` from the configuration file
//! 3. [`DEFAULT_API_URL`]

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the configured API URL.
pub const API_URL_ENV: &str = "SHELF_API_URL";

/// Connection settings for the books & tasks API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Origin the API paths (`/login`, `/books/`, ...) are appended to.
    pub api_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads the configuration from the data directory, falling back to defaults.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        match fs::remove_file(config_file_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// API origin after applying the environment override.
    pub fn api_url(&self) -> String {
        self.api_url_with(env::var(API_URL_ENV).ok())
    }

    /// API origin given an explicit override value.
    pub fn api_url_with(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.server.as_ref().map(|server| server.api_url.clone()))
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// Configuration pointing at `api_url`, which must be an http(s) origin.
    pub fn with_api_url(api_url: &str) -> Result<Self> {
        let api_url = api_url.trim().trim_end_matches('/');
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            msg_bail_anyhow!(Message::InvalidApiUrl(api_url.to_string()));
        }
        Ok(Self {
            server: Some(ServerConfig {
                api_url: api_url.to_string(),
            }),
        })
    }

    /// Interactive setup wizard, seeded with the current values.
    pub fn init(&self) -> Result<Self> {
        let current = self.api_url_with(None);
        msg_print!(Message::ConfigApiUrl(current.clone()));
        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiUrl.to_string())
            .default(current)
            .interact_text()?;

        Self::with_api_url(&api_url)
    }
}
