use super::{ApiClient, ApiError};
use serde::Deserialize;

pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub message: String,
}

impl ApiClient {
    /// `GET /health`.
    pub async fn health(&self) -> Result<Health, ApiError> {
        self.get(HEALTH_PATH).await
    }
}
