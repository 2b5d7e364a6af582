//! HTTP client for the users API
//!
//! Registration is a single JSON `POST {base_url}/users`. Any 2xx response
//! counts as success and the body is ignored.

use crate::config::TuiConfig;
use crate::state::SignUpFormData;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

use super::error::ApiError;
use super::traits::UsersApiTrait;

/// Client for the users API
#[derive(Clone, Debug)]
pub struct UsersClient {
    client: Client,
    base_url: String,
}

impl UsersClient {
    /// Create a new users client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &TuiConfig) -> Result<Self, ApiError> {
        Self::new(config.api_base_url(), config.request_timeout())
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

#[async_trait]
impl UsersApiTrait for UsersClient {
    #[instrument(skip(self, data), fields(base_url = %self.base_url))]
    async fn create_user(&self, data: &SignUpFormData) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.users_url())
            .header("Content-Type", "application/json")
            .json(data)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        debug!("User created ({})", status);
        Ok(())
    }
}
