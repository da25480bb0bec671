//! HTTP client for the panchangam API.

pub mod admin;
pub mod almanac;
pub mod calendar;
pub mod health;
pub mod subscriptions;

use serde::Deserialize;

use panchangam_core::subscription::SubscriptionKey;

use crate::error::{ClientError, Result};

/// Error body returned by the server for failed requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the panchangam API.
#[derive(Debug, Clone)]
pub struct PanchangamClient {
    client: reqwest::Client,
    base_url: String,
}

impl PanchangamClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (PANCHANGAM_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PANCHANGAM_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a JSON body or turn an error status into a [`ClientError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(ClientError::from)
    }

    /// Like [`Self::handle_response`] for text bodies such as ICS documents.
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        let response = Self::check_status(response).await?;
        response.text().await.map_err(ClientError::from)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = error_message(&body);

        if status.as_u16() == 404 {
            Err(ClientError::NotFound { resource: message })
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Extracts the `error` field of a JSON error body, or returns the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Query parameters selecting a subscription.
fn key_query(key: &SubscriptionKey) -> [(&'static str, &str); 1] {
    match key {
        SubscriptionKey::Token(token) => [("token", token.as_str())],
        SubscriptionKey::UserId(user_id) => [("user_id", user_id.as_str())],
    }
}
