//! Health check operations.

use super::PanchangamClient;
use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// Readiness probe result.
#[derive(Debug, Serialize, Deserialize)]
pub struct Readiness {
    pub healthy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PanchangamClient {
    /// Check that the server accepts connections.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: "liveness probe failed".to_string(),
            })
        }
    }

    /// Check that the server can reach its storage.
    ///
    /// An unhealthy server answers 503 with a body; that is returned as a
    /// [`Readiness`] rather than an error.
    pub async fn readyz(&self) -> Result<Readiness> {
        let response = self.client.get(self.url("/readyz")).send().await?;
        if response.status().as_u16() == 503 {
            return response.json().await.map_err(ClientError::from);
        }
        self.handle_response(response).await
    }
}
