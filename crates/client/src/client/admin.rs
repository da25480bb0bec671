//! Admin API operations.

use super::PanchangamClient;
use crate::error::Result;
use panchangam_core::subscription::AdminOverview;

impl PanchangamClient {
    /// Get subscription statistics and listings.
    pub async fn admin_overview(&self) -> Result<AdminOverview> {
        let response = self
            .client
            .get(self.url("/api/admin/overview"))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
