//! Almanac API operations.

use chrono::NaiveDate;

use super::PanchangamClient;
use crate::error::Result;
use panchangam_core::almanac::{DailyAlmanacEntry, DayResponse};

impl PanchangamClient {
    /// Get one day's row and display summary.
    pub async fn get_day(&self, date: NaiveDate) -> Result<DayResponse> {
        let response = self
            .client
            .get(self.url(&format!("/api/almanac/{date}")))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List rows between two dates, both included. Omitted ends default to
    /// today on the server.
    pub async fn list_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<DailyAlmanacEntry>> {
        let mut query = Vec::new();
        if let Some(start) = start {
            query.push(("start", start.to_string()));
        }
        if let Some(end) = end {
            query.push(("end", end.to_string()));
        }

        let response = self
            .client
            .get(self.url("/api/almanac"))
            .query(&query)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
