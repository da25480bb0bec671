//! Calendar export operations.

use chrono::NaiveDate;
use serde::Serialize;

use super::PanchangamClient;
use crate::error::Result;

/// Query for an ad hoc ICS export. `None` leaves the server default.
#[derive(Debug, Default, Serialize)]
pub struct IcsExportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_auspicious: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_inauspicious: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_special_days: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_nakshatra: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_rs_warnings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_chandrashtama: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_name: Option<String>,
}

impl PanchangamClient {
    /// Download an ad hoc ICS document.
    pub async fn export_ics(&self, query: &IcsExportQuery) -> Result<String> {
        let response = self
            .client
            .get(self.url("/api/calendar/ics"))
            .query(query)
            .send()
            .await?;
        self.handle_text_response(response).await
    }

    /// Download the feed of a subscription.
    pub async fn subscription_feed(&self, token: &str) -> Result<String> {
        let response = self
            .client
            .get(self.url("/api/calendar/webcal"))
            .query(&[("token", token)])
            .send()
            .await?;
        self.handle_text_response(response).await
    }

    /// Download the built-in sample calendar.
    pub async fn sample_ics(&self) -> Result<String> {
        let response = self
            .client
            .get(self.url("/api/calendar/sample"))
            .send()
            .await?;
        self.handle_text_response(response).await
    }
}
