//! PostgREST repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::json;

use panchangam_core::almanac::DailyAlmanacEntry;
use panchangam_core::storage::{
    AlmanacRepository, DateRange, RepositoryError, Result, SubscriptionRepository,
};
use panchangam_core::subscription::{Subscription, SubscriptionKey, SubscriptionPreference};

use super::error::{map_request_error, map_status};

const ALMANAC_TABLE: &str = "daily_panchangam";
const SUBSCRIPTIONS_TABLE: &str = "calendar_subscriptions";
const PREFERENCES_TABLE: &str = "user_calendar_preferences";

/// PostgREST `eq` filter value.
fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{value}")
}

/// Query parameters selecting an inclusive date range in ascending order.
fn range_filters(range: &DateRange) -> [(&'static str, String); 3] {
    [
        ("date", format!("gte.{}", range.start.format("%Y-%m-%d"))),
        ("date", format!("lte.{}", range.end.format("%Y-%m-%d"))),
        ("order", "date.asc".to_string()),
    ]
}

/// Repository backed by a PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct PostgrestRepository {
    client: reqwest::Client,
    base_url: String,
}

impl PostgrestRepository {
    /// Create a repository for the API rooted at `base_url`, authenticating
    /// every request with `api_key`.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let invalid_key = |_| RepositoryError::InvalidData("API key is not a valid header".into());

        let mut headers = HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(api_key).map_err(invalid_key)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(invalid_key)?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn table(&self, name: &str) -> String {
        format!("{}/{name}", self.base_url)
    }

    /// Send a request and decode a JSON array of rows.
    async fn rows<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        entity_type: &'static str,
        id: &str,
    ) -> Result<Vec<T>> {
        let response = request.send().await.map_err(|e| map_request_error(&e))?;
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| RepositoryError::Serialization(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(map_status(status, &body, entity_type, id))
        }
    }

    /// Send a request whose response body is not needed.
    async fn execute(
        &self,
        request: RequestBuilder,
        entity_type: &'static str,
        id: &str,
    ) -> Result<()> {
        let response = request.send().await.map_err(|e| map_request_error(&e))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(map_status(status, &body, entity_type, id))
        }
    }
}

#[async_trait]
impl AlmanacRepository for PostgrestRepository {
    async fn get_day(&self, date: NaiveDate) -> Result<Option<DailyAlmanacEntry>> {
        let id = date.format("%Y-%m-%d").to_string();
        let request = self.client.get(self.table(ALMANAC_TABLE)).query(&[
            ("select", "*".to_string()),
            ("date", eq(&id)),
            ("limit", "1".to_string()),
        ]);

        let rows: Vec<DailyAlmanacEntry> = self.rows(request, "DailyAlmanacEntry", &id).await?;
        Ok(rows.into_iter().next())
    }

    async fn get_range(&self, range: DateRange) -> Result<Vec<DailyAlmanacEntry>> {
        let request = self
            .client
            .get(self.table(ALMANAC_TABLE))
            .query(&[("select", "*")])
            .query(&range_filters(&range));

        self.rows(request, "DailyAlmanacEntry", "range").await
    }

    async fn upsert_day(&self, entry: &DailyAlmanacEntry) -> Result<()> {
        let id = entry.date.format("%Y-%m-%d").to_string();
        let request = self
            .client
            .post(self.table(ALMANAC_TABLE))
            .query(&[("on_conflict", "date")])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(entry);

        self.execute(request, "DailyAlmanacEntry", &id).await
    }
}

#[async_trait]
impl SubscriptionRepository for PostgrestRepository {
    async fn create_subscription(
        &self,
        subscription: &Subscription,
        preference: &SubscriptionPreference,
    ) -> Result<()> {
        let user_id = subscription.user_id.as_str();

        let request = self
            .client
            .post(self.table(SUBSCRIPTIONS_TABLE))
            .header("Prefer", "return=minimal")
            .json(subscription);
        self.execute(request, "Subscription", user_id).await?;

        let request = self
            .client
            .post(self.table(PREFERENCES_TABLE))
            .header("Prefer", "return=minimal")
            .json(preference);
        if let Err(err) = self.execute(request, "Subscription", user_id).await {
            // No transactions over the row API: undo the first insert.
            let undo = self
                .client
                .delete(self.table(SUBSCRIPTIONS_TABLE))
                .query(&[("id", eq(subscription.id))]);
            if let Err(undo_err) = self.execute(undo, "Subscription", user_id).await {
                tracing::error!(
                    %user_id,
                    error = %undo_err,
                    "Failed to roll back subscription insert"
                );
            }
            return Err(err);
        }
        Ok(())
    }

    async fn get_subscription(&self, key: &SubscriptionKey) -> Result<Option<Subscription>> {
        let filter = match key {
            SubscriptionKey::Token(token) => ("subscription_token", eq(token)),
            SubscriptionKey::UserId(user_id) => ("user_id", eq(user_id)),
        };
        let request = self.client.get(self.table(SUBSCRIPTIONS_TABLE)).query(&[
            ("select", "*".to_string()),
            filter,
            ("limit", "1".to_string()),
        ]);

        let rows: Vec<Subscription> = self.rows(request, "Subscription", &key.to_string()).await?;
        Ok(rows.into_iter().next())
    }

    async fn get_preference(&self, user_id: &str) -> Result<Option<SubscriptionPreference>> {
        let request = self.client.get(self.table(PREFERENCES_TABLE)).query(&[
            ("select", "*".to_string()),
            ("user_id", eq(user_id)),
            ("limit", "1".to_string()),
        ]);

        let rows: Vec<SubscriptionPreference> =
            self.rows(request, "SubscriptionPreference", user_id).await?;
        Ok(rows.into_iter().next())
    }

    async fn update_preference(&self, preference: &SubscriptionPreference) -> Result<()> {
        let user_id = preference.user_id.as_str();
        let request = self
            .client
            .patch(self.table(PREFERENCES_TABLE))
            .query(&[("user_id", eq(user_id))])
            .header("Prefer", "return=representation")
            .json(&json!({
                "calendar_name": preference.calendar_name,
                "include_auspicious_times": preference.include_auspicious_times,
                "include_inauspicious_times": preference.include_inauspicious_times,
                "include_special_days": preference.include_special_days,
                "include_nakshatra": preference.include_nakshatra,
                "include_rs_warnings": preference.include_rs_warnings,
                "include_chandrashtama": preference.include_chandrashtama,
                "date_range_days": preference.date_range_days,
                "updated_at": preference.updated_at,
            }));

        let updated: Vec<SubscriptionPreference> =
            self.rows(request, "SubscriptionPreference", user_id).await?;
        if updated.is_empty() {
            return Err(RepositoryError::NotFound {
                entity_type: "SubscriptionPreference",
                id: user_id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_subscription(&self, user_id: &str) -> Result<()> {
        let request = self
            .client
            .delete(self.table(PREFERENCES_TABLE))
            .query(&[("user_id", eq(user_id))])
            .header("Prefer", "return=representation");
        let preferences: Vec<SubscriptionPreference> =
            self.rows(request, "SubscriptionPreference", user_id).await?;

        let request = self
            .client
            .delete(self.table(SUBSCRIPTIONS_TABLE))
            .query(&[("user_id", eq(user_id))])
            .header("Prefer", "return=representation");
        let subscriptions: Vec<Subscription> = self.rows(request, "Subscription", user_id).await?;

        if preferences.is_empty() && subscriptions.is_empty() {
            return Err(RepositoryError::subscription_not_found(user_id));
        }
        Ok(())
    }

    async fn record_access(&self, token: &str, at: DateTime<Utc>) -> Result<()> {
        // The row API has no atomic increment; read, bump, write back.
        let mut subscription = self
            .get_subscription(&SubscriptionKey::Token(token.to_string()))
            .await?
            .ok_or_else(|| RepositoryError::subscription_not_found("token"))?;
        subscription.touch(at);

        let request = self
            .client
            .patch(self.table(SUBSCRIPTIONS_TABLE))
            .query(&[("id", eq(subscription.id))])
            .header("Prefer", "return=minimal")
            .json(&json!({
                "last_accessed": subscription.last_accessed,
                "access_count": subscription.access_count,
            }));

        self.execute(request, "Subscription", &subscription.user_id)
            .await
    }

    async fn list_subscriptions(&self) -> Result<Vec<Subscription>> {
        let request = self
            .client
            .get(self.table(SUBSCRIPTIONS_TABLE))
            .query(&[("select", "*"), ("order", "created_at.desc")]);

        self.rows(request, "Subscription", "all").await
    }

    async fn list_preferences(&self) -> Result<Vec<SubscriptionPreference>> {
        let request = self
            .client
            .get(self.table(PREFERENCES_TABLE))
            .query(&[("select", "*"), ("order", "created_at.desc")]);

        self.rows(request, "SubscriptionPreference", "all").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_filter() {
        assert_eq!(eq("user-1"), "eq.user-1");
        assert_eq!(eq(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()), "eq.2025-09-15");
    }

    #[test]
    fn test_range_filters() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
        )
        .unwrap();

        assert_eq!(
            range_filters(&range),
            [
                ("date", "gte.2025-09-01".to_string()),
                ("date", "lte.2025-09-30".to_string()),
                ("order", "date.asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_table_urls() {
        let repo = PostgrestRepository::new("https://db.example.com/rest/v1/", "key").unwrap();
        assert_eq!(
            repo.table(ALMANAC_TABLE),
            "https://db.example.com/rest/v1/daily_panchangam"
        );
    }

    #[test]
    fn test_rejects_api_key_that_is_not_a_header() {
        let result = PostgrestRepository::new("https://db.example.com", "bad\nkey");
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }
}
