use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::almanac::DailyAlmanacEntry;
use crate::subscription::{Subscription, SubscriptionKey, SubscriptionPreference};

use super::{DateRange, Result};

/// Read access to daily almanac rows.
#[async_trait]
pub trait AlmanacRepository: Send + Sync {
    /// Gets the row for one date.
    async fn get_day(&self, date: NaiveDate) -> Result<Option<DailyAlmanacEntry>>;

    /// Gets every row within the range, ordered by date ascending.
    async fn get_range(&self, range: DateRange) -> Result<Vec<DailyAlmanacEntry>>;

    /// Inserts or replaces the row for `entry.date`. Used for seeding.
    async fn upsert_day(&self, entry: &DailyAlmanacEntry) -> Result<()>;
}

/// Subscriptions and their preferences. Each user has at most one of each.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Stores a new subscription with its preferences.
    ///
    /// Fails with `AlreadyExists` if the user already has a subscription.
    async fn create_subscription(
        &self,
        subscription: &Subscription,
        preference: &SubscriptionPreference,
    ) -> Result<()>;

    /// Finds a subscription by token or user id.
    async fn get_subscription(&self, key: &SubscriptionKey) -> Result<Option<Subscription>>;

    /// Gets a user's preferences.
    async fn get_preference(&self, user_id: &str) -> Result<Option<SubscriptionPreference>>;

    /// Replaces a user's preferences.
    async fn update_preference(&self, preference: &SubscriptionPreference) -> Result<()>;

    /// Removes a user's subscription and preferences.
    async fn delete_subscription(&self, user_id: &str) -> Result<()>;

    /// Bumps the access bookkeeping of the subscription with this token.
    async fn record_access(&self, token: &str, at: DateTime<Utc>) -> Result<()>;

    /// All subscriptions, newest first.
    async fn list_subscriptions(&self) -> Result<Vec<Subscription>>;

    /// All preferences, newest first.
    async fn list_preferences(&self) -> Result<Vec<SubscriptionPreference>>;
}
