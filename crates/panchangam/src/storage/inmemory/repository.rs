//! In-memory repository implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;

use panchangam_core::almanac::DailyAlmanacEntry;
use panchangam_core::storage::{
    AlmanacRepository, DateRange, RepositoryError, Result, SubscriptionRepository,
};
use panchangam_core::subscription::{Subscription, SubscriptionKey, SubscriptionPreference};

/// In-memory storage backend.
///
/// Almanac rows are kept in a `BTreeMap` so range reads come out in date
/// order. Subscriptions and preferences are keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    days: Arc<RwLock<BTreeMap<NaiveDate, DailyAlmanacEntry>>>,
    subscriptions: Arc<RwLock<HashMap<String, Subscription>>>,
    preferences: Arc<RwLock<HashMap<String, SubscriptionPreference>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AlmanacRepository for InMemoryRepository {
    async fn get_day(&self, date: NaiveDate) -> Result<Option<DailyAlmanacEntry>> {
        let days = self.days.read().await;
        Ok(days.get(&date).cloned())
    }

    async fn get_range(&self, range: DateRange) -> Result<Vec<DailyAlmanacEntry>> {
        let days = self.days.read().await;
        Ok(days
            .range(range.start..=range.end)
            .map(|(_, entry)| entry.clone())
            .collect())
    }

    async fn upsert_day(&self, entry: &DailyAlmanacEntry) -> Result<()> {
        let mut days = self.days.write().await;
        days.insert(entry.date, entry.clone());
        Ok(())
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryRepository {
    async fn create_subscription(
        &self,
        subscription: &Subscription,
        preference: &SubscriptionPreference,
    ) -> Result<()> {
        let mut subscriptions = self.subscriptions.write().await;
        let mut preferences = self.preferences.write().await;

        if subscriptions.contains_key(&subscription.user_id) {
            return Err(RepositoryError::subscription_exists(&subscription.user_id));
        }
        if subscriptions
            .values()
            .any(|s| s.subscription_token == subscription.subscription_token)
        {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Subscription",
                id: "token".to_string(),
            });
        }

        subscriptions.insert(subscription.user_id.clone(), subscription.clone());
        preferences.insert(preference.user_id.clone(), preference.clone());
        Ok(())
    }

    async fn get_subscription(&self, key: &SubscriptionKey) -> Result<Option<Subscription>> {
        let subscriptions = self.subscriptions.read().await;
        Ok(subscriptions.values().find(|s| key.matches(s)).cloned())
    }

    async fn get_preference(&self, user_id: &str) -> Result<Option<SubscriptionPreference>> {
        let preferences = self.preferences.read().await;
        Ok(preferences.get(user_id).cloned())
    }

    async fn update_preference(&self, preference: &SubscriptionPreference) -> Result<()> {
        let mut preferences = self.preferences.write().await;
        match preferences.get_mut(&preference.user_id) {
            Some(existing) => {
                *existing = preference.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound {
                entity_type: "SubscriptionPreference",
                id: preference.user_id.clone(),
            }),
        }
    }

    async fn delete_subscription(&self, user_id: &str) -> Result<()> {
        let mut subscriptions = self.subscriptions.write().await;
        let mut preferences = self.preferences.write().await;

        let removed_preference = preferences.remove(user_id);
        if subscriptions.remove(user_id).is_none() && removed_preference.is_none() {
            return Err(RepositoryError::subscription_not_found(user_id));
        }
        Ok(())
    }

    async fn record_access(&self, token: &str, at: DateTime<Utc>) -> Result<()> {
        let mut subscriptions = self.subscriptions.write().await;
        let subscription = subscriptions
            .values_mut()
            .find(|s| s.subscription_token == token)
            .ok_or_else(|| RepositoryError::subscription_not_found("token"))?;
        subscription.touch(at);
        Ok(())
    }

    async fn list_subscriptions(&self) -> Result<Vec<Subscription>> {
        let subscriptions = self.subscriptions.read().await;
        let mut all: Vec<Subscription> = subscriptions.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn list_preferences(&self) -> Result<Vec<SubscriptionPreference>> {
        let preferences = self.preferences.read().await;
        let mut all: Vec<SubscriptionPreference> = preferences.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
