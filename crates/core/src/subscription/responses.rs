//! API response types for subscription and admin operations.
//!
//! Shared between the server and client, like the request types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::operations::{AccessStatus, SubscriptionLinks, SubscriptionStats};
use super::types::{Subscription, SubscriptionPreference};

/// Response for creating a subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscriptionResponse {
    pub subscription_id: Uuid,
    pub subscription_token: String,
    pub webcal_url: String,
    pub ics_url: String,
    pub preferences: SubscriptionPreference,
    pub message: String,
}

impl CreateSubscriptionResponse {
    pub fn new(
        subscription: &Subscription,
        preferences: SubscriptionPreference,
        links: SubscriptionLinks,
    ) -> Self {
        Self {
            subscription_id: subscription.id,
            subscription_token: subscription.subscription_token.clone(),
            webcal_url: links.webcal_url,
            ics_url: links.ics_url,
            preferences,
            message: "Subscription created successfully".to_string(),
        }
    }
}

/// A subscription with its preferences and feed URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionDetails {
    pub subscription: Subscription,
    pub preferences: SubscriptionPreference,
    pub webcal_url: String,
    pub ics_url: String,
}

/// Response for a preference update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSubscriptionResponse {
    pub preferences: SubscriptionPreference,
    pub message: String,
}

/// A bare confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A subscription row on the admin overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionOverview {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub access_status: AccessStatus,
    pub status_label: String,
    pub needs_attention: bool,
}

impl SubscriptionOverview {
    pub fn new(subscription: Subscription, status: AccessStatus) -> Self {
        Self {
            subscription,
            access_status: status,
            status_label: status.to_string(),
            needs_attention: status.needs_attention(),
        }
    }
}

/// Everything the admin dashboard shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOverview {
    pub stats: SubscriptionStats,
    pub subscriptions: Vec<SubscriptionOverview>,
    pub preferences: Vec<SubscriptionPreference>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_overview_row_serializes_flat() {
        let now = Utc.with_ymd_and_hms(2025, 9, 15, 0, 0, 0).unwrap();
        let sub = Subscription::new("user-1", "tok", now);

        let row = SubscriptionOverview::new(sub, AccessStatus::Stale(9));
        let json = serde_json::to_value(&row).unwrap();

        assert_eq!(json["user_id"], "user-1");
        assert_eq!(json["access_status"]["status"], "stale");
        assert_eq!(json["access_status"]["days"], 9);
        assert_eq!(json["status_label"], "Stale (9 days ago)");
        assert_eq!(json["needs_attention"], true);

        let back: SubscriptionOverview = serde_json::from_value(json).unwrap();
        assert_eq!(back.subscription.user_id, "user-1");
        assert_eq!(back.access_status, AccessStatus::Stale(9));
    }
}
