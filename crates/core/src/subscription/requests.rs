//! API request types for subscription operations.
//!
//! These types are shared between the server and client for type-safe API communication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{Subscription, SubscriptionPreference};

/// Request payload for creating a subscription. Everything but the user id
/// falls back to the preference defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_auspicious_times: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_inauspicious_times: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_special_days: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_nakshatra: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_rs_warnings: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_chandrashtama: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range_days: Option<u32>,
}

impl CreateSubscriptionRequest {
    /// Create a request with defaults for everything but the user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Set the calendar display name.
    pub fn with_calendar_name(mut self, name: impl Into<String>) -> Self {
        self.calendar_name = Some(name.into());
        self
    }

    /// Set how many days ahead the feed covers.
    pub fn with_date_range_days(mut self, days: u32) -> Self {
        self.date_range_days = Some(days);
        self
    }

    /// Build the subscription and preference records for this request.
    pub fn into_records(
        self,
        token: impl Into<String>,
        now: DateTime<Utc>,
    ) -> (Subscription, SubscriptionPreference) {
        let user_id = self.user_id.trim().to_string();
        let mut pref = SubscriptionPreference::new(user_id.clone(), now);
        UpdateSubscriptionRequest {
            calendar_name: self.calendar_name,
            include_auspicious_times: self.include_auspicious_times,
            include_inauspicious_times: self.include_inauspicious_times,
            include_special_days: self.include_special_days,
            include_nakshatra: self.include_nakshatra,
            include_rs_warnings: self.include_rs_warnings,
            include_chandrashtama: self.include_chandrashtama,
            date_range_days: self.date_range_days,
        }
        .apply_to(&mut pref, now);

        (Subscription::new(user_id, token, now), pref)
    }
}

/// Request payload for a partial preference update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSubscriptionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_auspicious_times: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_inauspicious_times: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_special_days: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_nakshatra: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_rs_warnings: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_chandrashtama: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range_days: Option<u32>,
}

impl UpdateSubscriptionRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the calendar display name.
    pub fn with_calendar_name(mut self, name: impl Into<String>) -> Self {
        self.calendar_name = Some(name.into());
        self
    }

    /// Set how many days ahead the feed covers.
    pub fn with_date_range_days(mut self, days: u32) -> Self {
        self.date_range_days = Some(days);
        self
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply updates to existing preferences.
    pub fn apply_to(self, pref: &mut SubscriptionPreference, now: DateTime<Utc>) {
        if let Some(name) = self.calendar_name {
            pref.calendar_name = name.trim().to_string();
        }
        if let Some(v) = self.include_auspicious_times {
            pref.include_auspicious_times = v;
        }
        if let Some(v) = self.include_inauspicious_times {
            pref.include_inauspicious_times = v;
        }
        if let Some(v) = self.include_special_days {
            pref.include_special_days = v;
        }
        if let Some(v) = self.include_nakshatra {
            pref.include_nakshatra = v;
        }
        if let Some(v) = self.include_rs_warnings {
            pref.include_rs_warnings = v;
        }
        if let Some(v) = self.include_chandrashtama {
            pref.include_chandrashtama = v;
        }
        if let Some(days) = self.date_range_days {
            pref.date_range_days = days;
        }
        pref.updated_at = now;
    }
}
