use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ics::{IcsOptions, DEFAULT_CALENDAR_NAME};

/// Days of almanac data a subscription feed covers unless configured.
pub const DEFAULT_DATE_RANGE_DAYS: u32 = 365;

fn default_true() -> bool {
    true
}

/// A user's export settings for their calendar feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPreference {
    pub id: Uuid,
    pub user_id: String,
    pub calendar_name: String,
    pub include_auspicious_times: bool,
    pub include_inauspicious_times: bool,
    pub include_special_days: bool,
    #[serde(default = "default_true")]
    pub include_nakshatra: bool,
    pub include_rs_warnings: bool,
    pub include_chandrashtama: bool,
    pub date_range_days: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubscriptionPreference {
    /// Creates a preference with every category enabled.
    pub fn new(user_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            calendar_name: DEFAULT_CALENDAR_NAME.to_string(),
            include_auspicious_times: true,
            include_inauspicious_times: true,
            include_special_days: true,
            include_nakshatra: true,
            include_rs_warnings: true,
            include_chandrashtama: true,
            date_range_days: DEFAULT_DATE_RANGE_DAYS,
            created_at: now,
            updated_at: now,
        }
    }

    /// Formatter options matching these preferences.
    pub fn ics_options(&self) -> IcsOptions {
        IcsOptions {
            include_auspicious: self.include_auspicious_times,
            include_inauspicious: self.include_inauspicious_times,
            include_special_days: self.include_special_days,
            include_nakshatra: self.include_nakshatra,
            include_affliction_warnings: self.include_rs_warnings,
            include_moon_opposition: self.include_chandrashtama,
            calendar_name: self.calendar_name.clone(),
        }
    }
}

/// A webcal subscription: an opaque token that resolves to a user's preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: String,
    pub subscription_token: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub last_accessed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub access_count: u64,
}

impl Subscription {
    /// Creates an active subscription that has never been fetched.
    pub fn new(user_id: impl Into<String>, token: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            subscription_token: token.into(),
            is_active: true,
            created_at: now,
            updated_at: now,
            last_accessed: None,
            access_count: 0,
        }
    }

    /// Records a feed fetch.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.last_accessed = Some(at);
        self.access_count += 1;
    }
}

/// How a request identifies a subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionKey {
    Token(String),
    UserId(String),
}

impl SubscriptionKey {
    /// Builds a key from query parameters, preferring the token.
    /// Blank values count as absent.
    pub fn from_query(token: Option<&str>, user_id: Option<&str>) -> Option<Self> {
        fn present(s: Option<&str>) -> Option<&str> {
            s.map(str::trim).filter(|s| !s.is_empty())
        }

        present(token)
            .map(|t| SubscriptionKey::Token(t.to_string()))
            .or_else(|| present(user_id).map(|u| SubscriptionKey::UserId(u.to_string())))
    }

    /// Whether the key identifies `subscription`.
    pub fn matches(&self, subscription: &Subscription) -> bool {
        match self {
            SubscriptionKey::Token(token) => &subscription.subscription_token == token,
            SubscriptionKey::UserId(user_id) => &subscription.user_id == user_id,
        }
    }
}

impl std::fmt::Display for SubscriptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionKey::Token(_) => f.write_str("token"),
            SubscriptionKey::UserId(user_id) => write!(f, "user_id={user_id}"),
        }
    }
}
