use std::fmt;

use chrono::{DateTime, Utc};
use rand::{distr::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::ics::today_in_india;

use super::error::SubscriptionError;
use super::types::{Subscription, SubscriptionPreference};

/// Length of a subscription token.
pub const TOKEN_LENGTH: usize = 32;

/// Longest feed a subscription may request.
pub const MAX_DATE_RANGE_DAYS: u32 = 730;

/// Days without a fetch after which an active subscription counts as stale.
const STALE_AFTER_DAYS: i64 = 7;

/// Generate a random alphanumeric subscription token.
pub fn generate_subscription_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates preferences before they are stored.
pub fn validate_preference(pref: &SubscriptionPreference) -> Result<(), SubscriptionError> {
    if pref.user_id.trim().is_empty() {
        return Err(SubscriptionError::MissingUserId);
    }
    if pref.calendar_name.trim().is_empty() {
        return Err(SubscriptionError::EmptyCalendarName);
    }
    if pref.calendar_name.chars().count() > 100 {
        return Err(SubscriptionError::CalendarNameTooLong);
    }
    // The name becomes a filename in a Content-Disposition header.
    if pref
        .calendar_name
        .chars()
        .any(|c| c.is_control() || c == '"' || c == '\\')
    {
        return Err(SubscriptionError::InvalidCalendarName);
    }
    if pref.date_range_days == 0 || pref.date_range_days > MAX_DATE_RANGE_DAYS {
        return Err(SubscriptionError::InvalidDateRange {
            days: pref.date_range_days,
            max: MAX_DATE_RANGE_DAYS,
        });
    }
    Ok(())
}

/// Feed URLs handed to calendar clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionLinks {
    pub webcal_url: String,
    pub ics_url: String,
}

/// Builds the `webcal://` and `http(s)://` feed URLs for a token.
pub fn build_subscription_links(
    base: &Url,
    token: &str,
) -> Result<SubscriptionLinks, SubscriptionError> {
    let host = base
        .host_str()
        .ok_or_else(|| SubscriptionError::InvalidBaseUrl(base.to_string()))?;
    let authority = match base.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };
    let path = base.path().trim_end_matches('/');

    Ok(SubscriptionLinks {
        webcal_url: format!("webcal://{authority}{path}/api/calendar/webcal?token={token}"),
        ics_url: format!(
            "{}/api/calendar/ics?token={token}",
            base.as_str().trim_end_matches('/')
        ),
    })
}

/// Headline numbers for the admin overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionStats {
    pub total: usize,
    pub active: usize,
    pub total_preferences: usize,
    pub accessed_today: usize,
    /// Active subscriptions as a rounded percentage of all subscriptions.
    pub success_rate: u32,
}

/// Computes admin statistics. "Today" is the current date in India.
pub fn compute_stats(
    subscriptions: &[Subscription],
    preferences: &[SubscriptionPreference],
    now: DateTime<Utc>,
) -> SubscriptionStats {
    let total = subscriptions.len();
    let active = subscriptions.iter().filter(|s| s.is_active).count();
    let today = today_in_india(now);
    let accessed_today = subscriptions
        .iter()
        .filter(|s| s.last_accessed.is_some_and(|at| today_in_india(at) == today))
        .count();
    let success_rate = if total == 0 {
        0
    } else {
        (active as f64 / total as f64 * 100.0).round() as u32
    };

    SubscriptionStats {
        total,
        active,
        total_preferences: preferences.len(),
        accessed_today,
        success_rate,
    }
}

/// How recently a subscription's feed was fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "days", rename_all = "snake_case")]
pub enum AccessStatus {
    Inactive,
    NeverAccessed,
    ActiveToday,
    Active(i64),
    Stale(i64),
}

impl AccessStatus {
    /// Whether the status calls for attention on the admin page.
    pub fn needs_attention(&self) -> bool {
        matches!(
            self,
            AccessStatus::Inactive | AccessStatus::NeverAccessed | AccessStatus::Stale(_)
        )
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessStatus::Inactive => f.write_str("Inactive"),
            AccessStatus::NeverAccessed => f.write_str("Never Accessed"),
            AccessStatus::ActiveToday => f.write_str("Active (Today)"),
            AccessStatus::Active(days) => write!(f, "Active ({days} days ago)"),
            AccessStatus::Stale(days) => write!(f, "Stale ({days} days ago)"),
        }
    }
}

/// Classifies a subscription by whole days since its last fetch.
pub fn access_status(subscription: &Subscription, now: DateTime<Utc>) -> AccessStatus {
    if !subscription.is_active {
        return AccessStatus::Inactive;
    }
    let Some(last) = subscription.last_accessed else {
        return AccessStatus::NeverAccessed;
    };
    match (now - last).num_days() {
        days if days < 1 => AccessStatus::ActiveToday,
        days if days < STALE_AFTER_DAYS => AccessStatus::Active(days),
        days => AccessStatus::Stale(days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 15, 6, 0, 0).unwrap()
    }

    fn pref() -> SubscriptionPreference {
        SubscriptionPreference::new("user-1", now())
    }

    #[test]
    fn test_token_shape() {
        let token = generate_subscription_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(token, generate_subscription_token());
    }

    #[test]
    fn test_validate_default_preference() {
        assert_eq!(validate_preference(&pref()), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let mut p = pref();
        p.calendar_name = "   ".to_string();
        assert_eq!(
            validate_preference(&p),
            Err(SubscriptionError::EmptyCalendarName)
        );

        p.calendar_name = "x".repeat(101);
        assert_eq!(
            validate_preference(&p),
            Err(SubscriptionError::CalendarNameTooLong)
        );

        p.calendar_name = "bad\"name".to_string();
        assert_eq!(
            validate_preference(&p),
            Err(SubscriptionError::InvalidCalendarName)
        );

        p.calendar_name = "பஞ்சாங்கம்".to_string();
        assert_eq!(validate_preference(&p), Ok(()));
    }

    #[test]
    fn test_validate_rejects_missing_user() {
        let mut p = pref();
        p.user_id = String::new();
        assert_eq!(validate_preference(&p), Err(SubscriptionError::MissingUserId));
    }

    #[test]
    fn test_validate_date_range_bounds() {
        let mut p = pref();
        p.date_range_days = 0;
        assert!(validate_preference(&p).is_err());
        p.date_range_days = 731;
        assert!(validate_preference(&p).is_err());
        p.date_range_days = 730;
        assert!(validate_preference(&p).is_ok());
    }

    #[test]
    fn test_links_for_local_base() {
        let base = Url::parse("http://localhost:3000").unwrap();
        let links = build_subscription_links(&base, "abc123").unwrap();

        assert_eq!(
            links.webcal_url,
            "webcal://localhost:3000/api/calendar/webcal?token=abc123"
        );
        assert_eq!(
            links.ics_url,
            "http://localhost:3000/api/calendar/ics?token=abc123"
        );
    }

    #[test]
    fn test_links_for_base_with_path() {
        let base = Url::parse("https://example.com/panchangam/").unwrap();
        let links = build_subscription_links(&base, "abc123").unwrap();

        assert_eq!(
            links.webcal_url,
            "webcal://example.com/panchangam/api/calendar/webcal?token=abc123"
        );
        assert_eq!(
            links.ics_url,
            "https://example.com/panchangam/api/calendar/ics?token=abc123"
        );
    }

    #[test]
    fn test_stats() {
        let mut accessed = Subscription::new("a", "t1", now());
        accessed.touch(now() - Duration::hours(2));
        let mut inactive = Subscription::new("b", "t2", now());
        inactive.is_active = false;
        let never = Subscription::new("c", "t3", now());

        let stats = compute_stats(&[accessed, inactive, never], &[pref(), pref()], now());

        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.total_preferences, 2);
        assert_eq!(stats.accessed_today, 1);
        assert_eq!(stats.success_rate, 67);
    }

    #[test]
    fn test_stats_empty() {
        let stats = compute_stats(&[], &[], now());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.success_rate, 0);
    }

    #[test]
    fn test_access_status() {
        let mut sub = Subscription::new("a", "t", now());
        assert_eq!(access_status(&sub, now()), AccessStatus::NeverAccessed);

        sub.touch(now() - Duration::hours(3));
        assert_eq!(access_status(&sub, now()), AccessStatus::ActiveToday);

        sub.touch(now() - Duration::days(3));
        assert_eq!(access_status(&sub, now()), AccessStatus::Active(3));
        assert_eq!(access_status(&sub, now()).to_string(), "Active (3 days ago)");

        sub.touch(now() - Duration::days(10));
        assert_eq!(access_status(&sub, now()), AccessStatus::Stale(10));
        assert!(access_status(&sub, now()).needs_attention());

        sub.is_active = false;
        assert_eq!(access_status(&sub, now()).to_string(), "Inactive");
    }
}
