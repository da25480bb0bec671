//! Pretty output formatting.

use panchangam_core::almanac::{DailyAlmanacEntry, DayResponse, DaySummary};
use panchangam_core::subscription::{
    AdminOverview, CreateSubscriptionResponse, SubscriptionDetails, SubscriptionPreference,
};

use crate::client::health::Readiness;

const RULE_WIDTH: usize = 40;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Format one day's summary for display.
pub fn format_summary(summary: &DaySummary) -> String {
    let mut output = format!(
        "{} ({})\n  {}",
        summary.date, summary.weekday, summary.special_day
    );
    if let Some(info) = &summary.affliction {
        output.push_str(&format!(
            "\n  ⚠️ RS: {} - {}",
            info.nakshatra_name_tamil, info.short_description
        ));
    }
    if !summary.chandrashtama.is_empty() {
        output.push_str(&format!(
            "\n  🔄 Chandrashtama: {}",
            summary.chandrashtama.join(", ")
        ));
    }

    let rows = [
        ("Tithi", &summary.tithi),
        ("Nakshatra", &summary.nakshatra),
        ("Yogam", &summary.nakshatra_yogam),
        ("Yoga", &summary.yoga),
        ("Karana", &summary.karana),
        ("Sunrise", &summary.sunrise),
        ("Sunset", &summary.sunset),
        ("Abhijit", &summary.abhijit_muhurta),
        ("Rahu Kalam", &summary.rahu_kalam),
        ("Yamagandam", &summary.yamagandam),
        ("Kuligai", &summary.kuligai),
    ];
    for (label, value) in rows {
        output.push_str(&format!("\n  {label:<11} {value}"));
    }
    if let Some(phase) = &summary.moon_phase {
        output.push_str(&format!("\n  {:<11} {phase}", "Moon"));
    }
    output
}

/// Format a day response for display.
pub fn format_day(day: &DayResponse) -> String {
    format_summary(&day.summary)
}

/// Format a list of rows for display, one line each.
pub fn format_entries(entries: &[DailyAlmanacEntry]) -> String {
    if entries.is_empty() {
        return "No panchangam data found.".to_string();
    }
    let mut output = format!("DAYS ({})\n", entries.len());
    output.push_str(&rule());
    for entry in entries {
        let summary = DaySummary::from_entry(entry);
        output.push_str(&format!(
            "\n{}  {:<24} {}",
            summary.date, summary.nakshatra, summary.special_day
        ));
    }
    output
}

/// Format preferences for display.
pub fn format_preferences(pref: &SubscriptionPreference) -> String {
    let flag = |on: bool| if on { "on" } else { "off" };
    format!(
        "  Calendar: {}\n  Days: {}\n  Auspicious: {}  Inauspicious: {}  Special days: {}\n  Nakshatra: {}  RS warnings: {}  Chandrashtama: {}",
        pref.calendar_name,
        pref.date_range_days,
        flag(pref.include_auspicious_times),
        flag(pref.include_inauspicious_times),
        flag(pref.include_special_days),
        flag(pref.include_nakshatra),
        flag(pref.include_rs_warnings),
        flag(pref.include_chandrashtama),
    )
}

/// Format a newly created subscription for display.
pub fn format_created(created: &CreateSubscriptionResponse) -> String {
    format!(
        "{}\n  ID: {}\n  Token: {}\n  Webcal: {}\n  ICS: {}\n{}",
        created.message,
        created.subscription_id,
        created.subscription_token,
        created.webcal_url,
        created.ics_url,
        format_preferences(&created.preferences)
    )
}

/// Format a subscription with its preferences for display.
pub fn format_details(details: &SubscriptionDetails) -> String {
    let sub = &details.subscription;
    let last = sub
        .last_accessed
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "never".to_string());
    format!(
        "{} ({})\n  Token: {}\n  Accessed: {} times, last {}\n  Webcal: {}\n  ICS: {}\n{}",
        sub.user_id,
        if sub.is_active { "active" } else { "inactive" },
        sub.subscription_token,
        sub.access_count,
        last,
        details.webcal_url,
        details.ics_url,
        format_preferences(&details.preferences)
    )
}

/// Format the admin overview for display.
pub fn format_overview(overview: &AdminOverview) -> String {
    let stats = &overview.stats;
    let mut output = format!(
        "SUBSCRIPTIONS: {} total, {} active ({}%), {} accessed today, {} preferences\n",
        stats.total, stats.active, stats.success_rate, stats.accessed_today, stats.total_preferences
    );
    output.push_str(&rule());
    if overview.subscriptions.is_empty() {
        output.push_str("\nNo subscriptions yet.");
    }
    for row in &overview.subscriptions {
        let marker = if row.needs_attention { "!" } else { " " };
        output.push_str(&format!(
            "\n{marker} {:<24} {:<26} {} fetches",
            row.subscription.user_id, row.status_label, row.subscription.access_count
        ));
    }
    output
}

/// Format a readiness probe result.
pub fn format_readiness(readiness: &Readiness) -> String {
    match (readiness.healthy, &readiness.error) {
        (true, _) => "Ready".to_string(),
        (false, Some(error)) => format!("Not ready: {error}"),
        (false, None) => "Not ready".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use panchangam_core::almanac::sample_entry;
    use panchangam_core::subscription::{
        access_status, compute_stats, Subscription, SubscriptionOverview,
    };

    #[test]
    fn test_format_day() {
        let day = DayResponse::from(sample_entry());
        let output = format_day(&day);

        assert!(output.starts_with("2025-09-15 (திங்கட்கிழமை)"));
        assert!(output.contains("நவமி (Navami)"));
        assert!(output.contains("Rahu Kalam"));
    }

    #[test]
    fn test_format_entries_empty() {
        assert_eq!(format_entries(&[]), "No panchangam data found.");
    }

    #[test]
    fn test_format_entries_lists_each_day() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let entries = vec![DailyAlmanacEntry::new(date), sample_entry()];

        let output = format_entries(&entries);

        assert!(output.starts_with("DAYS (2)"));
        assert!(output.contains("\n2025-09-01"));
        assert!(output.contains("\n2025-09-15"));
    }

    #[test]
    fn test_format_overview() {
        let now = Utc.with_ymd_and_hms(2025, 9, 15, 6, 0, 0).unwrap();
        let sub = Subscription::new("user-1", "tok", now);
        let stats = compute_stats(std::slice::from_ref(&sub), &[], now);
        let status = access_status(&sub, now);
        let overview = AdminOverview {
            stats,
            subscriptions: vec![SubscriptionOverview::new(sub, status)],
            preferences: vec![],
        };

        let output = format_overview(&overview);

        assert!(output.starts_with("SUBSCRIPTIONS: 1 total, 1 active (100%)"));
        assert!(output.contains("! user-1"));
        assert!(output.contains("Never Accessed"));
    }

    #[test]
    fn test_format_readiness() {
        let ready = Readiness {
            healthy: true,
            error: None,
        };
        assert_eq!(format_readiness(&ready), "Ready");

        let down = Readiness {
            healthy: false,
            error: Some("database is locked".to_string()),
        };
        assert_eq!(format_readiness(&down), "Not ready: database is locked");
    }
}
