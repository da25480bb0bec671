use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::ics::india_standard_time;

use super::nakshatra::{affliction_info, to_tamil, to_tamil_names, AfflictionInfo};
use super::special_day::SpecialDay;
use super::types::DailyAlmanacEntry;

/// Placeholder shown for absent fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Label shown when no special-day flag is set.
const NORMAL_DAY: &str = "Normal Day";

/// Display model for one almanac day.
///
/// Every field is ready to render; absent data becomes [`NOT_AVAILABLE`].
/// Clock times are shown in India Standard Time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: String,
    pub weekday: String,
    pub tithi: String,
    pub nakshatra: String,
    pub nakshatra_tamil: String,
    pub nakshatra_yogam: String,
    pub yoga: String,
    pub karana: String,
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub rahu_kalam: String,
    pub yamagandam: String,
    pub kuligai: String,
    pub abhijit_muhurta: String,
    pub special_day: String,
    pub moon_phase: Option<String>,
    pub cosmic_score: String,
    pub tarabalam_type: String,
    pub affliction: Option<AfflictionInfo>,
    pub chandrashtama: Vec<String>,
}

impl DaySummary {
    pub fn from_entry(entry: &DailyAlmanacEntry) -> Self {
        let nakshatra = entry.primary_nakshatra();

        Self {
            date: entry.date.format("%Y-%m-%d").to_string(),
            weekday: entry
                .vaara
                .clone()
                .unwrap_or_else(|| entry.date.format("%A").to_string()),
            tithi: or_na(entry.tithi_name()),
            nakshatra: or_na(nakshatra),
            nakshatra_tamil: nakshatra.map(to_tamil).unwrap_or_else(na),
            nakshatra_yogam: or_na(entry.nakshatra_yogam.as_deref()),
            yoga: or_na(entry.yoga_name()),
            karana: or_na(entry.karana_name()),
            sunrise: format_clock(entry.sunrise),
            sunset: format_clock(entry.sunset),
            moonrise: format_clock(entry.moonrise),
            moonset: format_clock(entry.moonset),
            rahu_kalam: or_na(entry.rahu_kalam.as_deref()),
            yamagandam: or_na(entry.yamagandam.as_deref()),
            kuligai: or_na(entry.kuligai.as_deref()),
            abhijit_muhurta: or_na(entry.abhijit_muhurta.as_deref()),
            special_day: SpecialDay::headline(entry)
                .map(|day| day.label())
                .unwrap_or_else(|| NORMAL_DAY.to_string()),
            moon_phase: entry.moon_phase().map(|phase| phase.label()),
            cosmic_score: entry
                .cosmic_score
                .map(|score| score.to_string())
                .unwrap_or_else(na),
            tarabalam_type: or_na(entry.tarabalam_type.as_deref()),
            affliction: nakshatra.and_then(affliction_info),
            chandrashtama: to_tamil_names(&entry.chandrashtama_for),
        }
    }

    /// Whether the day's nakshatra is in the affliction group.
    pub fn is_afflicted(&self) -> bool {
        self.affliction.is_some()
    }
}

/// A stored row together with its display model, as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayResponse {
    pub entry: DailyAlmanacEntry,
    pub summary: DaySummary,
}

impl From<DailyAlmanacEntry> for DayResponse {
    fn from(entry: DailyAlmanacEntry) -> Self {
        let summary = DaySummary::from_entry(&entry);
        Self { entry, summary }
    }
}

fn na() -> String {
    NOT_AVAILABLE.to_string()
}

fn or_na(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_else(na)
}

fn format_clock(value: Option<DateTime<FixedOffset>>) -> String {
    value
        .map(|at| {
            at.with_timezone(&india_standard_time())
                .format("%-I:%M %p")
                .to_string()
        })
        .unwrap_or_else(na)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almanac::sample_entry;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_entry_shows_not_available() {
        let entry = DailyAlmanacEntry::new(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
        let summary = DaySummary::from_entry(&entry);

        assert_eq!(summary.weekday, "Monday");
        assert_eq!(summary.tithi, NOT_AVAILABLE);
        assert_eq!(summary.nakshatra, NOT_AVAILABLE);
        assert_eq!(summary.nakshatra_tamil, NOT_AVAILABLE);
        assert_eq!(summary.sunrise, NOT_AVAILABLE);
        assert_eq!(summary.rahu_kalam, NOT_AVAILABLE);
        assert_eq!(summary.cosmic_score, NOT_AVAILABLE);
        assert_eq!(summary.special_day, "Normal Day");
        assert_eq!(summary.moon_phase, None);
        assert!(!summary.is_afflicted());
        assert!(summary.chandrashtama.is_empty());
    }

    #[test]
    fn test_sample_entry_summary() {
        let summary = DaySummary::from_entry(&sample_entry());

        assert_eq!(summary.date, "2025-09-15");
        assert_eq!(summary.weekday, "திங்கட்கிழமை");
        assert_eq!(summary.tithi, "நவமி");
        assert_eq!(summary.nakshatra, "மிருகசீரிடம்");
        assert_eq!(summary.nakshatra_tamil, "மிருகசீரிடம்");
        assert_eq!(summary.sunrise, "6:01 AM");
        assert_eq!(summary.sunset, "6:06 PM");
        assert_eq!(summary.rahu_kalam, "7:30 AM - 9:00 AM");
        assert_eq!(summary.special_day, "நவமி (Navami)");
        assert_eq!(
            summary.moon_phase.as_deref(),
            Some("தேய்பிறை (Waning Moon)")
        );
        assert_eq!(summary.cosmic_score, "7");
        assert_eq!(summary.tarabalam_type, NOT_AVAILABLE);
        assert!(!summary.is_afflicted());
        assert_eq!(summary.chandrashtama, vec!["விசாகம்"]);
    }

    #[test]
    fn test_afflicted_day() {
        let mut entry = DailyAlmanacEntry::new(NaiveDate::from_ymd_opt(2025, 9, 20).unwrap());
        entry.main_nakshatra = Some("Magha".to_string());
        let summary = DaySummary::from_entry(&entry);

        assert_eq!(summary.nakshatra_tamil, "மகம்");
        let info = summary.affliction.unwrap();
        assert_eq!(info.nakshatra_name, "Magha");
    }
}
