use chrono::NaiveDate;
use serde::Deserialize;

use panchangam_core::ics::IcsOptions;
use panchangam_core::serde::{
    deserialize_optional_date, deserialize_optional_string, deserialize_query_flag,
};

/// Query parameters for GET /api/calendar/ics.
///
/// With a `token` every other parameter is ignored and the subscription's
/// stored preferences apply.
#[derive(Debug, Default, Deserialize)]
pub struct IcsQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_query_flag")]
    pub include_auspicious: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_query_flag")]
    pub include_inauspicious: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_query_flag")]
    pub include_special_days: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_query_flag")]
    pub include_nakshatra: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_query_flag")]
    pub include_rs_warnings: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_query_flag")]
    pub include_chandrashtama: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub calendar_name: Option<String>,
}

impl IcsQuery {
    /// Formatter options for an ad hoc export. Absent flags default to on.
    pub fn options(&self, default_calendar_name: &str) -> IcsOptions {
        IcsOptions {
            include_auspicious: self.include_auspicious.unwrap_or(true),
            include_inauspicious: self.include_inauspicious.unwrap_or(true),
            include_special_days: self.include_special_days.unwrap_or(true),
            include_nakshatra: self.include_nakshatra.unwrap_or(true),
            include_affliction_warnings: self.include_rs_warnings.unwrap_or(true),
            include_moon_opposition: self.include_chandrashtama.unwrap_or(true),
            calendar_name: self
                .calendar_name
                .clone()
                .unwrap_or_else(|| default_calendar_name.to_string()),
        }
    }
}

/// Query parameters for GET /api/calendar/webcal.
#[derive(Debug, Default, Deserialize)]
pub struct TokenQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> IcsQuery {
        let uri: axum::http::Uri = format!("/api/calendar/ics?{query}").parse().unwrap();
        axum::extract::Query::<IcsQuery>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_absent_flags_default_to_true() {
        let options = parse("").options("Tamil Panchangam");
        assert_eq!(options, IcsOptions::default());
    }

    #[test]
    fn test_only_literal_true_enables() {
        let query = "include_auspicious=false&include_inauspicious=1&include_special_days=true";
        let options = parse(query).options("Tamil Panchangam");

        assert!(!options.include_auspicious);
        assert!(!options.include_inauspicious);
        assert!(options.include_special_days);
        assert!(options.include_nakshatra);
    }

    #[test]
    fn test_dates_and_name() {
        let query = parse("start_date=2025-09-01&end_date=2025-09-30&calendar_name=Family");

        assert_eq!(query.start_date, NaiveDate::from_ymd_opt(2025, 9, 1));
        assert_eq!(query.end_date, NaiveDate::from_ymd_opt(2025, 9, 30));
        assert_eq!(query.options("Tamil Panchangam").calendar_name, "Family");
    }

    #[test]
    fn test_blank_values_are_absent() {
        let query = parse("token=&start_date=&calendar_name=");

        assert_eq!(query.token, None);
        assert_eq!(query.start_date, None);
        assert_eq!(query.options("Default").calendar_name, "Default");
    }
}
