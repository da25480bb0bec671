use chrono::NaiveDate;
use serde::Deserialize;

use panchangam_core::serde::deserialize_optional_date;

/// Query parameters for the day page (GET /?date=).
#[derive(Debug, Default, Deserialize)]
pub struct DayQuery {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date: Option<NaiveDate>,
}

/// Query parameters for a range of almanac rows (GET /api/almanac).
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end: Option<NaiveDate>,
}
