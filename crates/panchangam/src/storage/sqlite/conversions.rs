//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::Row;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use panchangam_core::almanac::DailyAlmanacEntry;
use panchangam_core::storage::RepositoryError;
use panchangam_core::subscription::{Subscription, SubscriptionPreference};

/// Almanac row values in `UPSERT_DAY` parameter order.
pub struct DayParams {
    pub date: String,
    pub vaara: Option<String>,
    pub times: [Option<String>; 4],
    pub periods: [String; 4],
    pub main_nakshatra: Option<String>,
    pub nakshatra_yogam: Option<String>,
    pub cosmic_score: Option<f64>,
    pub tarabalam_type: Option<String>,
    pub windows: [Option<String>; 4],
    pub flags: [bool; 10],
    pub chandrashtama_for: String,
}

/// Flatten an entry into column values, encoding period lists as JSON.
pub fn day_params(entry: &DailyAlmanacEntry) -> Result<DayParams, RepositoryError> {
    let stamp = |t: &Option<DateTime<FixedOffset>>| t.map(|t| t.to_rfc3339());

    Ok(DayParams {
        date: format_date(&entry.date),
        vaara: entry.vaara.clone(),
        times: [
            stamp(&entry.sunrise),
            stamp(&entry.sunset),
            stamp(&entry.moonrise),
            stamp(&entry.moonset),
        ],
        periods: [
            to_json(&entry.tithi)?,
            to_json(&entry.nakshatra)?,
            to_json(&entry.yoga)?,
            to_json(&entry.karana)?,
        ],
        main_nakshatra: entry.main_nakshatra.clone(),
        nakshatra_yogam: entry.nakshatra_yogam.clone(),
        cosmic_score: entry.cosmic_score,
        tarabalam_type: entry.tarabalam_type.clone(),
        windows: [
            entry.rahu_kalam.clone(),
            entry.yamagandam.clone(),
            entry.kuligai.clone(),
            entry.abhijit_muhurta.clone(),
        ],
        flags: [
            entry.is_amavasai,
            entry.is_pournami,
            entry.is_ekadashi,
            entry.is_dwadashi,
            entry.is_ashtami,
            entry.is_navami,
            entry.is_trayodashi,
            entry.is_sashti,
            entry.is_valar_pirai,
            entry.is_thei_pirai,
        ],
        chandrashtama_for: to_json(&entry.chandrashtama_for)?,
    })
}

/// Convert a SQLite row to a DailyAlmanacEntry.
///
/// Expected columns: the `daily_panchangam` columns in schema order.
pub fn row_to_day(row: &Row) -> rusqlite::Result<DailyAlmanacEntry> {
    let date: String = row.get(0)?;
    let flag = |idx: usize| row.get::<_, bool>(idx);

    Ok(DailyAlmanacEntry {
        date: parse_date(&date)?,
        vaara: row.get(1)?,
        sunrise: parse_timestamp(row.get(2)?),
        sunset: parse_timestamp(row.get(3)?),
        moonrise: parse_timestamp(row.get(4)?),
        moonset: parse_timestamp(row.get(5)?),
        tithi: from_json_column(row, 6)?,
        nakshatra: from_json_column(row, 7)?,
        yoga: from_json_column(row, 8)?,
        karana: from_json_column(row, 9)?,
        main_nakshatra: row.get(10)?,
        nakshatra_yogam: row.get(11)?,
        cosmic_score: row.get(12)?,
        tarabalam_type: row.get(13)?,
        rahu_kalam: row.get(14)?,
        yamagandam: row.get(15)?,
        kuligai: row.get(16)?,
        abhijit_muhurta: row.get(17)?,
        is_amavasai: flag(18)?,
        is_pournami: flag(19)?,
        is_ekadashi: flag(20)?,
        is_dwadashi: flag(21)?,
        is_ashtami: flag(22)?,
        is_navami: flag(23)?,
        is_trayodashi: flag(24)?,
        is_sashti: flag(25)?,
        is_valar_pirai: flag(26)?,
        is_thei_pirai: flag(27)?,
        chandrashtama_for: from_json_column(row, 28)?,
    })
}

/// Convert a SQLite row to a Subscription.
///
/// Expected columns: id, user_id, subscription_token, is_active, created_at,
/// updated_at, last_accessed, access_count
pub fn row_to_subscription(row: &Row) -> rusqlite::Result<Subscription> {
    let id: String = row.get(0)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;
    let last_accessed: Option<String> = row.get(6)?;
    let access_count: i64 = row.get(7)?;

    Ok(Subscription {
        id: parse_uuid(&id)?,
        user_id: row.get(1)?,
        subscription_token: row.get(2)?,
        is_active: row.get(3)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
        last_accessed: last_accessed.as_deref().map(parse_datetime).transpose()?,
        access_count: u64::try_from(access_count).unwrap_or_default(),
    })
}

/// Convert a SQLite row to a SubscriptionPreference.
///
/// Expected columns: id, user_id, calendar_name, the six include flags,
/// date_range_days, created_at, updated_at
pub fn row_to_preference(row: &Row) -> rusqlite::Result<SubscriptionPreference> {
    let id: String = row.get(0)?;
    let created_at: String = row.get(10)?;
    let updated_at: String = row.get(11)?;

    Ok(SubscriptionPreference {
        id: parse_uuid(&id)?,
        user_id: row.get(1)?,
        calendar_name: row.get(2)?,
        include_auspicious_times: row.get(3)?,
        include_inauspicious_times: row.get(4)?,
        include_special_days: row.get(5)?,
        include_nakshatra: row.get(6)?,
        include_rs_warnings: row.get(7)?,
        include_chandrashtama: row.get(8)?,
        date_range_days: row.get(9)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RepositoryError> {
    serde_json::to_string(value).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn from_json_column<T: DeserializeOwned>(row: &Row, idx: usize) -> rusqlite::Result<T> {
    let json: String = row.get(idx)?;
    serde_json::from_str(&json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Unparseable timestamps become None, matching the lenient JSON decoding.
fn parse_timestamp(s: Option<String>) -> Option<DateTime<FixedOffset>> {
    s.and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
}

/// Parse a UUID from string.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))
}

/// Parse a date from ISO 8601 string (YYYY-MM-DD).
fn parse_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Format a NaiveDate for SQLite storage (YYYY-MM-DD).
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
