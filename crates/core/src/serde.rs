//! Serde helper functions for almanac rows and query strings.
//!
//! Almanac rows come from a store that is not strict about shapes: period
//! lists arrive as arrays, single objects, JSON-encoded strings, or null, and
//! boolean flags may be null. These helpers accept all of those and degrade to
//! empty values instead of failing the whole row.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional NaiveDate, treating empty strings as None.
/// Expects format: YYYY-MM-DD
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize a boolean that may be null, treating null as false.
pub fn deserialize_null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let b: Option<bool> = Option::deserialize(deserializer)?;
    Ok(b.unwrap_or(false))
}

/// Deserialize an RFC 3339 timestamp, treating null or unparseable values as None.
pub fn deserialize_lenient_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok()))
}

/// Deserialize a list of records that may arrive as an array, a single
/// object, a JSON-encoded string of either, or null.
///
/// Elements that do not match `T` are dropped.
pub fn deserialize_lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_list_from_value(value))
}

fn lenient_list_from_value<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        Value::Object(_) => serde_json::from_value(value).into_iter().collect(),
        Value::String(s) => match serde_json::from_str::<Value>(&s) {
            Ok(inner @ (Value::Array(_) | Value::Object(_))) => lenient_list_from_value(inner),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Deserialize a list of names that may arrive as an array of strings, a
/// JSON-encoded array, a comma-separated string, or null.
pub fn deserialize_name_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(name_list_from_value(value))
}

fn name_list_from_value(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.starts_with('[') {
                if let Ok(inner) = serde_json::from_str::<Value>(trimmed) {
                    return name_list_from_value(inner);
                }
            }
            trimmed
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Deserialize a query-string flag. Only the literal `true` enables it;
/// a missing parameter stays None so callers can pick their own default.
pub fn deserialize_query_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim() == "true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Period {
        name: String,
    }

    #[derive(Debug, Deserialize)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        date_field: Option<NaiveDate>,
        #[serde(default, deserialize_with = "deserialize_null_as_false")]
        flag: bool,
        #[serde(default, deserialize_with = "deserialize_lenient_timestamp")]
        at: Option<DateTime<FixedOffset>>,
        #[serde(default, deserialize_with = "deserialize_lenient_list")]
        periods: Vec<Period>,
        #[serde(default, deserialize_with = "deserialize_name_list")]
        names: Vec<String>,
        #[serde(default, deserialize_with = "deserialize_query_flag")]
        query_flag: Option<bool>,
    }

    fn parse(json: &str) -> TestStruct {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_deserialize_optional_string_empty() {
        assert_eq!(parse(r#"{"string_field": "  "}"#).string_field, None);
        assert_eq!(
            parse(r#"{"string_field": "hello"}"#).string_field,
            Some("hello".to_string())
        );
    }

    #[test]
    fn test_deserialize_optional_date() {
        assert_eq!(
            parse(r#"{"date_field": "2025-09-15"}"#).date_field,
            NaiveDate::from_ymd_opt(2025, 9, 15)
        );
        assert_eq!(parse(r#"{"date_field": ""}"#).date_field, None);
        assert!(serde_json::from_str::<TestStruct>(r#"{"date_field": "soon"}"#).is_err());
    }

    #[test]
    fn test_null_flag_is_false() {
        assert!(!parse(r#"{"flag": null}"#).flag);
        assert!(!parse(r#"{}"#).flag);
        assert!(parse(r#"{"flag": true}"#).flag);
    }

    #[test]
    fn test_lenient_timestamp() {
        let parsed = parse(r#"{"at": "2025-09-15T00:31:25+00:00"}"#);
        assert_eq!(parsed.at.unwrap().to_rfc3339(), "2025-09-15T00:31:25+00:00");
        assert_eq!(parse(r#"{"at": "yesterday"}"#).at, None);
        assert_eq!(parse(r#"{"at": null}"#).at, None);
    }

    #[test]
    fn test_lenient_list_shapes() {
        let array = parse(r#"{"periods": [{"name": "a"}, {"name": "b"}]}"#);
        assert_eq!(array.periods.len(), 2);

        let single = parse(r#"{"periods": {"name": "a"}}"#);
        assert_eq!(single.periods, vec![Period { name: "a".into() }]);

        let encoded = parse(r#"{"periods": "[{\"name\": \"a\"}]"}"#);
        assert_eq!(encoded.periods, vec![Period { name: "a".into() }]);

        assert!(parse(r#"{"periods": null}"#).periods.is_empty());
        assert!(parse(r#"{"periods": "garbage"}"#).periods.is_empty());
    }

    #[test]
    fn test_lenient_list_drops_bad_elements() {
        let parsed = parse(r#"{"periods": [{"name": "a"}, 42, {"other": 1}]}"#);
        assert_eq!(parsed.periods, vec![Period { name: "a".into() }]);
    }

    #[test]
    fn test_name_list_shapes() {
        assert_eq!(
            parse(r#"{"names": ["Vishakha", "விசாகம்"]}"#).names,
            vec!["Vishakha", "விசாகம்"]
        );
        assert_eq!(
            parse(r#"{"names": "Vishakha, Anuradha"}"#).names,
            vec!["Vishakha", "Anuradha"]
        );
        assert_eq!(
            parse(r#"{"names": "[\"Vishakha\"]"}"#).names,
            vec!["Vishakha"]
        );
        assert!(parse(r#"{"names": ""}"#).names.is_empty());
        assert!(parse(r#"{"names": null}"#).names.is_empty());
    }

    #[test]
    fn test_query_flag() {
        assert_eq!(parse(r#"{"query_flag": "true"}"#).query_flag, Some(true));
        assert_eq!(parse(r#"{"query_flag": "false"}"#).query_flag, Some(false));
        assert_eq!(parse(r#"{"query_flag": "yes"}"#).query_flag, Some(false));
        assert_eq!(parse(r#"{}"#).query_flag, None);
    }
}
