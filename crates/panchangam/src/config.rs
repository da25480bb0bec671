use std::env;

use panchangam_core::ics::DEFAULT_CALENDAR_NAME;
use url::Url;

const DEFAULT_SITE_URL: &str = "http://localhost:3000";
const DEFAULT_SQLITE_PATH: &str = "panchangam.db";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public base URL used to build subscription links
    pub site_url: Url,
    /// Path to SQLite database file (default: "panchangam.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Base URL of the PostgREST row API
    /// Note: Only used when the `postgrest` feature is enabled.
    #[allow(dead_code)]
    pub postgrest_url: Option<String>,
    /// API key sent as `apikey` and bearer token to PostgREST
    #[allow(dead_code)]
    pub postgrest_api_key: Option<String>,
    /// Calendar name for new subscriptions and ad hoc exports
    pub default_calendar_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SITE_URL` - Public base URL (default: "http://localhost:3000")
    /// - `SQLITE_PATH` - SQLite database path (default: "panchangam.db")
    /// - `POSTGREST_URL` - PostgREST base URL (no default)
    /// - `POSTGREST_API_KEY` - PostgREST API key (no default)
    /// - `DEFAULT_CALENDAR_NAME` - Calendar name (default: "Tamil Panchangam")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let site_url = match non_empty("SITE_URL") {
            Some(raw) => Url::parse(&raw).unwrap_or_else(|err| {
                tracing::warn!(%raw, error = %err, "Invalid SITE_URL, using default");
                default_site_url()
            }),
            None => default_site_url(),
        };

        Self {
            site_url,
            sqlite_path: non_empty("SQLITE_PATH").unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string()),
            postgrest_url: non_empty("POSTGREST_URL"),
            postgrest_api_key: non_empty("POSTGREST_API_KEY"),
            default_calendar_name: non_empty("DEFAULT_CALENDAR_NAME")
                .unwrap_or_else(|| DEFAULT_CALENDAR_NAME.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_site_url() -> Url {
    Url::parse(DEFAULT_SITE_URL).expect("default site URL is valid")
}
