//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Daily almanac rows
CREATE TABLE IF NOT EXISTS daily_panchangam (
    date TEXT PRIMARY KEY,
    vaara TEXT,
    sunrise TEXT,
    sunset TEXT,
    moonrise TEXT,
    moonset TEXT,
    tithi TEXT NOT NULL DEFAULT '[]',
    nakshatra TEXT NOT NULL DEFAULT '[]',
    yoga TEXT NOT NULL DEFAULT '[]',
    karana TEXT NOT NULL DEFAULT '[]',
    main_nakshatra TEXT,
    nakshatra_yogam TEXT,
    cosmic_score REAL,
    tarabalam_type TEXT,
    rahu_kalam TEXT,
    yamagandam TEXT,
    kuligai TEXT,
    abhijit_muhurta TEXT,
    is_amavasai INTEGER NOT NULL DEFAULT 0,
    is_pournami INTEGER NOT NULL DEFAULT 0,
    is_ekadashi INTEGER NOT NULL DEFAULT 0,
    is_dwadashi INTEGER NOT NULL DEFAULT 0,
    is_ashtami INTEGER NOT NULL DEFAULT 0,
    is_navami INTEGER NOT NULL DEFAULT 0,
    is_trayodashi INTEGER NOT NULL DEFAULT 0,
    is_sashti INTEGER NOT NULL DEFAULT 0,
    is_valar_pirai INTEGER NOT NULL DEFAULT 0,
    is_thei_pirai INTEGER NOT NULL DEFAULT 0,
    chandrashtama_for TEXT NOT NULL DEFAULT '[]'
);

-- Webcal subscriptions
CREATE TABLE IF NOT EXISTS calendar_subscriptions (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL UNIQUE,
    subscription_token TEXT NOT NULL UNIQUE,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    last_accessed TEXT,
    access_count INTEGER NOT NULL DEFAULT 0
);

-- Export preferences, one row per user
CREATE TABLE IF NOT EXISTS user_calendar_preferences (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL UNIQUE,
    calendar_name TEXT NOT NULL,
    include_auspicious_times INTEGER NOT NULL,
    include_inauspicious_times INTEGER NOT NULL,
    include_special_days INTEGER NOT NULL,
    include_nakshatra INTEGER NOT NULL DEFAULT 1,
    include_rs_warnings INTEGER NOT NULL,
    include_chandrashtama INTEGER NOT NULL,
    date_range_days INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_subscriptions_created_at ON calendar_subscriptions(created_at);
CREATE INDEX IF NOT EXISTS idx_preferences_created_at ON user_calendar_preferences(created_at);
"#;

// Almanac queries
pub const SELECT_DAY: &str = r#"
SELECT date, vaara, sunrise, sunset, moonrise, moonset,
       tithi, nakshatra, yoga, karana, main_nakshatra, nakshatra_yogam, cosmic_score,
       tarabalam_type, rahu_kalam, yamagandam, kuligai, abhijit_muhurta,
       is_amavasai, is_pournami, is_ekadashi, is_dwadashi, is_ashtami, is_navami,
       is_trayodashi, is_sashti, is_valar_pirai, is_thei_pirai, chandrashtama_for
FROM daily_panchangam
WHERE date = ?1
"#;

pub const SELECT_DAYS_IN_RANGE: &str = r#"
SELECT date, vaara, sunrise, sunset, moonrise, moonset,
       tithi, nakshatra, yoga, karana, main_nakshatra, nakshatra_yogam, cosmic_score,
       tarabalam_type, rahu_kalam, yamagandam, kuligai, abhijit_muhurta,
       is_amavasai, is_pournami, is_ekadashi, is_dwadashi, is_ashtami, is_navami,
       is_trayodashi, is_sashti, is_valar_pirai, is_thei_pirai, chandrashtama_for
FROM daily_panchangam
WHERE date >= ?1 AND date <= ?2
ORDER BY date ASC
"#;

pub const UPSERT_DAY: &str = r#"
INSERT OR REPLACE INTO daily_panchangam (
       date, vaara, sunrise, sunset, moonrise, moonset,
       tithi, nakshatra, yoga, karana, main_nakshatra, nakshatra_yogam, cosmic_score,
       tarabalam_type, rahu_kalam, yamagandam, kuligai, abhijit_muhurta,
       is_amavasai, is_pournami, is_ekadashi, is_dwadashi, is_ashtami, is_navami,
       is_trayodashi, is_sashti, is_valar_pirai, is_thei_pirai, chandrashtama_for
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18,
        ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28, ?29)
"#;

// Subscription queries
pub const INSERT_SUBSCRIPTION: &str = r#"
INSERT INTO calendar_subscriptions (id, user_id, subscription_token, is_active, created_at, updated_at, last_accessed, access_count)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const SELECT_SUBSCRIPTION_BY_TOKEN: &str = r#"
SELECT id, user_id, subscription_token, is_active, created_at, updated_at, last_accessed, access_count
FROM calendar_subscriptions
WHERE subscription_token = ?1
"#;

pub const SELECT_SUBSCRIPTION_BY_USER: &str = r#"
SELECT id, user_id, subscription_token, is_active, created_at, updated_at, last_accessed, access_count
FROM calendar_subscriptions
WHERE user_id = ?1
"#;

pub const SELECT_SUBSCRIPTIONS: &str = r#"
SELECT id, user_id, subscription_token, is_active, created_at, updated_at, last_accessed, access_count
FROM calendar_subscriptions
ORDER BY created_at DESC
"#;

pub const RECORD_ACCESS: &str = r#"
UPDATE calendar_subscriptions
SET last_accessed = ?2, access_count = access_count + 1
WHERE subscription_token = ?1
"#;

pub const DELETE_SUBSCRIPTION: &str = r#"
DELETE FROM calendar_subscriptions
WHERE user_id = ?1
"#;

// Preference queries
pub const INSERT_PREFERENCE: &str = r#"
INSERT INTO user_calendar_preferences (
       id, user_id, calendar_name, include_auspicious_times, include_inauspicious_times,
       include_special_days, include_nakshatra, include_rs_warnings, include_chandrashtama,
       date_range_days, created_at, updated_at
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
"#;

pub const SELECT_PREFERENCE_BY_USER: &str = r#"
SELECT id, user_id, calendar_name, include_auspicious_times, include_inauspicious_times,
       include_special_days, include_nakshatra, include_rs_warnings, include_chandrashtama,
       date_range_days, created_at, updated_at
FROM user_calendar_preferences
WHERE user_id = ?1
"#;

pub const SELECT_PREFERENCES: &str = r#"
SELECT id, user_id, calendar_name, include_auspicious_times, include_inauspicious_times,
       include_special_days, include_nakshatra, include_rs_warnings, include_chandrashtama,
       date_range_days, created_at, updated_at
FROM user_calendar_preferences
ORDER BY created_at DESC
"#;

pub const UPDATE_PREFERENCE: &str = r#"
UPDATE user_calendar_preferences
SET calendar_name = ?2, include_auspicious_times = ?3, include_inauspicious_times = ?4,
    include_special_days = ?5, include_nakshatra = ?6, include_rs_warnings = ?7,
    include_chandrashtama = ?8, date_range_days = ?9, updated_at = ?10
WHERE user_id = ?1
"#;

pub const DELETE_PREFERENCE: &str = r#"
DELETE FROM user_calendar_preferences
WHERE user_id = ?1
"#;
