//! SQLite repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension};
use tokio_rusqlite::Connection;

use panchangam_core::almanac::DailyAlmanacEntry;
use panchangam_core::storage::{
    AlmanacRepository, DateRange, RepositoryError, Result, SubscriptionRepository,
};
use panchangam_core::subscription::{Subscription, SubscriptionKey, SubscriptionPreference};

use super::conversions::{
    day_params, format_date, format_datetime, row_to_day, row_to_preference, row_to_subscription,
};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and ensures the schema exists.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a repository over an in-memory database.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// AlmanacRepository implementation
// ============================================================================

#[async_trait]
impl AlmanacRepository for SqliteRepository {
    async fn get_day(&self, date: NaiveDate) -> Result<Option<DailyAlmanacEntry>> {
        let date_str = format_date(&date);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_DAY).map_err(wrap_err)?;
                stmt.query_row([&date_str], row_to_day)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "DailyAlmanacEntry", format_date(&date)))
    }

    async fn get_range(&self, range: DateRange) -> Result<Vec<DailyAlmanacEntry>> {
        let start = format_date(&range.start);
        let end = format_date(&range.end);

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_DAYS_IN_RANGE)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&start, &end], row_to_day)
                    .map_err(wrap_err)?;

                let mut days = Vec::new();
                for row_result in rows {
                    days.push(row_result.map_err(wrap_err)?);
                }
                Ok(days)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "DailyAlmanacEntry", "range"))
    }

    async fn upsert_day(&self, entry: &DailyAlmanacEntry) -> Result<()> {
        let p = day_params(entry)?;
        let date = p.date.clone();

        self.conn
            .call(move |conn| {
                let [sunrise, sunset, moonrise, moonset] = p.times;
                let [tithi, nakshatra, yoga, karana] = p.periods;
                let [rahu_kalam, yamagandam, kuligai, abhijit_muhurta] = p.windows;
                let [amavasai, pournami, ekadashi, dwadashi, ashtami, navami, trayodashi, sashti, valar_pirai, thei_pirai] =
                    p.flags;

                conn.execute(
                    schema::UPSERT_DAY,
                    params![
                        p.date,
                        p.vaara,
                        sunrise,
                        sunset,
                        moonrise,
                        moonset,
                        tithi,
                        nakshatra,
                        yoga,
                        karana,
                        p.main_nakshatra,
                        p.nakshatra_yogam,
                        p.cosmic_score,
                        p.tarabalam_type,
                        rahu_kalam,
                        yamagandam,
                        kuligai,
                        abhijit_muhurta,
                        amavasai,
                        pournami,
                        ekadashi,
                        dwadashi,
                        ashtami,
                        navami,
                        trayodashi,
                        sashti,
                        valar_pirai,
                        thei_pirai,
                        p.chandrashtama_for,
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "DailyAlmanacEntry", date))
    }
}

// ============================================================================
// SubscriptionRepository implementation
// ============================================================================

#[async_trait]
impl SubscriptionRepository for SqliteRepository {
    async fn create_subscription(
        &self,
        subscription: &Subscription,
        preference: &SubscriptionPreference,
    ) -> Result<()> {
        let sub = subscription.clone();
        let pref = preference.clone();
        let user_id = subscription.user_id.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(
                    schema::INSERT_SUBSCRIPTION,
                    params![
                        sub.id.to_string(),
                        sub.user_id,
                        sub.subscription_token,
                        sub.is_active,
                        format_datetime(&sub.created_at),
                        format_datetime(&sub.updated_at),
                        sub.last_accessed.as_ref().map(format_datetime),
                        i64::try_from(sub.access_count).unwrap_or(i64::MAX),
                    ],
                )
                .map_err(wrap_err)?;
                tx.execute(
                    schema::INSERT_PREFERENCE,
                    params![
                        pref.id.to_string(),
                        pref.user_id,
                        pref.calendar_name,
                        pref.include_auspicious_times,
                        pref.include_inauspicious_times,
                        pref.include_special_days,
                        pref.include_nakshatra,
                        pref.include_rs_warnings,
                        pref.include_chandrashtama,
                        pref.date_range_days,
                        format_datetime(&pref.created_at),
                        format_datetime(&pref.updated_at),
                    ],
                )
                .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Subscription", user_id))
    }

    async fn get_subscription(&self, key: &SubscriptionKey) -> Result<Option<Subscription>> {
        let (query, value) = match key {
            SubscriptionKey::Token(token) => (schema::SELECT_SUBSCRIPTION_BY_TOKEN, token.clone()),
            SubscriptionKey::UserId(user_id) => {
                (schema::SELECT_SUBSCRIPTION_BY_USER, user_id.clone())
            }
        };
        let key_label = key.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(query).map_err(wrap_err)?;
                stmt.query_row([&value], row_to_subscription)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Subscription", key_label))
    }

    async fn get_preference(&self, user_id: &str) -> Result<Option<SubscriptionPreference>> {
        let user = user_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PREFERENCE_BY_USER)
                    .map_err(wrap_err)?;
                stmt.query_row([&user], row_to_preference)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "SubscriptionPreference", user_id))
    }

    async fn update_preference(&self, preference: &SubscriptionPreference) -> Result<()> {
        let pref = preference.clone();

        let updated = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::UPDATE_PREFERENCE,
                    params![
                        pref.user_id,
                        pref.calendar_name,
                        pref.include_auspicious_times,
                        pref.include_inauspicious_times,
                        pref.include_special_days,
                        pref.include_nakshatra,
                        pref.include_rs_warnings,
                        pref.include_chandrashtama,
                        pref.date_range_days,
                        format_datetime(&pref.updated_at),
                    ],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| {
                map_tokio_rusqlite_error(e, "SubscriptionPreference", preference.user_id.clone())
            })?;

        if updated == 0 {
            return Err(RepositoryError::NotFound {
                entity_type: "SubscriptionPreference",
                id: preference.user_id.clone(),
            });
        }
        Ok(())
    }

    async fn delete_subscription(&self, user_id: &str) -> Result<()> {
        let user = user_id.to_string();

        let removed = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let preferences = tx
                    .execute(schema::DELETE_PREFERENCE, [&user])
                    .map_err(wrap_err)?;
                let subscriptions = tx
                    .execute(schema::DELETE_SUBSCRIPTION, [&user])
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(preferences + subscriptions)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Subscription", user_id))?;

        if removed == 0 {
            return Err(RepositoryError::subscription_not_found(user_id));
        }
        Ok(())
    }

    async fn record_access(&self, token: &str, at: DateTime<Utc>) -> Result<()> {
        let token = token.to_string();
        let at = format_datetime(&at);

        let updated = self
            .conn
            .call(move |conn| {
                conn.execute(schema::RECORD_ACCESS, params![token, at])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Subscription", "token"))?;

        if updated == 0 {
            return Err(RepositoryError::subscription_not_found("token"));
        }
        Ok(())
    }

    async fn list_subscriptions(&self) -> Result<Vec<Subscription>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_SUBSCRIPTIONS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_subscription).map_err(wrap_err)?;
                rows.collect::<rusqlite::Result<Vec<_>>>().map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Subscription", "all"))
    }

    async fn list_preferences(&self) -> Result<Vec<SubscriptionPreference>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_PREFERENCES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_preference).map_err(wrap_err)?;
                rows.collect::<rusqlite::Result<Vec<_>>>().map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "SubscriptionPreference", "all"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use panchangam_core::almanac::{generate_seed_entries, sample_entry};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 15, 6, 0, 0).unwrap()
    }

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_sample_day_survives_storage() {
        let repo = repo().await;
        let entry = sample_entry();

        repo.upsert_day(&entry).await.unwrap();

        assert_eq!(repo.get_day(entry.date).await.unwrap(), Some(entry));
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_day() {
        let repo = repo().await;
        let mut entry = DailyAlmanacEntry::new(date(2025, 9, 15));
        repo.upsert_day(&entry).await.unwrap();

        entry.is_navami = true;
        repo.upsert_day(&entry).await.unwrap();

        let stored = repo.get_day(entry.date).await.unwrap().unwrap();
        assert!(stored.is_navami);
    }

    #[tokio::test]
    async fn test_get_range_ordered() {
        let repo = repo().await;
        for entry in generate_seed_entries(date(2025, 9, 1), 20).iter().rev() {
            repo.upsert_day(entry).await.unwrap();
        }

        let range = DateRange::new(date(2025, 9, 5), date(2025, 9, 8)).unwrap();
        let days = repo.get_range(range).await.unwrap();

        assert_eq!(days.len(), 4);
        assert_eq!(days[0].date, date(2025, 9, 5));
        assert_eq!(days[3].date, date(2025, 9, 8));
        assert!(repo
            .get_range(DateRange::day(date(2030, 1, 1)))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_subscription_lifecycle() {
        let repo = repo().await;
        let sub = Subscription::new("user-1", "tok-1", now());
        let mut pref = SubscriptionPreference::new("user-1", now());

        repo.create_subscription(&sub, &pref).await.unwrap();
        assert_eq!(
            repo.get_subscription(&SubscriptionKey::Token("tok-1".into()))
                .await
                .unwrap(),
            Some(sub.clone())
        );

        pref.calendar_name = "Temple".to_string();
        pref.date_range_days = 30;
        pref.updated_at = now() + Duration::minutes(5);
        repo.update_preference(&pref).await.unwrap();
        assert_eq!(repo.get_preference("user-1").await.unwrap(), Some(pref));

        repo.record_access("tok-1", now() + Duration::hours(1))
            .await
            .unwrap();
        let accessed = repo
            .get_subscription(&SubscriptionKey::UserId("user-1".into()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(accessed.access_count, 1);
        assert_eq!(accessed.last_accessed, Some(now() + Duration::hours(1)));

        repo.delete_subscription("user-1").await.unwrap();
        assert!(repo.get_preference("user-1").await.unwrap().is_none());
        assert!(matches!(
            repo.delete_subscription("user-1").await,
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_duplicate_user_maps_to_already_exists() {
        let repo = repo().await;
        let pref = SubscriptionPreference::new("user-1", now());
        repo.create_subscription(&Subscription::new("user-1", "tok-1", now()), &pref)
            .await
            .unwrap();

        let result = repo
            .create_subscription(&Subscription::new("user-1", "tok-2", now()), &pref)
            .await;

        assert_eq!(result, Err(RepositoryError::subscription_exists("user-1")));
        // The failed transaction left nothing behind.
        assert_eq!(repo.list_subscriptions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_rows() {
        let repo = repo().await;

        assert!(repo.get_day(date(2025, 1, 1)).await.unwrap().is_none());
        assert!(repo
            .get_subscription(&SubscriptionKey::Token("nope".into()))
            .await
            .unwrap()
            .is_none());
        assert!(repo.record_access("nope", now()).await.is_err());
        assert!(repo
            .update_preference(&SubscriptionPreference::new("ghost", now()))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_lists_are_newest_first() {
        let repo = repo().await;
        for (i, user) in ["a", "b"].iter().enumerate() {
            let at = now() + Duration::minutes(i as i64);
            repo.create_subscription(
                &Subscription::new(*user, format!("tok-{user}"), at),
                &SubscriptionPreference::new(*user, at),
            )
            .await
            .unwrap();
        }

        assert_eq!(repo.list_subscriptions().await.unwrap()[0].user_id, "b");
        assert_eq!(repo.list_preferences().await.unwrap()[1].user_id, "a");
    }
}
