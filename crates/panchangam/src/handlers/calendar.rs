//! iCalendar export endpoints.
//!
//! A request either names a subscription token, in which case the stored
//! preferences decide the range and categories, or describes an ad hoc export
//! through query parameters.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use panchangam_core::almanac::sample_entry;
use panchangam_core::ics::{generate_calendar, today_in_india, IcsOptions};
use panchangam_core::storage::DateRange;
use panchangam_core::subscription::SubscriptionKey;

use crate::{
    handlers::{ApiError, AppError},
    models::{IcsQuery, TokenQuery},
    state::AppState,
};

/// Days an ad hoc export covers when `end_date` is omitted.
const AD_HOC_RANGE_DAYS: u32 = 365;

/// Download an ICS document (GET /api/calendar/ics).
pub async fn ics(
    State(state): State<AppState>,
    Query(query): Query<IcsQuery>,
) -> Result<Response, AppError> {
    if let Some(token) = &query.token {
        return token_feed(&state, token).await;
    }

    let start = query
        .start_date
        .unwrap_or_else(|| today_in_india(Utc::now()));
    let range = match query.end_date {
        Some(end) => DateRange::new(start, end)?,
        None => DateRange::spanning(start, AD_HOC_RANGE_DAYS),
    };
    let options = query.options(&state.config.default_calendar_name);

    let entries = state.almanac_repo.get_range(range).await?;
    if entries.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No panchangam data found between {} and {}",
            range.start, range.end
        ))
        .into());
    }

    tracing::debug!(
        start = %range.start,
        end = %range.end,
        days = entries.len(),
        "Generated ad hoc calendar"
    );
    Ok(ics_response(&options, generate_calendar(&entries, &options)))
}

/// Subscription feed (GET /api/calendar/webcal?token=).
pub async fn webcal(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Response, AppError> {
    let token = query.token.ok_or(ApiError::MissingToken)?;
    token_feed(&state, &token).await
}

/// ICS for the built-in sample day (GET /api/calendar/sample).
pub async fn sample() -> Response {
    let options = IcsOptions::default();
    ics_response(&options, generate_calendar(&[sample_entry()], &options))
}

async fn token_feed(state: &AppState, token: &str) -> Result<Response, AppError> {
    let invalid = || ApiError::NotFound("Invalid or inactive subscription".to_string());

    let subscription = state
        .subscription_repo
        .get_subscription(&SubscriptionKey::Token(token.to_string()))
        .await?
        .filter(|sub| sub.is_active)
        .ok_or_else(invalid)?;

    let preference = state
        .subscription_repo
        .get_preference(&subscription.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Subscription preferences not found".to_string()))?;

    let now = Utc::now();
    let range = DateRange::spanning(today_in_india(now), preference.date_range_days);
    let entries = state.almanac_repo.get_range(range).await?;

    // Access bookkeeping never fails the feed.
    if let Err(e) = state.subscription_repo.record_access(token, now).await {
        tracing::warn!(
            user_id = %subscription.user_id,
            error = %e,
            "Failed to record subscription access"
        );
    }

    let options = preference.ics_options();
    tracing::info!(
        user_id = %subscription.user_id,
        days = entries.len(),
        "Served subscription feed"
    );

    Ok(ics_response(&options, generate_calendar(&entries, &options)))
}

fn ics_response(options: &IcsOptions, body: String) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", options.filename());

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/calendar; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_bytes(disposition.as_bytes())
            .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));

    (headers, body).into_response()
}

