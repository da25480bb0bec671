use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};

use panchangam_core::almanac::{DailyAlmanacEntry, DayResponse};
use panchangam_core::ics::today_in_india;
use panchangam_core::storage::DateRange;

use crate::{
    handlers::{ApiError, AppError},
    models::RangeQuery,
    state::AppState,
};

/// Get one day's row with its display model (GET /api/almanac/{date}).
pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<DayResponse>, AppError> {
    let entry = state
        .almanac_repo
        .get_day(date)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No panchangam data found for {date}")))?;

    Ok(Json(entry.into()))
}

/// List rows in a date range (GET /api/almanac?start=&end=).
///
/// `start` defaults to today in India and `end` to `start`.
pub async fn list_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<DailyAlmanacEntry>>, AppError> {
    let today = today_in_india(Utc::now());
    let start = query.start.unwrap_or(today);
    let end = query.end.unwrap_or(start);
    let range = DateRange::new(start, end)?;

    let entries = state.almanac_repo.get_range(range).await?;
    tracing::debug!(%start, %end, count = entries.len(), "Listed almanac rows");

    Ok(Json(entries))
}
