use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::{Duration, NaiveDate, Utc};

use panchangam_core::almanac::{narration_chunks, DaySummary};
use panchangam_core::ics::today_in_india;
use panchangam_core::subscription::AdminOverview;

use crate::{
    handlers::{admin::load_overview, AppError},
    models::DayQuery,
    state::AppState,
};

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Day page: the almanac for one date with navigation to its neighbours.
#[derive(Template)]
#[template(path = "day.html")]
struct DayTemplate {
    date: NaiveDate,
    prev_date: NaiveDate,
    next_date: NaiveDate,
    summary: Option<DaySummary>,
    narration: Vec<String>,
}

/// Handler for the day page (GET /?date=).
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = query.date.unwrap_or_else(|| today_in_india(Utc::now()));
    let entry = state.almanac_repo.get_day(date).await?;

    let narration = entry.as_ref().map(narration_chunks).unwrap_or_default();

    Ok(HtmlTemplate(DayTemplate {
        date,
        prev_date: date - Duration::days(1),
        next_date: date + Duration::days(1),
        summary: entry.as_ref().map(DaySummary::from_entry),
        narration,
    }))
}

/// Admin dashboard template.
#[derive(Template)]
#[template(path = "admin.html")]
struct AdminTemplate {
    overview: AdminOverview,
}

/// Handler for the admin dashboard (GET /admin).
pub async fn admin(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let overview = load_overview(&state, Utc::now()).await?;
    Ok(HtmlTemplate(AdminTemplate { overview }))
}
