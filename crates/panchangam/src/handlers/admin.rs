use axum::{extract::State, Json};
use chrono::{DateTime, Utc};

use panchangam_core::subscription::{
    access_status, compute_stats, AdminOverview, SubscriptionOverview,
};

use crate::{handlers::AppError, state::AppState};

/// Collects statistics, subscriptions and preferences for the dashboard.
pub async fn load_overview(state: &AppState, now: DateTime<Utc>) -> anyhow::Result<AdminOverview> {
    let subscriptions = state.subscription_repo.list_subscriptions().await?;
    let preferences = state.subscription_repo.list_preferences().await?;

    let stats = compute_stats(&subscriptions, &preferences, now);
    let subscriptions = subscriptions
        .into_iter()
        .map(|sub| {
            let status = access_status(&sub, now);
            SubscriptionOverview::new(sub, status)
        })
        .collect();

    Ok(AdminOverview {
        stats,
        subscriptions,
        preferences,
    })
}

/// Admin overview as JSON (GET /api/admin/overview).
pub async fn overview(State(state): State<AppState>) -> Result<Json<AdminOverview>, AppError> {
    Ok(Json(load_overview(&state, Utc::now()).await?))
}
