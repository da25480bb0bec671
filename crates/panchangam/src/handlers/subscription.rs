use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use panchangam_core::subscription::{
    build_subscription_links, generate_subscription_token, validate_preference,
    CreateSubscriptionRequest, CreateSubscriptionResponse, MessageResponse, Subscription,
    SubscriptionDetails, SubscriptionError, SubscriptionKey, UpdateSubscriptionRequest,
    UpdateSubscriptionResponse,
};

use crate::{
    handlers::{ApiError, AppError},
    models::KeyQuery,
    state::AppState,
};

/// Create a subscription (POST /api/calendar/subscription).
pub async fn create_subscription(
    State(state): State<AppState>,
    Json(mut payload): Json<CreateSubscriptionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.calendar_name.is_none() {
        payload.calendar_name = Some(state.config.default_calendar_name.clone());
    }

    let (subscription, preference) =
        payload.into_records(generate_subscription_token(), Utc::now());
    validate_preference(&preference)?;

    state
        .subscription_repo
        .create_subscription(&subscription, &preference)
        .await?;

    let links = build_subscription_links(&state.config.site_url, &subscription.subscription_token)?;

    tracing::info!(
        subscription_id = %subscription.id,
        user_id = %subscription.user_id,
        "Created subscription"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateSubscriptionResponse::new(&subscription, preference, links)),
    ))
}

/// Get a subscription with its preferences (GET /api/calendar/subscription).
pub async fn get_subscription(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> Result<Json<SubscriptionDetails>, AppError> {
    let subscription = find_subscription(&state, &query).await?;
    let preferences = state
        .subscription_repo
        .get_preference(&subscription.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Subscription preferences not found".to_string()))?;

    let links = build_subscription_links(&state.config.site_url, &subscription.subscription_token)?;

    Ok(Json(SubscriptionDetails {
        subscription,
        preferences,
        webcal_url: links.webcal_url,
        ics_url: links.ics_url,
    }))
}

/// Partially update preferences (PUT /api/calendar/subscription).
pub async fn update_subscription(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
    Json(payload): Json<UpdateSubscriptionRequest>,
) -> Result<Json<UpdateSubscriptionResponse>, AppError> {
    if payload.is_empty() {
        return Err(SubscriptionError::EmptyUpdate.into());
    }

    let subscription = find_subscription(&state, &query).await?;
    let mut preferences = state
        .subscription_repo
        .get_preference(&subscription.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Subscription preferences not found".to_string()))?;

    payload.apply_to(&mut preferences, Utc::now());
    validate_preference(&preferences)?;

    state.subscription_repo.update_preference(&preferences).await?;

    tracing::info!(user_id = %subscription.user_id, "Updated subscription preferences");

    Ok(Json(UpdateSubscriptionResponse {
        preferences,
        message: "Preferences updated successfully".to_string(),
    }))
}

/// Delete a subscription and its preferences (DELETE /api/calendar/subscription).
pub async fn delete_subscription(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let subscription = find_subscription(&state, &query).await?;

    state
        .subscription_repo
        .delete_subscription(&subscription.user_id)
        .await?;

    tracing::info!(user_id = %subscription.user_id, "Deleted subscription");

    Ok(Json(MessageResponse::new("Subscription deleted successfully")))
}

async fn find_subscription(state: &AppState, query: &KeyQuery) -> Result<Subscription, AppError> {
    let key = query.key().ok_or(ApiError::MissingKey)?;

    state
        .subscription_repo
        .get_subscription(&key)
        .await?
        .ok_or_else(|| not_found(&key))
}

fn not_found(key: &SubscriptionKey) -> AppError {
    ApiError::NotFound(format!("Subscription not found for {key}")).into()
}
