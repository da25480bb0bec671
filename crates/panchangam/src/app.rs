use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        admin::overview,
        almanac::{get_day, list_range},
        calendar::{ics, sample, webcal},
        health::{livez, readyz},
        pages::{admin, index},
        subscription::{
            create_subscription, delete_subscription, get_subscription, update_subscription,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Calendar clients and browser widgets fetch the API cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        // Almanac routes
        .route("/almanac", get(list_range))
        .route("/almanac/{date}", get(get_day))
        // Calendar export routes
        .route("/calendar/ics", get(ics))
        .route("/calendar/webcal", get(webcal))
        .route("/calendar/sample", get(sample))
        .route(
            "/calendar/subscription",
            get(get_subscription)
                .post(create_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
        // Admin routes
        .route("/admin/overview", get(overview))
        .layer(cors);

    Router::new()
        .route("/", get(index))
        .route("/admin", get(admin))
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
