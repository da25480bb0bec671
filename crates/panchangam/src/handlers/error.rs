use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use panchangam_core::storage::{
    date_range_error_to_status_code, repository_error_to_status_code,
    subscription_error_to_status_code, DateRangeError, RepositoryError,
};
use panchangam_core::subscription::SubscriptionError;
use serde_json::json;

/// Request-level failures that are not domain errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Either token or user_id is required")]
    MissingKey,
    #[error("Token is required")]
    MissingToken,
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingKey | ApiError::MissingToken => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<DateRangeError>() {
            date_range_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<SubscriptionError>() {
            subscription_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<ApiError>() {
            return err.status_code();
        } else {
            500
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        (status_code, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(err: impl Into<anyhow::Error>) -> StatusCode {
        AppError::from(err).status_code()
    }

    #[test]
    fn test_domain_errors_map_to_status() {
        assert_eq!(
            status(RepositoryError::subscription_not_found("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(RepositoryError::ConnectionFailed("down".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(status(DateRangeError::InvalidRange), StatusCode::BAD_REQUEST);
        assert_eq!(status(SubscriptionError::EmptyUpdate), StatusCode::BAD_REQUEST);
        assert_eq!(status(ApiError::MissingKey), StatusCode::BAD_REQUEST);
        assert_eq!(
            status(ApiError::NotFound("gone".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(anyhow::anyhow!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_is_json() {
        use http_body_util::BodyExt;

        let response = AppError::from(ApiError::MissingToken).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Token is required");
    }
}
