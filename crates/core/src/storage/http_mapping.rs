//! Pure functions for mapping domain errors to HTTP status codes.
//!
//! Following the Functional Core pattern, these have no side effects and no
//! dependency on an HTTP library.

use crate::subscription::SubscriptionError;

use super::{DateRangeError, RepositoryError};

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `AlreadyExists` -> 409 (Conflict)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use panchangam_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::subscription_not_found("user-1");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

/// An inverted date range is a client error.
pub fn date_range_error_to_status_code(error: &DateRangeError) -> u16 {
    match error {
        DateRangeError::InvalidRange => 400,
    }
}

/// Every subscription validation failure is a client error, except a
/// misconfigured public base URL.
pub fn subscription_error_to_status_code(error: &SubscriptionError) -> u16 {
    match error {
        SubscriptionError::InvalidBaseUrl(_) => 500,
        _ => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_codes() {
        let cases = [
            (RepositoryError::subscription_not_found("u"), 404),
            (RepositoryError::subscription_exists("u"), 409),
            (RepositoryError::ConnectionFailed("down".into()), 503),
            (RepositoryError::QueryFailed("bad".into()), 500),
            (RepositoryError::Serialization("bad".into()), 500),
            (RepositoryError::InvalidData("bad".into()), 400),
        ];
        for (error, code) in cases {
            assert_eq!(repository_error_to_status_code(&error), code, "{error}");
        }
    }

    #[test]
    fn test_date_range_error_is_bad_request() {
        assert_eq!(
            date_range_error_to_status_code(&DateRangeError::InvalidRange),
            400
        );
    }

    #[test]
    fn test_subscription_error_codes() {
        assert_eq!(
            subscription_error_to_status_code(&SubscriptionError::EmptyUpdate),
            400
        );
        assert_eq!(
            subscription_error_to_status_code(&SubscriptionError::InvalidBaseUrl("x".into())),
            500
        );
    }
}
