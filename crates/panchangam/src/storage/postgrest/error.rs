//! PostgREST error mapping.
//!
//! Transport failures and unexpected statuses are mapped to
//! `RepositoryError` so handlers can pick a status code without knowing
//! which backend is active.

use panchangam_core::storage::RepositoryError;
use reqwest::StatusCode;

/// Maps a transport-level reqwest error.
pub fn map_request_error(err: &reqwest::Error) -> RepositoryError {
    if err.is_connect() || err.is_timeout() {
        RepositoryError::ConnectionFailed(err.to_string())
    } else if err.is_decode() {
        RepositoryError::Serialization(err.to_string())
    } else {
        RepositoryError::QueryFailed(err.to_string())
    }
}

/// Maps a non-success response status.
///
/// - 409 → `AlreadyExists`
/// - 400 / 422 → `InvalidData`
/// - 401 / 403 and 502 / 503 / 504 → `ConnectionFailed`
/// - everything else → `QueryFailed`
pub fn map_status(
    status: StatusCode,
    body: &str,
    entity_type: &'static str,
    id: &str,
) -> RepositoryError {
    match status.as_u16() {
        409 => RepositoryError::AlreadyExists {
            entity_type,
            id: id.to_string(),
        },
        400 | 422 => RepositoryError::InvalidData(body.to_string()),
        401 | 403 | 502..=504 => {
            RepositoryError::ConnectionFailed(format!("PostgREST returned {status}: {body}"))
        }
        _ => RepositoryError::QueryFailed(format!("PostgREST returned {status}: {body}")),
    }
}
