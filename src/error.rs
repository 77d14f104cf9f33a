//! Directory error types with HTTP status code mapping.
//!
//! [`DirectoryError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "venue not found: 7f9c…",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges below).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                |
/// |-----------|-----------------|----------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request            |
/// | 2000–2999 | Not Found       | 404 Not Found              |
/// | 3000–3999 | Server          | 500 Internal Server Error  |
/// | 4000–4999 | Derivation      | 422 Unprocessable Entity   |
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Venue with the given ID was not found.
    #[error("venue not found: {0}")]
    VenueNotFound(uuid::Uuid),

    /// Artist with the given ID was not found.
    #[error("artist not found: {0}")]
    ArtistNotFound(uuid::Uuid),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A show's `start_time` string could not be parsed as a timestamp.
    ///
    /// The derivation core never coerces or defaults a bad timestamp; the
    /// raw value is carried so the caller can report which row is broken.
    #[error("malformed start_time: {value:?}")]
    MalformedTimestamp {
        /// The unparseable `start_time` string as stored.
        value: String,
    },

    /// A show references a venue or artist the lookup could not resolve.
    #[error("show {show_id} references missing counterpart {counterpart_id}")]
    MissingCounterpart {
        /// The show carrying the dangling reference.
        show_id: uuid::Uuid,
        /// The venue/artist ID that failed to resolve.
        counterpart_id: uuid::Uuid,
    },

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::VenueNotFound(_) => 2001,
            Self::ArtistNotFound(_) => 2002,
            Self::MalformedTimestamp { .. } => 4001,
            Self::MissingCounterpart { .. } => 3002,
            Self::PersistenceError(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::VenueNotFound(_) | Self::ArtistNotFound(_) => StatusCode::NOT_FOUND,
            Self::MalformedTimestamp { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MissingCounterpart { .. } | Self::PersistenceError(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_ranges() {
        let not_found = DirectoryError::VenueNotFound(uuid::Uuid::new_v4());
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.error_code(), 2001);

        let bad_time = DirectoryError::MalformedTimestamp {
            value: "not-a-date".to_string(),
        };
        assert_eq!(bad_time.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(bad_time.error_code(), 4001);
    }

    #[test]
    fn missing_counterpart_is_server_side() {
        let err = DirectoryError::MissingCounterpart {
            show_id: uuid::Uuid::new_v4(),
            counterpart_id: uuid::Uuid::new_v4(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
