//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use userhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Newtype wrapper so that `AppError` can be returned from handlers.
///
/// Handlers return `Result<_, ApiError>`; the `From` impl lets `?`
/// propagate domain errors directly.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::UserNotFound => StatusCode::NOT_FOUND,
            ErrorKind::SelfDeletion => StatusCode::FORBIDDEN,
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::EmailSending | ErrorKind::ExternalService => StatusCode::BAD_GATEWAY,
            ErrorKind::UserCreation
            | ErrorKind::UserUpdate
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                tracing::error!(error = %err, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ErrorKind::UserNotFound, StatusCode::NOT_FOUND),
            (ErrorKind::SelfDeletion, StatusCode::FORBIDDEN),
            (ErrorKind::Validation, StatusCode::BAD_REQUEST),
            (ErrorKind::Authentication, StatusCode::UNAUTHORIZED),
            (ErrorKind::EmailSending, StatusCode::BAD_GATEWAY),
            (ErrorKind::UserCreation, StatusCode::INTERNAL_SERVER_ERROR),
            (ErrorKind::UserUpdate, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (kind, expected) in cases {
            let response = ApiError(AppError::new(kind, "x")).into_response();
            assert_eq!(response.status(), expected, "kind: {kind}");
        }
    }
}
