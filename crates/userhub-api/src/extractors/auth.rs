//! `AuthHeader` extractor — pulls the raw `Authorization` header value.
//!
//! Resolution of the header into a caller profile is the service layer's
//! concern; the extractor only guarantees the header is present.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use userhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// The raw `Authorization` header value of the current request.
#[derive(Debug, Clone)]
pub struct AuthHeader(pub String);

impl FromRequestParts<AppState> for AuthHeader {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError(AppError::authentication("Missing Authorization header")))?;

        Ok(AuthHeader(value.to_string()))
    }
}
