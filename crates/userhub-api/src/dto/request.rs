//! Request DTOs.
//!
//! Payload validation happens here, at the API boundary; the service layer
//! accepts payloads as-is.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/admin/users`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}

/// Body of `PUT /api/admin/users/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New display name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New email address.
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
}
