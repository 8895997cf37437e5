//! Caller profile resolution.

use std::sync::Arc;

use userhub_core::error::AppError;
use userhub_core::result::AppResult;
use userhub_database::store::UserStore;
use userhub_entity::user::User;

use crate::jwt::JwtKeys;

/// Resolves an opaque `Authorization` header value to the caller's stored
/// user record.
///
/// The header must carry a `Bearer` access token whose subject is the
/// caller's user id. The resolved record is used by the service layer only
/// for identifier comparison.
#[derive(Debug, Clone)]
pub struct ProfileResolver {
    keys: Arc<JwtKeys>,
    store: Arc<dyn UserStore>,
}

impl ProfileResolver {
    /// Create a new profile resolver.
    pub fn new(keys: Arc<JwtKeys>, store: Arc<dyn UserStore>) -> Self {
        Self { keys, store }
    }

    /// Resolve the caller's profile from the raw header value.
    pub async fn resolve(&self, auth_header: &str) -> AppResult<User> {
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = self.keys.decode_token(token)?;

        self.store
            .find_one(claims.sub)
            .await?
            .ok_or_else(|| AppError::user_not_found("Caller profile not found"))
    }
}
