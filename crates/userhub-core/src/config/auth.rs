//! Caller-identity resolution configuration.

use serde::{Deserialize, Serialize};

/// Settings for resolving the calling administrator from the
/// `Authorization` header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for access-token verification.
    pub jwt_secret: String,
    /// Access token lifetime in minutes.
    #[serde(default = "default_token_expiry")]
    pub token_expiry_minutes: i64,
}

fn default_token_expiry() -> i64 {
    60
}
