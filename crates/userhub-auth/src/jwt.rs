//! JWT access-token encoding and decoding.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use userhub_core::config::auth::AuthConfig;
use userhub_core::error::{AppError, ErrorKind};

/// Access-token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's identifier.
    pub sub: i64,
    /// Issued-at (unix seconds).
    pub iat: i64,
    /// Expiration (unix seconds).
    pub exp: i64,
}

/// HMAC key pair plus token lifetime.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_minutes: i64,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys")
            .field("expiry_minutes", &self.expiry_minutes)
            .finish_non_exhaustive()
    }
}

impl JwtKeys {
    /// Build keys from configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            expiry_minutes: config.token_expiry_minutes,
        }
    }

    /// Issue an access token for the given user id.
    pub fn encode_token(&self, user_id: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.expiry_minutes)).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            AppError::with_source(
                ErrorKind::Internal,
                format!("Failed to encode access token: {e}"),
                e,
            )
        })
    }

    /// Decode and validate an access token.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Authentication,
                    format!("Invalid access token: {e}"),
                    e,
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> JwtKeys {
        JwtKeys::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_expiry_minutes: 60,
        })
    }

    #[test]
    fn test_round_trip() {
        let keys = keys();
        let token = keys.encode_token(42).unwrap();
        let claims = keys.decode_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let err = keys().decode_token("not-a-token").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = keys().encode_token(7).unwrap();
        let other = JwtKeys::new(&AuthConfig {
            jwt_secret: "different-secret".to_string(),
            token_expiry_minutes: 60,
        });
        assert!(other.decode_token(&token).is_err());
    }
}
