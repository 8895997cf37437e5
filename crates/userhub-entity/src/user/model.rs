//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A managed user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique identifier, assigned by the store on creation and immutable
    /// afterwards.
    pub id: i64,
    /// Display name. Listing is ordered by this field.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Opaque secret used to confirm email ownership out-of-band. Assigned
    /// exactly once, at creation; never regenerated by update.
    pub verification_token: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Create payload accepted from callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// Partial update payload. Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
}

impl UpdateUser {
    /// Whether the payload carries any change at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Data handed to the store when persisting a new user: the create payload
/// combined with the service-generated verification token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Generated verification token.
    pub verification_token: String,
}

impl NewUser {
    /// Combine a create payload with a generated verification token.
    pub fn from_payload(values: CreateUser, verification_token: String) -> Self {
        Self {
            name: values.name,
            email: values.email,
            verification_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_payload_emptiness() {
        assert!(UpdateUser::default().is_empty());
        assert!(
            !UpdateUser {
                name: Some("Ann".into()),
                email: None,
            }
            .is_empty()
        );
    }

    #[test]
    fn test_new_user_combines_payload_and_token() {
        let new_user = NewUser::from_payload(
            CreateUser {
                name: "Ann".into(),
                email: "ann@x.io".into(),
            },
            "t".repeat(40),
        );
        assert_eq!(new_user.name, "Ann");
        assert_eq!(new_user.email, "ann@x.io");
        assert_eq!(new_user.verification_token.len(), 40);
    }
}
