//! Admin user management — CRUD, confirmation mail on create, self-deletion
//! prevention.

use std::sync::Arc;

use tracing::info;

use userhub_auth::profile::ProfileResolver;
use userhub_core::error::{AppError, ErrorKind};
use userhub_core::result::AppResult;
use userhub_core::traits::Mailer;
use userhub_database::store::UserStore;
use userhub_entity::user::{CreateUser, NewUser, UpdateUser, User};

use crate::token::{TokenGenerator, VERIFICATION_TOKEN_LENGTH};

/// Handles administrative user management operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User store.
    store: Arc<dyn UserStore>,
    /// Outbound mailer.
    mailer: Arc<dyn Mailer>,
    /// Caller profile resolver.
    profiles: Arc<ProfileResolver>,
    /// Verification token generator.
    tokens: TokenGenerator,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        store: Arc<dyn UserStore>,
        mailer: Arc<dyn Mailer>,
        profiles: Arc<ProfileResolver>,
        tokens: TokenGenerator,
    ) -> Self {
        Self {
            store,
            mailer,
            profiles,
            tokens,
        }
    }

    /// Gets a single user by id.
    ///
    /// Any lookup failure — a missing record or a store-level error — is
    /// normalized to `USER_NOT_FOUND`, with the underlying error attached
    /// as the source when there is one. Callers cannot distinguish
    /// "genuinely missing" from "store unreachable" by kind alone; this
    /// matches the upstream contract.
    pub async fn get_user(&self, id: i64) -> AppResult<User> {
        self.store
            .find_one(id)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::UserNotFound, "User lookup failed", e))?
            .ok_or_else(|| AppError::user_not_found(format!("User {id} not found")))
    }

    /// Lists all users, ordered ascending by name.
    ///
    /// Store errors propagate with their own kind instead of being folded
    /// into a user-domain kind.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.store.find_all_ordered_by_name().await
    }

    /// Creates a new user and dispatches the confirmation mail.
    ///
    /// The record is persisted first; the mail is sent second. A mailer
    /// failure surfaces as `EMAIL_SENDING_ERROR` while the record stays
    /// persisted — creation and mail dispatch are an explicit two-phase
    /// process, not a transaction.
    pub async fn create_user(&self, values: CreateUser) -> AppResult<User> {
        let token = self.tokens.generate(VERIFICATION_TOKEN_LENGTH);
        let record = NewUser::from_payload(values, token);

        let saved = self.store.save(record).await.map_err(|e| {
            AppError::with_source(ErrorKind::UserCreation, "Failed to create user", e)
        })?;

        self.mailer
            .send_new_user_mail(&saved.email, &saved.verification_token, &saved.name)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::EmailSending,
                    format!("Failed to send confirmation mail to user {}", saved.id),
                    e,
                )
            })?;

        info!(user_id = saved.id, "User created");
        Ok(saved)
    }

    /// Applies a partial update and returns the re-fetched record.
    ///
    /// Fields absent from `changes` are left unchanged. The existence check
    /// reuses [`get_user`](Self::get_user), so a missing id surfaces as
    /// `USER_NOT_FOUND` rather than an update error.
    pub async fn update_user(&self, id: i64, changes: UpdateUser) -> AppResult<User> {
        let existing = self.get_user(id).await?;

        self.store
            .update(existing.id, &changes)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::UserUpdate, "Failed to update user", e)
            })?;

        info!(user_id = existing.id, "User updated");
        self.get_user(existing.id).await
    }

    /// Removes a user, returning the pre-deletion snapshot.
    ///
    /// The caller is resolved from `auth_header`; deleting one's own
    /// account is forbidden and performs no store mutation. A missing
    /// target id surfaces as `USER_NOT_FOUND`.
    pub async fn delete_user(&self, auth_header: &str, id: i64) -> AppResult<User> {
        let caller = self.profiles.resolve(auth_header).await?;
        if caller.id == id {
            return Err(AppError::self_deletion(
                "Administrators cannot delete their own account",
            ));
        }

        let target = self.get_user(id).await?;
        let removed = self.store.remove(target).await?;

        info!(admin_id = caller.id, user_id = removed.id, "User deleted");
        Ok(removed)
    }
}
