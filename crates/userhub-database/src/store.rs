//! The user store abstraction.

use async_trait::async_trait;

use userhub_core::result::AppResult;
use userhub_entity::user::{NewUser, UpdateUser, User};

/// Persistence interface for user records.
///
/// Implemented by the Postgres-backed
/// [`UserRepository`](crate::repositories::user::UserRepository) and the
/// in-memory [`MemoryUserStore`](crate::memory::MemoryUserStore). All
/// errors carry [`ErrorKind::Database`](userhub_core::ErrorKind::Database);
/// normalization into user-domain kinds happens in the service layer.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_one(&self, id: i64) -> AppResult<Option<User>>;

    /// List all users, ordered ascending by name.
    async fn find_all_ordered_by_name(&self) -> AppResult<Vec<User>>;

    /// Persist a new user. The store assigns the identifier.
    async fn save(&self, data: NewUser) -> AppResult<User>;

    /// Apply a partial overwrite to an existing user. Fields that are
    /// `None` in `changes` are left unchanged.
    async fn update(&self, id: i64, changes: &UpdateUser) -> AppResult<()>;

    /// Remove a user, returning the pre-deletion snapshot.
    async fn remove(&self, user: User) -> AppResult<User>;
}
