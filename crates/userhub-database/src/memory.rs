//! In-memory user store.
//!
//! Implements the same [`UserStore`] trait as the Postgres repository,
//! backed by a mutex-guarded map. Used by the test suites and for running
//! the server without a database.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use userhub_core::result::AppResult;
use userhub_entity::user::{NewUser, UpdateUser, User};

use crate::store::UserStore;

/// In-memory [`UserStore`] implementation.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    /// Whether the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_one(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn find_all_ordered_by_name(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.inner.lock().unwrap().rows.values().cloned().collect();
        users.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(users)
    }

    async fn save(&self, data: NewUser) -> AppResult<User> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: inner.next_id,
            name: data.name,
            email: data.email,
            verification_token: data.verification_token,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, changes: &UpdateUser) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(user) = inner.rows.get_mut(&id) {
            if let Some(name) = &changes.name {
                user.name = name.clone();
            }
            if let Some(email) = &changes.email {
                user.email = email.clone();
            }
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn remove(&self, user: User) -> AppResult<User> {
        self.inner.lock().unwrap().rows.remove(&user.id);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            verification_token: "x".repeat(40),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let store = MemoryUserStore::new();
        let a = store.save(new_user("Ann", "ann@x.io")).await.unwrap();
        let b = store.save(new_user("Bob", "bob@x.io")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_listing_is_ordered_by_name() {
        let store = MemoryUserStore::new();
        store.save(new_user("Cleo", "c@x.io")).await.unwrap();
        store.save(new_user("Ann", "a@x.io")).await.unwrap();
        store.save(new_user("Bob", "b@x.io")).await.unwrap();

        let names: Vec<String> = store
            .find_all_ordered_by_name()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Ann", "Bob", "Cleo"]);
    }

    #[tokio::test]
    async fn test_update_merges_only_set_fields() {
        let store = MemoryUserStore::new();
        let user = store.save(new_user("Ann", "a@x.io")).await.unwrap();

        store
            .update(
                user.id,
                &UpdateUser {
                    name: Some("Ann2".into()),
                    email: None,
                },
            )
            .await
            .unwrap();

        let updated = store.find_one(user.id).await.unwrap().unwrap();
        assert_eq!(updated.name, "Ann2");
        assert_eq!(updated.email, "a@x.io");
        assert_eq!(updated.verification_token, user.verification_token);
    }

    #[tokio::test]
    async fn test_remove_returns_snapshot() {
        let store = MemoryUserStore::new();
        let user = store.save(new_user("Ann", "a@x.io")).await.unwrap();

        let removed = store.remove(user.clone()).await.unwrap();
        assert_eq!(removed, user);
        assert!(store.find_one(user.id).await.unwrap().is_none());
    }
}
