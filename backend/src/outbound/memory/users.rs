//! In-memory user repository.

use async_trait::async_trait;

use super::MemoryStore;
use crate::domain::ports::{StoredUser, UserPersistenceError, UserRepository};
use crate::domain::{PasswordHash, User};

/// In-memory [`UserRepository`]. Usernames are unique and case-sensitive.
#[derive(Debug, Clone)]
pub struct MemoryUserRepository {
    store: MemoryStore,
}

impl MemoryUserRepository {
    pub(super) fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(
        &self,
        user: &User,
        password_hash: &PasswordHash,
    ) -> Result<(), UserPersistenceError> {
        let mut state = self.store.state.lock().await;
        let taken = state
            .users
            .values()
            .any(|(existing, _)| existing.username() == user.username());
        if taken {
            return Err(UserPersistenceError::duplicate_username(
                user.username().as_ref(),
            ));
        }
        state
            .users
            .insert(*user.id(), (user.clone(), password_hash.clone()));
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<StoredUser>, UserPersistenceError> {
        let state = self.store.state.lock().await;
        Ok(state
            .users
            .values()
            .find(|(user, _)| user.username().as_ref() == username)
            .map(|(user, password_hash)| StoredUser {
                user: user.clone(),
                password_hash: password_hash.clone(),
            }))
    }
}
