//! Account service implementing [`SignupService`] and [`LoginService`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{
    LoginService, PasswordHashError, PasswordHasher, SignupService, UserPersistenceError,
    UserRepository,
};
use crate::domain::{Error, LoginCredentials, SignupCredentials, User, UserId};

/// Registers users and checks their credentials.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::DuplicateUsername { username } => {
                Error::conflict(format!("username {username} is already taken")).with_details(
                    json!({ "field": "username", "code": "username_taken" }),
                )
            }
        }
    }

    fn map_hash_error(error: PasswordHashError) -> Error {
        Error::internal(error.to_string())
    }
}

#[async_trait]
impl SignupService for AccountService {
    async fn signup(&self, credentials: &SignupCredentials) -> Result<User, Error> {
        let taken = self
            .users
            .find_by_username(credentials.username().as_ref())
            .await
            .map_err(Self::map_persistence_error)?
            .is_some();
        if taken {
            return Err(Self::map_persistence_error(
                UserPersistenceError::duplicate_username(credentials.username().as_ref()),
            ));
        }

        let password_hash = self
            .hasher
            .hash(credentials.password())
            .map_err(Self::map_hash_error)?;
        let user = User::new(UserId::random(), credentials.username().clone());
        self.users
            .insert(&user, &password_hash)
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(user)
    }
}

#[async_trait]
impl LoginService for AccountService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let stored = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Error::unauthorized("invalid credentials"))?;
        let matches = self
            .hasher
            .verify(credentials.password(), &stored.password_hash)
            .map_err(Self::map_hash_error)?;
        if matches {
            Ok(*stored.user.id())
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
