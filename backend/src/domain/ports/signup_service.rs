//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Error, SignupCredentials, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Register a new user.
    ///
    /// Fails with `conflict` when the username is taken.
    async fn signup(&self, credentials: &SignupCredentials) -> Result<User, Error>;
}
