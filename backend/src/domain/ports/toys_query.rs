//! Driving port for reading the shared toy catalogue.

use async_trait::async_trait;

use crate::domain::{Error, Toy, ToyId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToysQuery: Send + Sync {
    /// Every toy, ordered by id.
    async fn list(&self) -> Result<Vec<Toy>, Error>;

    async fn get(&self, toy_id: ToyId) -> Result<Toy, Error>;
}
