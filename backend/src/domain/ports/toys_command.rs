//! Driving port for toy mutations.

use async_trait::async_trait;

use crate::domain::{Error, Toy, ToyDraft, ToyId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToysCommand: Send + Sync {
    async fn create(&self, toy: ToyDraft) -> Result<Toy, Error>;

    /// Replace name and color.
    async fn update(&self, toy_id: ToyId, toy: ToyDraft) -> Result<Toy, Error>;

    /// Delete a toy and every association to it.
    async fn delete(&self, toy_id: ToyId) -> Result<(), Error>;
}
