//! Port for feeding log persistence.

use async_trait::async_trait;

use crate::domain::{CatId, Feeding, NewFeeding};

use super::RepositoryError;

/// Append-only feeding storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedingRepository: Send + Sync {
    /// Persist a feeding.
    ///
    /// Fails with [`RepositoryError::MissingReference`] when the cat does
    /// not exist.
    async fn insert(&self, feeding: &NewFeeding) -> Result<Feeding, RepositoryError>;

    /// Feedings of a cat, newest date first.
    async fn list_for_cat(&self, cat_id: CatId) -> Result<Vec<Feeding>, RepositoryError>;
}
