//! Port for cat persistence, including the cat/toy association table.

use async_trait::async_trait;

use crate::domain::{Cat, CatId, ToyId, UserId};

use super::{CrudRepository, RepositoryError};

/// Cat storage with owner-scoped listing and toy associations.
///
/// Deleting a cat through [`CrudRepository::delete`] must also remove its
/// feedings, photos and association rows.
#[async_trait]
pub trait CatRepository: CrudRepository<Cat> {
    /// Cats owned by `owner`, ordered by id.
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Cat>, RepositoryError>;

    /// Ids of the toys associated with `cat_id`, ascending.
    async fn toy_ids(&self, cat_id: CatId) -> Result<Vec<ToyId>, RepositoryError>;

    /// Associate a toy with a cat. Existing associations are left alone.
    ///
    /// Fails with [`RepositoryError::MissingReference`] when either record
    /// does not exist.
    async fn add_toy(&self, cat_id: CatId, toy_id: ToyId) -> Result<(), RepositoryError>;

    /// Remove an association if present.
    async fn remove_toy(&self, cat_id: CatId, toy_id: ToyId) -> Result<(), RepositoryError>;
}
