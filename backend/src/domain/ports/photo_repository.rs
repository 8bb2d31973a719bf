//! Port for photo record persistence. Blobs live in object storage.

use async_trait::async_trait;

use crate::domain::{CatId, NewPhoto, Photo};

use super::RepositoryError;

/// Photo URL storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Persist a photo record.
    async fn insert(&self, photo: &NewPhoto) -> Result<Photo, RepositoryError>;

    /// Photos of a cat, ordered by id.
    async fn list_for_cat(&self, cat_id: CatId) -> Result<Vec<Photo>, RepositoryError>;
}
