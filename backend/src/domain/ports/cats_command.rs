//! Driving port for cat mutations and the records hanging off a cat.
//!
//! Only creation is tied to the caller. Updates, deletes and the nested
//! feeding, photo and toy operations act on any cat id.

use async_trait::async_trait;

use crate::domain::{
    Cat, CatChanges, CatId, Error, Feeding, FeedingForm, NewCat, Photo, PhotoUpload,
    RequestContext, ToyId,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatsCommand: Send + Sync {
    /// Create a cat owned by the caller.
    async fn create(&self, ctx: &RequestContext, cat: NewCat) -> Result<Cat, Error>;

    /// Replace breed, description and age.
    async fn update_unscoped(&self, cat_id: CatId, changes: CatChanges) -> Result<Cat, Error>;

    /// Delete a cat with its feedings, photos and toy associations.
    async fn delete_unscoped(&self, cat_id: CatId) -> Result<(), Error>;

    /// Validate a raw feeding form and record it against the cat.
    ///
    /// Invalid forms fail with `invalid_request` and persist nothing.
    async fn add_feeding(&self, cat_id: CatId, form: FeedingForm) -> Result<Feeding, Error>;

    /// Upload a photo and record its URL.
    ///
    /// Returns `Ok(None)` without touching storage when no file, or an
    /// empty file, was supplied.
    async fn add_photo(
        &self,
        cat_id: CatId,
        upload: Option<PhotoUpload>,
    ) -> Result<Option<Photo>, Error>;

    /// Associate a toy with the cat. Repeating the call is harmless.
    async fn associate_toy(&self, cat_id: CatId, toy_id: ToyId) -> Result<(), Error>;

    /// Remove an association. Absent associations are ignored.
    async fn dissociate_toy(&self, cat_id: CatId, toy_id: ToyId) -> Result<(), Error>;
}
