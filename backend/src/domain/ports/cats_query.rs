//! Driving port for reading cats.
//!
//! Listing is scoped to the caller. Single-cat reads are deliberately not
//! scoped: any authenticated caller who knows an id can read that cat.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{
    Cat, CatId, Error, Feeding, FeedingFormDescriptor, Photo, RequestContext, Toy,
};

/// Everything a cat's detail view needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatDetail {
    pub cat: Cat,
    /// Toys associated with the cat, by id.
    pub toys: Vec<Toy>,
    /// Newest first.
    pub feedings: Vec<Feeding>,
    pub photos: Vec<Photo>,
    pub feeding_form: FeedingFormDescriptor,
    /// Every toy the cat is not associated with, by id.
    pub toys_not_owned: Vec<Toy>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatsQuery: Send + Sync {
    /// Cats owned by the caller, ordered by id.
    async fn list_scoped(&self, ctx: &RequestContext) -> Result<Vec<Cat>, Error>;

    /// Fetch any cat by id.
    async fn get_unscoped(&self, cat_id: CatId) -> Result<Cat, Error>;

    /// Compose the detail view of any cat by id.
    async fn detail_unscoped(&self, cat_id: CatId) -> Result<CatDetail, Error>;
}
