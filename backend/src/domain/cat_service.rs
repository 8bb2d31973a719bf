//! Cat directory service implementing [`CatsQuery`] and [`CatsCommand`].
//!
//! Plain record operations go through [`CrudService`]. Detail composition,
//! feedings, photo upload and toy association are layered on top.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::crud::{CrudService, map_repository_error};
use crate::domain::ports::{
    CatDetail, CatRepository, CatsCommand, CatsQuery, CrudRepository, FeedingRepository,
    ObjectStorage, ObjectStorageError, PhotoRepository,
};
use crate::domain::{
    Cat, CatChanges, CatId, Error, Feeding, FeedingDraft, FeedingForm, FeedingFormDescriptor,
    NewCat, NewPhoto, Photo, PhotoKey, PhotoUpload, RequestContext, Toy, ToyId, invalid_field,
};

/// Attempts at finding an unused storage key before giving up.
pub const MAX_PHOTO_KEY_ATTEMPTS: usize = 3;

/// Driven ports the cat directory depends on.
#[derive(Clone)]
pub struct CatDirectoryPorts {
    pub cats: Arc<dyn CatRepository>,
    pub toys: Arc<dyn CrudRepository<Toy>>,
    pub feedings: Arc<dyn FeedingRepository>,
    pub photos: Arc<dyn PhotoRepository>,
    pub storage: Arc<dyn ObjectStorage>,
}

/// Cat directory service implementing the cat driving ports.
#[derive(Clone)]
pub struct CatDirectoryService {
    cats: CrudService<Cat, dyn CatRepository>,
    toys: CrudService<Toy, dyn CrudRepository<Toy>>,
    feedings: Arc<dyn FeedingRepository>,
    photos: Arc<dyn PhotoRepository>,
    storage: Arc<dyn ObjectStorage>,
}

impl CatDirectoryService {
    pub fn new(ports: CatDirectoryPorts) -> Self {
        let CatDirectoryPorts {
            cats,
            toys,
            feedings,
            photos,
            storage,
        } = ports;
        Self {
            cats: CrudService::new(cats),
            toys: CrudService::new(toys),
            feedings,
            photos,
            storage,
        }
    }

    fn cat_repository(&self) -> &Arc<dyn CatRepository> {
        self.cats.repository()
    }

    /// Upload `upload` under a fresh key, retrying when the key is taken.
    async fn store_photo(&self, cat_id: CatId, upload: PhotoUpload) -> Result<String, Error> {
        let content_type = upload.content_type().map(str::to_owned);
        let file_name = upload.file_name().to_owned();
        let body = upload.into_bytes();

        for attempt in 1..=MAX_PHOTO_KEY_ATTEMPTS {
            let key = PhotoKey::generate(&file_name);
            match self
                .storage
                .put_object(&key, body.clone(), content_type.clone())
                .await
            {
                Ok(url) => return Ok(url),
                Err(ObjectStorageError::KeyExists { key }) => {
                    debug!(%cat_id, %key, attempt, "photo key already in use; retrying");
                }
                Err(err @ ObjectStorageError::Upload { .. }) => {
                    return Err(Error::upload_failed(err.to_string()));
                }
            }
        }
        Err(Error::upload_failed(format!(
            "no free photo key after {MAX_PHOTO_KEY_ATTEMPTS} attempts"
        )))
    }
}

#[async_trait]
impl CatsQuery for CatDirectoryService {
    async fn list_scoped(&self, ctx: &RequestContext) -> Result<Vec<Cat>, Error> {
        self.cat_repository()
            .list_by_owner(ctx.user_id())
            .await
            .map_err(map_repository_error)
    }

    async fn get_unscoped(&self, cat_id: CatId) -> Result<Cat, Error> {
        self.cats.get(cat_id).await
    }

    async fn detail_unscoped(&self, cat_id: CatId) -> Result<CatDetail, Error> {
        let cat = self.cats.get(cat_id).await?;
        let owned: HashSet<ToyId> = self
            .cat_repository()
            .toy_ids(cat_id)
            .await
            .map_err(map_repository_error)?
            .into_iter()
            .collect();
        let (toys, toys_not_owned): (Vec<Toy>, Vec<Toy>) = self
            .toys
            .list()
            .await?
            .into_iter()
            .partition(|toy| owned.contains(&toy.id()));
        let feedings = self
            .feedings
            .list_for_cat(cat_id)
            .await
            .map_err(map_repository_error)?;
        let photos = self
            .photos
            .list_for_cat(cat_id)
            .await
            .map_err(map_repository_error)?;

        Ok(CatDetail {
            cat,
            toys,
            feedings,
            photos,
            feeding_form: FeedingFormDescriptor::default(),
            toys_not_owned,
        })
    }
}

#[async_trait]
impl CatsCommand for CatDirectoryService {
    async fn create(&self, ctx: &RequestContext, cat: NewCat) -> Result<Cat, Error> {
        self.cats.create(&cat.owned_by(*ctx.user_id())).await
    }

    async fn update_unscoped(&self, cat_id: CatId, changes: CatChanges) -> Result<Cat, Error> {
        self.cats.update(cat_id, &changes).await
    }

    async fn delete_unscoped(&self, cat_id: CatId) -> Result<(), Error> {
        self.cats.delete(cat_id).await
    }

    async fn add_feeding(&self, cat_id: CatId, form: FeedingForm) -> Result<Feeding, Error> {
        self.cats.get(cat_id).await?;
        let draft = FeedingDraft::try_from(&form).map_err(|err| invalid_field(&err))?;
        self.feedings
            .insert(&draft.for_cat(cat_id))
            .await
            .map_err(map_repository_error)
    }

    async fn add_photo(
        &self,
        cat_id: CatId,
        upload: Option<PhotoUpload>,
    ) -> Result<Option<Photo>, Error> {
        let Some(upload) = upload.filter(|upload| !upload.is_empty()) else {
            return Ok(None);
        };
        self.cats.get(cat_id).await?;
        let url = self.store_photo(cat_id, upload).await?;
        let photo = self
            .photos
            .insert(&NewPhoto { cat_id, url })
            .await
            .map_err(map_repository_error)?;
        Ok(Some(photo))
    }

    async fn associate_toy(&self, cat_id: CatId, toy_id: ToyId) -> Result<(), Error> {
        self.cats.get(cat_id).await?;
        self.cat_repository()
            .add_toy(cat_id, toy_id)
            .await
            .map_err(map_repository_error)
    }

    async fn dissociate_toy(&self, cat_id: CatId, toy_id: ToyId) -> Result<(), Error> {
        self.cats.get(cat_id).await?;
        self.cat_repository()
            .remove_toy(cat_id, toy_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "cat_service_tests.rs"]
mod tests;
