//! In-memory cat, toy, feeding and photo repositories.

use async_trait::async_trait;

use super::{MemoryStore, next_value};
use crate::domain::ports::{
    CatRepository, CrudRepository, FeedingRepository, PhotoRepository, RepositoryError,
};
use crate::domain::{
    Cat, CatChanges, CatDraft, CatId, Feeding, FeedingId, NewFeeding, NewPhoto, Photo, PhotoId,
    Toy, ToyDraft, ToyId, UserId, sort_newest_first,
};

fn record_id<T>(
    raw: i32,
    build: fn(i32) -> Result<T, crate::domain::InvalidRecordId>,
) -> Result<T, RepositoryError> {
    build(raw).map_err(|err| RepositoryError::query(err.to_string()))
}

/// In-memory [`CatRepository`].
#[derive(Debug, Clone)]
pub struct MemoryCatRepository {
    store: MemoryStore,
}

impl MemoryCatRepository {
    pub(super) fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CrudRepository<Cat> for MemoryCatRepository {
    async fn list(&self) -> Result<Vec<Cat>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state.cats.values().cloned().collect())
    }

    async fn find(&self, id: CatId) -> Result<Option<Cat>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state.cats.get(&id).cloned())
    }

    async fn insert(&self, draft: &CatDraft) -> Result<Cat, RepositoryError> {
        let mut state = self.store.state.lock().await;
        if !state.users.contains_key(&draft.owner) {
            return Err(RepositoryError::missing_reference(format!(
                "user {} not found",
                draft.owner
            )));
        }
        let id = record_id(next_value(&mut state.sequences.cat)?, CatId::new)?;
        let cat = Cat::new(id, draft.clone());
        state.cats.insert(id, cat.clone());
        Ok(cat)
    }

    async fn update(
        &self,
        id: CatId,
        changes: &CatChanges,
    ) -> Result<Option<Cat>, RepositoryError> {
        let mut state = self.store.state.lock().await;
        Ok(state.cats.get_mut(&id).map(|cat| {
            *cat = cat.with_changes(changes);
            cat.clone()
        }))
    }

    async fn delete(&self, id: CatId) -> Result<bool, RepositoryError> {
        let mut state = self.store.state.lock().await;
        if state.cats.remove(&id).is_none() {
            return Ok(false);
        }
        state.feedings.retain(|_, feeding| feeding.cat_id() != id);
        state.photos.retain(|_, photo| photo.cat_id() != id);
        state.cat_toys.retain(|(cat_id, _)| *cat_id != id);
        Ok(true)
    }
}

#[async_trait]
impl CatRepository for MemoryCatRepository {
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Cat>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state
            .cats
            .values()
            .filter(|cat| cat.owner() == owner)
            .cloned()
            .collect())
    }

    async fn toy_ids(&self, cat_id: CatId) -> Result<Vec<ToyId>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state
            .cat_toys
            .iter()
            .filter(|(owner, _)| *owner == cat_id)
            .map(|(_, toy_id)| *toy_id)
            .collect())
    }

    async fn add_toy(&self, cat_id: CatId, toy_id: ToyId) -> Result<(), RepositoryError> {
        let mut state = self.store.state.lock().await;
        state.require_cat(cat_id)?;
        state.require_toy(toy_id)?;
        state.cat_toys.insert((cat_id, toy_id));
        Ok(())
    }

    async fn remove_toy(&self, cat_id: CatId, toy_id: ToyId) -> Result<(), RepositoryError> {
        let mut state = self.store.state.lock().await;
        state.cat_toys.remove(&(cat_id, toy_id));
        Ok(())
    }
}

/// In-memory toy repository.
#[derive(Debug, Clone)]
pub struct MemoryToyRepository {
    store: MemoryStore,
}

impl MemoryToyRepository {
    pub(super) fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CrudRepository<Toy> for MemoryToyRepository {
    async fn list(&self) -> Result<Vec<Toy>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state.toys.values().cloned().collect())
    }

    async fn find(&self, id: ToyId) -> Result<Option<Toy>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state.toys.get(&id).cloned())
    }

    async fn insert(&self, draft: &ToyDraft) -> Result<Toy, RepositoryError> {
        let mut state = self.store.state.lock().await;
        let id = record_id(next_value(&mut state.sequences.toy)?, ToyId::new)?;
        let toy = Toy::new(id, draft.clone());
        state.toys.insert(id, toy.clone());
        Ok(toy)
    }

    async fn update(&self, id: ToyId, changes: &ToyDraft) -> Result<Option<Toy>, RepositoryError> {
        let mut state = self.store.state.lock().await;
        Ok(state.toys.get_mut(&id).map(|toy| {
            *toy = Toy::new(id, changes.clone());
            toy.clone()
        }))
    }

    async fn delete(&self, id: ToyId) -> Result<bool, RepositoryError> {
        let mut state = self.store.state.lock().await;
        if state.toys.remove(&id).is_none() {
            return Ok(false);
        }
        state.cat_toys.retain(|(_, toy_id)| *toy_id != id);
        Ok(true)
    }
}

/// In-memory [`FeedingRepository`].
#[derive(Debug, Clone)]
pub struct MemoryFeedingRepository {
    store: MemoryStore,
}

impl MemoryFeedingRepository {
    pub(super) fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FeedingRepository for MemoryFeedingRepository {
    async fn insert(&self, feeding: &NewFeeding) -> Result<Feeding, RepositoryError> {
        let mut state = self.store.state.lock().await;
        state.require_cat(feeding.cat_id)?;
        let id = record_id(next_value(&mut state.sequences.feeding)?, FeedingId::new)?;
        let stored = Feeding::new(id, *feeding);
        state.feedings.insert(id, stored);
        Ok(stored)
    }

    async fn list_for_cat(&self, cat_id: CatId) -> Result<Vec<Feeding>, RepositoryError> {
        let state = self.store.state.lock().await;
        let mut feedings: Vec<Feeding> = state
            .feedings
            .values()
            .filter(|feeding| feeding.cat_id() == cat_id)
            .copied()
            .collect();
        sort_newest_first(&mut feedings);
        Ok(feedings)
    }
}

/// In-memory [`PhotoRepository`].
#[derive(Debug, Clone)]
pub struct MemoryPhotoRepository {
    store: MemoryStore,
}

impl MemoryPhotoRepository {
    pub(super) fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PhotoRepository for MemoryPhotoRepository {
    async fn insert(&self, photo: &NewPhoto) -> Result<Photo, RepositoryError> {
        let mut state = self.store.state.lock().await;
        state.require_cat(photo.cat_id)?;
        let id = record_id(next_value(&mut state.sequences.photo)?, PhotoId::new)?;
        let stored = Photo::new(id, photo.clone());
        state.photos.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list_for_cat(&self, cat_id: CatId) -> Result<Vec<Photo>, RepositoryError> {
        let state = self.store.state.lock().await;
        Ok(state
            .photos
            .values()
            .filter(|photo| photo.cat_id() == cat_id)
            .cloned()
            .collect())
    }
}
