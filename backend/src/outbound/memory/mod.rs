//! In-memory persistence adapters.
//!
//! Used when no database is configured and by tests. All repositories
//! created from one [`MemoryStore`] share a single state guarded by one
//! mutex, so each call is atomic and the relational rules hold: foreign
//! keys are checked, deleting a cat cascades to its feedings, photos and
//! toy associations, and the cat/toy join is a set.

mod records;
mod users;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::ports::RepositoryError;
use crate::domain::{
    Cat, CatId, Feeding, FeedingId, PasswordHash, Photo, PhotoId, Toy, ToyId, User, UserId,
};

pub use records::{
    MemoryCatRepository, MemoryFeedingRepository, MemoryPhotoRepository, MemoryToyRepository,
};
pub use users::MemoryUserRepository;

#[derive(Debug, Default)]
struct Sequences {
    cat: i32,
    toy: i32,
    feeding: i32,
    photo: i32,
}

fn next_value(counter: &mut i32) -> Result<i32, RepositoryError> {
    *counter = counter
        .checked_add(1)
        .ok_or_else(|| RepositoryError::query("id sequence exhausted"))?;
    Ok(*counter)
}

#[derive(Debug, Default)]
struct State {
    sequences: Sequences,
    cats: BTreeMap<CatId, Cat>,
    toys: BTreeMap<ToyId, Toy>,
    feedings: BTreeMap<FeedingId, Feeding>,
    photos: BTreeMap<PhotoId, Photo>,
    cat_toys: BTreeSet<(CatId, ToyId)>,
    users: HashMap<UserId, (User, PasswordHash)>,
}

impl State {
    fn require_cat(&self, cat_id: CatId) -> Result<(), RepositoryError> {
        if self.cats.contains_key(&cat_id) {
            Ok(())
        } else {
            Err(RepositoryError::missing_reference(format!(
                "cat {cat_id} not found"
            )))
        }
    }

    fn require_toy(&self, toy_id: ToyId) -> Result<(), RepositoryError> {
        if self.toys.contains_key(&toy_id) {
            Ok(())
        } else {
            Err(RepositoryError::missing_reference(format!(
                "toy {toy_id} not found"
            )))
        }
    }
}

/// Shared state behind the in-memory repositories.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cats(&self) -> MemoryCatRepository {
        MemoryCatRepository::new(self.clone())
    }

    pub fn toys(&self) -> MemoryToyRepository {
        MemoryToyRepository::new(self.clone())
    }

    pub fn feedings(&self) -> MemoryFeedingRepository {
        MemoryFeedingRepository::new(self.clone())
    }

    pub fn photos(&self) -> MemoryPhotoRepository {
        MemoryPhotoRepository::new(self.clone())
    }

    pub fn users(&self) -> MemoryUserRepository {
        MemoryUserRepository::new(self.clone())
    }
}
