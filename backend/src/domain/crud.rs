//! Generic create/read/update/delete over a [`CrudRepository`].
//!
//! Directories for concrete entities wrap a [`CrudService`] and add their
//! own operations beside it.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::ports::{CrudRepository, RepositoryError};
use super::{Cat, CatChanges, CatDraft, CatId, Error, Toy, ToyDraft, ToyId};

/// A persisted record type with distinct create and update inputs.
pub trait Entity: Send + Sync + 'static {
    type Id: Copy + fmt::Display + Send + Sync + 'static;
    type Draft: Send + Sync + 'static;
    type Changes: Send + Sync + 'static;

    /// Lower-case name used in error messages.
    const KIND: &'static str;

    fn id(&self) -> Self::Id;
}

impl Entity for Cat {
    type Id = CatId;
    type Draft = CatDraft;
    type Changes = CatChanges;

    const KIND: &'static str = "cat";

    fn id(&self) -> CatId {
        Cat::id(self)
    }
}

impl Entity for Toy {
    type Id = ToyId;
    type Draft = ToyDraft;
    type Changes = ToyDraft;

    const KIND: &'static str = "toy";

    fn id(&self) -> ToyId {
        Toy::id(self)
    }
}

/// Map a repository failure onto the domain error taxonomy.
///
/// Connection failures become `service_unavailable` and query failures an
/// `internal_error`, which the HTTP adapter logs and redacts.
pub fn map_repository_error(err: RepositoryError) -> Error {
    match err {
        RepositoryError::Connection { message } => {
            Error::service_unavailable(format!("repository unavailable: {message}"))
        }
        RepositoryError::Query { message } => {
            Error::internal(format!("repository error: {message}"))
        }
        RepositoryError::MissingReference { message } => Error::not_found(message),
        RepositoryError::Conflict { message } => Error::conflict(message),
    }
}

/// Message used for every missing-record error.
pub fn not_found<E: Entity>(id: E::Id) -> Error {
    Error::not_found(format!("{} {id} not found", E::KIND))
}

/// Generic service over a repository of `E`.
///
/// `R` may be unsized, so `CrudService<Cat, dyn CatRepository>` shares the
/// same repository handle as the cat directory's extra operations.
pub struct CrudService<E, R: ?Sized> {
    repo: Arc<R>,
    _entity: PhantomData<fn() -> E>,
}

impl<E, R: ?Sized> Clone for CrudService<E, R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            _entity: PhantomData,
        }
    }
}

impl<E, R> CrudService<E, R>
where
    E: Entity,
    R: CrudRepository<E> + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    /// Underlying repository handle.
    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    pub async fn list(&self) -> Result<Vec<E>, Error> {
        self.repo.list().await.map_err(map_repository_error)
    }

    /// Fetch a record, failing with `not_found` when absent.
    pub async fn get(&self, id: E::Id) -> Result<E, Error> {
        self.repo
            .find(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found::<E>(id))
    }

    pub async fn create(&self, draft: &E::Draft) -> Result<E, Error> {
        self.repo.insert(draft).await.map_err(map_repository_error)
    }

    /// Apply changes, failing with `not_found` when absent.
    pub async fn update(&self, id: E::Id, changes: &E::Changes) -> Result<E, Error> {
        self.repo
            .update(id, changes)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found::<E>(id))
    }

    /// Delete a record, failing with `not_found` when absent.
    pub async fn delete(&self, id: E::Id) -> Result<(), Error> {
        let deleted = self.repo.delete(id).await.map_err(map_repository_error)?;
        if deleted {
            Ok(())
        } else {
            Err(not_found::<E>(id))
        }
    }
}
