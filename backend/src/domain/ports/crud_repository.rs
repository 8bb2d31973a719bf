//! Generic persistence port shared by the cat and toy directories.

use async_trait::async_trait;

use crate::domain::Entity;

use super::define_port_error;

define_port_error! {
    /// Errors raised by record repository adapters.
    pub enum RepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "repository query failed: {message}",
        /// A foreign key pointed at a record that does not exist.
        MissingReference { message: String } => "referenced record does not exist: {message}",
        /// A uniqueness constraint was violated.
        Conflict { message: String } => "record conflicts with existing data: {message}",
    }
}

/// List, find, insert, update and delete for one entity type.
#[async_trait]
pub trait CrudRepository<E: Entity>: Send + Sync {
    /// All records, ordered by id.
    async fn list(&self) -> Result<Vec<E>, RepositoryError>;

    /// Fetch a record by id.
    async fn find(&self, id: E::Id) -> Result<Option<E>, RepositoryError>;

    /// Persist a new record and return it with its assigned id.
    async fn insert(&self, draft: &E::Draft) -> Result<E, RepositoryError>;

    /// Apply `changes` to an existing record.
    ///
    /// Returns `None` when no record has the given id.
    async fn update(&self, id: E::Id, changes: &E::Changes)
    -> Result<Option<E>, RepositoryError>;

    /// Delete a record.
    ///
    /// Returns `true` when a row was deleted and `false` when it did not
    /// exist.
    async fn delete(&self, id: E::Id) -> Result<bool, RepositoryError>;
}
