//! PostgreSQL-backed toy catalogue storage.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CrudRepository, RepositoryError};
use crate::domain::{Toy, ToyDraft, ToyId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ToyRow, ToyValues, rows_into};
use super::pool::DbPool;
use super::schema::toys;

/// Diesel-backed implementation of `CrudRepository<Toy>`.
#[derive(Clone)]
pub struct DieselToyRepository {
    pool: DbPool,
}

impl DieselToyRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Toy> for DieselToyRepository {
    async fn list(&self) -> Result<Vec<Toy>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ToyRow> = toys::table
            .order(toys::id.asc())
            .select(ToyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_into(rows)
    }

    async fn find(&self, id: ToyId) -> Result<Option<Toy>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ToyRow> = toys::table
            .find(id.get())
            .select(ToyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(Toy::try_from).transpose()
    }

    async fn insert(&self, draft: &ToyDraft) -> Result<Toy, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: ToyRow = diesel::insert_into(toys::table)
            .values(ToyValues::from(draft))
            .returning(ToyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Toy::try_from(row)
    }

    async fn update(&self, id: ToyId, changes: &ToyDraft) -> Result<Option<Toy>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ToyRow> = diesel::update(toys::table.find(id.get()))
            .set(ToyValues::from(changes))
            .returning(ToyRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(Toy::try_from).transpose()
    }

    async fn delete(&self, id: ToyId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(toys::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
