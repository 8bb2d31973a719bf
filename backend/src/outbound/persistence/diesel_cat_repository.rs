//! PostgreSQL-backed `CatRepository` implementation using Diesel ORM.
//!
//! Deleting a cat relies on the `ON DELETE CASCADE` foreign keys of the
//! feedings, photos and cats_toys tables, so the cascade is one statement.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CatRepository, CrudRepository, RepositoryError};
use crate::domain::{Cat, CatChanges, CatDraft, CatId, ToyId, UserId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CatRow, CatUpdate, NewCatRow, rows_into};
use super::pool::DbPool;
use super::schema::{cats, cats_toys};

/// Diesel-backed cat directory storage.
#[derive(Clone)]
pub struct DieselCatRepository {
    pool: DbPool,
}

impl DieselCatRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Cat> for DieselCatRepository {
    async fn list(&self) -> Result<Vec<Cat>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CatRow> = cats::table
            .order(cats::id.asc())
            .select(CatRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_into(rows)
    }

    async fn find(&self, id: CatId) -> Result<Option<Cat>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CatRow> = cats::table
            .find(id.get())
            .select(CatRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(Cat::try_from).transpose()
    }

    async fn insert(&self, draft: &CatDraft) -> Result<Cat, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: CatRow = diesel::insert_into(cats::table)
            .values(NewCatRow::from(draft))
            .returning(CatRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Cat::try_from(row)
    }

    async fn update(
        &self,
        id: CatId,
        changes: &CatChanges,
    ) -> Result<Option<Cat>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let update = CatUpdate {
            breed: changes.breed.as_ref(),
            description: changes.description.as_ref(),
            age: changes.age.get(),
        };
        let row: Option<CatRow> = diesel::update(cats::table.find(id.get()))
            .set(&update)
            .returning(CatRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(Cat::try_from).transpose()
    }

    async fn delete(&self, id: CatId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(cats::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}

#[async_trait]
impl CatRepository for DieselCatRepository {
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Cat>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CatRow> = cats::table
            .filter(cats::user_id.eq(owner.as_uuid()))
            .order(cats::id.asc())
            .select(CatRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_into(rows)
    }

    async fn toy_ids(&self, cat_id: CatId) -> Result<Vec<ToyId>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let raw: Vec<i32> = cats_toys::table
            .filter(cats_toys::cat_id.eq(cat_id.get()))
            .order(cats_toys::toy_id.asc())
            .select(cats_toys::toy_id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        raw.into_iter()
            .map(|id| ToyId::new(id).map_err(|err| RepositoryError::query(err.to_string())))
            .collect()
    }

    async fn add_toy(&self, cat_id: CatId, toy_id: ToyId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(cats_toys::table)
            .values((
                cats_toys::cat_id.eq(cat_id.get()),
                cats_toys::toy_id.eq(toy_id.get()),
            ))
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn remove_toy(&self, cat_id: CatId, toy_id: ToyId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(
            cats_toys::table
                .filter(cats_toys::cat_id.eq(cat_id.get()))
                .filter(cats_toys::toy_id.eq(toy_id.get())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(())
    }
}
