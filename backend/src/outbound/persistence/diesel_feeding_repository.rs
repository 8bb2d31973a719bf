//! PostgreSQL-backed feeding log.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FeedingRepository, RepositoryError};
use crate::domain::{CatId, Feeding, NewFeeding};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{FeedingRow, NewFeedingRow, rows_into};
use super::pool::DbPool;
use super::schema::feedings;

#[derive(Clone)]
pub struct DieselFeedingRepository {
    pool: DbPool,
}

impl DieselFeedingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedingRepository for DieselFeedingRepository {
    async fn insert(&self, feeding: &NewFeeding) -> Result<Feeding, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: FeedingRow = diesel::insert_into(feedings::table)
            .values(NewFeedingRow::from(feeding))
            .returning(FeedingRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Feeding::try_from(row)
    }

    /// Newest first; same-day entries keep insertion order.
    async fn list_for_cat(&self, cat_id: CatId) -> Result<Vec<Feeding>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<FeedingRow> = feedings::table
            .filter(feedings::cat_id.eq(cat_id.get()))
            .order((feedings::date.desc(), feedings::id.asc()))
            .select(FeedingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_into(rows)
    }
}
