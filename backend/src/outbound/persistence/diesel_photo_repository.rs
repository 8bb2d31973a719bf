//! PostgreSQL-backed photo records.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PhotoRepository, RepositoryError};
use crate::domain::{CatId, NewPhoto, Photo};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPhotoRow, PhotoRow, rows_into};
use super::pool::DbPool;
use super::schema::photos;

#[derive(Clone)]
pub struct DieselPhotoRepository {
    pool: DbPool,
}

impl DieselPhotoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepository for DieselPhotoRepository {
    async fn insert(&self, photo: &NewPhoto) -> Result<Photo, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: PhotoRow = diesel::insert_into(photos::table)
            .values(NewPhotoRow::from(photo))
            .returning(PhotoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Photo::try_from(row)
    }

    async fn list_for_cat(&self, cat_id: CatId) -> Result<Vec<Photo>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PhotoRow> = photos::table
            .filter(photos::cat_id.eq(cat_id.get()))
            .order(photos::id.asc())
            .select(PhotoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_into(rows)
    }
}
