//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversion back to domain types re-runs
//! the domain validation, so a corrupt row surfaces as a query error.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{cats, feedings, photos, toys, users};
use crate::domain::ports::RepositoryError;
use crate::domain::{
    Age, Breed, Cat, CatDraft, CatId, CatName, Description, Feeding, FeedingId, InvalidRecordId,
    Meal, NewFeeding, NewPhoto, Photo, PhotoId, Toy, ToyDraft, ToyId, UserId,
};

fn corrupt(kind: &str, detail: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::query(format!("stored {kind} row is invalid: {detail}"))
}

fn id_from_row<T>(
    raw: i32,
    build: fn(i32) -> Result<T, InvalidRecordId>,
) -> Result<T, RepositoryError> {
    build(raw).map_err(|err| corrupt(err.kind, err))
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub password_hash: &'a str,
}

// ---------------------------------------------------------------------------
// Cats
// ---------------------------------------------------------------------------

/// Row struct for reading from the cats table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CatRow {
    pub id: i32,
    pub user_id: Uuid,
    pub name: String,
    pub breed: String,
    pub description: String,
    pub age: i32,
}

impl TryFrom<CatRow> for Cat {
    type Error = RepositoryError;

    fn try_from(row: CatRow) -> Result<Self, Self::Error> {
        let id = id_from_row(row.id, CatId::new)?;
        let draft = CatDraft {
            owner: UserId::from_uuid(row.user_id),
            name: CatName::new(&row.name).map_err(|err| corrupt("cat", err))?,
            breed: Breed::new(&row.breed).map_err(|err| corrupt("cat", err))?,
            description: Description::new(&row.description).map_err(|err| corrupt("cat", err))?,
            age: Age::new(i64::from(row.age)).map_err(|err| corrupt("cat", err))?,
        };
        Ok(Cat::new(id, draft))
    }
}

/// Insertable struct for creating new cat records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cats)]
pub(crate) struct NewCatRow<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub breed: &'a str,
    pub description: &'a str,
    pub age: i32,
}

impl<'a> From<&'a CatDraft> for NewCatRow<'a> {
    fn from(draft: &'a CatDraft) -> Self {
        Self {
            user_id: *draft.owner.as_uuid(),
            name: draft.name.as_ref(),
            breed: draft.breed.as_ref(),
            description: draft.description.as_ref(),
            age: draft.age.get(),
        }
    }
}

/// Changeset for the mutable cat columns. Name and owner never change.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = cats)]
pub(crate) struct CatUpdate<'a> {
    pub breed: &'a str,
    pub description: &'a str,
    pub age: i32,
}

// ---------------------------------------------------------------------------
// Toys
// ---------------------------------------------------------------------------

/// Row struct for reading from the toys table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = toys)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ToyRow {
    pub id: i32,
    pub name: String,
    pub color: String,
}

impl TryFrom<ToyRow> for Toy {
    type Error = RepositoryError;

    fn try_from(row: ToyRow) -> Result<Self, Self::Error> {
        let id = id_from_row(row.id, ToyId::new)?;
        let draft =
            ToyDraft::try_from_parts(&row.name, &row.color).map_err(|err| corrupt("toy", err))?;
        Ok(Toy::new(id, draft))
    }
}

/// Insertable and changeset struct for toy records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = toys)]
pub(crate) struct ToyValues<'a> {
    pub name: &'a str,
    pub color: &'a str,
}

impl<'a> From<&'a ToyDraft> for ToyValues<'a> {
    fn from(draft: &'a ToyDraft) -> Self {
        Self {
            name: draft.name(),
            color: draft.color(),
        }
    }
}

// ---------------------------------------------------------------------------
// Feedings
// ---------------------------------------------------------------------------

/// Row struct for reading from the feedings table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = feedings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FeedingRow {
    pub id: i32,
    pub cat_id: i32,
    pub date: NaiveDate,
    pub meal: String,
}

impl TryFrom<FeedingRow> for Feeding {
    type Error = RepositoryError;

    fn try_from(row: FeedingRow) -> Result<Self, Self::Error> {
        let id = id_from_row(row.id, FeedingId::new)?;
        let new = NewFeeding {
            cat_id: id_from_row(row.cat_id, CatId::new)?,
            date: row.date,
            meal: row
                .meal
                .parse::<Meal>()
                .map_err(|err| corrupt("feeding", err))?,
        };
        Ok(Feeding::new(id, new))
    }
}

/// Insertable struct for creating feeding records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = feedings)]
pub(crate) struct NewFeedingRow {
    pub cat_id: i32,
    pub date: NaiveDate,
    pub meal: &'static str,
}

impl From<&NewFeeding> for NewFeedingRow {
    fn from(feeding: &NewFeeding) -> Self {
        Self {
            cat_id: feeding.cat_id.get(),
            date: feeding.date,
            meal: feeding.meal.code(),
        }
    }
}

// ---------------------------------------------------------------------------
// Photos
// ---------------------------------------------------------------------------

/// Row struct for reading from the photos table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = photos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PhotoRow {
    pub id: i32,
    pub cat_id: i32,
    pub url: String,
}

impl TryFrom<PhotoRow> for Photo {
    type Error = RepositoryError;

    fn try_from(row: PhotoRow) -> Result<Self, Self::Error> {
        let id = id_from_row(row.id, PhotoId::new)?;
        let new = NewPhoto {
            cat_id: id_from_row(row.cat_id, CatId::new)?,
            url: row.url,
        };
        Ok(Photo::new(id, new))
    }
}

/// Insertable struct for creating photo records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = photos)]
pub(crate) struct NewPhotoRow<'a> {
    pub cat_id: i32,
    pub url: &'a str,
}

impl<'a> From<&'a NewPhoto> for NewPhotoRow<'a> {
    fn from(photo: &'a NewPhoto) -> Self {
        Self {
            cat_id: photo.cat_id.get(),
            url: photo.url.as_str(),
        }
    }
}

/// Convert a batch of rows, failing on the first corrupt one.
pub(crate) fn rows_into<R, T>(rows: Vec<R>) -> Result<Vec<T>, RepositoryError>
where
    T: TryFrom<R, Error = RepositoryError>,
{
    rows.into_iter().map(T::try_from).collect()
}
