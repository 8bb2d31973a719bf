//! Cat directory handlers.
//!
//! ```text
//! GET    /api/v1/cats
//! POST   /api/v1/cats {"name":"Fig","breed":"Tabby","description":"orange","age":3}
//! GET    /api/v1/cats/{cat_id}
//! PUT    /api/v1/cats/{cat_id} {"breed":"Tabby","description":"","age":"4"}
//! DELETE /api/v1/cats/{cat_id}
//! ```
//!
//! Only the listing is scoped to the caller; reads and writes by id accept
//! any cat id from any signed-in user.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::ports::CatDetail;
use crate::domain::{Breed, Cat, CatChanges, CatName, Description, NewCat, invalid_field};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CatDetailSchema, CatSchema, ErrorSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{AgeInput, cat_id_from_path, cat_location};

/// Body of `POST /cats`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateCatRequest {
    #[schema(example = "Fig")]
    pub name: String,
    #[schema(example = "Tabby")]
    pub breed: String,
    #[serde(default)]
    #[schema(example = "orange")]
    pub description: String,
    #[schema(value_type = i64, example = 3)]
    pub age: AgeInput,
}

impl CreateCatRequest {
    fn into_new_cat(self) -> ApiResult<NewCat> {
        Ok(NewCat {
            name: CatName::new(&self.name).map_err(|err| invalid_field(&err))?,
            breed: Breed::new(&self.breed).map_err(|err| invalid_field(&err))?,
            description: Description::new(&self.description).map_err(|err| invalid_field(&err))?,
            age: self.age.parse()?,
        })
    }
}

/// Body of `PUT /cats/{cat_id}`. The name cannot change.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateCatRequest {
    pub breed: String,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = i64)]
    pub age: AgeInput,
}

impl UpdateCatRequest {
    fn into_changes(self) -> ApiResult<CatChanges> {
        Ok(CatChanges {
            breed: Breed::new(&self.breed).map_err(|err| invalid_field(&err))?,
            description: Description::new(&self.description).map_err(|err| invalid_field(&err))?,
            age: self.age.parse()?,
        })
    }
}

/// List the caller's cats, ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/cats",
    responses(
        (status = 200, description = "Cats owned by the caller", body = [CatSchema]),
        (status = 401, description = "Login required", body = ErrorSchema)
    ),
    tags = ["cats"],
    operation_id = "listCats"
)]
#[get("/cats")]
pub async fn list_cats(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Cat>>> {
    let ctx = session.require_context()?;
    let cats = state.cats.list_scoped(&ctx).await?;
    Ok(web::Json(cats))
}

/// Create a cat owned by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/cats",
    request_body = CreateCatRequest,
    responses(
        (status = 201, description = "Cat created", body = CatSchema,
            headers(("Location" = String, description = "Cat detail resource"))),
        (status = 400, description = "Invalid cat", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema)
    ),
    tags = ["cats"],
    operation_id = "createCat"
)]
#[post("/cats")]
pub async fn create_cat(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateCatRequest>,
) -> ApiResult<HttpResponse> {
    let ctx = session.require_context()?;
    let new_cat = payload.into_inner().into_new_cat()?;
    let cat = state.cats_command.create(&ctx, new_cat).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, cat_location(cat.id())))
        .json(cat))
}

/// A cat with its toys, feedings, photos and the toys it lacks.
#[utoipa::path(
    get,
    path = "/api/v1/cats/{cat_id}",
    params(("cat_id" = i32, Path, description = "Cat id")),
    responses(
        (status = 200, description = "Cat detail", body = CatDetailSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown cat", body = ErrorSchema)
    ),
    tags = ["cats"],
    operation_id = "getCat"
)]
#[get("/cats/{cat_id}")]
pub async fn cat_detail(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<web::Json<CatDetail>> {
    session.require_context()?;
    let cat_id = cat_id_from_path(path.into_inner())?;
    let detail = state.cats.detail_unscoped(cat_id).await?;
    Ok(web::Json(detail))
}

/// Replace a cat's breed, description and age.
#[utoipa::path(
    put,
    path = "/api/v1/cats/{cat_id}",
    params(("cat_id" = i32, Path, description = "Cat id")),
    request_body = UpdateCatRequest,
    responses(
        (status = 200, description = "Updated cat", body = CatSchema),
        (status = 400, description = "Invalid cat", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown cat", body = ErrorSchema)
    ),
    tags = ["cats"],
    operation_id = "updateCat"
)]
#[put("/cats/{cat_id}")]
pub async fn update_cat(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    payload: web::Json<UpdateCatRequest>,
) -> ApiResult<web::Json<Cat>> {
    session.require_context()?;
    let cat_id = cat_id_from_path(path.into_inner())?;
    let changes = payload.into_inner().into_changes()?;
    let cat = state.cats_command.update_unscoped(cat_id, changes).await?;
    Ok(web::Json(cat))
}

/// Delete a cat with its feedings, photos and toy associations.
#[utoipa::path(
    delete,
    path = "/api/v1/cats/{cat_id}",
    params(("cat_id" = i32, Path, description = "Cat id")),
    responses(
        (status = 204, description = "Cat deleted"),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown cat", body = ErrorSchema)
    ),
    tags = ["cats"],
    operation_id = "deleteCat"
)]
#[delete("/cats/{cat_id}")]
pub async fn delete_cat(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    session.require_context()?;
    let cat_id = cat_id_from_path(path.into_inner())?;
    state.cats_command.delete_unscoped(cat_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "cats_tests.rs"]
mod tests;
