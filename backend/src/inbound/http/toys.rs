//! Toy catalogue handlers. Toys are shared by every user.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::{Toy, ToyDraft, invalid_field};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ToySchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::toy_id_from_path;

/// Body of `POST /toys` and `PUT /toys/{toy_id}`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ToyRequest {
    #[schema(example = "Mouse")]
    pub name: String,
    #[schema(example = "grey")]
    pub color: String,
}

impl TryFrom<ToyRequest> for ToyDraft {
    type Error = crate::domain::Error;

    fn try_from(value: ToyRequest) -> Result<Self, Self::Error> {
        ToyDraft::try_from_parts(&value.name, &value.color).map_err(|err| invalid_field(&err))
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/toys",
    responses(
        (status = 200, description = "Every toy, by id", body = [ToySchema]),
        (status = 401, description = "Login required", body = ErrorSchema)
    ),
    tags = ["toys"],
    operation_id = "listToys"
)]
#[get("/toys")]
pub async fn list_toys(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Toy>>> {
    session.require_context()?;
    Ok(web::Json(state.toys.list().await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/toys",
    request_body = ToyRequest,
    responses(
        (status = 201, description = "Toy created", body = ToySchema),
        (status = 400, description = "Invalid toy", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema)
    ),
    tags = ["toys"],
    operation_id = "createToy"
)]
#[post("/toys")]
pub async fn create_toy(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ToyRequest>,
) -> ApiResult<HttpResponse> {
    session.require_context()?;
    let draft = ToyDraft::try_from(payload.into_inner())?;
    let toy = state.toys_command.create(draft).await?;
    Ok(HttpResponse::Created().json(toy))
}

#[utoipa::path(
    get,
    path = "/api/v1/toys/{toy_id}",
    params(("toy_id" = i32, Path, description = "Toy id")),
    responses(
        (status = 200, description = "Toy", body = ToySchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown toy", body = ErrorSchema)
    ),
    tags = ["toys"],
    operation_id = "getToy"
)]
#[get("/toys/{toy_id}")]
pub async fn get_toy(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Toy>> {
    session.require_context()?;
    let toy_id = toy_id_from_path(path.into_inner())?;
    Ok(web::Json(state.toys.get(toy_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/v1/toys/{toy_id}",
    params(("toy_id" = i32, Path, description = "Toy id")),
    request_body = ToyRequest,
    responses(
        (status = 200, description = "Updated toy", body = ToySchema),
        (status = 400, description = "Invalid toy", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown toy", body = ErrorSchema)
    ),
    tags = ["toys"],
    operation_id = "updateToy"
)]
#[put("/toys/{toy_id}")]
pub async fn update_toy(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    payload: web::Json<ToyRequest>,
) -> ApiResult<web::Json<Toy>> {
    session.require_context()?;
    let toy_id = toy_id_from_path(path.into_inner())?;
    let draft = ToyDraft::try_from(payload.into_inner())?;
    Ok(web::Json(state.toys_command.update(toy_id, draft).await?))
}

/// Delete a toy; cats that had it simply lose the association.
#[utoipa::path(
    delete,
    path = "/api/v1/toys/{toy_id}",
    params(("toy_id" = i32, Path, description = "Toy id")),
    responses(
        (status = 204, description = "Toy deleted"),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown toy", body = ErrorSchema)
    ),
    tags = ["toys"],
    operation_id = "deleteToy"
)]
#[delete("/toys/{toy_id}")]
pub async fn delete_toy(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    session.require_context()?;
    let toy_id = toy_id_from_path(path.into_inner())?;
    state.toys_command.delete(toy_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
