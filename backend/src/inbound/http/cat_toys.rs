//! Cat and toy association handlers.
//!
//! ```text
//! POST   /api/v1/cats/{cat_id}/toys/{toy_id}
//! DELETE /api/v1/cats/{cat_id}/toys/{toy_id}
//! ```
//!
//! Both redirect back to the cat. Adding twice and removing an absent
//! association are no-ops.

use actix_web::{HttpResponse, delete, post, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{cat_id_from_path, redirect_to_cat, toy_id_from_path};

/// Associate a toy with a cat.
#[utoipa::path(
    post,
    path = "/api/v1/cats/{cat_id}/toys/{toy_id}",
    params(
        ("cat_id" = i32, Path, description = "Cat id"),
        ("toy_id" = i32, Path, description = "Toy id")
    ),
    responses(
        (status = 303, description = "Back to the cat",
            headers(("Location" = String, description = "Cat detail resource"))),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown cat or toy", body = ErrorSchema)
    ),
    tags = ["cats"],
    operation_id = "associateToy"
)]
#[post("/cats/{cat_id}/toys/{toy_id}")]
pub async fn associate_toy(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(i32, i32)>,
) -> ApiResult<HttpResponse> {
    session.require_context()?;
    let (raw_cat, raw_toy) = path.into_inner();
    let cat_id = cat_id_from_path(raw_cat)?;
    let toy_id = toy_id_from_path(raw_toy)?;
    state.cats_command.associate_toy(cat_id, toy_id).await?;
    Ok(redirect_to_cat(cat_id))
}

/// Remove a toy from a cat.
#[utoipa::path(
    delete,
    path = "/api/v1/cats/{cat_id}/toys/{toy_id}",
    params(
        ("cat_id" = i32, Path, description = "Cat id"),
        ("toy_id" = i32, Path, description = "Toy id")
    ),
    responses(
        (status = 303, description = "Back to the cat",
            headers(("Location" = String, description = "Cat detail resource"))),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown cat", body = ErrorSchema)
    ),
    tags = ["cats"],
    operation_id = "dissociateToy"
)]
#[delete("/cats/{cat_id}/toys/{toy_id}")]
pub async fn dissociate_toy(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(i32, i32)>,
) -> ApiResult<HttpResponse> {
    session.require_context()?;
    let (raw_cat, raw_toy) = path.into_inner();
    let cat_id = cat_id_from_path(raw_cat)?;
    let toy_id = toy_id_from_path(raw_toy)?;
    state.cats_command.dissociate_toy(cat_id, toy_id).await?;
    Ok(redirect_to_cat(cat_id))
}
