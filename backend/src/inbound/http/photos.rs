//! Photo upload handler.
//!
//! ```text
//! POST /api/v1/cats/{cat_id}/photos   multipart/form-data; field "photo-file"
//! ```
//!
//! The browser is always sent back to the cat. A missing file is ignored
//! and a failed upload or photo record is logged, never reported. Only an
//! unknown cat is an error.

use actix_multipart::{Field, Multipart};
use actix_web::{HttpResponse, post, web};
use futures_util::TryStreamExt;
use tracing::{debug, warn};

use crate::domain::{Error, ErrorCode, PhotoUpload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{cat_id_from_path, redirect_to_cat};

/// Multipart field carrying the image.
pub const PHOTO_FIELD: &str = "photo-file";
/// Largest accepted photo.
pub const PHOTO_MAX_BYTES: usize = 10 * 1024 * 1024;

/// Multipart body of `POST /cats/{cat_id}/photos`.
#[derive(utoipa::ToSchema)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PhotoUploadBody {
    #[schema(rename = "photo-file", value_type = String, format = Binary)]
    photo_file: Vec<u8>,
}

async fn read_field(mut field: Field) -> Result<Option<PhotoUpload>, Error> {
    let file_name = field
        .content_disposition()
        .and_then(|disposition| disposition.get_filename())
        .unwrap_or_default()
        .to_owned();
    let content_type = field.content_type().map(ToString::to_string);

    let mut bytes = Vec::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|err| Error::invalid_request(format!("unreadable upload: {err}")))?
    {
        if bytes.len() + chunk.len() > PHOTO_MAX_BYTES {
            return Err(Error::invalid_request(format!(
                "photo exceeds {PHOTO_MAX_BYTES} bytes"
            )));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(Some(PhotoUpload::new(file_name, content_type, bytes)))
}

/// Pull the `photo-file` part out of the body, skipping any other parts.
async fn photo_from_multipart(mut payload: Multipart) -> Result<Option<PhotoUpload>, Error> {
    while let Some(field) = payload
        .try_next()
        .await
        .map_err(|err| Error::invalid_request(format!("malformed multipart body: {err}")))?
    {
        if field.name() == Some(PHOTO_FIELD) {
            return read_field(field).await;
        }
    }
    Ok(None)
}

/// Upload a photo of the cat, then redirect to the cat.
#[utoipa::path(
    post,
    path = "/api/v1/cats/{cat_id}/photos",
    params(("cat_id" = i32, Path, description = "Cat id")),
    request_body(content = PhotoUploadBody, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Back to the cat, whether or not a photo was stored",
            headers(("Location" = String, description = "Cat detail resource"))),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown cat", body = ErrorSchema)
    ),
    tags = ["cats"],
    operation_id = "addPhoto"
)]
#[post("/cats/{cat_id}/photos")]
pub async fn add_photo(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    payload: Multipart,
) -> ApiResult<HttpResponse> {
    session.require_context()?;
    let cat_id = cat_id_from_path(path.into_inner())?;
    let upload = match photo_from_multipart(payload).await {
        Ok(upload) => upload,
        Err(error) => {
            debug!(%cat_id, error = %error.message(), "photo upload body discarded");
            None
        }
    };

    match state.cats_command.add_photo(cat_id, upload).await {
        Ok(Some(photo)) => debug!(%cat_id, photo_id = %photo.id(), "photo stored"),
        Ok(None) => debug!(%cat_id, "no photo submitted"),
        Err(error) if error.code() == ErrorCode::NotFound => return Err(error),
        Err(error) => {
            warn!(
                %cat_id,
                code = ?error.code(),
                error = %error.message(),
                "photo upload failed"
            );
        }
    }
    Ok(redirect_to_cat(cat_id))
}

#[cfg(test)]
#[path = "photos_tests.rs"]
mod tests;
