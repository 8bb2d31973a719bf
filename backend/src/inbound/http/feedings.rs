//! Feeding log handler.
//!
//! ```text
//! POST /api/v1/cats/{cat_id}/feedings   date=2024-01-15&meal=B
//! ```
//!
//! Browsers post this form from the cat page, so the handler always sends
//! them back there. An invalid submission is dropped silently.

use actix_web::{HttpResponse, post, web};
use tracing::debug;

use crate::domain::{ErrorCode, FeedingForm};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{cat_id_from_path, redirect_to_cat};

/// Form fields of `POST /cats/{cat_id}/feedings`.
#[derive(utoipa::ToSchema)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct FeedingFormBody {
    #[schema(example = "2024-01-15", format = Date)]
    date: String,
    #[schema(example = "B")]
    meal: String,
}

/// Record a feeding, then redirect to the cat.
#[utoipa::path(
    post,
    path = "/api/v1/cats/{cat_id}/feedings",
    params(("cat_id" = i32, Path, description = "Cat id")),
    request_body(content = FeedingFormBody, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Back to the cat, whether or not the form was valid",
            headers(("Location" = String, description = "Cat detail resource"))),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown cat", body = ErrorSchema)
    ),
    tags = ["cats"],
    operation_id = "addFeeding"
)]
#[post("/cats/{cat_id}/feedings")]
pub async fn add_feeding(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i32>,
    form: Result<web::Form<FeedingForm>, actix_web::Error>,
) -> ApiResult<HttpResponse> {
    session.require_context()?;
    let cat_id = cat_id_from_path(path.into_inner())?;
    let form = match form {
        Ok(form) => form.into_inner(),
        Err(error) => {
            debug!(%cat_id, %error, "unreadable feeding form discarded");
            return Ok(redirect_to_cat(cat_id));
        }
    };

    match state.cats_command.add_feeding(cat_id, form).await {
        Ok(feeding) => debug!(%cat_id, feeding_id = %feeding.id(), "feeding recorded"),
        Err(error) if error.code() == ErrorCode::InvalidRequest => {
            debug!(%cat_id, error = %error.message(), details = ?error.details(), "invalid feeding discarded");
        }
        Err(error) => return Err(error),
    }
    Ok(redirect_to_cat(cat_id))
}

#[cfg(test)]
mod tests {
    use crate::domain::CatId;
    use crate::domain::ports::FeedingRepository;
    use crate::inbound::http::test_utils::{MemoryBackend, api_app, signed_up};
    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn post_feeding(body: &'static str) -> (StatusCode, usize) {
        let backend = MemoryBackend::new();
        let app = test::init_service(api_app(backend.state.clone())).await;
        let cookie = signed_up(&app, "alice").await;
        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/cats")
                .cookie(cookie.clone())
                .set_json(json!({"name": "Fig", "breed": "Tabby", "age": 3}))
                .to_request(),
        )
        .await;
        let cat: Value = test::read_body_json(created).await;
        let cat_id = cat["id"].as_i64().expect("cat id");

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/v1/cats/{cat_id}/feedings"))
                .cookie(cookie)
                .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
                .set_payload(body)
                .to_request(),
        )
        .await;
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        assert_eq!(location, Some(format!("/api/v1/cats/{cat_id}")));

        let cat_id = CatId::new(i32::try_from(cat_id).expect("i32 id")).expect("positive id");
        let stored = backend
            .store
            .feedings()
            .list_for_cat(cat_id)
            .await
            .expect("list")
            .len();
        (res.status(), stored)
    }

    #[rstest]
    #[case("date=2024-01-15&meal=B", 1)]
    #[case("meal=B", 0)]
    #[case("date=2024-01-15&meal=X", 0)]
    #[case("date=15%2F01%2F2024&meal=L", 0)]
    #[actix_web::test]
    async fn feedings_always_redirect_to_the_cat(#[case] body: &'static str, #[case] stored: usize) {
        let (status, count) = post_feeding(body).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(count, stored);
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_cats_are_not_found() {
        let backend = MemoryBackend::new();
        let app = test::init_service(api_app(backend.state.clone())).await;
        let cookie = signed_up(&app, "alice").await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/cats/99/feedings")
                .cookie(cookie)
                .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
                .set_payload("date=2024-01-15&meal=B")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
