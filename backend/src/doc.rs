//! OpenAPI documentation for the cat collector API.
//!
//! Registers every handler under `/api/v1`, the health probes, the schema
//! wrappers from [`crate::inbound::http::schemas`] and the session cookie
//! security scheme. Served by Swagger UI in debug builds and exported with
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::accounts::{LoginRequest, SignupRequest};
use crate::inbound::http::cats::{CreateCatRequest, UpdateCatRequest};
use crate::inbound::http::feedings::FeedingFormBody;
use crate::inbound::http::photos::PhotoUploadBody;
use crate::inbound::http::schemas::{
    CatDetailSchema, CatSchema, ErrorCodeSchema, ErrorSchema, FeedingFormSchema, FeedingSchema,
    MealChoiceSchema, MealSchema, PhotoSchema, ToySchema, UserSchema,
};
use crate::inbound::http::toys::ToyRequest;
use crate::inbound::http::validation::AgeInput;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/signup or /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Cat collector API",
        description = "Track cats, their toys, feedings and photos behind a session login."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::accounts::signup,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::cats::list_cats,
        crate::inbound::http::cats::create_cat,
        crate::inbound::http::cats::cat_detail,
        crate::inbound::http::cats::update_cat,
        crate::inbound::http::cats::delete_cat,
        crate::inbound::http::feedings::add_feeding,
        crate::inbound::http::photos::add_photo,
        crate::inbound::http::cat_toys::associate_toy,
        crate::inbound::http::cat_toys::dissociate_toy,
        crate::inbound::http::toys::list_toys,
        crate::inbound::http::toys::create_toy,
        crate::inbound::http::toys::get_toy,
        crate::inbound::http::toys::update_toy,
        crate::inbound::http::toys::delete_toy,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserSchema,
        CatSchema,
        CatDetailSchema,
        ToySchema,
        FeedingSchema,
        MealSchema,
        MealChoiceSchema,
        FeedingFormSchema,
        PhotoSchema,
        SignupRequest,
        LoginRequest,
        CreateCatRequest,
        UpdateCatRequest,
        AgeInput,
        ToyRequest,
        FeedingFormBody,
        PhotoUploadBody,
    )),
    tags(
        (name = "accounts", description = "Signup, login and logout"),
        (name = "cats", description = "Cats with their feedings, photos and toys"),
        (name = "toys", description = "The shared toy catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
