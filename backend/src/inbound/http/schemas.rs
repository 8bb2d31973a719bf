//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their serialised shape and register under the
//! domain type's name via `#[schema(as = ...)]`.

#![expect(
    dead_code,
    reason = "Fields exist only for OpenAPI schema generation via utoipa"
)]

use utoipa::ToSchema;

/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    #[schema(rename = "unauthorized")]
    Unauthorized,
    #[schema(rename = "forbidden")]
    Forbidden,
    #[schema(rename = "not_found")]
    NotFound,
    #[schema(rename = "conflict")]
    Conflict,
    #[schema(rename = "upload_failed")]
    UploadFailed,
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// API error response payload.
#[derive(ToSchema)]
#[schema(as = Error)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "age must not be negative")]
    message: String,
    /// Correlates the error with server logs.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level details, usually `{"field": ..., "code": ...}`.
    details: Option<serde_json::Value>,
}

/// Registered account.
#[derive(ToSchema)]
#[schema(as = User)]
pub struct UserSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "alice")]
    username: String,
}

/// A cat owned by one user.
#[derive(ToSchema)]
#[schema(as = Cat)]
pub struct CatSchema {
    #[schema(example = 1)]
    id: i32,
    /// Owning user id.
    owner: String,
    #[schema(example = "Fig")]
    name: String,
    #[schema(example = "Tabby")]
    breed: String,
    #[schema(example = "orange")]
    description: String,
    #[schema(example = 3, minimum = 0)]
    age: i32,
}

/// A toy in the shared catalogue.
#[derive(ToSchema)]
#[schema(as = Toy)]
pub struct ToySchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Mouse")]
    name: String,
    #[schema(example = "grey")]
    color: String,
}

/// Meal codes: breakfast, lunch, dinner.
#[derive(ToSchema)]
#[schema(as = Meal)]
pub enum MealSchema {
    B,
    L,
    D,
}

/// One feeding log entry.
#[derive(ToSchema)]
#[schema(as = Feeding)]
#[serde(rename_all = "camelCase")]
pub struct FeedingSchema {
    id: i32,
    cat_id: i32,
    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    date: String,
    meal: MealSchema,
}

/// A stored photo of a cat.
#[derive(ToSchema)]
#[schema(as = Photo)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSchema {
    id: i32,
    cat_id: i32,
    #[schema(example = "https://s3.amazonaws.com/catcollector/0f1e2d3c4b5a69788796a5b4c3d2e1f0.jpg")]
    url: String,
}

#[derive(ToSchema)]
#[schema(as = MealChoice)]
pub struct MealChoiceSchema {
    #[schema(example = "B")]
    value: String,
    #[schema(example = "Breakfast")]
    label: String,
}

/// Shape of an empty feeding form.
#[derive(ToSchema)]
#[schema(as = FeedingForm)]
#[serde(rename_all = "camelCase")]
pub struct FeedingFormSchema {
    #[schema(example = json!(["date", "meal"]))]
    fields: Vec<String>,
    meal_choices: Vec<MealChoiceSchema>,
}

/// A cat with its toys, feedings, photos and the toys it does not have.
#[derive(ToSchema)]
#[schema(as = CatDetail)]
#[serde(rename_all = "camelCase")]
pub struct CatDetailSchema {
    cat: CatSchema,
    toys: Vec<ToySchema>,
    /// Newest first.
    feedings: Vec<FeedingSchema>,
    photos: Vec<PhotoSchema>,
    feeding_form: FeedingFormSchema,
    toys_not_owned: Vec<ToySchema>,
}
