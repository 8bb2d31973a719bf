//! Domain primitives, ports and services.
//!
//! Purpose: define strongly typed entities (users, cats, toys, feedings and
//! photos), the transport-agnostic error type, and the services behind the
//! driving ports. Nothing here depends on Actix, Diesel or AWS.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable code.
//! - Cat, Toy, Feeding, Photo, User: entities with validating constructors.
//! - CatDirectoryService, ToyCatalogueService, AccountService: driving port
//!   implementations.

pub mod account_service;
pub mod auth;
pub mod cat;
pub mod cat_service;
pub mod context;
pub mod crud;
pub mod error;
pub mod feeding;
pub mod photo;
pub mod ports;
pub mod toy;
pub mod toy_service;
pub mod trace_id;
pub mod user;
mod validation;

pub use self::account_service::AccountService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, PASSWORD_MIN_LEN, PasswordHash, SignupCredentials,
    SignupValidationError,
};
pub use self::cat::{
    Age, BREED_MAX, Breed, CAT_NAME_MAX, Cat, CatChanges, CatDraft, CatId, CatName,
    CatValidationError, DESCRIPTION_MAX, Description, NewCat,
};
pub use self::cat_service::{CatDirectoryPorts, CatDirectoryService, MAX_PHOTO_KEY_ATTEMPTS};
pub use self::context::RequestContext;
pub use self::crud::{CrudService, Entity};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::feeding::{
    FEEDING_DATE_FORMAT, Feeding, FeedingDraft, FeedingForm, FeedingFormDescriptor, FeedingId,
    FeedingValidationError, Meal, MealChoice, NewFeeding, ParseMealError, sort_newest_first,
};
pub use self::photo::{NewPhoto, PHOTO_EXTENSION_MAX, Photo, PhotoId, PhotoKey, PhotoUpload};
pub use self::toy::{COLOR_MAX, TOY_NAME_MAX, Toy, ToyDraft, ToyId, ToyValidationError};
pub use self::toy_service::ToyCatalogueService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{USERNAME_MAX, User, UserId, UserValidationError, Username};
pub use self::validation::{FieldViolation, InvalidRecordId, invalid_field};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
