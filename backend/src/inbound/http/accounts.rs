//! Account handlers: signup, login and logout.
//!
//! ```text
//! POST /api/v1/signup {"username":"alice","password1":"...","password2":"..."}
//! POST /api/v1/login {"username":"alice","password":"..."}
//! POST /api/v1/logout
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::{
    Error, ErrorCode, LoginCredentials, LoginValidationError, SignupCredentials,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Message shown for every rejected signup so the form can be redisplayed.
pub const SIGNUP_FAILED_MESSAGE: &str = "Invalid sign up - try again";

/// Signup request body.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SignupRequest {
    #[schema(example = "alice")]
    pub username: String,
    pub password1: String,
    /// Must repeat `password1`.
    pub password2: String,
}

/// Login request body.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

fn signup_failure(details: serde_json::Value) -> Error {
    Error::invalid_request(SIGNUP_FAILED_MESSAGE).with_details(details)
}

/// Register an account and sign it in.
///
/// Every rejection, including a taken username, answers 400 with the same
/// message; `details` names the offending field.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created and signed in", body = UserSchema,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid sign up", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    let credentials =
        SignupCredentials::try_from_parts(&request.username, &request.password1, &request.password2)
            .map_err(|err| {
                debug!(field = err.field(), code = err.code(), "signup rejected");
                signup_failure(json!({
                    "field": err.field(),
                    "code": err.code(),
                    "reason": err.to_string(),
                }))
            })?;

    let user = state
        .signup
        .signup(&credentials)
        .await
        .map_err(|err| match err.code() {
            ErrorCode::Conflict => {
                signup_failure(err.details().cloned().unwrap_or_else(|| json!({})))
            }
            _ => err,
        })?;
    session.persist_user(user.id())?;
    info!(user_id = %user.id(), "user signed up");
    Ok(HttpResponse::Created().json(user))
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::invalid_request("username must not be empty")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success",
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let user_id = state.login.authenticate(&credentials).await?;
    session.persist_user(&user_id)?;
    Ok(HttpResponse::Ok().finish())
}

/// End the session. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["accounts"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
