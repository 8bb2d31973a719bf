//! Tests for signup, login and logout.

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use super::SIGNUP_FAILED_MESSAGE;
use crate::domain::ports::UserRepository;
use crate::inbound::http::test_utils::{MemoryBackend, api_app, session_cookie, signed_up};

fn signup_body(username: &str, password1: &str, password2: &str) -> Value {
    json!({ "username": username, "password1": password1, "password2": password2 })
}

#[rstest]
#[actix_web::test]
async fn signup_creates_the_user_and_signs_them_in() {
    let backend = MemoryBackend::new();
    let app = test::init_service(api_app(backend.state.clone())).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(signup_body("alice", "whiskers-1", "whiskers-1"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let cookie = session_cookie(&res).expect("session cookie");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["username"], "alice");
    assert!(body.get("passwordHash").is_none());

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/cats")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[rstest]
#[case::mismatch("alice", "whiskers-1", "whiskers-2", "password2", "password_mismatch")]
#[case::short("alice", "abc", "abc", "password1", "password_too_short")]
#[case::numeric("alice", "12345678", "12345678", "password1", "password_entirely_numeric")]
#[case::blank_username("  ", "whiskers-1", "whiskers-1", "username", "invalid_username")]
#[actix_web::test]
async fn invalid_signups_redisplay_without_creating_users(
    #[case] username: &str,
    #[case] password1: &str,
    #[case] password2: &str,
    #[case] field: &str,
    #[case] code: &str,
) {
    let backend = MemoryBackend::new();
    let app = test::init_service(api_app(backend.state.clone())).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(signup_body(username, password1, password2))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(session_cookie(&res).is_none());
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], SIGNUP_FAILED_MESSAGE);
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], code);

    let stored = backend
        .store
        .users()
        .find_by_username(username.trim())
        .await
        .expect("lookup");
    assert!(stored.is_none());
}

#[rstest]
#[actix_web::test]
async fn taken_usernames_are_a_failed_signup() {
    let backend = MemoryBackend::new();
    let app = test::init_service(api_app(backend.state.clone())).await;
    signed_up(&app, "alice").await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(signup_body("alice", "another-pass", "another-pass"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], SIGNUP_FAILED_MESSAGE);
    assert_eq!(body["details"]["code"], "username_taken");
}

#[rstest]
#[case("whiskers-1", StatusCode::OK)]
#[case("whiskers-2", StatusCode::UNAUTHORIZED)]
#[actix_web::test]
async fn login_checks_the_password(#[case] password: &str, #[case] expected: StatusCode) {
    let backend = MemoryBackend::new();
    let app = test::init_service(api_app(backend.state.clone())).await;
    signed_up(&app, "alice").await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "alice", "password": password }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), expected);
    assert_eq!(session_cookie(&res).is_some(), expected == StatusCode::OK);
}

#[rstest]
#[case(json!({ "username": "", "password": "whiskers-1" }), "empty_username")]
#[case(json!({ "username": "alice", "password": "" }), "empty_password")]
#[actix_web::test]
async fn login_rejects_blank_fields(#[case] body: Value, #[case] code: &str) {
    let backend = MemoryBackend::new();
    let app = test::init_service(api_app(backend.state.clone())).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], code);
}

#[rstest]
#[actix_web::test]
async fn logout_clears_the_session() {
    let backend = MemoryBackend::new();
    let app = test::init_service(api_app(backend.state.clone())).await;
    let cookie = signed_up(&app, "alice").await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let removal = session_cookie(&res).expect("removal cookie");
    assert!(removal.value().is_empty());

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/cats")
            .cookie(removal)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
