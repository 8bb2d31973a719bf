//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};

use crate::domain::ports::{ObjectStorage, PhotoRepository};
use crate::domain::{AccountService, CatDirectoryPorts, CatDirectoryService, ToyCatalogueService};
use crate::outbound::memory::MemoryStore;
use crate::outbound::security::Argon2PasswordHasher;
use crate::outbound::storage::MemoryObjectStorage;

use super::state::{HttpState, HttpStatePorts};
use super::{API_PREFIX, api_routes, json_config};

/// Session middleware with a fresh key, cookie `session` and no `Secure`
/// flag so plain HTTP test requests keep it.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Services wired over one in-memory store.
pub struct MemoryBackend {
    pub store: MemoryStore,
    pub storage: Arc<MemoryObjectStorage>,
    pub state: HttpState,
}

impl MemoryBackend {
    pub fn new() -> Self {
        let storage = Arc::new(MemoryObjectStorage::new("cats"));
        let (store, state) = memory_state(storage.clone());
        Self {
            store,
            storage,
            state,
        }
    }
}

/// HTTP state over a fresh in-memory store and the given object storage.
pub fn memory_state(storage: Arc<dyn ObjectStorage>) -> (MemoryStore, HttpState) {
    let store = MemoryStore::new();
    let photos = Arc::new(store.photos());
    let state = state_over(&store, storage, photos);
    (store, state)
}

/// HTTP state over `store`, with photo records kept in `photos`.
pub fn state_over(
    store: &MemoryStore,
    storage: Arc<dyn ObjectStorage>,
    photos: Arc<dyn PhotoRepository>,
) -> HttpState {
    let accounts = Arc::new(AccountService::new(
        Arc::new(store.users()),
        Arc::new(Argon2PasswordHasher::new()),
    ));
    let cats = Arc::new(CatDirectoryService::new(CatDirectoryPorts {
        cats: Arc::new(store.cats()),
        toys: Arc::new(store.toys()),
        feedings: Arc::new(store.feedings()),
        photos,
        storage,
    }));
    let toys = Arc::new(ToyCatalogueService::new(Arc::new(store.toys())));
    HttpState::new(HttpStatePorts {
        signup: accounts.clone(),
        login: accounts,
        cats: cats.clone(),
        cats_command: cats,
        toys: toys.clone(),
        toys_command: toys,
    })
}

/// The `session` cookie set by a response, if any.
pub fn session_cookie(res: &ServiceResponse) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(|cookie| cookie.into_owned())
}

/// Sign up `username` through the API and return the session cookie.
pub async fn signed_up<S>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(serde_json::json!({
                "username": username,
                "password1": "whiskers-1",
                "password2": "whiskers-1",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), actix_web::http::StatusCode::CREATED);
    session_cookie(&res).expect("signup sets the session cookie")
}

/// App serving every `/api/v1` route over `state` with a test session.
pub fn api_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .service(
            web::scope(API_PREFIX)
                .wrap(test_session_middleware())
                .configure(api_routes),
        )
}
