//! Shared wiring for integration tests: domain services over the in-memory
//! adapters, plus an Actix app serving the full API.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use backend::domain::ports::SignupService;
use backend::domain::{
    AccountService, CatDirectoryPorts, CatDirectoryService, RequestContext, SignupCredentials,
    ToyCatalogueService,
};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::inbound::http::{API_PREFIX, api_routes, json_config};
use backend::outbound::memory::MemoryStore;
use backend::outbound::security::Argon2PasswordHasher;
use backend::outbound::storage::MemoryObjectStorage;

pub const PASSWORD: &str = "whiskers-1";

/// Services and the adapters behind them.
pub struct World {
    pub store: MemoryStore,
    pub storage: Arc<MemoryObjectStorage>,
    pub accounts: Arc<AccountService>,
    pub cats: Arc<CatDirectoryService>,
    pub toys: Arc<ToyCatalogueService>,
}

impl World {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let storage = Arc::new(MemoryObjectStorage::new("cats"));
        let accounts = Arc::new(AccountService::new(
            Arc::new(store.users()),
            Arc::new(Argon2PasswordHasher::new()),
        ));
        let cats = Arc::new(CatDirectoryService::new(CatDirectoryPorts {
            cats: Arc::new(store.cats()),
            toys: Arc::new(store.toys()),
            feedings: Arc::new(store.feedings()),
            photos: Arc::new(store.photos()),
            storage: storage.clone(),
        }));
        let toys = Arc::new(ToyCatalogueService::new(Arc::new(store.toys())));
        Self {
            store,
            storage,
            accounts,
            cats,
            toys,
        }
    }

    /// Register `username` and return a context acting as them.
    pub async fn user(&self, username: &str) -> RequestContext {
        let credentials =
            SignupCredentials::try_from_parts(username, PASSWORD, PASSWORD).expect("credentials");
        let user = self.accounts.signup(&credentials).await.expect("signup");
        RequestContext::new(*user.id())
    }

    pub fn http_state(&self) -> HttpState {
        HttpState::new(HttpStatePorts {
            signup: self.accounts.clone(),
            login: self.accounts.clone(),
            cats: self.cats.clone(),
            cats_command: self.cats.clone(),
            toys: self.toys.clone(),
            toys_command: self.toys.clone(),
        })
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
            .cookie_name("session".to_owned())
            .cookie_secure(false)
            .build();
        App::new()
            .app_data(web::Data::new(self.http_state()))
            .app_data(json_config())
            .service(web::scope(API_PREFIX).wrap(session).configure(api_routes))
    }
}

pub fn session_cookie(res: &ServiceResponse) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(|cookie| cookie.into_owned())
}

/// Sign up over HTTP and return the session cookie.
pub async fn http_signup<S>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/signup")
            .set_json(serde_json::json!({
                "username": username,
                "password1": PASSWORD,
                "password2": PASSWORD,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    session_cookie(&res).expect("session cookie")
}
