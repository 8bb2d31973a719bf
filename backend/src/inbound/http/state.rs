//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CatsCommand, CatsQuery, LoginService, SignupService, ToysCommand, ToysQuery,
};

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub signup: Arc<dyn SignupService>,
    pub login: Arc<dyn LoginService>,
    pub cats: Arc<dyn CatsQuery>,
    pub cats_command: Arc<dyn CatsCommand>,
    pub toys: Arc<dyn ToysQuery>,
    pub toys_command: Arc<dyn ToysCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub signup: Arc<dyn SignupService>,
    pub login: Arc<dyn LoginService>,
    pub cats: Arc<dyn CatsQuery>,
    pub cats_command: Arc<dyn CatsCommand>,
    pub toys: Arc<dyn ToysQuery>,
    pub toys_command: Arc<dyn ToysCommand>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{AccountService, CatDirectoryPorts, CatDirectoryService, ToyCatalogueService};
    /// use backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use backend::outbound::memory::MemoryStore;
    /// use backend::outbound::security::Argon2PasswordHasher;
    /// use backend::outbound::storage::MemoryObjectStorage;
    ///
    /// let store = MemoryStore::new();
    /// let accounts = Arc::new(AccountService::new(
    ///     Arc::new(store.users()),
    ///     Arc::new(Argon2PasswordHasher::default()),
    /// ));
    /// let cats = Arc::new(CatDirectoryService::new(CatDirectoryPorts {
    ///     cats: Arc::new(store.cats()),
    ///     toys: Arc::new(store.toys()),
    ///     feedings: Arc::new(store.feedings()),
    ///     photos: Arc::new(store.photos()),
    ///     storage: Arc::new(MemoryObjectStorage::new("cats")),
    /// }));
    /// let toys = Arc::new(ToyCatalogueService::new(Arc::new(store.toys())));
    /// let state = HttpState::new(HttpStatePorts {
    ///     signup: accounts.clone(),
    ///     login: accounts,
    ///     cats: cats.clone(),
    ///     cats_command: cats,
    ///     toys: toys.clone(),
    ///     toys_command: toys,
    /// });
    /// let _login = state.login.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            signup,
            login,
            cats,
            cats_command,
            toys,
            toys_command,
        } = ports;
        Self {
            signup,
            login,
            cats,
            cats_command,
            toys,
            toys_command,
        }
    }
}
