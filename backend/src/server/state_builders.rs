//! Builders wiring repositories and object storage into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use backend::domain::ports::{
    CatRepository, CrudRepository, FeedingRepository, ObjectStorage, PhotoRepository,
    UserRepository,
};
use backend::domain::{
    AccountService, CatDirectoryPorts, CatDirectoryService, Toy, ToyCatalogueService,
};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::outbound::memory::MemoryStore;
use backend::outbound::persistence::{
    DbPool, DieselCatRepository, DieselFeedingRepository, DieselPhotoRepository,
    DieselToyRepository, DieselUserRepository,
};
use backend::outbound::security::Argon2PasswordHasher;
use backend::outbound::storage::MemoryObjectStorage;

use super::ServerConfig;

/// Bucket name reported in URLs of photos kept in memory.
const MEMORY_BUCKET: &str = "cats";

/// Driven ports shared by the domain services.
struct Repositories {
    users: Arc<dyn UserRepository>,
    cats: Arc<dyn CatRepository>,
    toys: Arc<dyn CrudRepository<Toy>>,
    feedings: Arc<dyn FeedingRepository>,
    photos: Arc<dyn PhotoRepository>,
}

impl Repositories {
    fn diesel(pool: &DbPool) -> Self {
        Self {
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            cats: Arc::new(DieselCatRepository::new(pool.clone())),
            toys: Arc::new(DieselToyRepository::new(pool.clone())),
            feedings: Arc::new(DieselFeedingRepository::new(pool.clone())),
            photos: Arc::new(DieselPhotoRepository::new(pool.clone())),
        }
    }

    fn memory(store: &MemoryStore) -> Self {
        Self {
            users: Arc::new(store.users()),
            cats: Arc::new(store.cats()),
            toys: Arc::new(store.toys()),
            feedings: Arc::new(store.feedings()),
            photos: Arc::new(store.photos()),
        }
    }

    fn from_pool(pool: Option<&DbPool>) -> Self {
        match pool {
            Some(pool) => Self::diesel(pool),
            None => Self::memory(&MemoryStore::new()),
        }
    }
}

fn build_state(repos: Repositories, storage: Arc<dyn ObjectStorage>) -> HttpState {
    let accounts = Arc::new(AccountService::new(
        repos.users,
        Arc::new(Argon2PasswordHasher::new()),
    ));
    let cats = Arc::new(CatDirectoryService::new(CatDirectoryPorts {
        cats: repos.cats,
        toys: repos.toys.clone(),
        feedings: repos.feedings,
        photos: repos.photos,
        storage,
    }));
    let toys = Arc::new(ToyCatalogueService::new(repos.toys));

    HttpState::new(HttpStatePorts {
        signup: accounts.clone(),
        login: accounts,
        cats: cats.clone(),
        cats_command: cats,
        toys: toys.clone(),
        toys_command: toys,
    })
}

/// Build the shared HTTP state, falling back to in-memory adapters for
/// whatever the configuration leaves out.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repos = Repositories::from_pool(config.db_pool.as_ref());
    let storage = config
        .object_storage
        .clone()
        .unwrap_or_else(|| Arc::new(MemoryObjectStorage::new(MEMORY_BUCKET)));
    web::Data::new(build_state(repos, storage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::{Key, SameSite};
    use backend::domain::{
        Age, Breed, CatName, Description, LoginCredentials, NewCat, PhotoUpload, RequestContext,
        SignupCredentials,
    };
    use rstest::rstest;
    use std::net::SocketAddr;

    fn memory_config() -> ServerConfig {
        ServerConfig::new(
            Key::generate(),
            false,
            SameSite::Lax,
            SocketAddr::from(([127, 0, 0, 1], 0)),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn missing_pool_serves_from_one_shared_memory_store() {
        let state = build_http_state(&memory_config());

        let credentials =
            SignupCredentials::try_from_parts("alice", "whiskers-1", "whiskers-1").expect("valid");
        let user = state.signup.signup(&credentials).await.expect("signup");

        let login = LoginCredentials::try_from_parts("alice", "whiskers-1").expect("login");
        assert_eq!(
            state.login.authenticate(&login).await.expect("login"),
            *user.id()
        );

        let ctx = RequestContext::new(*user.id());
        assert!(state.cats.list_scoped(&ctx).await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn configured_storage_receives_uploads() {
        let storage = Arc::new(MemoryObjectStorage::new("uploads"));
        let config = memory_config().with_object_storage(storage.clone());
        let state = build_http_state(&config);

        let user = state
            .signup
            .signup(
                &SignupCredentials::try_from_parts("bob", "whiskers-1", "whiskers-1")
                    .expect("valid"),
            )
            .await
            .expect("signup");
        let cat = state
            .cats_command
            .create(
                &RequestContext::new(*user.id()),
                NewCat {
                    name: CatName::new("Olive").expect("name"),
                    breed: Breed::new("Tabby").expect("breed"),
                    description: Description::default(),
                    age: Age::new(1).expect("age"),
                },
            )
            .await
            .expect("create");
        let photo = state
            .cats_command
            .add_photo(
                cat.id(),
                Some(PhotoUpload::new("olive.png", None, vec![1, 2])),
            )
            .await
            .expect("upload")
            .expect("photo recorded");

        assert!(photo.url().starts_with("memory://uploads/"));
        assert_eq!(storage.len().await, 1);
    }
}
