//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories, object storage, password hashing) are
//! implemented by outbound adapters. Driving ports (queries, commands and
//! account services) are implemented by domain services and called by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod cat_repository;
mod cats_command;
mod cats_query;
mod crud_repository;
mod feeding_repository;
mod login_service;
mod object_storage;
mod password_hasher;
mod photo_repository;
mod signup_service;
mod toys_command;
mod toys_query;
mod user_repository;

pub use cat_repository::CatRepository;
#[cfg(test)]
pub use cats_command::MockCatsCommand;
pub use cats_command::CatsCommand;
#[cfg(test)]
pub use cats_query::MockCatsQuery;
pub use cats_query::{CatDetail, CatsQuery};
pub use crud_repository::{CrudRepository, RepositoryError};
#[cfg(test)]
pub use feeding_repository::MockFeedingRepository;
pub use feeding_repository::FeedingRepository;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use object_storage::MockObjectStorage;
pub use object_storage::{ObjectStorage, ObjectStorageError};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use photo_repository::MockPhotoRepository;
pub use photo_repository::PhotoRepository;
#[cfg(test)]
pub use signup_service::MockSignupService;
pub use signup_service::SignupService;
#[cfg(test)]
pub use toys_command::MockToysCommand;
pub use toys_command::ToysCommand;
#[cfg(test)]
pub use toys_query::MockToysQuery;
pub use toys_query::ToysQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{StoredUser, UserPersistenceError, UserRepository};
