//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL through `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories translate between Diesel rows and
//!   domain types. No business rules live here.
//! - **Internal models**: row structs (`models.rs`) and the schema
//!   (`schema.rs`) never leave this module.
//! - **Database-enforced integrity**: foreign keys with `ON DELETE CASCADE`
//!   back the cascade on cat deletion and surface as `MissingReference`.
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselCatRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/catcollector")).await?;
//! let cats = DieselCatRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_cat_repository;
mod diesel_feeding_repository;
mod diesel_photo_repository;
mod diesel_toy_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_cat_repository::DieselCatRepository;
pub use diesel_feeding_repository::DieselFeedingRepository;
pub use diesel_photo_repository::DieselPhotoRepository;
pub use diesel_toy_repository::DieselToyRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
