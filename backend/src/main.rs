//! Cat collector entry point: loads settings, prepares persistence and
//! object storage, then serves the REST API.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::outbound::storage::S3ObjectStorage;
use server::{AppSettings, ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    let session =
        session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
            .map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
    );

    match settings.database_url.as_deref() {
        Some(database_url) => {
            if settings.run_migrations() {
                let applied = run_pending_migrations(database_url)
                    .await
                    .map_err(std::io::Error::other)?;
                info!(count = applied.len(), "database schema is current");
            }
            let pool = DbPool::new(
                PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
            )
            .await
            .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => warn!("CATCOLLECTOR_DATABASE_URL not set; data lives in memory"),
    }

    match settings.s3_target() {
        Some((bucket, base_url)) => {
            let storage = S3ObjectStorage::from_env(bucket, base_url).await;
            config = config.with_object_storage(Arc::new(storage));
        }
        None => warn!("S3 bucket not configured; photos are kept in memory"),
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await
}
