//! Application settings loaded via OrthoConfig from CLI flags, the
//! environment (`CATCOLLECTOR_*`) and an optional config file.

use std::net::{AddrParseError, SocketAddr};

use backend::outbound::persistence::DEFAULT_MAX_CONNECTIONS;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Deployment settings for the cat collector server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATCOLLECTOR")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Postgres URL. Without one, data lives in memory for the process
    /// lifetime.
    pub database_url: Option<String>,
    /// S3 bucket for photos. Without one, photos are kept in memory.
    pub s3_bucket: Option<String>,
    /// Public base URL prefixed to `{bucket}/{key}` photo URLs.
    pub s3_base_url: Option<String>,
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving. Defaults to true.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Bucket and base URL, when both are configured.
    pub fn s3_target(&self) -> Option<(&str, &str)> {
        match (self.s3_bucket.as_deref(), self.s3_base_url.as_deref()) {
            (Some(bucket), Some(base_url)) => Some((bucket, base_url)),
            _ => None,
        }
    }
}
