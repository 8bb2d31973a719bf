//! Port for the blob store that holds photo files.

use async_trait::async_trait;

use crate::domain::PhotoKey;

use super::define_port_error;

define_port_error! {
    /// Errors raised by object storage adapters.
    pub enum ObjectStorageError {
        /// An object already exists under the key.
        KeyExists { key: String } => "object already exists: {key}",
        /// The upload was rejected or could not be sent.
        Upload { message: String } => "object upload failed: {message}",
    }
}

/// Blob store returning a public URL for each stored object.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `body` under `key` without overwriting, returning its URL.
    async fn put_object(
        &self,
        key: &PhotoKey,
        body: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<String, ObjectStorageError>;
}
