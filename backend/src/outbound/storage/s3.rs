//! S3 adapter for the [`ObjectStorage`] port.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{debug, error};

use super::object_url;
use crate::domain::PhotoKey;
use crate::domain::ports::{ObjectStorage, ObjectStorageError};

/// Error code S3 returns when an `If-None-Match: *` upload hits an
/// existing key.
const PRECONDITION_FAILED: &str = "PreconditionFailed";

/// Uploads photos to one S3 bucket.
#[derive(Debug, Clone)]
pub struct S3ObjectStorage {
    client: Client,
    bucket: String,
    base_url: String,
}

impl S3ObjectStorage {
    /// Build a client from the ambient AWS configuration (environment,
    /// profile or instance metadata).
    pub async fn from_env(bucket: impl Into<String>, base_url: impl Into<String>) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::new(Client::new(&config), bucket, base_url)
    }

    pub fn new(client: Client, bucket: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn put_object(
        &self,
        key: &PhotoKey,
        body: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<String, ObjectStorageError> {
        let size = body.len();
        let result = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .if_none_match("*")
            .set_content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await;

        match result {
            Ok(_) => {
                debug!(bucket = %self.bucket, %key, size, "uploaded object");
                Ok(object_url(&self.base_url, &self.bucket, key.as_str()))
            }
            Err(err) if err.code() == Some(PRECONDITION_FAILED) => {
                Err(ObjectStorageError::key_exists(key.as_str()))
            }
            Err(err) => {
                error!(bucket = %self.bucket, %key, error = ?err, "S3 upload failed");
                Err(ObjectStorageError::upload(err.to_string()))
            }
        }
    }
}
