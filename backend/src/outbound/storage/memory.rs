//! In-memory object storage used when no bucket is configured.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::object_url;
use crate::domain::PhotoKey;
use crate::domain::ports::{ObjectStorage, ObjectStorageError};

/// Base URL reported for objects held in memory.
pub const MEMORY_BASE_URL: &str = "memory://";

/// Keeps uploaded objects in a map. Keys are never overwritten.
#[derive(Debug, Clone)]
pub struct MemoryObjectStorage {
    bucket: String,
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryObjectStorage {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Arc::default(),
        }
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.lock().await.is_empty()
    }

    /// Content stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().await.get(key).cloned()
    }
}

#[async_trait]
impl ObjectStorage for MemoryObjectStorage {
    async fn put_object(
        &self,
        key: &PhotoKey,
        body: Vec<u8>,
        _content_type: Option<String>,
    ) -> Result<String, ObjectStorageError> {
        let mut objects = self.objects.lock().await;
        if objects.contains_key(key.as_str()) {
            return Err(ObjectStorageError::key_exists(key.as_str()));
        }
        objects.insert(key.as_str().to_owned(), body);
        Ok(object_url(MEMORY_BASE_URL, &self.bucket, key.as_str()))
    }
}
