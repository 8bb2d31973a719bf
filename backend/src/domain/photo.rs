//! Cat photos and their object storage keys.

use std::fmt;

use serde::Serialize;

use super::CatId;
use super::validation::define_record_id;

define_record_id!(
    /// Database identifier of a photo.
    PhotoId,
    "photo"
);

/// Longest file extension carried over into a storage key.
pub const PHOTO_EXTENSION_MAX: usize = 10;

/// A file received from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    file_name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl PhotoUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// Client-supplied file name. Only its extension is ever used.
    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// An upload with no content is treated as no upload at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the upload, returning its content.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Object storage key for a photo: 32 random hex characters plus the
/// original extension when it is usable.
///
/// # Examples
/// ```
/// use backend::domain::PhotoKey;
///
/// let key = PhotoKey::generate("Whiskers.JPG");
/// assert_eq!(key.as_str().len(), 36);
/// assert!(key.as_str().ends_with(".jpg"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoKey(String);

impl PhotoKey {
    /// Generate a fresh key for a file with the given name.
    pub fn generate(file_name: &str) -> Self {
        let stem = hex::encode(rand::random::<[u8; 16]>());
        match extension_of(file_name) {
            Some(ext) => Self(format!("{stem}.{ext}")),
            None => Self(stem),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PhotoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercased text after the last `.`, if it is 1..=10 ASCII alphanumerics.
fn extension_of(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let valid = !ext.is_empty()
        && ext.len() <= PHOTO_EXTENSION_MAX
        && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then(|| ext.to_ascii_lowercase())
}

/// Photo ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhoto {
    pub cat_id: CatId,
    pub url: String,
}

/// A persisted photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    id: PhotoId,
    cat_id: CatId,
    url: String,
}

impl Photo {
    pub fn new(id: PhotoId, new: NewPhoto) -> Self {
        Self {
            id,
            cat_id: new.cat_id,
            url: new.url,
        }
    }

    pub fn id(&self) -> PhotoId {
        self.id
    }

    pub fn cat_id(&self) -> CatId {
        self.cat_id
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}
