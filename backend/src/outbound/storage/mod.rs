//! Object storage adapters for photo files.

mod memory;
mod s3;

pub use memory::{MEMORY_BASE_URL, MemoryObjectStorage};
pub use s3::S3ObjectStorage;

/// Public URL of an object: `{base_url}{bucket}/{key}`.
///
/// `base_url` is used verbatim, so it normally ends with `/`.
pub fn object_url(base_url: &str, bucket: &str, key: &str) -> String {
    format!("{base_url}{bucket}/{key}")
}
