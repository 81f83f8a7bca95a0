//! Object storage for uploaded images

mod error;
mod key;
#[cfg(any(test, feature = "test-utils"))]
mod memory;
mod s3;

use async_trait::async_trait;
use bytes::Bytes;

pub use error::{StoreError, StoreResult};
pub use key::generate_object_key;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;
pub use s3::S3ObjectStore;

/// A stored object together with the HTTP metadata recorded at write time
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Raw object bytes
    pub bytes: Bytes,
    /// Content type recorded when the object was written
    pub content_type: String,
    /// Entity tag assigned by the store, if any
    pub etag: Option<String>,
}

/// Capability contract of the backing object store
///
/// The store is a plain key/value blob store: a single atomic `put` per
/// upload and a `get` that treats absence as a domain outcome rather than
/// an error. Read-after-write consistency is assumed.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes `bytes` under `key`, recording `content_type` as object
    /// metadata so later reads can recover it without re-sniffing
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store rejects the write
    async fn put(&self, key: &str, bytes: Bytes, content_type: &str) -> StoreResult<()>;

    /// Reads the object stored under `key`, or `None` if absent
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store fails; a missing key
    /// is `Ok(None)`, not an error
    async fn get(&self, key: &str) -> StoreResult<Option<StoredObject>>;
}
