//! In-memory object store used by tests

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use super::{ObjectStore, StoreResult, StoredObject};

/// In-memory [`ObjectStore`] with the same read-after-write behavior as the
/// real bucket, enabling deterministic tests without network access
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    objects: Arc<RwLock<HashMap<String, StoredObject>>>,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an object exists under `key`
    pub async fn contains(&self, key: &str) -> bool {
        self.objects.read().await.contains_key(key)
    }

    /// Number of stored objects
    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put(&self, key: &str, bytes: Bytes, content_type: &str) -> StoreResult<()> {
        // Content-derived etag, quoted like the real store's
        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        let etag = format!("\"{:016x}\"", hasher.finish());

        self.objects.write().await.insert(
            key.to_owned(),
            StoredObject {
                bytes,
                content_type: content_type.to_owned(),
                etag: Some(etag),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Option<StoredObject>> {
        Ok(self.objects.read().await.get(key).cloned())
    }
}
