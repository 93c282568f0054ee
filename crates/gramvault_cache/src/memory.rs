//! In-memory blob cache for tests and ephemeral sessions.

use crate::BlobCache;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Non-durable blob cache backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobCache {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryBlobCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache has no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl BlobCache for MemoryBlobCache {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().await.get(key).cloned()
    }

    async fn put(&self, key: &str, blob: &[u8]) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), blob.to_vec());
    }

    async fn delete(&self, key: &str) {
        self.entries.write().await.remove(key);
    }
}
