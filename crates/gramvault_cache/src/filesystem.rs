//! Filesystem-backed blob cache.

use crate::BlobCache;
use gramvault_error::{CacheError, CacheErrorKind, GramVaultResult};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Durable blob cache storing one file per key.
///
/// File names are the hex SHA-256 of the cache key, so arbitrary key
/// characters never reach the filesystem. Writes go through a temp file
/// and rename for atomicity; a reader never observes a partial entry.
pub struct FileBlobCache {
    base_path: PathBuf,
}

impl FileBlobCache {
    /// Create a filesystem cache rooted at `base_path`.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> GramVaultResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            CacheError::new(CacheErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem blob cache");
        Ok(Self { base_path })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        self.base_path.join(format!("{:x}", hasher.finalize()))
    }

    /// Root directory of the cache.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl BlobCache for FileBlobCache {
    #[tracing::instrument(skip(self), fields(key))]
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.entry_path(key);
        match tokio::fs::read(&path).await {
            Ok(blob) => {
                tracing::debug!(key, size = blob.len(), "Cache hit");
                Some(blob)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Cache read failed, treating as miss");
                None
            }
        }
    }

    #[tracing::instrument(skip(self, blob), fields(key, size = blob.len()))]
    async fn put(&self, key: &str, blob: &[u8]) {
        let path = self.entry_path(key);
        let temp_path = path.with_extension("tmp");

        let write = async {
            tokio::fs::write(&temp_path, blob).await?;
            tokio::fs::rename(&temp_path, &path).await
        };

        match write.await {
            Ok(()) => tracing::debug!(key, size = blob.len(), "Cached blob"),
            Err(e) => {
                // Best-effort: the fetched bytes are still valid in memory.
                tracing::warn!(key, error = %e, "Cache write failed");
            }
        }
    }

    #[tracing::instrument(skip(self), fields(key))]
    async fn delete(&self, key: &str) {
        let path = self.entry_path(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::debug!(key, "Deleted cache entry"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(key, error = %e, "Cache delete failed"),
        }
    }
}
