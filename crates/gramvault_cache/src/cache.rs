//! Blob cache trait definition.

/// Trait for local key→blob stores.
///
/// Cache operations are independent of the remote connection mutex: they
/// touch local storage only and need no lock discipline beyond
/// last-write-wins per key.
#[async_trait::async_trait]
pub trait BlobCache: Send + Sync {
    /// Look up a blob by key.
    ///
    /// Absence is a valid, silent outcome; backend read failures are
    /// logged and reported as absence rather than surfaced.
    async fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Store a blob under a key, overwriting any existing entry.
    ///
    /// Best-effort: a failure to persist is logged and swallowed so the
    /// caller's in-progress render keeps its in-memory bytes.
    async fn put(&self, key: &str, blob: &[u8]);

    /// Delete the entry under a key. Deleting an absent key is not an error.
    async fn delete(&self, key: &str);
}
