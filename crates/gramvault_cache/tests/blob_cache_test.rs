//! Durability and overwrite semantics of the filesystem blob cache.

use gramvault_cache::{BlobCache, FileBlobCache, MemoryBlobCache};
use std::path::PathBuf;

fn fresh_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(format!("/tmp/gramvault_cache_test_{}", name));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    dir
}

#[tokio::test]
async fn put_get_round_trip() {
    let dir = fresh_dir("round_trip");
    let cache = FileBlobCache::new(&dir).unwrap();

    cache.put("chan-1-large-image", b"payload").await;
    assert_eq!(
        cache.get("chan-1-large-image").await,
        Some(b"payload".to_vec())
    );

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn absent_key_is_a_silent_miss() {
    let dir = fresh_dir("miss");
    let cache = FileBlobCache::new(&dir).unwrap();

    assert_eq!(cache.get("never-written").await, None);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn overwrite_is_last_write_wins() {
    let dir = fresh_dir("overwrite");
    let cache = FileBlobCache::new(&dir).unwrap();

    cache.put("key", b"first").await;
    cache.put("key", b"second").await;
    assert_eq!(cache.get("key").await, Some(b"second".to_vec()));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn delete_is_idempotent() {
    let dir = fresh_dir("delete");
    let cache = FileBlobCache::new(&dir).unwrap();

    cache.put("key", b"bytes").await;
    cache.delete("key").await;
    assert_eq!(cache.get("key").await, None);

    // Deleting again must not fail.
    cache.delete("key").await;

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn entries_survive_a_cache_reopen() {
    let dir = fresh_dir("reopen");
    {
        let cache = FileBlobCache::new(&dir).unwrap();
        cache.put("persistent", b"still here").await;
    }

    let reopened = FileBlobCache::new(&dir).unwrap();
    assert_eq!(reopened.get("persistent").await, Some(b"still here".to_vec()));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn keys_with_path_hostile_characters_are_safe() {
    let dir = fresh_dir("hostile");
    let cache = FileBlobCache::new(&dir).unwrap();

    let key = "../../etc/passwd-1-large-image";
    cache.put(key, b"contained").await;
    assert_eq!(cache.get(key).await, Some(b"contained".to_vec()));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn memory_cache_mirrors_the_trait_semantics() {
    let cache = MemoryBlobCache::new();
    assert!(cache.is_empty().await);

    cache.put("k", b"v").await;
    assert_eq!(cache.get("k").await, Some(b"v".to_vec()));
    assert_eq!(cache.len().await, 1);

    cache.delete("k").await;
    cache.delete("k").await;
    assert_eq!(cache.get("k").await, None);
}
