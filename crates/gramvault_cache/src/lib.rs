//! Durable blob caching for fetched media.
//!
//! This crate provides the local key→blob store that lets repeat views
//! skip the network, plus the pure cache-key derivation that ties entries
//! to a (channel, message, tier, category) tuple.
//!
//! Cache semantics are deliberately loose: `get` treats absence as a
//! silent, valid outcome; `put` is best-effort last-write-wins; `delete`
//! is idempotent. A cache failure never aborts the caller's in-progress
//! work, because the bytes already in memory remain usable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod filesystem;
mod key;
mod memory;

pub use cache::BlobCache;
pub use filesystem::FileBlobCache;
pub use key::CacheKeyPair;
pub use memory::MemoryBlobCache;
