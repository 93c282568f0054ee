//! GramVault - Channel-Backed Media Vault
//!
//! GramVault turns a messaging platform's channel into a personal object
//! store: files live as channel messages, and this workspace provides the
//! media-access core an application embeds to read and write them.
//!
//! # Features
//!
//! - **Cache-first fetching**: deterministic small/large cache keys with
//!   progressive thumbnail-then-full delivery
//! - **Chunked video previews**: first-chunk downloads bound memory and
//!   latency for large objects
//! - **Credential rotation**: flood-wait throttling rotates to the least
//!   recently throttled token and retries once
//! - **Connection guard**: one process-wide lock serializes all remote
//!   operations against the shared session
//! - **Guarded uploads**: parallel-part uploads with progress reporting,
//!   registered with the host's persistence layer
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use gramvault::{
//!     acquire_session, ConnectionGuard, FileBlobCache, MediaFetcher, RateLimitSignal,
//!     SizeTier, VaultConfig, VaultContext,
//! };
//! use std::sync::Arc;
//!
//! # async fn run(
//! #     repo: Arc<dyn gramvault::VaultRepository>,
//! #     connector: Arc<dyn gramvault::ClientConnector>,
//! #     reference: gramvault::MediaReference,
//! # ) -> gramvault::GramVaultResult<()> {
//! let config = VaultConfig::default();
//! let signal = RateLimitSignal::new();
//! let session = acquire_session(repo.as_ref(), connector.as_ref(), &config, &signal).await?;
//! let user = repo.get_user().await?.expect("signed in");
//!
//! let context = Arc::new(VaultContext::new(
//!     Arc::new(FileBlobCache::new(config.cache_dir().clone())?),
//!     ConnectionGuard::new(),
//!     repo,
//!     connector,
//!     config,
//!     signal,
//! ));
//! let fetcher = MediaFetcher::new(context, user, session);
//!
//! use futures::StreamExt;
//! let mut stages = fetcher.fetch(&reference, SizeTier::Small);
//! while let Some(stage) = stages.next().await {
//!     let _event = stage?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! GramVault is organized as a workspace with focused crates:
//!
//! - `gramvault_error` - Error types and the remote error classifier
//! - `gramvault_core` - Domain types, repository seam, configuration
//! - `gramvault_cache` - Cache key derivation and blob cache backends
//! - `gramvault_client` - Remote client seam, connection guard, credential
//!   rotation, rate-limit broadcast, boundary decoding
//! - `gramvault_media` - Fetch, upload, and delete orchestrators
//!
//! This crate (`gramvault`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use gramvault_error::{
    classify, CacheError, CacheErrorKind, ClientError, ClientErrorKind, ConfigError, DecodeError,
    GramVaultError, GramVaultErrorKind, GramVaultResult, RemoteError, RemoteErrorKind,
    RemoteFailure, GENERIC_FAILURE_MESSAGE,
};

pub use gramvault_core::{
    format_bytes, CredentialToken, MediaCategory, MediaReference, RateLimitState, SizeTier,
    UploadedFileRecord, VaultConfig, VaultConfigBuilder, VaultRepository, VaultUser,
    CACHE_KEY_DELIMITER, DEFAULT_CHUNK_SIZE, DEFAULT_CONNECTION_RETRIES,
};

pub use gramvault_cache::{BlobCache, CacheKeyPair, FileBlobCache, MemoryBlobCache};

pub use gramvault_client::{
    acquire_session, decode_first_message, decode_message, record_cool_down, select_token,
    ChannelRef, ChunkStream, ClientConnector, ConnectionGuard, MediaPayload, RateLimitSignal,
    RemoteClient, RemoteMessage, RemoteResult, SentMessage, Session, UploadSource, UploadedHandle,
    THUMBNAIL_INDEX,
};

pub use gramvault_media::{
    download_first_chunk, FetchEvent, FetchStream, MediaFetcher, MediaTransfer, UploadProgress,
    VaultContext,
};
