//! The remote-connection client seam.

use crate::decode::MediaPayload;
use derive_getters::Getters;
use futures::stream::BoxStream;
use gramvault_core::{MediaReference, VaultUser};
use gramvault_error::RemoteError;

/// Result type for raw remote operations.
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Lazy sequence of downloaded byte chunks.
pub type ChunkStream<'a> = BoxStream<'a, RemoteResult<Vec<u8>>>;

/// Thumbnail slot requested for small-tier downloads.
pub const THUMBNAIL_INDEX: u32 = 0;

/// A resolved channel peer (normalized id plus access hash).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct ChannelRef {
    /// Channel id in the platform's `-100`-prefixed peer form
    id: String,
    /// Access hash authorizing access to the peer
    access_hash: String,
}

impl ChannelRef {
    /// Create a channel reference from already-normalized parts.
    pub fn new(id: impl Into<String>, access_hash: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            access_hash: access_hash.into(),
        }
    }

    /// Channel reference for a user's backing channel.
    pub fn for_user(user: &VaultUser) -> Self {
        Self::new(user.normalized_channel_id(), user.access_hash().clone())
    }

    /// Channel reference for the channel a media object lives in.
    pub fn for_reference(reference: &MediaReference) -> Self {
        let id = if reference.channel_id().starts_with("-100") {
            reference.channel_id().clone()
        } else {
            format!("-100{}", reference.channel_id())
        };
        Self::new(id, reference.access_hash().clone())
    }
}

/// Outbound file content handed to the upload path.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct UploadSource {
    /// Original file name
    file_name: String,
    /// MIME type of the content
    mime_type: String,
    /// Raw file bytes
    bytes: Vec<u8>,
}

impl UploadSource {
    /// Create an upload source.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Size of the content in bytes.
    pub fn size_bytes(&self) -> i64 {
        self.bytes.len() as i64
    }
}

/// Handle to an uploaded-but-unsent artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct UploadedHandle {
    /// Platform-assigned upload id
    upload_id: i64,
    /// Number of parts the upload was split into
    part_count: usize,
}

impl UploadedHandle {
    /// Create a handle.
    pub fn new(upload_id: i64, part_count: usize) -> Self {
        Self {
            upload_id,
            part_count,
        }
    }
}

/// A message created by sending a file to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct SentMessage {
    /// Message id of the stored object
    message_id: i64,
}

impl SentMessage {
    /// Create a sent-message record.
    pub fn new(message_id: i64) -> Self {
        Self { message_id }
    }
}

/// One authenticated session to the remote platform.
///
/// Implementations wrap the platform's client library. They are assumed
/// NOT to be safe for interleaved operations on one logical session; the
/// [`ConnectionGuard`](crate::ConnectionGuard) provides the required
/// serialization, so implementations only need `Send + Sync` plumbing.
///
/// Raw message payloads are returned as `serde_json::Value`; the decode
/// module converts them into the typed model before core logic runs.
#[async_trait::async_trait]
pub trait RemoteClient: Send + Sync {
    /// Whether the session currently holds a live connection.
    fn is_connected(&self) -> bool;

    /// Establish the connection. Idempotent on an already-connected session.
    async fn connect(&self) -> RemoteResult<()>;

    /// Tear down the connection.
    async fn disconnect(&self) -> RemoteResult<()>;

    /// Upload file content with `workers` parallel part uploads.
    ///
    /// `on_progress` receives the completed part index and the fractional
    /// progress in `0.0..=1.0`.
    async fn upload_file(
        &self,
        source: &UploadSource,
        workers: usize,
        on_progress: &(dyn Fn(usize, f64) + Send + Sync),
    ) -> RemoteResult<UploadedHandle>;

    /// Send an uploaded artifact to a channel, creating a message.
    async fn send_file(
        &self,
        channel: &ChannelRef,
        upload: &UploadedHandle,
    ) -> RemoteResult<SentMessage>;

    /// Resolve a channel entity, verifying access.
    async fn get_entity(&self, channel: &ChannelRef) -> RemoteResult<()>;

    /// Fetch raw messages by id. Deleted messages come back as JSON null.
    async fn get_messages(
        &self,
        channel: &ChannelRef,
        ids: &[i64],
    ) -> RemoteResult<Vec<serde_json::Value>>;

    /// Delete messages, revoking for all participants when `revoke` is set.
    ///
    /// Returns the number of messages affected.
    async fn delete_messages(
        &self,
        channel: &ChannelRef,
        ids: &[i64],
        revoke: bool,
    ) -> RemoteResult<usize>;

    /// Download a whole media blob.
    ///
    /// `thumb` selects a thumbnail slot instead of the full object.
    async fn download_media(
        &self,
        media: &MediaPayload,
        thumb: Option<u32>,
    ) -> RemoteResult<Vec<u8>>;

    /// Lazily download media in chunks of `request_size` bytes.
    fn iter_download(&self, media: &MediaPayload, request_size: usize) -> ChunkStream<'_>;
}
