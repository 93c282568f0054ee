//! Logical media reference.

use crate::MediaCategory;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Identity of a media object stored in the backing channel.
///
/// Immutable once constructed; derived from persisted file metadata. The
/// requested size tier is a per-operation argument, not part of the
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct MediaReference {
    /// Backing channel id (un-normalized, as persisted)
    channel_id: String,
    /// Access hash for the backing channel
    access_hash: String,
    /// Message id of the object inside the channel
    remote_message_id: i64,
    /// Category of the media
    category: MediaCategory,
}

impl MediaReference {
    /// Create a new media reference.
    pub fn new(
        channel_id: impl Into<String>,
        access_hash: impl Into<String>,
        remote_message_id: i64,
        category: MediaCategory,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            access_hash: access_hash.into(),
            remote_message_id,
            category,
        }
    }
}
