//! User and channel context.

use crate::CredentialToken;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Prefix marking a channel id as a supergroup/channel peer.
const CHANNEL_PEER_PREFIX: &str = "-100";

/// The authenticated user owning the backing channel.
///
/// Supplied by the external persistence layer; GramVault never stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct VaultUser {
    /// User identifier in the persistence layer
    id: String,
    /// Backing channel id, as persisted (may lack the peer prefix)
    channel_id: String,
    /// Access hash for the backing channel
    access_hash: String,
    /// Public username of the channel, if it has one
    channel_username: Option<String>,
    /// Whether the backing channel is public
    has_public_channel: bool,
    /// Credential tokens available for rotation
    tokens: Vec<CredentialToken>,
}

impl VaultUser {
    /// Create a user context.
    pub fn new(
        id: impl Into<String>,
        channel_id: impl Into<String>,
        access_hash: impl Into<String>,
        channel_username: Option<String>,
        has_public_channel: bool,
        tokens: Vec<CredentialToken>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            access_hash: access_hash.into(),
            channel_username,
            has_public_channel,
            tokens,
        }
    }

    /// Channel id normalized to the platform's `-100`-prefixed peer form.
    pub fn normalized_channel_id(&self) -> String {
        if self.channel_id.starts_with(CHANNEL_PEER_PREFIX) {
            self.channel_id.clone()
        } else {
            format!("{}{}", CHANNEL_PEER_PREFIX, self.channel_id)
        }
    }

    /// Share URL for a message in the backing channel.
    ///
    /// Public channels link through the username, private ones through the
    /// raw channel id.
    pub fn share_url(&self, message_id: i64) -> String {
        match (&self.channel_username, self.has_public_channel) {
            (Some(username), true) => format!("https://t.me/{}/{}", username, message_id),
            _ => format!("https://t.me/c/{}/{}", self.channel_id, message_id),
        }
    }
}
