//! Boundary decoding of raw remote payloads.
//!
//! Remote lookups yield untyped JSON. Everything is validated and
//! converted into the tagged model here, so core logic never performs
//! structural shape checks on raw platform objects.

use derive_getters::Getters;
use gramvault_error::{DecodeError, GramVaultResult};
use serde::{Deserialize, Serialize};

/// Media attached to a remote message, in tagged form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaPayload {
    /// A photo with platform identity
    Photo {
        /// Platform media id
        id: i64,
        /// Access hash for the media object
        access_hash: i64,
    },
    /// A document (files, videos) with platform identity
    Document {
        /// Platform media id
        id: i64,
        /// Access hash for the media object
        access_hash: i64,
        /// MIME type reported by the platform
        mime_type: String,
        /// Whether thumbnail slots exist for this document
        #[serde(default)]
        has_thumbs: bool,
    },
}

/// A remote message after boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct RemoteMessage {
    /// Message id inside the channel
    id: i64,
    /// Attached media, if the message carries any
    media: Option<MediaPayload>,
}

impl RemoteMessage {
    /// Create a message (used by client implementations and tests).
    pub fn new(id: i64, media: Option<MediaPayload>) -> Self {
        Self { id, media }
    }
}

/// Decode one raw message payload.
///
/// # Errors
///
/// Returns a decode error when the payload does not match the expected
/// tagged shape.
pub fn decode_message(raw: &serde_json::Value) -> GramVaultResult<RemoteMessage> {
    serde_json::from_value(raw.clone())
        .map_err(|e| DecodeError::new(format!("remote message payload: {}", e)).into())
}

/// Decode the first message of a lookup result.
///
/// An empty result set or a JSON null slot means the message no longer
/// exists on the platform; that is an expected outcome, reported as
/// `Ok(None)` rather than an error.
pub fn decode_first_message(
    raw: &[serde_json::Value],
) -> GramVaultResult<Option<RemoteMessage>> {
    match raw.first() {
        None => Ok(None),
        Some(value) if value.is_null() => Ok(None),
        Some(value) => decode_message(value).map(Some),
    }
}
