//! Uploaded file metadata record.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata registered with the persistence layer after an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct UploadedFileRecord {
    /// Record identifier
    id: Uuid,
    /// Original file name
    file_name: String,
    /// MIME type of the uploaded content
    mime_type: String,
    /// Size in bytes
    size_bytes: i64,
    /// Derived share URL for the stored object
    url: String,
    /// Message id of the object in the backing channel
    remote_message_id: i64,
    /// Folder the file belongs to, if any
    folder_id: Option<String>,
}

impl UploadedFileRecord {
    /// Create a record with a fresh id.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: i64,
        url: impl Into<String>,
        remote_message_id: i64,
        folder_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            url: url.into(),
            remote_message_id,
            folder_id,
        }
    }
}
