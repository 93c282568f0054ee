//! Persistence seam consumed by the media-access core.

use crate::{UploadedFileRecord, VaultUser};
use gramvault_error::GramVaultResult;
use std::time::Duration;

/// External persistence API for user, token, and file metadata.
///
/// GramVault consumes this trait; the surrounding application implements
/// it against its relational store. Implementations must be safe to share
/// across tasks.
#[async_trait::async_trait]
pub trait VaultRepository: Send + Sync {
    /// Fetch the authenticated user with channel identity and tokens.
    ///
    /// `Ok(None)` means no user is signed in; callers treat that as a
    /// missing session rather than an error.
    async fn get_user(&self) -> GramVaultResult<Option<VaultUser>>;

    /// Record a rate-limit cool-down for a token, expiring `wait` from now.
    async fn update_token_cool_down(&self, token_id: &str, wait: Duration) -> GramVaultResult<()>;

    /// Register metadata for a freshly uploaded file.
    async fn register_uploaded_file(&self, record: &UploadedFileRecord) -> GramVaultResult<()>;

    /// Delete the metadata record for a file.
    ///
    /// Deleting an absent record is not an error.
    async fn delete_file_record(&self, record_id: &str) -> GramVaultResult<()>;
}
