//! Upload, delete, and channel-access operations.

use crate::context::VaultContext;
use gramvault_cache::CacheKeyPair;
use gramvault_client::{acquire_session, ChannelRef, Session, UploadSource};
use gramvault_client::record_cool_down;
use gramvault_core::{MediaReference, RateLimitState, UploadedFileRecord, VaultUser};
use gramvault_error::{GramVaultError, GramVaultResult};
use std::sync::Arc;
use std::time::Duration;

/// Callback receiving the completed part index and the fractional upload
/// progress in `0.0..=1.0`.
pub type UploadProgress = Arc<dyn Fn(usize, f64) + Send + Sync>;

/// Error codes from the access probe that mean "not a member", as opposed
/// to a failed call.
const INACCESSIBLE_CODES: [&str; 2] = ["CHANNEL_PRIVATE", "CHANNEL_INVALID"];

/// Write-side orchestrator: uploads into the backing channel, deletions,
/// and the membership probe.
///
/// Each operation acquires a fresh session, runs its remote steps under
/// the connection guard, and disconnects the session whether the steps
/// succeeded or not. Uploads register their metadata with the
/// persistence seam before returning.
pub struct MediaTransfer {
    context: Arc<VaultContext>,
    user: VaultUser,
}

impl MediaTransfer {
    /// Create a transfer orchestrator for the signed-in user.
    pub fn new(context: Arc<VaultContext>, user: VaultUser) -> Self {
        Self { context, user }
    }

    /// Upload file content into the backing channel and register it.
    ///
    /// The content is uploaded in parallel parts (worker count from
    /// configuration), sent to the channel as a message, and recorded with
    /// the persistence layer together with its share URL. `on_progress`
    /// fires as parts complete. The session is disconnected on every exit
    /// path.
    #[tracing::instrument(skip_all, fields(file_name = %source.file_name()))]
    pub async fn upload_and_register(
        &self,
        source: &UploadSource,
        folder_id: Option<String>,
        on_progress: UploadProgress,
    ) -> GramVaultResult<UploadedFileRecord> {
        let session = self.acquire().await?;
        let channel = ChannelRef::for_user(&self.user);
        let workers = *self.context.config().upload_workers();

        let sent = self
            .context
            .guard()
            .with_connection(Some(session.client().as_ref()), |client| async move {
                let handle = client
                    .upload_file(source, workers, on_progress.as_ref())
                    .await?;
                tracing::debug!(parts = handle.part_count(), "Upload complete, sending");
                client.send_file(&channel, &handle).await.map_err(Into::into)
            })
            .await;
        self.finish(&session, &sent).await;
        let sent = sent?;

        let message_id = *sent.message_id();
        let record = UploadedFileRecord::new(
            source.file_name().clone(),
            source.mime_type().clone(),
            source.size_bytes(),
            self.user.share_url(message_id),
            message_id,
            folder_id,
        );
        self.context.repo().register_uploaded_file(&record).await?;
        tracing::info!(message_id, size = record.size_bytes(), "Upload registered");
        Ok(record)
    }

    /// Delete a stored media object everywhere.
    ///
    /// Revokes the backing message for all participants, removes the
    /// persistence record, and drops both cache tiers. Returns the number
    /// of remote messages affected (zero when already gone).
    #[tracing::instrument(skip_all, fields(message_id = reference.remote_message_id()))]
    pub async fn delete_media(
        &self,
        reference: &MediaReference,
        record_id: &str,
    ) -> GramVaultResult<usize> {
        let session = self.acquire().await?;
        let channel = ChannelRef::for_reference(reference);
        let message_id = *reference.remote_message_id();

        let affected = self
            .context
            .guard()
            .with_connection(Some(session.client().as_ref()), |client| async move {
                client
                    .delete_messages(&channel, &[message_id], true)
                    .await
                    .map_err(Into::into)
            })
            .await;
        self.finish(&session, &affected).await;
        let affected = affected?;

        self.context.repo().delete_file_record(record_id).await?;

        let keys = CacheKeyPair::derive(
            reference.channel_id(),
            message_id,
            *reference.category(),
        );
        self.context.cache().delete(keys.small()).await;
        self.context.cache().delete(keys.large()).await;

        tracing::info!(affected, "Media deleted");
        Ok(affected)
    }

    /// Whether the current credentials can see the backing channel.
    ///
    /// Resolves the channel entity; the platform's membership errors map
    /// to `false`, anything else propagates as a real failure.
    #[tracing::instrument(skip_all)]
    pub async fn can_access_channel(&self) -> GramVaultResult<bool> {
        let session = self.acquire().await?;
        let channel = ChannelRef::for_user(&self.user);

        let probed = self
            .context
            .guard()
            .with_connection(Some(session.client().as_ref()), |client| async move {
                client.get_entity(&channel).await.map_err(Into::into)
            })
            .await;
        self.finish(&session, &probed).await;

        match probed {
            Ok(()) => Ok(true),
            Err(err) => {
                let code = err.as_remote().and_then(|remote| remote.rpc_code());
                match code {
                    Some(code) if INACCESSIBLE_CODES.contains(&code) => {
                        tracing::debug!(code, "Channel inaccessible for current credentials");
                        Ok(false)
                    }
                    _ => Err(err),
                }
            }
        }
    }

    async fn acquire(&self) -> GramVaultResult<Session> {
        acquire_session(
            self.context.repo().as_ref(),
            self.context.connector().as_ref(),
            self.context.config(),
            self.context.signal(),
        )
        .await
    }

    /// Disconnect the session and note flood-waits, on every exit path.
    async fn finish<T>(&self, session: &Session, outcome: &Result<T, GramVaultError>) {
        if let Err(err) = outcome {
            if let Some(seconds) = err.as_remote().and_then(|remote| remote.flood_wait_seconds()) {
                tracing::warn!(seconds, "Operation flood-limited");
                self.context
                    .signal()
                    .publish(RateLimitState::limited(seconds));
                if let Some(token_id) = session.token_id() {
                    record_cool_down(
                        self.context.repo().as_ref(),
                        token_id,
                        Duration::from_secs(seconds),
                    )
                    .await;
                }
            }
        }
        if let Err(e) = session.client().disconnect().await {
            tracing::warn!(error = %e, "Disconnect after operation failed");
        }
    }
}
