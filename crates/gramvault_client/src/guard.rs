//! Serialization of remote operations over one shared connection.

use crate::remote::RemoteClient;
use gramvault_error::{ClientError, ClientErrorKind, GramVaultResult};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Guard serializing all operations against the shared remote connection.
///
/// One lock for the whole process, not per handle: the hazard is the
/// shared underlying session, and in practice one handle is active per
/// session. Acquisition is FIFO; release happens on drop whether the
/// operation succeeds or fails, so a failing operation can never wedge
/// the lock. The remote client library corrupts its session when two
/// operations on one logical connection interleave, so parallelism is
/// traded away here.
///
/// Clones share the same lock.
#[derive(Debug, Clone, Default)]
pub struct ConnectionGuard {
    lock: Arc<Mutex<()>>,
}

impl ConnectionGuard {
    /// Create a guard with a fresh lock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `operation` against `client` while holding the global lock.
    ///
    /// Connects the client first if it reports itself disconnected
    /// (idempotent). The operation's own error propagates to the caller
    /// after the lock is released.
    ///
    /// # Errors
    ///
    /// - `ConnectionUnavailable` when no client handle is present
    /// - `ConnectionFailed` when the connect step fails
    #[tracing::instrument(skip_all)]
    pub async fn with_connection<'c, C, T, F, Fut>(
        &self,
        client: Option<&'c C>,
        operation: F,
    ) -> GramVaultResult<T>
    where
        C: RemoteClient + ?Sized,
        F: FnOnce(&'c C) -> Fut + Send,
        Fut: Future<Output = GramVaultResult<T>> + Send,
    {
        let client =
            client.ok_or_else(|| ClientError::new(ClientErrorKind::ConnectionUnavailable))?;

        if !client.is_connected() {
            tracing::debug!("Client disconnected, connecting before guarded operation");
            client.connect().await.map_err(|e| {
                ClientError::new(ClientErrorKind::ConnectionFailed(e.to_string()))
            })?;
        }

        let _serial = self.lock.lock().await;
        tracing::trace!("Acquired connection lock");
        operation(client).await
        // _serial drops here: release is unconditional and precedes the
        // caller observing the result.
    }
}
