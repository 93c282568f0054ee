//! Session acquisition: user lookup, token selection, connect.

use crate::rate_limit::RateLimitSignal;
use crate::remote::{RemoteClient, RemoteResult};
use crate::rotator::{record_cool_down, select_token};
use chrono::Utc;
use gramvault_core::{CredentialToken, RateLimitState, VaultConfig, VaultRepository};
use gramvault_error::{
    ClientError, ClientErrorKind, GramVaultResult, RemoteError, RemoteErrorKind,
};
use std::sync::Arc;
use std::time::Duration;
use tokio_retry2::strategy::{jitter, FixedInterval};
use tokio_retry2::{Retry, RetryError};
use tracing::{info, instrument, warn};

const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

/// Factory building a remote client for a credential token.
///
/// The surrounding application supplies the real platform client here;
/// tests supply mocks.
#[async_trait::async_trait]
pub trait ClientConnector: Send + Sync {
    /// Build an unconnected client authenticated by `token_secret`.
    async fn build(&self, token_secret: &str) -> RemoteResult<Arc<dyn RemoteClient>>;
}

/// An acquired session: a connected client plus the token that backs it.
#[derive(Clone)]
pub struct Session {
    client: Arc<dyn RemoteClient>,
    token_id: Option<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token_id", &self.token_id)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session from an already-connected client.
    pub fn new(client: Arc<dyn RemoteClient>, token_id: Option<String>) -> Self {
        Self { client, token_id }
    }

    /// The connected client handle.
    pub fn client(&self) -> &Arc<dyn RemoteClient> {
        &self.client
    }

    /// Id of the credential token backing this session, if it came from
    /// the user's token list rather than the configured fallback.
    pub fn token_id(&self) -> Option<&str> {
        self.token_id.as_deref()
    }
}

/// Acquire a connected session for the signed-in user.
///
/// Selects a credential via the rotator (falling back to the configured
/// default token), builds a client, and connects with the configured
/// transport retry count. A flood-wait on connect publishes
/// [`RateLimitState`], records a cool-down for the throttled token, and
/// retries exactly once with a newly selected token. A successful connect
/// clears the rate-limit broadcast.
#[instrument(skip_all)]
pub async fn acquire_session(
    repo: &dyn VaultRepository,
    connector: &dyn ClientConnector,
    config: &VaultConfig,
    signal: &RateLimitSignal,
) -> GramVaultResult<Session> {
    let user = repo.get_user().await?.ok_or_else(|| {
        ClientError::new(ClientErrorKind::MissingUser("no signed-in user".to_string()))
    })?;

    let selected = select_token(user.tokens(), Utc::now()).cloned();
    let (token_id, secret) = credential_parts(selected.as_ref(), config);

    match connect_with_retries(connector, &secret, *config.connection_retries()).await {
        Ok(client) => {
            signal.clear();
            info!(token_id = ?token_id, "Session connected");
            Ok(Session::new(client, token_id))
        }
        Err(err) => match err.flood_wait_seconds() {
            Some(seconds) => {
                warn!(seconds, token_id = ?token_id, "Connect flood-limited, rotating token");
                signal.publish(RateLimitState::limited(seconds));
                if let Some(id) = &token_id {
                    record_cool_down(repo, id, Duration::from_secs(seconds)).await;
                }

                // Exactly one retry with the throttled token excluded.
                let remaining: Vec<CredentialToken> = user
                    .tokens()
                    .iter()
                    .filter(|token| Some(token.id()) != token_id.as_ref())
                    .cloned()
                    .collect();
                let retry_token = select_token(&remaining, Utc::now()).cloned();
                let (retry_id, retry_secret) = credential_parts(retry_token.as_ref(), config);

                let client =
                    connect_with_retries(connector, &retry_secret, *config.connection_retries())
                        .await
                        .map_err(|e| {
                            ClientError::new(ClientErrorKind::ConnectionFailed(e.to_string()))
                        })?;
                signal.clear();
                info!(token_id = ?retry_id, "Session connected after token rotation");
                Ok(Session::new(client, retry_id))
            }
            None => Err(ClientError::new(ClientErrorKind::ConnectionFailed(err.to_string())).into()),
        },
    }
}

fn credential_parts(
    token: Option<&CredentialToken>,
    config: &VaultConfig,
) -> (Option<String>, String) {
    match token {
        Some(token) => (Some(token.id().clone()), token.secret().clone()),
        None => (None, config.fallback_token().clone()),
    }
}

/// Build a client and connect, retrying transport failures.
///
/// Flood-wait and RPC errors propagate immediately; only transport
/// failures are retried, with jittered fixed intervals.
async fn connect_with_retries(
    connector: &dyn ClientConnector,
    secret: &str,
    retries: u32,
) -> Result<Arc<dyn RemoteClient>, RemoteError> {
    let client = connector.build(secret).await?;

    let strategy = FixedInterval::from_millis(CONNECT_RETRY_INTERVAL_MS)
        .map(jitter)
        .take(retries as usize);

    Retry::spawn(strategy, || async {
        match client.connect().await {
            Ok(()) => Ok(()),
            Err(e) if matches!(e.kind, RemoteErrorKind::Transport(_)) => {
                Err(RetryError::transient(e))
            }
            Err(e) => Err(RetryError::permanent(e)),
        }
    })
    .await?;

    Ok(client)
}
