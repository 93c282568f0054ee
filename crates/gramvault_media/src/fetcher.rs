//! Cache-first media fetching with progressive delivery.

use crate::chunk::download_first_chunk;
use crate::context::VaultContext;
use async_stream::try_stream;
use chrono::Utc;
use futures::future::BoxFuture;
use futures::Stream;
use gramvault_cache::CacheKeyPair;
use gramvault_client::{
    decode_first_message, record_cool_down, select_token, ChannelRef, RemoteClient, Session,
    THUMBNAIL_INDEX,
};
use gramvault_core::{MediaCategory, MediaReference, RateLimitState, SizeTier, VaultUser};
use gramvault_error::GramVaultResult;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// One stage of a progressive fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    /// Bytes served from the local cache
    Cached {
        /// Tier of the cached entry
        tier: SizeTier,
        /// The cached blob
        bytes: Vec<u8>,
    },
    /// Bytes downloaded from the remote platform
    Downloaded {
        /// Tier that was downloaded
        tier: SizeTier,
        /// The downloaded blob
        bytes: Vec<u8>,
    },
    /// The remote object no longer exists. Expected, not exceptional.
    NotFound,
}

/// Finite, non-restartable sequence of fetch stages.
///
/// At most two elements: a low-resolution placeholder from cache may be
/// followed by a full download that supersedes it. Consumers pull both
/// stages explicitly.
pub type FetchStream<'a> = Pin<Box<dyn Stream<Item = GramVaultResult<FetchEvent>> + Send + 'a>>;

/// Top-level entry point for reading media.
///
/// Checks the cache, falls back to a guarded remote fetch, persists
/// results, and reports missing remote objects as a typed stage rather
/// than an error. Concurrent fetches for the same reference are not
/// coalesced; the connection guard already serializes the expensive
/// remote step.
pub struct MediaFetcher {
    context: Arc<VaultContext>,
    user: VaultUser,
    session: Mutex<Session>,
}

impl MediaFetcher {
    /// Create a fetcher bound to an acquired session.
    pub fn new(context: Arc<VaultContext>, user: VaultUser, session: Session) -> Self {
        Self {
            context,
            user,
            session: Mutex::new(session),
        }
    }

    /// Id of the credential token backing the current session.
    pub async fn active_token(&self) -> Option<String> {
        self.session.lock().await.token_id().map(String::from)
    }

    /// Fetch media for a reference at the requested tier.
    ///
    /// Stages, in order:
    /// 1. A large cache entry satisfies any request outright: no remote
    ///    call, single `Cached` stage.
    /// 2. A small cache entry is surfaced immediately as a placeholder,
    ///    then the fetch continues to upgrade to the large tier.
    /// 3. The message is resolved under the guard; a deleted message
    ///    yields `NotFound` with no cache write.
    /// 4. Videos take the chunked path (first chunk only, never cached);
    ///    images and documents download whole and are cached under the
    ///    tier-appropriate key.
    ///
    /// A flood-wait during the guarded steps records a cool-down for the
    /// active token and retries once with a rotated credential.
    pub fn fetch(&self, reference: &MediaReference, tier: SizeTier) -> FetchStream<'_> {
        let reference = reference.clone();
        Box::pin(try_stream! {
            let keys = CacheKeyPair::derive(
                reference.channel_id(),
                *reference.remote_message_id(),
                *reference.category(),
            );

            if let Some(bytes) = self.context.cache().get(keys.large()).await {
                tracing::debug!(key = keys.large(), "Large-tier cache hit");
                yield FetchEvent::Cached { tier: SizeTier::Large, bytes };
                return;
            }

            let mut surfaced_small = false;
            if let Some(bytes) = self.context.cache().get(keys.small()).await {
                tracing::debug!(key = keys.small(), "Small-tier cache hit, upgrading");
                surfaced_small = true;
                yield FetchEvent::Cached { tier: SizeTier::Small, bytes };
            }

            let channel = ChannelRef::for_reference(&reference);
            let message_id = *reference.remote_message_id();
            let raw = self
                .run_guarded(move |client| {
                    let channel = channel.clone();
                    Box::pin(async move {
                        client
                            .get_messages(&channel, &[message_id])
                            .await
                            .map_err(Into::into)
                    })
                })
                .await?;

            let message = decode_first_message(&raw)?;
            let media = match message.and_then(|m| m.media().clone()) {
                Some(media) => media,
                None => {
                    tracing::info!(message_id, "Remote message gone, reporting not-found");
                    yield FetchEvent::NotFound;
                    return;
                }
            };

            match *reference.category() {
                MediaCategory::Video => {
                    let request_size = *self.context.config().chunk_size_bytes();
                    let media_for_op = media.clone();
                    let chunk = self
                        .run_guarded(move |client| {
                            let media = media_for_op.clone();
                            Box::pin(async move {
                                download_first_chunk(client.as_ref(), &media, request_size).await
                            })
                        })
                        .await?;
                    match chunk {
                        // Video previews bypass the cache.
                        Some(bytes) => {
                            yield FetchEvent::Downloaded { tier, bytes };
                        }
                        None => {
                            yield FetchEvent::NotFound;
                        }
                    }
                }
                MediaCategory::Image | MediaCategory::Document => {
                    let target_tier = if surfaced_small { SizeTier::Large } else { tier };
                    let thumb = match target_tier {
                        SizeTier::Small => Some(THUMBNAIL_INDEX),
                        SizeTier::Large => None,
                    };
                    let media_for_op = media.clone();
                    let bytes = self
                        .run_guarded(move |client| {
                            let media = media_for_op.clone();
                            Box::pin(async move {
                                client.download_media(&media, thumb).await.map_err(Into::into)
                            })
                        })
                        .await?;

                    // Best-effort: a failed write still leaves usable bytes.
                    self.context
                        .cache()
                        .put(keys.for_tier(target_tier), &bytes)
                        .await;
                    yield FetchEvent::Downloaded { tier: target_tier, bytes };
                }
            }
        })
    }

    /// Run a remote operation under the guard, rotating the credential
    /// once if the platform answers with a flood-wait.
    #[tracing::instrument(skip_all)]
    async fn run_guarded<T, F>(&self, op: F) -> GramVaultResult<T>
    where
        T: Send,
        F: Fn(Arc<dyn RemoteClient>) -> BoxFuture<'static, GramVaultResult<T>> + Send + Sync,
    {
        let client = { self.session.lock().await.client().clone() };
        let first = self
            .context
            .guard()
            .with_connection(Some(client.as_ref()), |_serialized| op(Arc::clone(&client)))
            .await;

        let err = match first {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        let Some(seconds) = err.as_remote().and_then(|remote| remote.flood_wait_seconds())
        else {
            return Err(err);
        };

        tracing::warn!(seconds, "Guarded operation flood-limited, rotating credential");
        self.context
            .signal()
            .publish(RateLimitState::limited(seconds));

        let active_token = { self.session.lock().await.token_id().map(String::from) };
        if let Some(token_id) = &active_token {
            record_cool_down(
                self.context.repo().as_ref(),
                token_id,
                Duration::from_secs(seconds),
            )
            .await;
        }

        let remaining: Vec<_> = self
            .user
            .tokens()
            .iter()
            .filter(|token| Some(token.id().as_str()) != active_token.as_deref())
            .cloned()
            .collect();
        let (token_id, secret) = match select_token(&remaining, Utc::now()) {
            Some(token) => (Some(token.id().clone()), token.secret().clone()),
            None => (None, self.context.config().fallback_token().clone()),
        };

        let fresh = self.context.connector().build(&secret).await?;
        {
            let mut session = self.session.lock().await;
            *session = Session::new(Arc::clone(&fresh), token_id);
        }

        // One retry only; a second flood propagates to the caller.
        let retry = self
            .context
            .guard()
            .with_connection(Some(fresh.as_ref()), |_serialized| op(Arc::clone(&fresh)))
            .await;
        if retry.is_ok() {
            self.context.signal().clear();
        }
        retry
    }
}
