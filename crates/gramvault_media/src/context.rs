//! Shared dependencies for the orchestrators.

use gramvault_cache::BlobCache;
use gramvault_client::{ClientConnector, ConnectionGuard, RateLimitSignal};
use gramvault_core::{VaultConfig, VaultRepository};
use std::sync::Arc;

/// The injected collaborators every orchestrator needs.
///
/// Built once per application session and shared. Explicit injection
/// replaces the ambient globals of older designs: the guard, the
/// rate-limit broadcast, and the persistence seam all travel together.
#[derive(Clone)]
pub struct VaultContext {
    cache: Arc<dyn BlobCache>,
    guard: ConnectionGuard,
    repo: Arc<dyn VaultRepository>,
    connector: Arc<dyn ClientConnector>,
    config: VaultConfig,
    signal: RateLimitSignal,
}

impl VaultContext {
    /// Assemble a context.
    pub fn new(
        cache: Arc<dyn BlobCache>,
        guard: ConnectionGuard,
        repo: Arc<dyn VaultRepository>,
        connector: Arc<dyn ClientConnector>,
        config: VaultConfig,
        signal: RateLimitSignal,
    ) -> Self {
        Self {
            cache,
            guard,
            repo,
            connector,
            config,
            signal,
        }
    }

    /// The blob cache.
    pub fn cache(&self) -> &Arc<dyn BlobCache> {
        &self.cache
    }

    /// The process-wide connection guard.
    pub fn guard(&self) -> &ConnectionGuard {
        &self.guard
    }

    /// The persistence seam.
    pub fn repo(&self) -> &Arc<dyn VaultRepository> {
        &self.repo
    }

    /// The client factory.
    pub fn connector(&self) -> &Arc<dyn ClientConnector> {
        &self.connector
    }

    /// Runtime configuration.
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// The rate-limit broadcast.
    pub fn signal(&self) -> &RateLimitSignal {
        &self.signal
    }
}
