//! Process-wide rate-limit broadcast.

use gramvault_core::RateLimitState;
use std::sync::Arc;
use tokio::sync::watch;

/// Broadcast channel for the current [`RateLimitState`].
///
/// The UI layer subscribes to render a wait countdown. The value is set
/// when a connect attempt is flood-limited and cleared on the next
/// successful connect; it is a signal, not a lock-protected resource,
/// and the latest value is synchronously visible after `publish`.
#[derive(Debug, Clone)]
pub struct RateLimitSignal {
    tx: Arc<watch::Sender<RateLimitState>>,
}

impl RateLimitSignal {
    /// Create a signal in the cleared state.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(RateLimitState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Publish a new state to all subscribers.
    pub fn publish(&self, state: RateLimitState) {
        tracing::debug!(
            is_rate_limited = state.is_rate_limited(),
            retry_after_seconds = state.retry_after_seconds(),
            "Publishing rate-limit state"
        );
        self.tx.send_replace(state);
    }

    /// Reset to the cleared state.
    pub fn clear(&self) {
        self.tx.send_replace(RateLimitState::clear());
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<RateLimitState> {
        self.tx.subscribe()
    }

    /// The latest published state.
    pub fn current(&self) -> RateLimitState {
        *self.tx.borrow()
    }
}

impl Default for RateLimitSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn published_state_is_synchronously_visible() {
        let signal = RateLimitSignal::new();
        assert!(!signal.current().is_rate_limited());

        signal.publish(RateLimitState::limited(42));
        assert!(signal.current().is_rate_limited());
        assert_eq!(signal.current().retry_after_seconds(), 42);

        signal.clear();
        assert!(!signal.current().is_rate_limited());
    }

    #[tokio::test]
    async fn subscribers_observe_updates() {
        let signal = RateLimitSignal::new();
        let mut rx = signal.subscribe();

        signal.publish(RateLimitState::limited(7));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().retry_after_seconds(), 7);
    }
}
