//! Process-wide rate-limit state.

use serde::{Deserialize, Serialize};

/// Broadcast value describing the current throttle status.
///
/// Set when a connect attempt is flood-limited, cleared on the next
/// successful connect. Observed by the UI layer to render a wait
/// countdown; it is a signal, not a lock-protected resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateLimitState {
    is_rate_limited: bool,
    retry_after_seconds: u64,
}

impl RateLimitState {
    /// State for an active throttle of `retry_after_seconds`.
    pub fn limited(retry_after_seconds: u64) -> Self {
        Self {
            is_rate_limited: true,
            retry_after_seconds,
        }
    }

    /// Cleared state.
    pub fn clear() -> Self {
        Self::default()
    }

    /// Whether the active credential is currently throttled.
    pub fn is_rate_limited(&self) -> bool {
        self.is_rate_limited
    }

    /// Seconds the platform asked us to wait.
    pub fn retry_after_seconds(&self) -> u64 {
        self.retry_after_seconds
    }
}
