//! Credential tokens and cool-down bookkeeping.

use chrono::{DateTime, Duration, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A credential token granting a connection to the remote platform.
///
/// Multiple tokens belong to one user; rotation prefers tokens without a
/// recorded cool-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CredentialToken {
    /// Stable identifier used for cool-down bookkeeping
    id: String,
    /// The secret token value
    secret: String,
    /// When the platform's throttle on this token expires, if recorded
    cool_down_until: Option<DateTime<Utc>>,
}

impl CredentialToken {
    /// Create a token with no recorded cool-down.
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
            cool_down_until: None,
        }
    }

    /// Create a token with a recorded cool-down expiry.
    pub fn with_cool_down(
        id: impl Into<String>,
        secret: impl Into<String>,
        cool_down_until: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
            cool_down_until: Some(cool_down_until),
        }
    }

    /// Whether a cool-down has been recorded for this token.
    pub fn is_cooling_down(&self) -> bool {
        self.cool_down_until.is_some()
    }

    /// Remaining wait until the cool-down expires, relative to `now`.
    ///
    /// `None` when no cool-down is recorded. An expired cool-down yields a
    /// non-positive duration; selection still treats the token as cooling
    /// down until the persistence layer clears it.
    pub fn remaining_cool_down(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.cool_down_until.map(|until| until - now)
    }
}
