//! Remote platform error types.
//!
//! `RemoteError` is the error surface of the remote-connection client
//! library seam. Flood-wait throttling and structured RPC codes are
//! modeled as distinct kinds so callers can branch on them without
//! string matching.

use crate::rpc::classify;

/// Kinds of remote platform errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RemoteErrorKind {
    /// The platform asked us to wait before issuing more requests
    #[display("Rate limited: a wait of {} seconds is required", seconds)]
    FloodWait {
        /// Seconds the platform asked us to wait
        seconds: u64,
    },
    /// A structured RPC error code returned by the platform
    #[display("{}", classify(code).message())]
    Rpc {
        /// The raw RPC error code, e.g. `CHANNEL_PRIVATE`
        code: String,
    },
    /// Transport-level failure (socket, DC migration, timeouts)
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// An operation was attempted on a disconnected client
    #[display("Client is not connected")]
    NotConnected,
}

/// Remote platform error with location tracking.
///
/// # Examples
///
/// ```
/// use gramvault_error::{RemoteError, RemoteErrorKind};
///
/// let err = RemoteError::new(RemoteErrorKind::FloodWait { seconds: 30 });
/// assert_eq!(err.flood_wait_seconds(), Some(30));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Remote Error: {} at line {} in {}", kind, line, file)]
pub struct RemoteError {
    /// The kind of error that occurred
    pub kind: RemoteErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RemoteError {
    /// Create a new remote error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RemoteErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Seconds to wait if this is a flood-wait signal.
    pub fn flood_wait_seconds(&self) -> Option<u64> {
        match &self.kind {
            RemoteErrorKind::FloodWait { seconds } => Some(*seconds),
            _ => None,
        }
    }

    /// The structured RPC code, if any.
    pub fn rpc_code(&self) -> Option<&str> {
        match &self.kind {
            RemoteErrorKind::Rpc { code } => Some(code),
            _ => None,
        }
    }

    /// Human-readable description suitable for surfacing to a user.
    ///
    /// RPC codes go through the classifier; everything else uses the
    /// kind's own display.
    pub fn user_message(&self) -> String {
        match &self.kind {
            RemoteErrorKind::Rpc { code } => classify(code).message().to_string(),
            other => other.to_string(),
        }
    }
}
