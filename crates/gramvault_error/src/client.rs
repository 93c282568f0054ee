//! Connection-handle error types.

/// Kinds of client connection errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ClientErrorKind {
    /// No remote connection handle is available for the session
    #[display("Remote connection handle is not available")]
    ConnectionUnavailable,
    /// Establishing the remote connection failed
    #[display("Failed to connect to the remote platform: {}", _0)]
    ConnectionFailed(String),
    /// No user context could be resolved for the session
    #[display("No user context available: {}", _0)]
    MissingUser(String),
}

/// Client error with location tracking.
///
/// # Examples
///
/// ```
/// use gramvault_error::{ClientError, ClientErrorKind};
///
/// let err = ClientError::new(ClientErrorKind::ConnectionUnavailable);
/// assert!(format!("{}", err).contains("not available"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Client Error: {} at line {} in {}", kind, line, file)]
pub struct ClientError {
    /// The kind of error that occurred
    pub kind: ClientErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ClientError {
    /// Create a new client error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
