//! Remote payload decode error type.

/// Error converting a raw remote payload into the typed message model.
///
/// Raised at the client boundary when a remote response does not match the
/// expected tagged shape; core logic never sees the raw payload.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Decode Error: {} at line {} in {}", message, line, file)]
pub struct DecodeError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl DecodeError {
    /// Create a new DecodeError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
