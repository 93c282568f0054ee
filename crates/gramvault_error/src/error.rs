//! Top-level error wrapper types.

use crate::{CacheError, ClientError, ConfigError, DecodeError, RemoteError};

/// Union of the error domains in the GramVault workspace.
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GramVaultErrorKind {
    /// Connection-handle error
    #[from(ClientError)]
    Client(ClientError),
    /// Blob cache error
    #[from(CacheError)]
    Cache(CacheError),
    /// Remote platform error
    #[from(RemoteError)]
    Remote(RemoteError),
    /// Remote payload decode error
    #[from(DecodeError)]
    Decode(DecodeError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// GramVault error with kind discrimination.
///
/// # Examples
///
/// ```
/// use gramvault_error::{GramVaultResult, ConfigError};
///
/// fn might_fail() -> GramVaultResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("GramVault Error: {}", _0)]
pub struct GramVaultError(Box<GramVaultErrorKind>);

impl GramVaultError {
    /// Create a new error from a kind.
    pub fn new(kind: GramVaultErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GramVaultErrorKind {
        &self.0
    }

    /// The remote error, if this wraps one.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self.kind() {
            GramVaultErrorKind::Remote(err) => Some(err),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to GramVaultErrorKind
impl<T> From<T> for GramVaultError
where
    T: Into<GramVaultErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for GramVault operations.
pub type GramVaultResult<T> = std::result::Result<T, GramVaultError>;
