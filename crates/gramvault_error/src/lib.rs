//! Error types for the GramVault media-access core.
//!
//! This crate provides the foundation error types used throughout the
//! GramVault workspace, plus the remote RPC failure classifier.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use gramvault_error::{GramVaultResult, ClientError, ClientErrorKind};
//!
//! fn acquire() -> GramVaultResult<()> {
//!     Err(ClientError::new(ClientErrorKind::ConnectionUnavailable))?
//! }
//!
//! assert!(acquire().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod client;
mod config;
mod decode;
mod error;
mod remote;
mod rpc;

pub use cache::{CacheError, CacheErrorKind};
pub use client::{ClientError, ClientErrorKind};
pub use config::ConfigError;
pub use decode::DecodeError;
pub use error::{GramVaultError, GramVaultErrorKind, GramVaultResult};
pub use remote::{RemoteError, RemoteErrorKind};
pub use rpc::{classify, RemoteFailure, GENERIC_FAILURE_MESSAGE};
