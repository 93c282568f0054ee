//! Core data model for the GramVault media-access layer.
//!
//! This crate defines the types shared across the workspace: media
//! identity (`MediaReference`, `MediaCategory`, `SizeTier`), credential
//! tokens with rate-limit cool-downs, the user/channel context, the
//! persistence seam (`VaultRepository`), and configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod media;
mod rate_limit;
mod record;
mod reference;
mod repository;
mod token;
mod user;
mod util;

pub use config::{VaultConfig, VaultConfigBuilder, DEFAULT_CHUNK_SIZE, DEFAULT_CONNECTION_RETRIES};
pub use media::{MediaCategory, SizeTier, CACHE_KEY_DELIMITER};
pub use rate_limit::RateLimitState;
pub use record::UploadedFileRecord;
pub use reference::MediaReference;
pub use repository::VaultRepository;
pub use token::CredentialToken;
pub use user::VaultUser;
pub use util::format_bytes;
