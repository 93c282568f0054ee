//! Configuration for the media-access core.

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use gramvault_error::{ConfigError, GramVaultResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Fixed request size for chunked video downloads (3 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 3 * 1024 * 1024;

/// Connection retry count handed to the remote client library.
pub const DEFAULT_CONNECTION_RETRIES: u32 = 5;

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_connection_retries() -> u32 {
    DEFAULT_CONNECTION_RETRIES
}

fn default_upload_workers() -> usize {
    5
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("gramvault-cache")
}

/// Runtime configuration for GramVault.
///
/// All fields have compile-time defaults; a TOML file can override them.
///
/// # Example
///
/// ```
/// use gramvault_core::VaultConfig;
///
/// let config = VaultConfig::default();
/// assert_eq!(*config.chunk_size_bytes(), 3 * 1024 * 1024);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct VaultConfig {
    /// Fallback credential token used when the user has none
    #[serde(default)]
    #[builder(default)]
    fallback_token: String,

    /// Request size for chunked video downloads, in bytes
    #[serde(default = "default_chunk_size")]
    #[builder(default = "default_chunk_size()")]
    chunk_size_bytes: usize,

    /// Connection retry count for the remote client library
    #[serde(default = "default_connection_retries")]
    #[builder(default = "default_connection_retries()")]
    connection_retries: u32,

    /// Worker count for multi-part uploads
    #[serde(default = "default_upload_workers")]
    #[builder(default = "default_upload_workers()")]
    upload_workers: usize,

    /// Directory backing the durable blob cache
    #[serde(default = "default_cache_dir")]
    #[builder(default = "default_cache_dir()")]
    cache_dir: PathBuf,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            fallback_token: String::new(),
            chunk_size_bytes: default_chunk_size(),
            connection_retries: default_connection_retries(),
            upload_workers: default_upload_workers(),
            cache_dir: default_cache_dir(),
        }
    }
}

impl VaultConfig {
    /// Load configuration from a TOML file, keeping defaults for absent keys.
    #[instrument]
    pub fn from_file(path: &Path) -> GramVaultResult<Self> {
        debug!(path = %path.display(), "Loading vault configuration");
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("{}: {}", path.display(), e)))?;

        let config: VaultConfig = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}
