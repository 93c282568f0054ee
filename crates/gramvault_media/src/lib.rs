//! Media orchestration for GramVault.
//!
//! This crate is the entry point the UI layer calls: cache-first media
//! fetching with progressive small-then-large delivery, the chunked
//! first-chunk path for videos, uploads with progress reporting, and the
//! delete/access-probe operations. All remote work funnels through the
//! connection guard; flood-wait throttling triggers one credential
//! rotation per call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod context;
mod fetcher;
mod transfer;

pub use chunk::download_first_chunk;
pub use context::VaultContext;
pub use fetcher::{FetchEvent, FetchStream, MediaFetcher};
pub use transfer::{MediaTransfer, UploadProgress};
