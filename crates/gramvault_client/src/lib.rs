//! Remote-platform client seam for GramVault.
//!
//! The remote connection library is not safe for concurrent use from a
//! single logical session, so every remote operation in the workspace
//! funnels through the [`ConnectionGuard`]'s single process-wide lock.
//! This crate also owns credential rotation under flood-wait throttling,
//! session acquisition, the process-wide rate-limit broadcast, and the
//! boundary decode of raw remote payloads into the typed message model.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decode;
mod guard;
mod rate_limit;
mod remote;
mod rotator;
mod session;

pub use decode::{decode_first_message, decode_message, MediaPayload, RemoteMessage};
pub use guard::ConnectionGuard;
pub use rate_limit::RateLimitSignal;
pub use remote::{
    ChannelRef, ChunkStream, RemoteClient, RemoteResult, SentMessage, UploadSource, UploadedHandle,
    THUMBNAIL_INDEX,
};
pub use rotator::{record_cool_down, select_token};
pub use session::{acquire_session, ClientConnector, Session};
