//! Chunked download path for large media.

use futures::StreamExt;
use gramvault_client::{MediaPayload, RemoteClient};
use gramvault_error::GramVaultResult;

/// Download exactly the first chunk of a media object.
///
/// Videos may exceed memory-friendly single-buffer sizes, so the preview
/// path consumes one chunk of `request_size` bytes from the client's lazy
/// chunk sequence and drops the iterator. Bounds preview latency at the
/// cost of not materializing the whole object; full playback would open a
/// fresh stream keyed by byte offset.
///
/// `Ok(None)` means the sequence was empty: the object has no readable
/// content.
#[tracing::instrument(skip(client, media))]
pub async fn download_first_chunk(
    client: &dyn RemoteClient,
    media: &MediaPayload,
    request_size: usize,
) -> GramVaultResult<Option<Vec<u8>>> {
    let mut chunks = client.iter_download(media, request_size);
    match chunks.next().await {
        Some(Ok(chunk)) => {
            tracing::debug!(size = chunk.len(), "Fetched first media chunk");
            Ok(Some(chunk))
        }
        Some(Err(e)) => Err(e.into()),
        None => Ok(None),
    }
}
