//! Request body streaming.

use crate::body::Body;
use crate::error::HttpError;
use crate::guard::OutputStreamGuard;
use crate::host::{HostHttp, OutgoingRequestHandle};
use crate::metrics;

/// Bound on a single body write.
pub(crate) const CHUNK_SIZE: usize = 1024;

/// Copy the request body to the host in bounded chunks, then finish the
/// stream. The output stream is released on every path, including a failed
/// chunk write. Callers must only invoke this when a body is present.
pub(crate) fn copy_body<H: HostHttp>(
    host: &H,
    request: OutgoingRequestHandle,
    body: &Body,
) -> Result<(), HttpError> {
    let stream = host
        .request_body_write(request)
        .map_err(HttpError::BodyWriteStartFailed)?;
    let stream = OutputStreamGuard::new(host, stream);

    // An empty source produces no writes and goes straight to finish.
    for chunk in body.as_bytes().chunks(CHUNK_SIZE) {
        host.stream_write(stream.handle(), chunk)
            .map_err(HttpError::BodyWriteChunkFailed)?;
        metrics::REQUEST_BODY_BYTES.add(chunk.len() as u64);
    }

    host.stream_finish(stream.handle(), None);
    Ok(())
}
