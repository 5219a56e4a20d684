//! Pull-based reader over the response body stream.

use bytes::Bytes;

use crate::error::HttpError;
use crate::host::{HostHttp, InputStreamHandle, StreamStatus};
use crate::metrics;

/// Incremental reader over the host's response body stream.
///
/// The input stream handle is owned by the reader and released when the
/// reader is closed or dropped, even if the body was never read — an
/// abandoned response leaks nothing.
///
/// # Example
///
/// ```rust,ignore
/// while let Some(chunk) = response.body().next_chunk(16 * 1024)? {
///     // process each body chunk as it arrives
/// }
/// ```
pub struct BodyReader<'a, H: HostHttp> {
    host: &'a H,
    stream: Option<InputStreamHandle>,
    ended: bool,
}

impl<'a, H: HostHttp> BodyReader<'a, H> {
    pub(crate) fn new(host: &'a H, stream: InputStreamHandle) -> Self {
        Self {
            host,
            stream: Some(stream),
            ended: false,
        }
    }

    /// Yield the next body chunk of at most `max_bytes`, or `None` once the
    /// stream has ended. A final partial chunk delivered together with the
    /// end marker is returned before the `None`.
    pub fn next_chunk(&mut self, max_bytes: u64) -> Result<Option<Bytes>, HttpError> {
        let stream = match self.stream {
            Some(stream) if !self.ended => stream,
            _ => return Ok(None),
        };

        loop {
            let (chunk, status) = self
                .host
                .stream_read(stream, max_bytes)
                .map_err(HttpError::ReadStreamFailed)?;
            if status == StreamStatus::Ended {
                self.ended = true;
            }
            if !chunk.is_empty() {
                metrics::RESPONSE_BODY_BYTES.add(chunk.len() as u64);
                return Ok(Some(Bytes::from(chunk)));
            }
            if self.ended {
                return Ok(None);
            }
            // Empty chunk on an open stream: poll the host again.
        }
    }

    /// Release the input stream. Safe to call on an abandoned response;
    /// further reads return end-of-stream.
    pub fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            self.host.input_stream_drop(stream);
        }
    }
}

impl<H: HostHttp> Drop for BodyReader<'_, H> {
    fn drop(&mut self) {
        self.close();
    }
}
