//! The host I/O capability interface.
//!
//! The host exposes network I/O as opaque handles: header field
//! collections, outgoing requests, body streams, in-flight futures, and
//! pollables. Each handle is created by one operation and released by a
//! matching drop operation; the transport owns every handle it obtains
//! exclusively until it releases it. No host operation blocks except
//! [`poll_wait`](HostHttp::poll_wait), which is the single cooperative
//! suspension point.

use crate::error::HostError;
use crate::request::{Method, Scheme};

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub u32);
    };
}

handle!(
    /// A header field collection (request or response headers).
    FieldsHandle
);
handle!(
    /// An outgoing request ready to send.
    OutgoingRequestHandle
);
handle!(
    /// The writable request body stream.
    OutputStreamHandle
);
handle!(
    /// An in-flight send, resolved by polling.
    FutureResponseHandle
);
handle!(
    /// A one-shot readiness token for a pending future.
    PollableHandle
);
handle!(
    /// A received response: status, headers, and a consumable body.
    IncomingResponseHandle
);
handle!(
    /// The readable response body stream.
    InputStreamHandle
);

/// Status returned alongside each body read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamStatus {
    /// More data may follow.
    Open,
    /// The stream has ended; any bytes returned with this status are the
    /// final ones.
    Ended,
}

/// Timeouts threaded through to the host send operation.
///
/// All fields are optional; this transport always sends them as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub connect_timeout_ms: Option<u32>,
    pub first_byte_timeout_ms: Option<u32>,
    pub between_bytes_timeout_ms: Option<u32>,
}

/// Operations the transport requires from the host.
///
/// Implemented over the real host binding in production and over an
/// in-memory mock in tests. Methods take `&self`; implementations use
/// interior mutability for their handle tables.
pub trait HostHttp {
    /// Create a field collection from ordered (name, value) pairs.
    fn fields_new(&self, entries: &[(String, String)]) -> FieldsHandle;
    /// Enumerate all (name, value) pairs of a field collection.
    fn fields_entries(&self, fields: FieldsHandle) -> Vec<(String, String)>;
    fn fields_drop(&self, fields: FieldsHandle);

    /// Construct an outgoing request. Absent options are passed through to
    /// the host as absent; headers are always present.
    fn request_new(
        &self,
        method: &Method,
        path_with_query: Option<&str>,
        scheme: Option<&Scheme>,
        authority: Option<&str>,
        headers: FieldsHandle,
    ) -> OutgoingRequestHandle;
    /// Open the writable body stream for a request. The host may refuse,
    /// e.g. for a bodyless method.
    fn request_body_write(
        &self,
        request: OutgoingRequestHandle,
    ) -> Result<OutputStreamHandle, HostError>;
    fn request_drop(&self, request: OutgoingRequestHandle);

    /// Write one body chunk. A failure is terminal for the stream.
    fn stream_write(&self, stream: OutputStreamHandle, chunk: &[u8]) -> Result<(), HostError>;
    /// Signal that the body is complete, optionally attaching trailers.
    fn stream_finish(&self, stream: OutputStreamHandle, trailers: Option<FieldsHandle>);
    fn output_stream_drop(&self, stream: OutputStreamHandle);

    /// Initiate the send. The host takes over body and response delivery;
    /// the request handle itself must still be released by the caller.
    fn send(
        &self,
        request: OutgoingRequestHandle,
        options: Option<&RequestOptions>,
    ) -> FutureResponseHandle;
    /// Poll the future: `None` while pending, otherwise the resolved
    /// response or transport failure.
    fn future_get(
        &self,
        future: FutureResponseHandle,
    ) -> Option<Result<IncomingResponseHandle, HostError>>;
    /// Obtain a pollable that becomes ready when the future resolves.
    fn future_listen(&self, future: FutureResponseHandle) -> PollableHandle;
    fn future_drop(&self, future: FutureResponseHandle);

    /// Block until any of the given pollables is ready.
    fn poll_wait(&self, pollables: &[PollableHandle]);
    fn pollable_drop(&self, pollable: PollableHandle);

    fn response_status(&self, response: IncomingResponseHandle) -> u16;
    /// The response header collection. A fresh handle, distinct from the
    /// request's fields; the caller releases it separately.
    fn response_headers(&self, response: IncomingResponseHandle) -> FieldsHandle;
    /// Obtain the readable body stream. Valid at most once per response.
    fn response_consume(
        &self,
        response: IncomingResponseHandle,
    ) -> Result<InputStreamHandle, HostError>;
    fn response_drop(&self, response: IncomingResponseHandle);

    /// Read up to `max_bytes` from the body, returning the chunk and
    /// whether the stream has ended.
    fn stream_read(
        &self,
        stream: InputStreamHandle,
        max_bytes: u64,
    ) -> Result<(Vec<u8>, StreamStatus), HostError>;
    fn input_stream_drop(&self, stream: InputStreamHandle);
}
