//! HTTP client transport over a capability/handle-based host interface.
//!
//! Bridges a conventional request/response HTTP API onto a host that exposes
//! network I/O as discrete, explicitly-released resources: header field
//! collections, outgoing requests, body streams, futures, and pollables. The
//! host never blocks; readiness is observed by waiting on a pollable. The
//! crate's job is strictly translation and resource lifecycle — transport
//! policy (TLS, pooling, retries) lives behind the host interface.
//!
//! # Architecture
//!
//! A round trip runs through four stages:
//!
//! 1. **Translation** — the [`Request`] (method, URL, headers, body) is
//!    converted into the host's representation and an outgoing-request
//!    handle is constructed.
//! 2. **Body streaming** — if a body is present, it is copied to the host's
//!    output stream in bounded chunks and finished explicitly.
//! 3. **Awaiting** — the future returned by the send is polled in a loop,
//!    waiting on a pollable between polls, until it resolves.
//! 4. **Response translation** — status, headers, and a consumable body
//!    stream are converted back into a [`Response`]; the body is read
//!    lazily through [`BodyReader`].
//!
//! Every host handle is owned by exactly one scope and released exactly
//! once, on every path, including early error returns. The transport is
//! generic over [`HostHttp`], so it can run against a real host binding or
//! a mock in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use hostcap_http::{HttpTransport, Request, Url};
//!
//! fn example<H: hostcap_http::HostHttp>(host: H) -> Result<(), hostcap_http::HttpError> {
//!     let transport = HttpTransport::new(host);
//!
//!     let request = Request::post(Url::parse("https://example.com/api/data")?)
//!         .header("content-type", "application/json")
//!         .body("{\"value\":1}");
//!
//!     let mut response = transport.round_trip(request)?;
//!     assert_eq!(response.status(), 200);
//!
//!     while let Some(chunk) = response.body().next_chunk(16 * 1024)? {
//!         // process each body chunk as it arrives
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Limitations
//!
//! The host interface has no cancellation primitive: abandoning a response
//! simply releases the handles still held (the body reader releases its
//! input stream when dropped). Send timeouts are accepted by the host but
//! this transport always passes them as absent.

pub mod body;
pub mod error;
pub mod headers;
pub mod host;
pub mod metrics;
pub mod request;
pub mod response;
pub mod streaming;
pub mod transport;
pub mod url;

mod awaiter;
mod guard;
mod writer;

pub use body::Body;
pub use error::{HostError, HttpError};
pub use headers::HeaderMap;
pub use host::{
    FieldsHandle, FutureResponseHandle, HostHttp, IncomingResponseHandle, InputStreamHandle,
    OutgoingRequestHandle, OutputStreamHandle, PollableHandle, RequestOptions, StreamStatus,
};
pub use request::{Method, Request, Scheme};
pub use response::Response;
pub use streaming::BodyReader;
pub use transport::HttpTransport;
pub use url::Url;
