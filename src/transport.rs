//! Top-level transport: one round trip over the host interface.

use crate::awaiter;
use crate::error::HttpError;
use crate::guard::{FieldsGuard, FutureGuard, RequestGuard, ResponseGuard};
use crate::host::{HostHttp, RequestOptions};
use crate::metrics;
use crate::request::{Request, Scheme};
use crate::response::{self, Response};
use crate::writer;

/// HTTP transport over a host I/O capability interface.
///
/// Each [`round_trip`](HttpTransport::round_trip) runs a single logical
/// flow: translate the request, stream the body if present, await the
/// response future, translate the response. The returned [`Response`]
/// borrows the transport exclusively until its body is consumed or
/// dropped.
///
/// # Example
///
/// ```rust,ignore
/// let transport = HttpTransport::new(host);
/// let mut response = transport.round_trip(
///     Request::get(Url::parse("http://example.com/data")?),
/// )?;
/// assert_eq!(response.status(), 200);
/// ```
pub struct HttpTransport<H: HostHttp> {
    host: H,
}

impl<H: HostHttp> HttpTransport<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// The underlying host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Submit a request and return the translated response.
    ///
    /// Every host handle acquired along the way is released exactly once,
    /// on success and on every error path. The response body stream is the
    /// only handle that outlives this call; the returned [`Response`] owns
    /// it and releases it on drop.
    pub fn round_trip(&self, request: Request) -> Result<Response<'_, H>, HttpError> {
        let host = &self.host;

        // Request translation. The flat header list preserves repeated
        // names as repeated pairs.
        let fields = FieldsGuard::new(host, host.fields_new(request.headers().entries()));
        let scheme = Scheme::from_name(&request.url().scheme);
        let outgoing = RequestGuard::new(
            host,
            host.request_new(
                request.method(),
                Some(&request.url().path_with_query()),
                Some(&scheme),
                Some(&request.url().authority()),
                fields.handle(),
            ),
        );

        if !request.body_ref().is_empty() {
            writer::copy_body(host, outgoing.handle(), request.body_ref())?;
        }

        // Timeouts are accepted by the host but always passed as absent.
        let options = RequestOptions::default();
        let future = FutureGuard::new(host, host.send(outgoing.handle(), Some(&options)));
        metrics::REQUESTS_SENT.increment();

        let incoming = match awaiter::await_response(host, future.handle()) {
            Ok(incoming) => incoming,
            Err(err) => {
                metrics::SEND_FAILURES.increment();
                return Err(err);
            }
        };
        let incoming = ResponseGuard::new(host, incoming);

        response::translate(host, incoming.handle())
    }
}
