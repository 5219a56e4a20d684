//! Response translation and the response type.

use bytes::{Bytes, BytesMut};

use crate::error::HttpError;
use crate::guard::FieldsGuard;
use crate::headers::{self, HeaderMap};
use crate::host::{HostHttp, IncomingResponseHandle};
use crate::streaming::BodyReader;

/// Length of the chunk requested per read when draining a whole body.
const DRAIN_CHUNK: u64 = 16 * 1024;

/// HTTP response.
///
/// Holds status and headers eagerly; the body is pulled on demand through
/// [`BodyReader`]. The response borrows the transport exclusively while it
/// exists — no other request can be sent until the body is consumed or the
/// response is dropped.
pub struct Response<'a, H: HostHttp> {
    status: u16,
    status_line: String,
    headers: HeaderMap,
    content_length: i64,
    body: BodyReader<'a, H>,
}

impl<'a, H: HostHttp> std::fmt::Debug for Response<'a, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("status_line", &self.status_line)
            .field("headers", &self.headers)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

impl<'a, H: HostHttp> Response<'a, H> {
    /// HTTP status code (e.g. 200, 404).
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Status line in `"<code> <reason>"` form; the bare code for codes
    /// with no standard reason phrase.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Response headers, names canonicalized.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the first header value matching `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Declared body length, or `-1` when the response carries no
    /// Content-Length header (read until stream end). Not cross-checked
    /// against the bytes actually delivered.
    pub fn content_length(&self) -> i64 {
        self.content_length
    }

    /// The streaming body reader.
    pub fn body(&mut self) -> &mut BodyReader<'a, H> {
        &mut self.body
    }

    /// Drain the body and return it as one buffer.
    pub fn bytes(mut self) -> Result<Bytes, HttpError> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.body.next_chunk(DRAIN_CHUNK)? {
            buf.extend_from_slice(&chunk);
        }
        Ok(buf.freeze())
    }

    /// Drain the body and return it as UTF-8 text.
    pub fn text(self) -> Result<String, HttpError> {
        let bytes = self.bytes()?;
        String::from_utf8(bytes.to_vec()).map_err(|_| HttpError::BodyNotUtf8)
    }
}

/// Translate an incoming response handle into a [`Response`].
///
/// Enumerates and releases the response header fields, derives the content
/// length, and consumes the response body exactly once. The incoming
/// response handle itself stays owned by the caller.
pub(crate) fn translate<'a, H: HostHttp>(
    host: &'a H,
    response: IncomingResponseHandle,
) -> Result<Response<'a, H>, HttpError> {
    let status = host.response_status(response);

    let fields = FieldsGuard::new(host, host.response_headers(response));
    let mut header_map = HeaderMap::new();
    for (name, value) in host.fields_entries(fields.handle()) {
        header_map.append(&headers::canonical(&name), &value);
    }
    drop(fields);

    let content_length = content_length(&header_map)?;

    let stream = host
        .response_consume(response)
        .map_err(HttpError::ResponseConsumeFailed)?;

    Ok(Response {
        status,
        status_line: status_line(status),
        headers: header_map,
        content_length,
        body: BodyReader::new(host, stream),
    })
}

/// Declared body length: `-1` when absent, the exact value when valid, an
/// error when present but not a non-negative integer.
fn content_length(headers: &HeaderMap) -> Result<i64, HttpError> {
    let value = match headers.get("Content-Length") {
        None => return Ok(-1),
        Some(value) => value,
    };
    match value.parse::<i64>() {
        Ok(length) if length >= 0 => Ok(length),
        _ => Err(HttpError::MalformedContentLength(value.to_string())),
    }
}

fn status_line(code: u16) -> String {
    match reason_phrase(code) {
        "" => code.to_string(),
        reason => format!("{code} {reason}"),
    }
}

/// Standard reason phrase for a status code; empty for unknown codes.
fn reason_phrase(code: u16) -> &'static str {
    match code {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        103 => "Early Hints",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        208 => "Already Reported",
        226 => "IM Used",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Request Entity Too Large",
        414 => "Request URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Requested Range Not Satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a teapot",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        510 => "Not Extended",
        511 => "Network Authentication Required",
        _ => "",
    }
}
