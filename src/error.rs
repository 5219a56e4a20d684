use thiserror::Error;

/// Opaque failure reported by a host operation.
///
/// The host interface surfaces errors as messages with no further
/// structure; they are carried through as the source of the
/// corresponding [`HttpError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors produced by the HTTP transport.
///
/// All variants are terminal for the in-flight request; nothing is retried
/// internally. Retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Header translation failed.
    ///
    /// Reserved: translation is pass-through today and cannot fail.
    #[error("header translation failed")]
    HeaderTranslationFailed,

    /// The host refused to open a body stream for this request.
    #[error("failed to start the request body stream")]
    BodyWriteStartFailed(#[source] HostError),

    /// A body chunk write failed partway. Already-sent bytes are
    /// unrecoverable.
    #[error("failed to write a request body chunk")]
    BodyWriteChunkFailed(#[source] HostError),

    /// The send future resolved to a transport-level failure.
    #[error("send failed")]
    SendFailed(#[source] HostError),

    /// The response body could not be obtained from the incoming response.
    #[error("failed to consume the response body")]
    ResponseConsumeFailed(#[source] HostError),

    /// The Content-Length header is present but not a valid non-negative
    /// integer.
    #[error("malformed content-length header: {0:?}")]
    MalformedContentLength(String),

    /// A body read failed (distinct from normal end-of-stream).
    #[error("failed to read from the response body stream")]
    ReadStreamFailed(#[source] HostError),

    /// The URL could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The response body is not valid UTF-8.
    #[error("response body is not valid utf-8")]
    BodyNotUtf8,
}
