//! Owning guards for host handles.
//!
//! Each guard ties one handle to a scope: the matching host drop call runs
//! when the guard is dropped, so release happens exactly once on every
//! path, including early error returns.

use crate::host::{
    FieldsHandle, FutureResponseHandle, HostHttp, IncomingResponseHandle, OutgoingRequestHandle,
    OutputStreamHandle,
};

macro_rules! handle_guard {
    ($(#[$meta:meta])* $name:ident, $handle:ty, $drop_fn:ident) => {
        $(#[$meta])*
        pub(crate) struct $name<'a, H: HostHttp> {
            host: &'a H,
            handle: $handle,
        }

        impl<'a, H: HostHttp> $name<'a, H> {
            pub(crate) fn new(host: &'a H, handle: $handle) -> Self {
                Self { host, handle }
            }

            pub(crate) fn handle(&self) -> $handle {
                self.handle
            }
        }

        impl<H: HostHttp> Drop for $name<'_, H> {
            fn drop(&mut self) {
                self.host.$drop_fn(self.handle);
            }
        }
    };
}

handle_guard!(
    /// Releases a header field collection on scope exit.
    FieldsGuard,
    FieldsHandle,
    fields_drop
);
handle_guard!(
    /// Releases an outgoing request on scope exit.
    RequestGuard,
    OutgoingRequestHandle,
    request_drop
);
handle_guard!(
    /// Releases the request body output stream on scope exit.
    OutputStreamGuard,
    OutputStreamHandle,
    output_stream_drop
);
handle_guard!(
    /// Releases an in-flight send future on scope exit.
    FutureGuard,
    FutureResponseHandle,
    future_drop
);
handle_guard!(
    /// Releases an incoming response on scope exit.
    ResponseGuard,
    IncomingResponseHandle,
    response_drop
);
