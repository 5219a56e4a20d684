//! Poll-until-ready resolution of an in-flight send.

use crate::error::HttpError;
use crate::host::{FutureResponseHandle, HostHttp, IncomingResponseHandle};

/// Resolve the send future to a response handle or a transport failure.
///
/// While the future is pending, a pollable is obtained, waited on, and
/// released, then the future is polled again. The loop is deliberately
/// iterative: a slow connection may take any number of cycles. The future
/// handle itself stays owned by the caller.
pub(crate) fn await_response<H: HostHttp>(
    host: &H,
    future: FutureResponseHandle,
) -> Result<IncomingResponseHandle, HttpError> {
    loop {
        match host.future_get(future) {
            Some(Ok(response)) => return Ok(response),
            Some(Err(err)) => return Err(HttpError::SendFailed(err)),
            None => {
                let pollable = host.future_listen(future);
                host.poll_wait(&[pollable]);
                host.pollable_drop(pollable);
            }
        }
    }
}
