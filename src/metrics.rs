//! Transport metrics.
//!
//! Counters for request and body traffic, exposed through the metriken
//! registry.

use metriken::{metric, Counter};

#[metric(
    name = "hostcap_http/requests/sent",
    description = "Total requests handed to the host for sending"
)]
pub static REQUESTS_SENT: Counter = Counter::new();

#[metric(
    name = "hostcap_http/requests/send_failures",
    description = "Requests whose send future resolved to a transport failure"
)]
pub static SEND_FAILURES: Counter = Counter::new();

#[metric(
    name = "hostcap_http/bytes/request_body",
    description = "Total request body bytes written to the host"
)]
pub static REQUEST_BODY_BYTES: Counter = Counter::new();

#[metric(
    name = "hostcap_http/bytes/response_body",
    description = "Total response body bytes read from the host"
)]
pub static RESPONSE_BODY_BYTES: Counter = Counter::new();
