//! Request type and the method/scheme tags shared with the host.

use std::fmt;

use crate::body::Body;
use crate::headers::HeaderMap;
use crate::url::Url;

/// HTTP request method as the host represents it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
    /// Any other method, carried verbatim.
    Other(String),
}

impl Method {
    /// Translate a method name. Matching is case-insensitive for the nine
    /// standard methods; an empty name means GET; anything else becomes
    /// [`Method::Other`] with the original string.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "" | "GET" => Method::Get,
            "HEAD" => Method::Head,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "CONNECT" => Method::Connect,
            "OPTIONS" => Method::Options,
            "TRACE" => Method::Trace,
            "PATCH" => Method::Patch,
            _ => Method::Other(name.to_string()),
        }
    }

    /// The method name on the wire.
    pub fn name(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Connect => "CONNECT",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
            Method::Patch => "PATCH",
            Method::Other(name) => name,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// URL scheme as the host represents it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
    /// Any other scheme, carried verbatim.
    Other(String),
}

impl Scheme {
    /// Translate a scheme name, case-insensitively for `http` and `https`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            _ => Scheme::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
            Scheme::Other(name) => name,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An HTTP request ready to hand to [`HttpTransport`](crate::HttpTransport).
///
/// # Example
///
/// ```rust,ignore
/// let request = Request::post(Url::parse("https://example.com/items")?)
///     .header("content-type", "application/json")
///     .body("{\"value\":1}");
/// ```
#[derive(Debug)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Body,
}

impl Request {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: Body::Empty,
        }
    }

    /// Build a GET request.
    pub fn get(url: Url) -> Self {
        Self::new(Method::Get, url)
    }

    /// Build a POST request.
    pub fn post(url: Url) -> Self {
        Self::new(Method::Post, url)
    }

    /// Build a PUT request.
    pub fn put(url: Url) -> Self {
        Self::new(Method::Put, url)
    }

    /// Build a DELETE request.
    pub fn delete(url: Url) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Add a header to the request.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn body_ref(&self) -> &Body {
        &self.body
    }
}
