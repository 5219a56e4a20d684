//! Minimal URL representation for outgoing requests.

use crate::error::HttpError;

/// A parsed request target.
///
/// `host` keeps the optional `:port` suffix verbatim, since the host
/// interface takes the authority as a single string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    /// URL scheme, e.g. `https`.
    pub scheme: String,
    /// Optional `user:password` userinfo, without the trailing `@`.
    pub userinfo: Option<String>,
    /// Host with optional port, e.g. `example.com:8080`.
    pub host: String,
    /// Absolute path; `/` if the URL had none.
    pub path: String,
    /// Query string without the leading `?`.
    pub query: Option<String>,
}

impl Url {
    /// Parse `scheme://[userinfo@]host[:port][/path][?query]`.
    pub fn parse(input: &str) -> Result<Self, HttpError> {
        let invalid = || HttpError::InvalidUrl(input.to_string());

        let (scheme, rest) = input.split_once("://").ok_or_else(invalid)?;
        if scheme.is_empty() {
            return Err(invalid());
        }

        let (authority, tail) = match rest.find(['/', '?']) {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, ""),
        };

        let (userinfo, host) = match authority.rfind('@') {
            Some(i) => (Some(authority[..i].to_string()), &authority[i + 1..]),
            None => (None, authority),
        };
        if host.is_empty() {
            return Err(invalid());
        }

        let (path, query) = match tail.split_once('?') {
            Some((p, q)) => (p, Some(q.to_string())),
            None => (tail, None),
        };
        let path = if path.is_empty() { "/" } else { path };

        Ok(Url {
            scheme: scheme.to_string(),
            userinfo,
            host: host.to_string(),
            path: path.to_string(),
            query,
        })
    }

    /// The authority as the host expects it: `userinfo@host[:port]`, or
    /// `host[:port]` when there is no userinfo.
    pub fn authority(&self) -> String {
        match &self.userinfo {
            Some(userinfo) => format!("{userinfo}@{}", self.host),
            None => self.host.clone(),
        }
    }

    /// `path` alone, or `path?query` when a query string is present.
    pub fn path_with_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }
}
