//! Synthetic request construction and conversion.
//!
//! Tests describe an inbound call with [`OutgoingRequest`] and finalize it
//! with [`OutgoingRequest::into_incoming`] into the read-only view the
//! component's entry point receives. The conversion is one-way and
//! consuming: each spec produces exactly one inbound request.

use tracing::trace;

use crate::{ExchangeError, Fields};

/// HTTP method of a synthetic request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
    Other(String),
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
            Method::Delete => write!(f, "DELETE"),
            Method::Head => write!(f, "HEAD"),
            Method::Options => write!(f, "OPTIONS"),
            Method::Patch => write!(f, "PATCH"),
            Method::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Test-authored description of the inbound call to simulate.
///
/// Starts as a GET with the given headers, no path, and an empty body. The
/// path must be set before the request is finalized.
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    method: Method,
    path_with_query: Option<String>,
    headers: Fields,
    body: Vec<u8>,
}

impl OutgoingRequest {
    pub fn new(headers: Fields) -> Self {
        Self {
            method: Method::default(),
            path_with_query: None,
            headers,
            body: Vec::new(),
        }
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Set the path-and-query portion, e.g. `/?user_id=123`.
    pub fn set_path_with_query(&mut self, path_with_query: impl Into<String>) {
        self.path_with_query = Some(path_with_query.into());
    }

    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = body.into();
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path_with_query(&self) -> Option<&str> {
        self.path_with_query.as_deref()
    }

    pub fn headers(&self) -> &Fields {
        &self.headers
    }

    /// Finalize into the representation the entry point expects.
    ///
    /// Fails with [`ExchangeError::PathUnset`] if `set_path_with_query` was
    /// never called; an unrouteable request is a mistake in the test, not
    /// something to paper over with a default.
    pub fn into_incoming(self) -> Result<IncomingRequest, ExchangeError> {
        let path_with_query = self.path_with_query.ok_or(ExchangeError::PathUnset)?;
        trace!(method = %self.method, path = %path_with_query, "finalizing request");
        Ok(IncomingRequest {
            method: self.method,
            path_with_query,
            headers: self.headers,
            body: self.body,
        })
    }
}

/// The request as the component's entry point receives it. Read-only.
#[derive(Debug, Clone)]
pub struct IncomingRequest {
    method: Method,
    path_with_query: String,
    headers: Fields,
    body: Vec<u8>,
}

impl IncomingRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path_with_query(&self) -> &str {
        &self.path_with_query
    }

    /// The path portion, without the query string.
    pub fn path(&self) -> &str {
        self.path_with_query
            .split_once('?')
            .map(|(path, _)| path)
            .unwrap_or(&self.path_with_query)
    }

    /// The query string, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.path_with_query.split_once('?').map(|(_, query)| query)
    }

    /// Decoded `name=value` pairs of the query string, in order. A segment
    /// without `=` yields an empty value.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        match self.query() {
            Some(query) if !query.is_empty() => query
                .split('&')
                .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// First value of the query parameter `name`, if present.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_pairs()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn headers(&self) -> &Fields {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
