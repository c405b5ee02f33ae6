//! Per-request context handed to handlers.
//!
//! A [`Context`] carries what a handler reads (method, path, path
//! parameters, query and form values) and buffers what it writes (status,
//! headers, body). The server turns the buffered response into bytes once
//! the handler returns.

use http::{Method, StatusCode};
use serde::Serialize;
use std::collections::HashMap;
use tracing::error;

/// JSON object, handy for ad-hoc response bodies
pub type H = serde_json::Map<String, serde_json::Value>;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const TEXT_PLAIN: &str = "text/plain";
pub const TEXT_HTML: &str = "text/html";
pub const APPLICATION_JSON: &str = "application/json";

/// Request data and buffered response for one HTTP exchange
#[derive(Debug, Clone)]
pub struct Context {
    /// HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Request path without the query string
    pub path: String,
    /// Path parameters bound by the router
    pub params: HashMap<String, String>,
    query: HashMap<String, String>,
    form: HashMap<String, String>,
    /// Status written by the handler (200 until set)
    pub status_code: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Context {
    /// Build a context from already-decoded request parts.
    #[must_use]
    pub fn new(
        method: Method,
        path: impl Into<String>,
        query: HashMap<String, String>,
        form: HashMap<String, String>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            params: HashMap::new(),
            query,
            form,
            status_code: StatusCode::OK.as_u16(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Path parameter bound by the route, or `""` if absent
    #[must_use]
    pub fn param(&self, key: &str) -> &str {
        self.params.get(key).map_or("", String::as_str)
    }

    /// Query string value, or `""` if absent
    #[must_use]
    pub fn query(&self, key: &str) -> &str {
        self.query.get(key).map_or("", String::as_str)
    }

    /// Form value: the urlencoded body first, then the query string, or
    /// `""` if neither has `key`
    #[must_use]
    pub fn post_form(&self, key: &str) -> &str {
        self.form
            .get(key)
            .or_else(|| self.query.get(key))
            .map_or("", String::as_str)
    }

    pub fn status(&mut self, code: u16) {
        self.status_code = code;
    }

    /// Set a response header, replacing any earlier value (case-insensitive).
    pub fn set_header(&mut self, key: &str, value: &str) {
        if let Some(slot) = self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            slot.1 = value.to_string();
        } else {
            self.headers.push((key.to_string(), value.to_string()));
        }
    }

    /// Respond with a plain-text body.
    pub fn string(&mut self, code: u16, body: impl Into<String>) {
        self.set_header(CONTENT_TYPE, TEXT_PLAIN);
        self.status(code);
        self.body = body.into().into_bytes();
    }

    /// Respond with `obj` serialized as JSON.
    ///
    /// A serialization failure turns into a 500 carrying the error text.
    pub fn json<T: Serialize + ?Sized>(&mut self, code: u16, obj: &T) {
        match serde_json::to_vec(obj) {
            Ok(bytes) => {
                self.set_header(CONTENT_TYPE, APPLICATION_JSON);
                self.status(code);
                self.body = bytes;
            }
            Err(err) => {
                error!(path = %self.path, error = %err, "Failed to serialize JSON response");
                self.string(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), err.to_string());
            }
        }
    }

    pub fn html(&mut self, code: u16, html: impl Into<String>) {
        self.set_header(CONTENT_TYPE, TEXT_HTML);
        self.status(code);
        self.body = html.into().into_bytes();
    }

    /// Respond with raw bytes and no implied content type.
    pub fn data(&mut self, code: u16, data: Vec<u8>) {
        self.status(code);
        self.body = data;
    }

    /// Response headers in the order they were first set
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Hand the buffered body to the transport.
    #[must_use]
    pub fn take_body(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.body)
    }
}
