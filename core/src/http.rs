//! HTTP transport types used between the build/parse layer and the executor.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! `build_*` methods on [`crate::NoteClient`] produce `HttpRequest` values
//! and the `parse_*` methods consume `HttpResponse` values without touching
//! the network; the async executor (or a test) performs the actual I/O in
//! between. This keeps the adapter logic deterministic and easy to test.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `NoteClient::build_*` methods. Query parameters are already
/// encoded into `path`; `headers` carries the authorization and content-type
/// headers for the configured client.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed after executing an `HttpRequest`, then passed to
/// `NoteClient::parse_*` methods for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
