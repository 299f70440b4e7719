//! HTTP request and response types as plain data.
//!
//! # Design
//! These types describe one HTTP exchange without touching the network. The
//! `Client` builds `HttpRequest` values and parses `HttpResponse` values;
//! the transport step between the two is isolated in one place, so request
//! construction and response decoding stay deterministic and testable.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely between threads and stored in test journals.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Whether request parameters travel in the body (post/put/patch) or in
    /// the query string (get/delete) for this method.
    pub fn has_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `Client::build_request`. `path` is the full URL including any
/// query string; `headers` is the header set read from the client at build
/// time.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by the transport after executing an `HttpRequest`, then passed
/// to `Client::parse_response` for decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
