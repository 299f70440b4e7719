//! Configurable HTTP client: header management, request construction,
//! dispatch, and response decoding.
//!
//! # Design
//! `Client` holds a base address and a header mapping. Each call is split
//! into `build_request` (produces an `HttpRequest`, no I/O) and
//! `parse_response` (consumes an `HttpResponse`), with the ureq round-trip
//! between them isolated in `execute`. `request` chains the three; the
//! split keeps construction and decoding deterministic and unit-testable
//! without a server.
//!
//! Headers live behind an `RwLock` so `add_header` takes `&self`: resource
//! facades hold plain `&Client` borrows, and a header added through the
//! client is visible to every facade on the next call it issues.

use std::sync::RwLock;

use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::params::Params;

/// A decoded response body: a JSON object, shape preserved as returned by
/// the server.
pub type Response = serde_json::Map<String, serde_json::Value>;

/// Synchronous client for a JSON-over-HTTP API.
///
/// Created once per session with the service's base address. Headers may be
/// added at any time; each request reads the header mapping at issuance, so
/// later additions affect later calls only.
#[derive(Debug)]
pub struct Client {
    base_url: String,
    headers: RwLock<Vec<(String, String)>>,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: RwLock::new(Vec::new()),
        }
    }

    /// Insert or overwrite a default header sent with every request.
    ///
    /// Names are matched case-insensitively and stored lowercased; setting
    /// the same name twice keeps the last value.
    pub fn add_header(&self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        let mut headers = self.headers.write().unwrap_or_else(|e| e.into_inner());
        if let Some(entry) = headers.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value.to_string();
        } else {
            headers.push((name, value.to_string()));
        }
    }

    /// Build the request for `method` on `base + path` without executing it.
    ///
    /// Body-carrying methods (post/put/patch) get `params` as a JSON object
    /// body and a `content-type: application/json` header unless one is
    /// already configured; get/delete get `params` form-encoded into the
    /// query string. The client's headers are read here, at issuance.
    pub fn build_request(&self, method: HttpMethod, path: &str, params: &Params) -> HttpRequest {
        let mut headers = self.headers.read().unwrap_or_else(|e| e.into_inner()).clone();
        let mut url = format!("{}{path}", self.base_url);

        let body = if method.has_body() {
            if !headers.iter().any(|(n, _)| n == "content-type") {
                headers.push(("content-type".to_string(), "application/json".to_string()));
            }
            Some(serde_json::Value::Object(params.to_json()).to_string())
        } else {
            let query = params.to_query();
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }
            None
        };

        HttpRequest {
            method,
            path: url,
            headers,
            body,
        }
    }

    /// Decode a response body into a JSON object, shape preserved.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Response, Error> {
        serde_json::from_str(&response.body).map_err(|e| Error::Decode(e.to_string()))
    }

    /// Build, execute, and decode one request.
    ///
    /// Fails with `Error::Transport` when the exchange cannot complete and
    /// `Error::Decode` when the body is not a JSON object. Status codes are
    /// not interpreted: whatever object the server returned comes back
    /// unchanged.
    pub fn request(
        &self,
        method: HttpMethod,
        path: &str,
        params: &Params,
    ) -> Result<Response, Error> {
        let req = self.build_request(method, path, params);
        let response = execute(req)?;
        self.parse_response(response)
    }
}

/// Execute an `HttpRequest` over the network using ureq.
///
/// Status-as-error is disabled so 4xx/5xx responses come back as data;
/// interpreting the payload is the caller's concern.
fn execute(req: HttpRequest) -> Result<HttpResponse, Error> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let body = req.body.unwrap_or_default();
    let result = match req.method {
        HttpMethod::Get => with_headers(agent.get(&req.path), &req.headers).call(),
        HttpMethod::Delete => with_headers(agent.delete(&req.path), &req.headers).call(),
        HttpMethod::Post => with_headers(agent.post(&req.path), &req.headers).send(body.as_bytes()),
        HttpMethod::Put => with_headers(agent.put(&req.path), &req.headers).send(body.as_bytes()),
        HttpMethod::Patch => {
            with_headers(agent.patch(&req.path), &req.headers).send(body.as_bytes())
        }
    };

    let mut response = result.map_err(|e| Error::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| Error::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new("http://localhost:3000")
    }

    fn scenario_params() -> Params {
        Params::new()
            .set("x", "string")
            .set("y", 123)
            .set("z", vec!["string in array"])
    }

    #[test]
    fn get_puts_params_in_query_string() {
        let req = client().build_request(HttpMethod::Get, "/foo", &scenario_params());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:3000/foo?x=string&y=123&z%5B%5D=string+in+array"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn delete_puts_params_in_query_string() {
        let req = client().build_request(HttpMethod::Delete, "/bar", &scenario_params());
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(
            req.path,
            "http://localhost:3000/bar?x=string&y=123&z%5B%5D=string+in+array"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn get_without_params_has_no_question_mark() {
        let req = client().build_request(HttpMethod::Get, "/foo", &Params::new());
        assert_eq!(req.path, "http://localhost:3000/foo");
    }

    #[test]
    fn post_puts_params_in_json_body() {
        let req = client().build_request(HttpMethod::Post, "/foo", &scenario_params());
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/foo");
        let body: serde_json::Value =
            serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["x"], "string");
        assert_eq!(body["y"], 123);
        assert_eq!(body["z"], serde_json::json!(["string in array"]));
    }

    #[test]
    fn post_without_params_sends_empty_object() {
        let req = client().build_request(HttpMethod::Post, "/foo", &Params::new());
        assert_eq!(req.body.as_deref(), Some("{}"));
    }

    #[test]
    fn body_methods_get_json_content_type() {
        for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch] {
            let req = client().build_request(method, "/foo", &Params::new());
            assert!(
                req.headers
                    .contains(&("content-type".to_string(), "application/json".to_string())),
                "{} should carry content-type",
                method.as_str()
            );
        }
    }

    #[test]
    fn caller_content_type_is_not_overridden() {
        let c = client();
        c.add_header("Content-Type", "application/vnd.api+json");
        let req = c.build_request(HttpMethod::Post, "/foo", &Params::new());
        let content_types: Vec<_> = req
            .headers
            .iter()
            .filter(|(n, _)| n == "content-type")
            .collect();
        assert_eq!(
            content_types,
            vec![&("content-type".to_string(), "application/vnd.api+json".to_string())]
        );
    }

    #[test]
    fn added_headers_appear_on_built_requests() {
        let c = client();
        c.add_header("Origin", "http://localhost");
        let req = c.build_request(HttpMethod::Get, "/foo", &Params::new());
        assert!(req
            .headers
            .contains(&("origin".to_string(), "http://localhost".to_string())));
    }

    #[test]
    fn header_overwrite_is_case_insensitive_last_write_wins() {
        let c = client();
        c.add_header("Origin", "http://localhost");
        c.add_header("ORIGIN", "http://example.com");
        let req = c.build_request(HttpMethod::Get, "/foo", &Params::new());
        let origins: Vec<_> = req.headers.iter().filter(|(n, _)| n == "origin").collect();
        assert_eq!(
            origins,
            vec![&("origin".to_string(), "http://example.com".to_string())]
        );
    }

    #[test]
    fn headers_are_read_at_issuance_not_retroactively() {
        let c = client();
        let before = c.build_request(HttpMethod::Get, "/foo", &Params::new());
        c.add_header("Origin", "http://localhost");
        let after = c.build_request(HttpMethod::Get, "/foo", &Params::new());

        assert!(before.headers.is_empty());
        assert!(after
            .headers
            .contains(&("origin".to_string(), "http://localhost".to_string())));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let c = Client::new("http://localhost:3000/");
        let req = c.build_request(HttpMethod::Get, "/foo", &Params::new());
        assert_eq!(req.path, "http://localhost:3000/foo");
    }

    #[test]
    fn parse_response_returns_object_unchanged() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"result":"ok","extra":42}"#.to_string(),
        };
        let decoded = client().parse_response(response).unwrap();
        assert_eq!(decoded["result"], "ok");
        assert_eq!(decoded["extra"], 42);
    }

    #[test]
    fn parse_response_rejects_non_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_response(response).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn parse_response_rejects_non_object_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "[1,2,3]".to_string(),
        };
        let err = client().parse_response(response).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn parse_response_rejects_empty_body() {
        let response = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_response(response).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
