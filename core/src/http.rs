//! HTTP request/response types shared by the transport and resource modules.
//!
//! # Design
//! Requests and responses are plain data. Resource modules build an
//! `HttpRequest`, hand it to a `Transport`, and inspect the `HttpResponse`
//! that comes back. Nothing here touches the network, so the call convention
//! can be exercised with a recording transport in unit tests.

use serde_json::Value;

/// API prefix shared by every ActiveCampaign v3 endpoint.
pub const API_PREFIX: &str = "/api/3";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `path` is relative to the configured base URL and already carries the
/// `/api/3` prefix. Query pairs are kept unencoded; the transport encodes
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    fn new(method: HttpMethod, path: &str) -> Self {
        Self {
            method,
            path: format!("{API_PREFIX}{path}"),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: &str, body: Value) -> Self {
        Self::new(HttpMethod::Post, path).with_body(body)
    }

    pub fn put(path: &str, body: Value) -> Self {
        Self::new(HttpMethod::Put, path).with_body(body)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// An HTTP response described as plain data.
///
/// Returned by the transport for every completed exchange, whatever the
/// status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Parse the body as JSON. An empty body parses as `Value::Null`.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constructors_prefix_api_path() {
        let req = HttpRequest::get("/accounts/1");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/api/3/accounts/1");
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn post_carries_body_and_query() {
        let req = HttpRequest::post("/contacts", json!({"contact": {"email": "a@b.com"}}))
            .with_query("foo", "bar baz");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.query, vec![("foo".to_string(), "bar baz".to_string())]);
        assert_eq!(req.body.unwrap()["contact"]["email"], "a@b.com");
    }

    #[test]
    fn empty_body_parses_as_null() {
        let response = HttpResponse::new(200, "  ");
        assert_eq!(response.json().unwrap(), Value::Null);
    }

    #[test]
    fn malformed_body_is_an_error() {
        let response = HttpResponse::new(200, "<html>");
        assert!(response.json().is_err());
    }
}
