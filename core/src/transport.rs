//! The HTTP dispatch seam.
//!
//! # Design
//! `Transport` performs exactly one exchange and reports what happened:
//! any completed exchange (2xx through 5xx) comes back as an `HttpResponse`,
//! and only a failure to complete the exchange is an error. Deciding whether
//! a status means success belongs to the resource modules.
//!
//! `ReqwestTransport` is the production implementation. It is configured
//! once from a `ClientConfig` (base URL, timeout, `Api-Token` and `Accept`
//! headers) and holds no mutable state, so one instance behind an `Arc`
//! serves any number of concurrent calls. `MockTransport` replays queued
//! responses and records every request it receives.

use std::fmt::Debug;
#[cfg(any(feature = "test-utils", test))]
use std::collections::VecDeque;
#[cfg(any(feature = "test-utils", test))]
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

const API_TOKEN_HEADER: &str = "api-token";
const USER_AGENT: &str = concat!("activecampaign-rs/", env!("CARGO_PKG_VERSION"));

/// Executes a single HTTP exchange.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `reqwest`-backed transport bound to one account's base URL and token.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut token = HeaderValue::from_str(config.api_token())
            .map_err(|e| TransportError::Build(format!("invalid api token header: {e}")))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_TOKEN_HEADER), token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms(),
        })
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout_ms)
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            TransportError::Body(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

fn to_reqwest(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        let method = request.method.as_str();

        let mut builder = self.client.request(to_reqwest(request.method), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!(method, %url, "sending request");
        let response = builder.send().await.map_err(|e| {
            warn!(method, %url, error = %e, "request did not complete");
            self.classify(e)
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.classify(e))?;
        debug!(method, %url, status, "received response");

        Ok(HttpResponse { status, body })
    }
}

/// In-memory transport that replays queued outcomes in order.
///
/// When the queue runs dry `send` fails with `TransportError::Request`.
/// Available to downstream tests through the `test-utils` feature.
#[cfg(any(feature = "test-utils", test))]
#[derive(Debug, Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

#[cfg(any(feature = "test-utils", test))]
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.push(Ok(HttpResponse::new(status, body.to_string())));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, err: TransportError) -> Self {
        self.push(Err(err));
        self
    }

    pub fn push(&self, outcome: Result<HttpResponse, TransportError>) {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(outcome);
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(any(feature = "test-utils", test))]
#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no response queued".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn mock_replays_in_order_and_records_requests() {
        let mock = MockTransport::new()
            .respond(200, json!({"a": 1}))
            .fail(TransportError::Timeout(10));

        let first = mock.send(HttpRequest::get("/accounts")).await.unwrap();
        assert_eq!(first.status, 200);
        assert_eq!(first.json().unwrap()["a"], 1);

        let second = mock.send(HttpRequest::get("/deals")).await.unwrap_err();
        assert!(matches!(second, TransportError::Timeout(10)));

        let third = mock.send(HttpRequest::get("/contacts")).await.unwrap_err();
        assert!(matches!(third, TransportError::Request(_)));

        let paths: Vec<_> = mock.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/api/3/accounts", "/api/3/deals", "/api/3/contacts"]);
        assert_eq!(mock.call_count(), 3);
    }

    #[test]
    fn reqwest_transport_rejects_unprintable_token() {
        let config = ClientConfig::new("http://localhost:3000", "bad\ntoken");
        let err = ReqwestTransport::new(&config).unwrap_err();
        assert!(matches!(err, TransportError::Build(_)));
    }

    #[test]
    fn reqwest_transport_strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:3000/", "token");
        let transport = ReqwestTransport::new(&config).unwrap();
        assert_eq!(transport.base_url, "http://localhost:3000");
        assert_eq!(transport.timeout_ms, 10_000);
    }
}
