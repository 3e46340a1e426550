//! Error types for the ActiveCampaign client.
//!
//! # Design
//! Callers see exactly one error type, `ActiveCampaignError`. Whatever went
//! wrong (a local argument check, a network failure, or a response the
//! server rejected) is folded into it here, with `ErrorKind` telling the
//! three apart. When the server sent a structured `errors` array it is kept
//! verbatim in `details`.
//!
//! `TransportError` only lives between the transport and the resource
//! modules; it never crosses the crate's public operations.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::http::HttpResponse;

/// Which stage of a call produced the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A local precondition failed; no request was sent.
    Validation,
    /// The request could not complete (connect, DNS, timeout).
    Transport,
    /// The server answered with a non-success status or an unexpected body.
    Api { status: u16 },
}

/// Failures raised by a `Transport` when an exchange could not complete.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    #[error("could not connect to server: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("invalid transport configuration: {0}")]
    Build(String),
}

/// The single error surfaced by every client operation.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ActiveCampaignError {
    kind: ErrorKind,
    message: String,
    details: Vec<Value>,
}

impl ActiveCampaignError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Normalize a completed exchange that did not meet its success contract.
    pub fn from_response(response: &HttpResponse) -> Self {
        let status = response.status;
        let body = response.json().unwrap_or(Value::Null);

        let details = match body.get("errors") {
            Some(Value::Array(errors)) => errors.clone(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => vec![other.clone()],
        };

        let message = details
            .first()
            .and_then(|e| e.get("title"))
            .and_then(Value::as_str)
            .or_else(|| body.get("message").and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| format!("request failed with status {status}"));

        debug!(status, errors = details.len(), "normalized API error");

        Self {
            kind: ErrorKind::Api { status },
            message,
            details,
        }
    }

    /// A success status whose body lacks the documented key or cannot be
    /// decoded into the expected schema.
    pub fn unexpected_body(status: u16, reason: impl std::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Api { status },
            message: format!("unexpected response body: {reason}"),
            details: Vec::new(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The server's `errors` payload, untouched. Empty when the server sent
    /// none or the request never reached it.
    pub fn details(&self) -> &[Value] {
        &self.details
    }

    /// HTTP status for `Api` errors.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Api { status } => Some(status),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn is_transport(&self) -> bool {
        self.kind == ErrorKind::Transport
    }

    pub fn is_api(&self) -> bool {
        matches!(self.kind, ErrorKind::Api { .. })
    }
}

impl From<TransportError> for ActiveCampaignError {
    fn from(err: TransportError) -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: err.to_string(),
            details: Vec::new(),
        }
    }
}
