//! The call convention every resource operation follows.
//!
//! # Design
//! A resource operation validates its arguments, builds an `HttpRequest`,
//! and hands it to `ResourceClient` together with an `Expect`: the status
//! codes that mean success and the JSON pointer of the value to return.
//! Success requires both. Anything else, including a transport failure,
//! leaves here as an `ActiveCampaignError`, so resource modules never see a
//! raw transport or serde error.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::ActiveCampaignError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::Confirmation;

/// Success contract for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Expect {
    statuses: &'static [u16],
    pointer: &'static str,
}

impl Expect {
    /// `pointer` is an RFC 6901 JSON pointer; `""` selects the whole body.
    pub(crate) const fn new(statuses: &'static [u16], pointer: &'static str) -> Self {
        Self { statuses, pointer }
    }

    /// Only the status matters; the body is ignored.
    pub(crate) const fn status(statuses: &'static [u16]) -> Self {
        Self::new(statuses, "")
    }

    pub(crate) fn check_status(&self, response: &HttpResponse) -> Result<(), ActiveCampaignError> {
        if self.statuses.contains(&response.status) {
            Ok(())
        } else {
            Err(ActiveCampaignError::from_response(response))
        }
    }

    pub(crate) fn extract<T: DeserializeOwned>(
        &self,
        response: &HttpResponse,
    ) -> Result<T, ActiveCampaignError> {
        self.check_status(response)?;
        let status = response.status;

        let body = response
            .json()
            .map_err(|e| ActiveCampaignError::unexpected_body(status, e))?;
        let value = body
            .pointer(self.pointer)
            .filter(|v| !v.is_null())
            .ok_or_else(|| {
                ActiveCampaignError::unexpected_body(status, format!("missing `{}`", self.pointer))
            })?;

        T::deserialize(value).map_err(|e| ActiveCampaignError::unexpected_body(status, e))
    }
}

/// Wrap `payload` as `{ key: payload }`, the body shape every write uses.
pub(crate) fn envelope<T: Serialize + ?Sized>(
    key: &str,
    payload: &T,
) -> Result<Value, ActiveCampaignError> {
    let value = serde_json::to_value(payload).map_err(|e| {
        ActiveCampaignError::validation(format!("could not encode `{key}` payload: {e}"))
    })?;
    let mut body = Map::new();
    body.insert(key.to_string(), value);
    Ok(Value::Object(body))
}

/// Required text argument: blank counts as absent.
pub(crate) fn require_text(value: &str, what: &str) -> Result<(), ActiveCampaignError> {
    if value.trim().is_empty() {
        return Err(ActiveCampaignError::validation(format!("{what} is required")));
    }
    Ok(())
}

/// Required field value. Falsy values (null, `false`, zero, blank strings)
/// and empty lists count as absent.
pub(crate) fn require_value(value: &Value, what: &str) -> Result<(), ActiveCampaignError> {
    let absent = match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    };
    if absent {
        return Err(ActiveCampaignError::validation(format!("{what} is required")));
    }
    Ok(())
}

/// Dispatches requests over a shared transport and applies `Expect`.
#[derive(Debug, Clone)]
pub(crate) struct ResourceClient {
    transport: Arc<dyn Transport>,
}

impl ResourceClient {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    #[instrument(
        name = "activecampaign_call",
        skip(self, request, expect),
        fields(method = request.method.as_str(), path = %request.path)
    )]
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
        expect: Expect,
    ) -> Result<T, ActiveCampaignError> {
        let response = self.transport.send(request).await?;
        expect.extract(&response)
    }

    /// Like `call`, but answers with a fixed confirmation instead of the body.
    #[instrument(
        name = "activecampaign_call",
        skip(self, request, expect, message),
        fields(method = request.method.as_str(), path = %request.path)
    )]
    pub(crate) async fn confirm(
        &self,
        request: HttpRequest,
        expect: Expect,
        message: &str,
    ) -> Result<Confirmation, ActiveCampaignError> {
        let response = self.transport.send(request).await?;
        expect.check_status(&response)?;
        Ok(Confirmation::new(message))
    }
}
