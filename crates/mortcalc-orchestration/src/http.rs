//! HTTP client for the calculation service.

use std::time::Duration;

use serde_json::Value;

use mortcalc_core::request::CalculationRequest;
use mortcalc_core::result::CalculationResult;

use crate::error::ClientError;
use crate::interfaces::{Action, ExportFile, RemoteService};

/// Calculation service reached over HTTP with JSON request bodies.
pub struct HttpService {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpService {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Full URL of an action's endpoint.
    #[must_use]
    pub fn endpoint_url(&self, action: Action) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), action.endpoint())
    }

    /// Send `request` and return the status and raw body.
    fn post(
        &self,
        action: Action,
        request: &CalculationRequest,
    ) -> Result<(u16, Vec<u8>), ClientError> {
        let url = self.endpoint_url(action);
        tracing::debug!(%url, "sending request");
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| transport(action, format!("request to {url} failed: {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| transport(action, format!("reading response body failed: {e}")))?;
        tracing::debug!(status, bytes = body.len(), "response received");
        Ok((status, body.to_vec()))
    }
}

impl RemoteService for HttpService {
    fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResult, ClientError> {
        let (status, body) = self.post(Action::Calculate, request)?;
        interpret_calculate(status, &body)
    }

    fn export(&self, request: &CalculationRequest) -> Result<ExportFile, ClientError> {
        let (status, body) = self.post(Action::Export, request)?;
        interpret_export(status, &body)
    }
}

/// Turn a `/calculate` response into a result or an error.
///
/// The body must be JSON whatever the status. An `error` field fails the
/// call even on a success status.
pub fn interpret_calculate(status: u16, body: &[u8]) -> Result<CalculationResult, ClientError> {
    let action = Action::Calculate;
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        transport(action, format!("non-JSON response (status {status}): {e}"))
    })?;

    if let Some(message) = error_message(&value) {
        return Err(ClientError::Service { status, message });
    }
    if !is_success(status) {
        return Err(ClientError::Service {
            status,
            message: action.failure_message().to_string(),
        });
    }

    serde_json::from_value(value)
        .map_err(|e| transport(action, format!("malformed calculation result: {e}")))
}

/// Turn an `/export` response into a file or an error.
///
/// Success bodies are taken as raw file bytes. Error bodies may or may not
/// be JSON; without a readable message the generic one is used.
pub fn interpret_export(status: u16, body: &[u8]) -> Result<ExportFile, ClientError> {
    if is_success(status) {
        return Ok(ExportFile::new(body.to_vec()));
    }
    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| error_message(&v))
        .unwrap_or_else(|| Action::Export.failure_message().to_string());
    Err(ClientError::Service { status, message })
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn error_message(value: &Value) -> Option<String> {
    value
        .get("error")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn transport(action: Action, detail: String) -> ClientError {
    ClientError::Transport {
        message: action.failure_message(),
        detail,
    }
}
