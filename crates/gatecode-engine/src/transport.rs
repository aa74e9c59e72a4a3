//! Production HTTP transport for validation requests.

use async_trait::async_trait;
use gatecode_core::{GatecodeError, GcResult, StatusTransport, ValidationRequest};

use crate::config::AuthConfig;

/// Sends validation requests over HTTP and reports the response status.
///
/// One `POST` per call, JSON body `{"code": "..."}`, no retries. The
/// response body is ignored; only the status code matters.
pub struct HttpStatusTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpStatusTransport {
    pub fn new(config: &AuthConfig) -> GcResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatecodeError::Internal(format!("http client error: {e}")))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl StatusTransport for HttpStatusTransport {
    async fn send(&self, request: &ValidationRequest) -> GcResult<u16> {
        // Serialize up front so body failures surface as Encoding, not
        // as a reqwest transport error.
        let body = serde_json::to_vec(request)?;

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| GatecodeError::Transport(format!("validation request failed: {e}")))?;

        Ok(resp.status().as_u16())
    }
}
