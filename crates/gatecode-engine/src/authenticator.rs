//! The validation pipeline: one request per call, status decoded into an
//! outcome.

use std::sync::Arc;

use async_trait::async_trait;

use gatecode_core::{
    CodeAuthenticator, GatecodeError, GcResult, StatusTransport, ValidationOutcome,
    ValidationRequest,
};

use crate::config::AuthConfig;
use crate::decoder::StatusDecoder;

/// Canonical authenticator: endpoint and transport both injected, status
/// decoding delegated to [`StatusDecoder`].
pub struct CodeAuthenticatorService {
    transport: Arc<dyn StatusTransport>,
    decoder: StatusDecoder,
    code_length: usize,
}

impl CodeAuthenticatorService {
    pub fn new(transport: Arc<dyn StatusTransport>, config: &AuthConfig) -> Self {
        Self {
            transport,
            decoder: StatusDecoder::from_config(&config.status_map),
            code_length: config.code_length,
        }
    }

    pub fn with_decoder(mut self, decoder: StatusDecoder) -> Self {
        self.decoder = decoder;
        self
    }
}

#[async_trait]
impl CodeAuthenticator for CodeAuthenticatorService {
    fn code_length(&self) -> usize {
        self.code_length
    }

    async fn authenticate(&self, code: &str) -> GcResult<ValidationOutcome> {
        // Caller error, checked before the transport is ever touched.
        if code.chars().count() != self.code_length {
            return Err(GatecodeError::CodeLength {
                expected: self.code_length,
                actual: code.chars().count(),
            });
        }

        let request = ValidationRequest::new(code);
        let status = self.transport.send(&request).await?;
        let outcome = self.decoder.decode(status);

        tracing::debug!(status, outcome = %outcome, "validation response decoded");
        Ok(outcome)
    }
}
