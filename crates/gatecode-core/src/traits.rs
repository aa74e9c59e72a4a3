use async_trait::async_trait;

use crate::error::GcResult;
use crate::model::{ValidationOutcome, ValidationRequest};

/// The network seam: send one validation request, receive the HTTP status
/// code or fail. This is the only capability the validation pipeline
/// depends on; tests substitute a double returning canned statuses.
#[async_trait]
pub trait StatusTransport: Send + Sync {
    async fn send(&self, request: &ValidationRequest) -> GcResult<u16>;
}

/// Validates a completed access code against the remote service.
///
/// `authenticate` issues exactly one request per call. `Ok` carries the
/// decoded outcome (including the non-fatal `Unrecognized`); `Err` means
/// the request never produced a usable response.
#[async_trait]
pub trait CodeAuthenticator: Send + Sync {
    /// Required code length; callers must not submit anything shorter
    /// or longer.
    fn code_length(&self) -> usize;

    async fn authenticate(&self, code: &str) -> GcResult<ValidationOutcome>;
}
