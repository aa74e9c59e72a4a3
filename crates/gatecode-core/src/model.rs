use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GatecodeError;

/// Number of characters in an access code.
pub const CODE_LENGTH: usize = 6;

/// Decoded result of a validation request, produced exclusively by the
/// status decoder. Every variant is a legitimate server answer, not an
/// error — transport problems are reported through [`GatecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Code accepted; the flow may advance.
    Valid,
    /// Code not recognized by the remote service.
    Invalid,
    /// Code maps to a program that is already full. Terminal, but the
    /// consumer renders a support-contact message rather than advancing.
    FullProgram,
    /// Status code matched no known mapping. Non-fatal "no outcome".
    Unrecognized,
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationOutcome::Valid => write!(f, "valid"),
            ValidationOutcome::Invalid => write!(f, "invalid"),
            ValidationOutcome::FullProgram => write!(f, "full_program"),
            ValidationOutcome::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// A single submission to the validation endpoint. Constructed fresh for
/// each user-triggered attempt; the body serializes to `{"code": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub code: String,
}

impl ValidationRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Event produced synchronously by the input accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    /// Buffer contents changed. `complete` is true when every slot is
    /// filled; completion alone never triggers submission.
    Changed { text: String, complete: bool },
    /// Insertion contained a non-alphanumeric character; buffer unchanged.
    NonAlphanumericRejected,
    /// Submit-like key pressed on a full buffer: the consumer should
    /// dismiss active input focus. Distinct from submission.
    DismissInput,
}

/// Why a settled request produced no outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No usable response: connection failure or protocol violation.
    Transport,
    /// The request body could not be serialized.
    Encoding,
}

impl FailureKind {
    /// Classify a pipeline error for the completion signal. Precondition
    /// errors never reach the wire and have no failure kind.
    pub fn from_error(err: &GatecodeError) -> Option<Self> {
        match err {
            GatecodeError::Transport(_) => Some(FailureKind::Transport),
            GatecodeError::Encoding(_) => Some(FailureKind::Encoding),
            _ => None,
        }
    }
}

/// Terminal signal consumed by the screen-flow coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalSignal {
    /// Code validated; advance to the next screen.
    Authenticated,
    /// Code rejected; the consumer renders feedback and stays put.
    Rejected,
}

/// Event broadcast by the onboarding flow to its subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlowEvent {
    /// An input accumulator event, forwarded verbatim.
    Input(InputEvent),
    /// The decoded outcome for a submission. Absent on transport failure.
    Outcome {
        attempt_id: Uuid,
        outcome: ValidationOutcome,
    },
    /// The request for a submission settled, successfully or not. Always
    /// emitted exactly once per submission; consumers use it to end
    /// loading-state UI regardless of outcome.
    RequestCompleted {
        attempt_id: Uuid,
        failure: Option<FailureKind>,
        at: DateTime<Utc>,
    },
    /// Terminal authenticated/rejected signal for the coordinator.
    Terminal {
        attempt_id: Uuid,
        signal: TerminalSignal,
    },
}
