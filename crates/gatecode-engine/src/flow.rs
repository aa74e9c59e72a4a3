//! Onboarding flow controller.
//!
//! Glues the input accumulator to the validation pipeline and publishes
//! everything the presentation layer needs as [`FlowEvent`]s on a broadcast
//! channel: forwarded input events, decoded outcomes, request-completion
//! signals, and the terminal authenticated/rejected signal the screen-flow
//! coordinator navigates on. The flow holds no reference to any concrete
//! screen.
//!
//! At most one validation attempt may be in flight at a time. The flag is
//! held for the whole submission, so a later submission's events can never
//! interleave with an earlier one's.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::broadcast;
use uuid::Uuid;

use gatecode_core::{
    CodeAuthenticator, FailureKind, FlowEvent, GatecodeError, GcResult, InputEvent,
    TerminalSignal, ValidationOutcome,
};

use crate::input::CodeBuffer;

const EVENT_CHANNEL_CAPACITY: usize = 32;

pub struct OnboardingFlow {
    buffer: Mutex<CodeBuffer>,
    authenticator: Arc<dyn CodeAuthenticator>,
    in_flight: AtomicBool,
    events: broadcast::Sender<FlowEvent>,
}

impl OnboardingFlow {
    pub fn new(authenticator: Arc<dyn CodeAuthenticator>) -> Self {
        let buffer = CodeBuffer::new(authenticator.code_length());
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            buffer: Mutex::new(buffer),
            authenticator,
            in_flight: AtomicBool::new(false),
            events,
        }
    }

    /// Subscribe to flow events. Subscribers joining mid-attempt only see
    /// events from that point on.
    pub fn subscribe(&self) -> broadcast::Receiver<FlowEvent> {
        self.events.subscribe()
    }

    /// Forward a keystroke (or paste) to the accumulator and broadcast the
    /// resulting event, if any.
    pub fn handle_input(&self, text: &str) -> Option<InputEvent> {
        let event = self.lock_buffer().insert(text)?;
        let _ = self.events.send(FlowEvent::Input(event.clone()));
        Some(event)
    }

    /// Forward a backspace to the accumulator.
    pub fn handle_backspace(&self) -> Option<InputEvent> {
        let event = self.lock_buffer().delete_last()?;
        let _ = self.events.send(FlowEvent::Input(event.clone()));
        Some(event)
    }

    /// The code entered so far.
    pub fn current_code(&self) -> String {
        self.lock_buffer().current()
    }

    /// True when the buffer is complete and no attempt is in flight; the
    /// consumer keys its submit control off this.
    pub fn can_submit(&self) -> bool {
        self.lock_buffer().is_complete() && !self.in_flight.load(Ordering::SeqCst)
    }

    /// Run one validation attempt for the completed buffer.
    ///
    /// Refused while an attempt is in flight or while the buffer is
    /// incomplete. Otherwise issues exactly one request, broadcasts the
    /// decoded outcome (when there is one), a `RequestCompleted` signal,
    /// and a terminal signal for decoded outcomes, then returns the
    /// pipeline result to the caller.
    pub async fn submit(&self) -> GcResult<ValidationOutcome> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::warn!("submission refused: attempt already in progress");
            return Err(GatecodeError::AttemptInProgress);
        }

        let code = {
            let buffer = self.lock_buffer();
            if !buffer.is_complete() {
                let len = buffer.len();
                drop(buffer);
                self.in_flight.store(false, Ordering::SeqCst);
                return Err(GatecodeError::BufferIncomplete(len));
            }
            buffer.current()
        };

        let attempt_id = Uuid::now_v7();
        tracing::debug!(%attempt_id, "validation attempt started");

        let result = self.authenticator.authenticate(&code).await;

        match &result {
            Ok(outcome) => {
                let _ = self.events.send(FlowEvent::Outcome {
                    attempt_id,
                    outcome: *outcome,
                });
                let _ = self.events.send(FlowEvent::RequestCompleted {
                    attempt_id,
                    failure: None,
                    at: Utc::now(),
                });
                let signal = match outcome {
                    ValidationOutcome::Valid => TerminalSignal::Authenticated,
                    _ => TerminalSignal::Rejected,
                };
                let _ = self.events.send(FlowEvent::Terminal { attempt_id, signal });
                tracing::debug!(%attempt_id, outcome = %outcome, "validation attempt settled");
            }
            Err(err) => {
                // No outcome and no terminal signal: the attempt never got
                // a usable answer. The completion signal still fires so the
                // consumer can end its loading state.
                let _ = self.events.send(FlowEvent::RequestCompleted {
                    attempt_id,
                    failure: FailureKind::from_error(err),
                    at: Utc::now(),
                });
                tracing::warn!(%attempt_id, error = %err, "validation attempt failed");
            }
        }

        // Released only after every event for this attempt is queued, so
        // a later attempt's events cannot interleave.
        self.in_flight.store(false, Ordering::SeqCst);

        result
    }

    /// Clear the buffer for a fresh attempt, e.g. when the entry screen is
    /// re-shown. Not permitted mid-attempt.
    pub fn reset(&self) -> GcResult<()> {
        if self.in_flight.load(Ordering::SeqCst) {
            return Err(GatecodeError::AttemptInProgress);
        }
        self.lock_buffer().reset();
        Ok(())
    }

    fn lock_buffer(&self) -> std::sync::MutexGuard<'_, CodeBuffer> {
        self.buffer.lock().unwrap_or_else(|p| p.into_inner())
    }
}
