//! Dictation session state machine.
//!
//! The session owns the transcript buffer, merges final fragments into it,
//! and re-interprets it after every change. Engine control is returned as
//! [`SessionAction`]s for the caller to carry out; the session never drives
//! the recognizer itself.

use super::buffer::TranscriptBuffer;
use super::clock::{Clock, SystemClock};
use super::feed::{FeedEvent, RecognitionError};
use super::merger::{DeltaMerger, MergeOutcome};
use crate::error::{ReleveError, Result};
use crate::interpret::{Interpretation, Interpreter};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Listening,
    /// Stop requested, waiting for the engine to report it has ended.
    Stopping,
    /// A fatal recognition error occurred. Terminal.
    Failed,
}

/// What the caller should do with the recognition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    None,
    StartEngine,
    StopEngine,
    /// The engine ended by itself while the user is still dictating.
    RestartEngine,
    /// Fatal error: release the engine and stop listening for good.
    Halt,
}

/// Emitted by [`DictationSession::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    Action(SessionAction),
    Parsed(Interpretation),
}

pub struct DictationSession<C: Clock = SystemClock> {
    interpreter: Interpreter,
    merger: DeltaMerger,
    buffer: TranscriptBuffer,
    interpretation: Interpretation,
    state: SessionState,
    failure: Option<RecognitionError>,
    clock: C,
}

impl DictationSession<SystemClock> {
    pub fn new(interpreter: Interpreter, echo_window_ms: u64) -> Self {
        Self::with_clock(interpreter, echo_window_ms, SystemClock)
    }
}

impl<C: Clock> DictationSession<C> {
    pub fn with_clock(interpreter: Interpreter, echo_window_ms: u64, clock: C) -> Self {
        Self {
            interpreter,
            merger: DeltaMerger::new(echo_window_ms),
            buffer: TranscriptBuffer::new(),
            interpretation: Interpretation::default(),
            state: SessionState::Idle,
            failure: None,
            clock,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn buffer(&self) -> &TranscriptBuffer {
        &self.buffer
    }

    /// Interpretation of the current buffer.
    pub fn interpretation(&self) -> &Interpretation {
        &self.interpretation
    }

    /// The error that moved the session to [`SessionState::Failed`].
    pub fn failure(&self) -> Option<RecognitionError> {
        self.failure
    }

    /// User asked to dictate.
    pub fn start(&mut self) -> Result<SessionAction> {
        let action = match self.state {
            SessionState::Idle => SessionAction::StartEngine,
            // The engine is still winding down; its stop event will restart it
            SessionState::Stopping => SessionAction::None,
            SessionState::Listening => return Ok(SessionAction::None),
            SessionState::Failed => {
                return Err(ReleveError::SessionFailed {
                    reason: self
                        .failure
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "recognition failed".to_string()),
                });
            }
        };
        self.transition(SessionState::Listening);
        Ok(action)
    }

    /// User asked to stop. The buffer is left as is.
    pub fn stop(&mut self) -> SessionAction {
        if self.state != SessionState::Listening {
            return SessionAction::None;
        }
        self.transition(SessionState::Stopping);
        SessionAction::StopEngine
    }

    pub fn toggle(&mut self) -> Result<SessionAction> {
        match self.state {
            SessionState::Listening => Ok(self.stop()),
            _ => self.start(),
        }
    }

    /// Apply one feed event.
    pub fn handle(&mut self, event: FeedEvent) -> SessionAction {
        match event {
            FeedEvent::Interim { text } => {
                tracing::trace!(%text, "interim fragment ignored");
                SessionAction::None
            }
            FeedEvent::Final { text, timestamp_ms } => {
                self.accept_final(&text, timestamp_ms);
                SessionAction::None
            }
            FeedEvent::EngineStopped => match self.state {
                SessionState::Listening => {
                    tracing::debug!("engine stopped while listening, restarting");
                    SessionAction::RestartEngine
                }
                SessionState::Stopping => {
                    self.transition(SessionState::Idle);
                    SessionAction::None
                }
                SessionState::Idle | SessionState::Failed => SessionAction::None,
            },
            FeedEvent::Error { error } => self.on_error(error),
        }
    }

    /// Merge a final fragment and re-interpret on change.
    ///
    /// Returns `None` when the session is not listening; the fragment is
    /// then dropped and the buffer left untouched.
    pub fn accept_final(&mut self, text: &str, timestamp_ms: Option<u64>) -> Option<MergeOutcome> {
        if self.state != SessionState::Listening {
            tracing::debug!(state = ?self.state, "fragment rejected, not listening");
            return None;
        }
        let at_ms = timestamp_ms.unwrap_or_else(|| self.clock.now_ms());
        let outcome = self.merger.merge(&mut self.buffer, text, at_ms);
        if outcome.changed() {
            self.reparse();
        }
        Some(outcome)
    }

    /// Replace the buffer with manually edited text, trusted verbatim.
    pub fn edit_buffer(&mut self, text: impl Into<String>) -> &Interpretation {
        self.buffer.replace(text);
        self.reparse();
        &self.interpretation
    }

    /// Empty the buffer and forget the last fragment.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.merger.reset();
        self.interpretation = Interpretation::default();
    }

    /// Process feed events in arrival order until the feed closes.
    ///
    /// Engine actions and new interpretations are sent to `updates`. The
    /// session is returned so the caller can read the final buffer.
    pub async fn run(
        mut self,
        mut feed: mpsc::Receiver<FeedEvent>,
        updates: mpsc::Sender<SessionUpdate>,
    ) -> Self {
        while let Some(event) = feed.recv().await {
            let update = match event {
                FeedEvent::Final { text, timestamp_ms } => self
                    .accept_final(&text, timestamp_ms)
                    .filter(MergeOutcome::changed)
                    .map(|_| SessionUpdate::Parsed(self.interpretation.clone())),
                other => match self.handle(other) {
                    SessionAction::None => None,
                    action => Some(SessionUpdate::Action(action)),
                },
            };

            if let Some(update) = update
                && updates.send(update).await.is_err()
            {
                tracing::debug!("update receiver dropped, ending session loop");
                break;
            }
        }
        self
    }

    fn on_error(&mut self, error: RecognitionError) -> SessionAction {
        if self.state == SessionState::Failed {
            return SessionAction::None;
        }
        if error.is_fatal() {
            tracing::warn!(%error, "fatal recognition error, session halted");
            self.failure = Some(error);
            self.transition(SessionState::Failed);
            SessionAction::Halt
        } else {
            tracing::warn!(%error, "transient recognition error");
            SessionAction::None
        }
    }

    fn reparse(&mut self) {
        self.interpretation = self.interpreter.parse(self.buffer.as_str());
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            tracing::info!(from = ?self.state, to = ?next, "session state");
            self.state = next;
        }
    }
}
